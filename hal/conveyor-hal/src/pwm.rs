//! PWM output abstraction

/// Highest commandable duty cycle (100% power)
pub const MAX_DUTY: u16 = u16::MAX;

/// PWM output channel driving a motor
///
/// Duty is a 16-bit value, `0` = fully stopped and [`MAX_DUTY`] = full power.
/// The type makes an out-of-range duty unrepresentable.
pub trait PwmOutput {
    /// Command a new duty cycle
    fn set_duty(&mut self, duty: u16);

    /// Last commanded duty cycle
    fn duty(&self) -> u16;
}
