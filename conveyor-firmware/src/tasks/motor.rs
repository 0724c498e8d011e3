//! Dual-speed belt motor task

use conveyor_core::config::SignalName;
use conveyor_core::DualSpeedController;
use conveyor_hal_rp2350::{EmbassyClock, PwmChannel, RpInput};
use defmt::*;
use embassy_time::Delay;

pub type MotorController = DualSpeedController<
    &'static RpInput<'static>,
    &'static RpInput<'static>,
    &'static RpInput<'static>,
    PwmChannel<'static>,
>;

/// Belt motor control task
///
/// Runs the motor while its gate is high, at the speed picked by the stop
/// and low sensors.
#[embassy_executor::task(pool_size = 2)]
pub async fn motor_task(name: SignalName, mut controller: MotorController) {
    let profile = controller.profile();
    info!(
        "{} task started (low={}, high={})",
        name,
        profile.low(),
        profile.high()
    );

    let clock = EmbassyClock;
    let mut delay = Delay;

    loop {
        controller.wait_for_gate(&clock, &mut delay).await;
        info!("{}: gate high, running", name);

        controller.drive(&clock, &mut delay).await;
        info!("{}: gate low, stopped", name);
    }
}
