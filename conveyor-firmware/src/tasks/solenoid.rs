//! Latching solenoid task

use conveyor_core::config::SignalName;
use conveyor_core::LatchingController;
use conveyor_hal_rp2350::{EmbassyClock, RpInput, RpOutput};
use defmt::*;
use embassy_time::Delay;

pub type SolenoidController = LatchingController<&'static RpInput<'static>, RpOutput<'static>>;

#[embassy_executor::task(pool_size = 2)]
pub async fn solenoid_task(name: SignalName, mut controller: SolenoidController) {
    info!("{} task started", name);

    let clock = EmbassyClock;
    let mut delay = Delay;

    loop {
        controller.wait_for_gate(&clock, &mut delay).await;
        debug!("{}: gate high, engaged", name);

        controller.hold(&clock, &mut delay).await;
        debug!("{}: gate low, released", name);
    }
}
