//! Motor speed record in flash

use conveyor_core::config::SaveError;
use conveyor_core::{SpeedProfile, SpeedStore};
use conveyor_hal::NvmStorage;
use defmt::*;

/// Load the stored speeds, logging why defaults are used
pub async fn load_profile<N: NvmStorage>(store: &mut SpeedStore<N>) -> SpeedProfile {
    match store.read().await {
        Ok(profile) => {
            info!(
                "Loaded speeds from flash: low={}, high={}",
                profile.low(),
                profile.high()
            );
            profile
        }
        Err(e) => {
            warn!("No usable speed record ({}), using defaults", e);
            SpeedProfile::default()
        }
    }
}

/// Store bench-calibrated speeds given at build time
///
/// Runs only when both `CONVEYOR_SPEED_LOW` and `CONVEYOR_SPEED_HIGH` are
/// set. The record is rewritten only if it differs from what is stored.
pub async fn apply_bench_calibration<N: NvmStorage>(store: &mut SpeedStore<N>) {
    let (Some(low), Some(high)) = (
        option_env!("CONVEYOR_SPEED_LOW"),
        option_env!("CONVEYOR_SPEED_HIGH"),
    ) else {
        return;
    };

    let (Ok(low), Ok(high)) = (low.trim().parse::<i32>(), high.trim().parse::<i32>()) else {
        warn!("Bench speeds are not integers: low={}, high={}", low, high);
        return;
    };

    if let Ok(stored) = store.read().await {
        if i32::from(stored.low()) == low && i32::from(stored.high()) == high {
            debug!("Bench speeds already stored");
            return;
        }
    }

    match store.save(low, high).await {
        Ok(()) => info!("Bench speeds saved: low={}, high={}", low, high),
        Err(SaveError::Invalid(e)) => warn!("Bench speeds rejected: {}", e),
        Err(SaveError::Storage(e)) => error!("Failed to write speed record: {}", e),
    }
}
