//! # Scheduled Trigger
//!
//! Timer-driven hook that runs independently of HTTP requests. The task
//! itself does no work yet; it only reports that it fired.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, instrument, warn};

pub struct SchedulerService;

impl SchedulerService {
    /// Body of the scheduled trigger. Emits one info line and touches no state.
    #[instrument]
    pub fn run_scheduled_task() {
        info!("Scheduled task running");
    }

    /// Spawn the periodic task that fires [`Self::run_scheduled_task`] once per `period`.
    ///
    /// The first firing happens one full `period` after spawning. A zero period
    /// is raised to one second.
    pub fn spawn_scheduled_task(period: Duration) -> JoinHandle<()> {
        let period = if period.is_zero() {
            warn!("Zero schedule interval requested, using 1s instead");
            Duration::from_secs(1)
        } else {
            period
        };

        info!(period_secs = period.as_secs_f64(), "Starting scheduled trigger");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval.tick().await; // First tick completes immediately, so we skip it

            loop {
                interval.tick().await;
                Self::run_scheduled_task();
            }
        })
    }
}
