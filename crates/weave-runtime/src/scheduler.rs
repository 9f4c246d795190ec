use std::time::Duration;

use tracing::debug;

/// When the low-priority aggregate work (portfolio snapshot, network
/// forecast) runs: not on every UI interaction, but shortly after startup
/// and then periodically.
#[derive(Debug, Clone, Copy)]
pub struct AggregateSchedule {
    pub startup_delay: Duration,
    pub period: Duration,
}

impl Default for AggregateSchedule {
    fn default() -> Self {
        Self {
            startup_delay: Duration::from_secs(30),
            period: Duration::from_secs(300),
        }
    }
}

/// Run `task` on the given schedule until the owning task is aborted.
pub async fn run_periodic<F>(schedule: AggregateSchedule, mut task: F)
where
    F: FnMut(),
{
    tokio::time::sleep(schedule.startup_delay).await;
    let mut interval = tokio::time::interval(schedule.period);
    loop {
        interval.tick().await;
        debug!("running scheduled aggregate pass");
        task();
    }
}
