//! Periodic QR refresh timer.

use std::sync::mpsc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::ui::events::AppEvent;

const MIN_PERIOD: Duration = Duration::from_millis(1);
const MAX_PERIOD: Duration = Duration::from_secs(86_400);

/// Sends `AppEvent::QrPollTick` every `period`, starting one period
/// after creation. Dropping the poller aborts the timer task.
///
/// The period is clamped to `1ms..=1 day`; tokio's timer cannot represent
/// deadlines arbitrarily far in the future.
pub struct Poller {
    handle: JoinHandle<()>,
}

impl Poller {
    /// Starts the timer on the current tokio runtime.
    pub fn start(period: Duration, events: mpsc::Sender<AppEvent>) -> Self {
        let period = period.clamp(MIN_PERIOD, MAX_PERIOD);
        tracing::info!(period_secs = period.as_secs_f64(), "QR polling started");
        let handle = tokio::spawn(async move {
            let now = Instant::now();
            let start = now.checked_add(period).unwrap_or(now);
            let mut ticker = interval_at(start, period);
            // A stalled UI thread must not cause a burst of catch-up requests
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if events.send(AppEvent::QrPollTick).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::info!("QR polling stopped");
    }
}
