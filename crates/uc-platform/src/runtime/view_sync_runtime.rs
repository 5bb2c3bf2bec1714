use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::info;

use uc_app::{SyncTrigger, ViewSynchronizer, WakeSignal};

/// Drives the [`ViewSynchronizer`] from its timer, the list-changed signal
/// and manual refresh requests.
///
/// A wake-triggered fetch restarts the timer period.
pub struct ViewSyncRuntime {
    synchronizer: ViewSynchronizer,
    list_changed: WakeSignal,
    refresh: WakeSignal,
    poll_interval: Duration,
    cancel: CancellationToken,
}

impl ViewSyncRuntime {
    pub fn new(
        synchronizer: ViewSynchronizer,
        list_changed: WakeSignal,
        refresh: WakeSignal,
        poll_interval: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            synchronizer,
            list_changed,
            refresh,
            poll_interval,
            cancel,
        }
    }

    pub async fn run(mut self) {
        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            "View sync runtime started"
        );

        loop {
            let trigger = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                _ = self.refresh.wait() => SyncTrigger::Manual,
                _ = self.list_changed.wait() => SyncTrigger::ListChanged,
                _ = ticker.tick() => SyncTrigger::Timer,
            };

            self.synchronizer.sync(trigger).await;
            if trigger != SyncTrigger::Timer {
                ticker.reset();
            }
        }

        info!("View sync runtime stopped");
    }
}
