//! Payload-less wake signal
//! 无负载的唤醒信号

use std::sync::Arc;

use tokio::sync::Notify;

/// Fire-and-forget wake-up between tasks.
///
/// Raising while nobody waits stores a single permit, so any number of raises
/// before the next wait coalesce into one wake-up. Losing a wake-up only
/// delays the waiter until its next scheduled poll.
#[derive(Debug, Clone, Default)]
pub struct WakeSignal {
    inner: Arc<Notify>,
}

impl WakeSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.inner.notify_one();
    }

    pub async fn wait(&self) {
        self.inner.notified().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn raise_before_wait_is_delivered() {
        let signal = WakeSignal::new();
        signal.raise();
        tokio::time::timeout(Duration::from_millis(50), signal.wait())
            .await
            .expect("stored permit should wake the waiter");
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_raises_coalesce_into_one_wake() {
        let signal = WakeSignal::new();
        signal.raise();
        signal.raise();
        signal.raise();

        signal.wait().await;
        let second = tokio::time::timeout(Duration::from_millis(50), signal.wait()).await;
        assert!(second.is_err(), "only one permit is stored");
    }

    #[tokio::test]
    async fn clones_share_the_same_signal() {
        let signal = WakeSignal::new();
        let raiser = signal.clone();
        let waiter = tokio::spawn(async move { signal.wait().await });
        tokio::task::yield_now().await;
        raiser.raise();
        tokio::time::timeout(Duration::from_millis(50), waiter)
            .await
            .expect("waiter should wake")
            .unwrap();
    }
}
