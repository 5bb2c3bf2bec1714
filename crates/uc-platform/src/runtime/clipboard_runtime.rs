//! Clipboard runtime
//!
//! Owns the [`ChangeDetector`] and drives it from a fixed-interval timer.
//! Every observation is reconciled before the next tick is taken, so at most
//! one reconciliation is in flight at any time.
//!
//! Write-back requests arrive over the command channel and are executed on
//! the same task, which is what lets the detector record the written value
//! before the next poll can see it.
//!
//! Clipboard host calls block (X11 round trips, PNG encoding), so every
//! detector call runs on the blocking pool while this task awaits it.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use tokio::sync::oneshot;
use tokio::task::JoinError;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn, Span};

use uc_app::{ChangeDetector, ReconcileObservation};
use uc_core::ports::{ClipboardError, ClipboardWriteBackPort, DisplayPort};
use uc_core::ClipboardContent;

use super::event_bus::{command_channel, PlatformCommandReceiver, PlatformCommandSender};
use crate::ipc::PlatformCommand;

pub struct ClipboardRuntime {
    detector: Arc<Mutex<ChangeDetector>>,
    reconcile: ReconcileObservation,
    display: Arc<dyn DisplayPort>,
    command_rx: PlatformCommandReceiver,
    poll_interval: Duration,
    cancel: CancellationToken,
}

impl ClipboardRuntime {
    pub fn new(
        detector: ChangeDetector,
        reconcile: ReconcileObservation,
        display: Arc<dyn DisplayPort>,
        poll_interval: Duration,
        cancel: CancellationToken,
    ) -> (Self, ClipboardRuntimeHandle) {
        let (command_tx, command_rx) = command_channel();
        let runtime = Self {
            detector: Arc::new(Mutex::new(detector)),
            reconcile,
            display,
            command_rx,
            poll_interval,
            cancel,
        };
        (runtime, ClipboardRuntimeHandle { command_tx })
    }

    pub async fn run(mut self) {
        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            "Clipboard runtime started"
        );

        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                Some(command) = self.command_rx.recv() => self.handle_command(command).await,
                _ = ticker.tick() => self.on_tick().await,
            }
        }

        info!("Clipboard runtime stopped");
    }

    async fn handle_command(&self, command: PlatformCommand) {
        match command {
            PlatformCommand::WriteClipboard { content, reply } => {
                let result = match self
                    .with_detector(move |detector| detector.write_back(content))
                    .await
                {
                    Ok(result) => result,
                    Err(err) => Err(ClipboardError::Write(format!(
                        "clipboard write task failed: {err}"
                    ))),
                };
                if let Err(err) = &result {
                    warn!(error = %err, "Failed to write clipboard");
                }
                if reply.send(result).is_err() {
                    debug!("Write-back requester went away before the reply");
                }
            }
        }
    }

    async fn on_tick(&self) {
        let observation = match self.with_detector(ChangeDetector::tick).await {
            Ok(Some(observation)) => observation,
            Ok(None) => return,
            Err(err) => {
                warn!(error = %err, "Clipboard poll task failed, skipping tick");
                return;
            }
        };

        match self.reconcile.execute(&observation).await {
            Ok(outcome) => debug!(?outcome, "Observation reconciled"),
            Err(err) if err.is_connectivity() => {
                warn!(error = %err, "Remote store unreachable, observation left unsynced");
                self.display.set_connection_status(false);
            }
            Err(err) => warn!(error = %err, "Failed to reconcile observation"),
        }
    }

    /// Run `f` against the detector on the blocking pool.
    async fn with_detector<T, F>(&self, f: F) -> Result<T, JoinError>
    where
        F: FnOnce(&mut ChangeDetector) -> T + Send + 'static,
        T: Send + 'static,
    {
        let detector = Arc::clone(&self.detector);
        let span = Span::current();
        tokio::task::spawn_blocking(move || {
            let _entered = span.enter();
            let mut detector = detector.lock().unwrap_or_else(PoisonError::into_inner);
            f(&mut *detector)
        })
        .await
    }
}

/// Cloneable sender side of a [`ClipboardRuntime`].
#[derive(Clone)]
pub struct ClipboardRuntimeHandle {
    command_tx: PlatformCommandSender,
}

#[async_trait]
impl ClipboardWriteBackPort for ClipboardRuntimeHandle {
    async fn write_back(&self, content: ClipboardContent) -> anyhow::Result<()> {
        let (reply, reply_rx) = oneshot::channel();
        self.command_tx
            .send(PlatformCommand::WriteClipboard { content, reply })
            .await
            .map_err(|_| anyhow!("clipboard runtime is not running"))?;

        reply_rx
            .await
            .context("clipboard runtime dropped the write request")?
            .map_err(anyhow::Error::from)
    }
}
