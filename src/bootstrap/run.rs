use std::ops::ControlFlow;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, info_span, warn, Instrument};

use uc_app::{CopyItemToClipboard, WakeSignal};
use uc_core::AppConfig;

use super::wiring::{build_app, App};
use crate::console::{ConsoleCommand, ConsoleDisplay, ParseCommandError, HELP};

/// Start both runtimes and serve console commands until quit or Ctrl-C.
pub async fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let App {
        clipboard_runtime,
        view_runtime,
        display,
        copy_item,
        refresh,
        cancel,
    } = build_app(&config)?;

    let clipboard_task = tokio::spawn(
        clipboard_runtime
            .run()
            .instrument(info_span!("runtime.clipboard")),
    );
    let view_task = tokio::spawn(view_runtime.run().instrument(info_span!("runtime.view_sync")));

    display.notice(&format!(
        "Syncing clipboard with {}. Type h for help.",
        config.server.url
    ));

    let console = Console {
        display: &display,
        copy_item: &copy_item,
        refresh: &refresh,
    };
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if let Err(err) = result {
                    warn!(error = %err, "Failed to listen for Ctrl-C");
                }
                info!("Interrupted");
                break;
            }
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => {
                    if console.handle_line(&line).await.is_break() {
                        break;
                    }
                }
                Ok(None) => {
                    debug!("stdin closed, console commands disabled");
                    stdin_open = false;
                }
                Err(err) => {
                    warn!(error = %err, "Failed to read stdin, console commands disabled");
                    stdin_open = false;
                }
            },
        }
    }

    info!("Shutting down");
    cancel.cancel();
    let (clipboard_result, view_result) = tokio::join!(clipboard_task, view_task);
    clipboard_result.context("Clipboard runtime task failed")?;
    view_result.context("View sync runtime task failed")?;
    Ok(())
}

struct Console<'a, W: std::io::Write + Send> {
    display: &'a ConsoleDisplay<W>,
    copy_item: &'a CopyItemToClipboard,
    refresh: &'a WakeSignal,
}

impl<W: std::io::Write + Send> Console<'_, W> {
    async fn handle_line(&self, line: &str) -> ControlFlow<()> {
        match line.parse::<ConsoleCommand>() {
            Ok(command) => self.handle_command(command).await,
            Err(ParseCommandError::Empty) => ControlFlow::Continue(()),
            Err(err) => {
                self.display.notice(&format!("{err} (type h for help)"));
                ControlFlow::Continue(())
            }
        }
    }

    async fn handle_command(&self, command: ConsoleCommand) -> ControlFlow<()> {
        match command {
            ConsoleCommand::Refresh => {
                self.refresh.raise();
                self.display.notice("Refreshing…");
            }
            ConsoleCommand::Copy(position) => self.copy(position).await,
            ConsoleCommand::List => self.display.reprint(),
            ConsoleCommand::Help => self.display.notice(HELP),
            ConsoleCommand::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    async fn copy(&self, position: usize) {
        let Some(item) = self.display.item(position) else {
            self.display.notice(&format!("No item {position} in the list"));
            return;
        };

        match self.copy_item.execute(&item).await {
            Ok(()) => self
                .display
                .notice(&format!("Copied item {position} to the clipboard")),
            Err(err) => {
                warn!(error = %err, position, "Failed to copy item");
                self.display
                    .notice(&format!("Could not copy item {position}: {err}"));
            }
        }
    }
}
