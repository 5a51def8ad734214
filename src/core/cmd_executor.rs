use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::{Cmd, TuiCommand},
    infrastructure::ticker::TickerOperation,
};

/// Command executor that bridges Elm commands to the ticker service and the TUI host
#[derive(Clone, Default)]
pub struct CmdExecutor {
    ticker_sender: Option<mpsc::UnboundedSender<TickerOperation>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    /// Create a new command executor with no services attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new command executor wired to the ticker service
    pub fn new_with_ticker(ticker_sender: mpsc::UnboundedSender<TickerOperation>) -> Self {
        Self {
            ticker_sender: Some(ticker_sender),
            tui_sender: None,
        }
    }

    /// Inject ticker operation sender.
    pub fn set_ticker_sender(&mut self, sender: mpsc::UnboundedSender<TickerOperation>) {
        self.ticker_sender = Some(sender);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::StartTicker { id, period_ms } => {
                if let Some(sender) = &self.ticker_sender {
                    sender.send(TickerOperation::Start {
                        id: *id,
                        period_ms: *period_ms,
                    })?;
                } else {
                    log::warn!("StartTicker ignored: TickerService not available");
                }
            }

            Cmd::CancelTicker { id } => {
                if let Some(sender) = &self.ticker_sender {
                    sender.send(TickerOperation::Cancel { id: *id })?;
                } else {
                    log::warn!("CancelTicker ignored: TickerService not available");
                }
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    let _ = tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    });
                    return Ok(());
                }
                log::warn!(
                    "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                );
            }

            Cmd::LogError { message } => {
                log::error!("Elm command error: {message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("Elm command info: {message}");
            }
        }

        Ok(())
    }

    /// Execute multiple commands in order
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    pub fn has_ticker(&self) -> bool {
        self.ticker_sender.is_some()
    }
}
