//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// A command the queue refused; handed back so the reducer can settle its in-flight flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandNotQueued {
    pub command: BackendCommand,
    pub reason: String,
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), CommandNotQueued> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(command)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err(CommandNotQueued {
                command,
                reason: "UI command queue is full; please retry".to_string(),
            })
        }
        Err(TrySendError::Disconnected(command)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            Err(CommandNotQueued {
                command,
                reason: "Backend command processor disconnected; restart the dashboard".to_string(),
            })
        }
    }
}
