//! Runtime bridge between UI command queue and backend event intake.

use std::{fmt, thread};

use client_core::{UserStore, UserStoreClient};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the worker thread; commands run one at a time in arrival order.
pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, api_url: String) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                report_startup_failure(&ui_tx, err);
                return;
            }
        };

        let store = UserStoreClient::new(api_url);
        tracing::info!(api_url = store.base_url(), "backend worker ready");

        while let Ok(cmd) = cmd_rx.recv() {
            let event = runtime.block_on(execute(&store, cmd));
            if ui_tx.send(event).is_err() {
                tracing::debug!("ui event receiver dropped; stopping backend worker");
                break;
            }
        }
    });
}

fn report_startup_failure(ui_tx: &Sender<UiEvent>, err: impl fmt::Display) {
    tracing::error!("failed to build backend runtime: {err}");
    let event = UiEvent::BackendUnavailable(format!(
        "backend worker startup failure: failed to build runtime: {err}"
    ));
    if ui_tx.send(event).is_err() {
        tracing::error!("ui event receiver dropped before backend startup failure was reported");
    }
}

pub async fn execute<S>(store: &S, cmd: BackendCommand) -> UiEvent
where
    S: UserStore + ?Sized,
{
    match cmd {
        BackendCommand::LoadAll => UiEvent::UsersLoaded(store.list().await),
        BackendCommand::Create(draft) => UiEvent::UserCreated(store.create(&draft).await),
        BackendCommand::Update { id, draft } => UiEvent::UserUpdated {
            id,
            result: store.update(id, &draft).await,
        },
        BackendCommand::Delete(id) => UiEvent::UserDeleted {
            id,
            result: store.delete(id).await,
        },
    }
}
