use std::sync::Arc;

use glossa_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod process_book;
pub mod reset_store;
pub mod search;
pub mod status;

use process_book::handle_process_book;
use reset_store::handle_reset_store;
use search::{handle_search, handle_suggest};
use status::handle_status;

/// App's main loop. Runs until every command sender is dropped and
/// the last classification run has finished.
pub async fn event_loop(
    state: Arc<AppState>,
    command_rx: AsyncReceiver<AppEvent>,
    output_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut runs: JoinSet<anyhow::Result<()>> = JoinSet::new();

    tracing::debug!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        tokio::select! {
            event = command_rx.recv() => {
                let Ok(event) = event else { break };
                tracing::debug!(
                    "[EVENT_LOOP] EVENT RECEIVED: {:?}",
                    std::mem::discriminant(&event)
                );
                handle_events(&state, &output_tx, &cancel, &mut runs, event).await?;
            }
            Some(joined) = runs.join_next(), if !runs.is_empty() => joined??,
        }
    }

    while let Some(joined) = runs.join_next().await {
        joined??;
    }
    tracing::debug!("[EVENT_LOOP] Exiting");
    Ok(())
}

async fn handle_events(
    state: &Arc<AppState>,
    output_tx: &AsyncSender<AppEvent>,
    cancel: &CancellationToken,
    runs: &mut JoinSet<anyhow::Result<()>>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::ProcessBook { path, level } => {
            handle_process_book(state, path, level, output_tx, cancel.child_token(), runs).await?;
        }
        AppEvent::CancelProcessing => {
            if !state.cancel_run().await {
                output_tx
                    .send(AppEvent::ShowOutput("No book is being processed.".to_string()))
                    .await?;
            }
        }
        AppEvent::Search(query) => handle_search(state, &query, output_tx).await?,
        AppEvent::Suggest(partial) => handle_suggest(state, &partial, output_tx).await?,
        AppEvent::ResetStore => handle_reset_store(state, output_tx).await?,
        AppEvent::ShowStatus => handle_status(state, output_tx).await?,
        AppEvent::Progress(_) | AppEvent::ShowOutput(_) | AppEvent::BookChanged(_) => {
            // Output-only events, ignore in backend
        }
    }

    Ok(())
}
