use std::path::PathBuf;
use std::sync::Arc;

use glossa_core::document::book_name_from_path;
use glossa_core::error::ProcessError;
use glossa_core::{BookSession, ProcessRequest, RunControl};
use glossa_types::{AppEvent, BookLabel, Milestone};
use kanal::AsyncSender;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Mark the session as processing and start the run in the background.
/// A second run while one is in flight is rejected.
pub async fn handle_process_book(
    state: &Arc<AppState>,
    path: String,
    level: String,
    output_tx: &AsyncSender<AppEvent>,
    cancel: CancellationToken,
    runs: &mut JoinSet<anyhow::Result<()>>,
) -> anyhow::Result<()> {
    let prior = {
        let mut session = state.session.lock().await;
        match session.begin_processing() {
            Ok(prior) => prior,
            Err(e) => {
                tracing::warn!("Rejected {}: {}", path, e);
                output_tx
                    .send(AppEvent::ShowOutput(format!("Error: {e}")))
                    .await?;
                return Ok(());
            }
        }
    };

    state.begin_run(cancel.clone()).await;
    output_tx
        .send(AppEvent::BookChanged(BookLabel::Processing))
        .await?;

    runs.spawn(run_book(
        state.clone(),
        prior,
        path,
        level,
        output_tx.clone(),
        cancel,
    ));
    Ok(())
}

async fn run_book(
    state: Arc<AppState>,
    prior: BookSession,
    path: String,
    level: String,
    output_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let (progress_tx, progress_rx) = kanal::unbounded::<Milestone>();
    let forward_tx = output_tx.clone();
    let forwarder = tokio::spawn(async move {
        let progress_rx = progress_rx.to_async();
        while let Ok(milestone) = progress_rx.recv().await {
            if forward_tx.send(AppEvent::Progress(milestone)).await.is_err() {
                break;
            }
        }
    });

    let fallback = prior.clone();
    let control = RunControl::new(cancel).with_progress(progress_tx);
    let engine = state.engine.clone();
    let extractor = state.extractor.clone();

    let result = tokio::task::spawn_blocking(move || {
        let path = PathBuf::from(path);
        let request = ProcessRequest {
            book_name: book_name_from_path(&path),
            level,
            pages: extractor.extract_pages(&path),
        };
        let mut engine = engine.blocking_lock();
        engine.process(prior, request, &control)
    })
    .await;

    // Progress lines come before the summary
    if let Err(e) = forwarder.await {
        tracing::warn!("progress forwarder failed: {e}");
    }

    let (session, lines) = match result {
        Ok(Ok(outcome)) => (outcome.session, outcome.report.summary_lines()),
        Ok(Err(failure)) => {
            let line = match &failure.error {
                ProcessError::Cancelled => {
                    "Processing cancelled. The previous book is still active.".to_string()
                }
                e => format!("Error: {e}"),
            };
            (failure.session, vec![line])
        }
        Err(e) => {
            tracing::error!("classification task panicked: {e}");
            (fallback, vec!["Error: processing stopped unexpectedly.".to_string()])
        }
    };

    let label = {
        let mut current = state.session.lock().await;
        *current = session;
        current.label()
    };
    state.end_run().await;

    for line in lines {
        output_tx.send(AppEvent::ShowOutput(line)).await?;
    }
    output_tx.send(AppEvent::BookChanged(label)).await?;
    Ok(())
}
