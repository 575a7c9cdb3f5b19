use glossa_types::AppEvent;
use kanal::AsyncSender;

use crate::state::AppState;

/// Restore the baseline common words and clear the active book
pub async fn handle_reset_store(
    state: &AppState,
    output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let baseline = &state.config.storage.baseline_path;

    let (result, label) = {
        let mut session = state.session.lock().await;
        // A run in flight holds the engine, answer without waiting on it
        if let Err(e) = session.ensure_can_process() {
            output_tx
                .send(AppEvent::ShowOutput(format!("Error: {e}")))
                .await?;
            return Ok(());
        }
        let mut engine = state.engine.lock().await;
        let result = engine.reset_store(&mut session, baseline);
        (result, session.label())
    };

    match result {
        Ok(outcome) => {
            tracing::info!("Common words reset from {}", baseline.display());
            let mut lines = vec!["Common words reset to the baseline list.".to_string()];
            if let Some(book) = outcome.cleared_book {
                lines.push(format!("Cleared {book}."));
            }
            if let Some(e) = outcome.artifact_error {
                lines.push(format!("Warning: definitions not cleared: {e}"));
            }
            for line in lines {
                output_tx.send(AppEvent::ShowOutput(line)).await?;
            }
        }
        Err(e) => {
            tracing::error!("Reset failed: {}", e);
            output_tx
                .send(AppEvent::ShowOutput(format!("Error: {e}")))
                .await?;
        }
    }

    output_tx.send(AppEvent::BookChanged(label)).await?;
    Ok(())
}
