use glossa_core::SearchOutcome;
use glossa_types::AppEvent;
use kanal::AsyncSender;

use crate::state::AppState;

pub async fn handle_search(
    state: &AppState,
    query: &str,
    output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let outcome = state.session.lock().await.search(query, state.search);
    tracing::debug!("Search '{}': {:?}", query, outcome);

    for line in search_lines(&outcome) {
        output_tx.send(AppEvent::ShowOutput(line)).await?;
    }
    Ok(())
}

pub async fn handle_suggest(
    state: &AppState,
    partial: &str,
    output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let completions = state.session.lock().await.suggest(partial, state.search);

    for word in completions {
        output_tx.send(AppEvent::ShowOutput(word)).await?;
    }
    Ok(())
}

pub fn search_lines(outcome: &SearchOutcome) -> Vec<String> {
    match outcome {
        SearchOutcome::ExactHit { word, definition } => vec![format!("{word}: {definition}")],
        SearchOutcome::Suggestions(found) => {
            let mut lines = vec!["Word not found. Did you mean:".to_string()];
            lines.extend(
                found
                    .iter()
                    .map(|(word, definition)| format!("  {word}: {definition}")),
            );
            lines
        }
        SearchOutcome::NotFound => vec!["Word not found.".to_string()],
    }
}
