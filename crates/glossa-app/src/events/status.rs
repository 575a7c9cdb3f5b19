use glossa_types::AppEvent;
use kanal::AsyncSender;

use crate::state::AppState;

pub async fn handle_status(
    state: &AppState,
    output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (label, difficult) = {
        let session = state.session.lock().await;
        (session.label(), session.definitions().len())
    };

    output_tx.send(AppEvent::BookChanged(label)).await?;
    if difficult > 0 {
        output_tx
            .send(AppEvent::ShowOutput(format!("{difficult} difficult words.")))
            .await?;
    }

    // Skip the store size while a run holds the engine
    if let Ok(engine) = state.engine.try_lock() {
        output_tx
            .send(AppEvent::ShowOutput(format!(
                "{} common words.",
                engine.store().len()
            )))
            .await?;
    }
    Ok(())
}
