use glossa_types::AppEvent;
use kanal::AsyncReceiver;

/// Print everything the event loop reports until it hangs up
pub async fn output_loop(output_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    while let Ok(event) = output_rx.recv().await {
        if let Some(line) = render(&event) {
            match event {
                AppEvent::Progress(_) => eprintln!("{line}"),
                _ => println!("{line}"),
            }
        }
    }
    Ok(())
}

/// Console text for an output event
pub fn render(event: &AppEvent) -> Option<String> {
    match event {
        AppEvent::ShowOutput(text) => Some(text.clone()),
        AppEvent::Progress(milestone) => Some(format!("  {}", milestone.describe())),
        AppEvent::BookChanged(label) => Some(format!("Active book: {}", label.as_text())),
        other => {
            tracing::debug!("Not an output event: {:?}", other);
            None
        }
    }
}
