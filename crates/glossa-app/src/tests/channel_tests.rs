use std::time::Duration;

use glossa_types::{AppEvent, Milestone};
use tokio::time::timeout;

use crate::controller::AppController;

use super::support::Fixture;

#[tokio::test]
async fn test_blocking_progress_reaches_async_receiver() {
    let (tx, rx) = kanal::unbounded::<Milestone>();

    tokio::task::spawn_blocking(move || {
        tx.send(Milestone::ExtractionDone { pages: 2 }).unwrap();
        tx.send(Milestone::Persisted).unwrap();
    })
    .await
    .unwrap();

    let rx = rx.to_async();
    let first = timeout(Duration::from_secs(1), rx.recv()).await.unwrap().unwrap();
    let second = timeout(Duration::from_secs(1), rx.recv()).await.unwrap().unwrap();
    assert_eq!(first, Milestone::ExtractionDone { pages: 2 });
    assert_eq!(second, Milestone::Persisted);

    // Every sender is gone once the blocking task returns
    assert!(rx.recv().await.is_err());
}

#[tokio::test]
async fn test_controller_finishes_without_shutdown() {
    let fixture = Fixture::new();
    let controller = AppController::new(fixture.state.clone());

    let result = timeout(
        Duration::from_secs(5),
        controller.run(AppEvent::ShowStatus, std::future::pending()),
    )
    .await;

    assert!(result.is_ok(), "Timeout - controller never returned");
    result.unwrap().unwrap();
}

#[tokio::test]
async fn test_controller_shutdown_cancels_run() {
    let fixture = Fixture::new();
    let book = fixture.write_book("cats", super::support::SCENARIO);
    fixture.set_gate(false);

    let controller = AppController::new(fixture.state.clone());
    let shutdown = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
    };
    let gate = fixture.gate.clone();
    let opener = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        gate.store(true, std::sync::atomic::Ordering::SeqCst);
    });

    let result = timeout(
        Duration::from_secs(5),
        controller.run(super::support::process(&book, "Low"), shutdown),
    )
    .await;
    opener.await.unwrap();

    assert!(result.is_ok(), "Timeout - controller never returned");
    result.unwrap().unwrap();
    let session = fixture.state.session.lock().await;
    assert_eq!(session.book_name(), None);
    assert!(!session.is_processing());
}
