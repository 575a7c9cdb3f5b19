use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use glossa_config::Config;
use glossa_core::Engine;
use glossa_core::dictionary::{DefinitionSource, LookupError, SourceMetadata};
use glossa_core::store::CommonWordStore;
use glossa_core::language::FrequencyOracle;
use glossa_lang_english::{EnglishProcessor, JsonDictionary, PlainTextExtractor};
use glossa_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

pub const SCENARIO: &str = "The cat sat. The cat ran. A gato was seen.";

const DEFINITIONS: &str = r#"{"words": [
    {"word": "cat", "senses": ["a small domesticated feline"]},
    {"word": "sat", "senses": ["past tense of sit"]},
    {"word": "ran", "senses": ["past tense of run"]}
]}"#;

/// Dictionary that blocks lookups while the gate is closed
pub struct GatedDictionary {
    inner: JsonDictionary,
    open: Arc<AtomicBool>,
}

impl DefinitionSource for GatedDictionary {
    fn define(&self, word: &str) -> Result<Option<String>, LookupError> {
        let started = Instant::now();
        while !self.open.load(Ordering::SeqCst) && started.elapsed() < Duration::from_secs(5) {
            std::thread::sleep(Duration::from_millis(5));
        }
        self.inner.define(word)
    }

    fn metadata(&self) -> SourceMetadata {
        self.inner.metadata()
    }
}

/// Every word is globally rare
pub struct FloorOracle;

impl FrequencyOracle for FloorOracle {
    fn global_frequency(
        &self,
        _word: &str,
        _language: &str,
        _corpus_variant: &str,
        floor: f64,
    ) -> Result<f64, LookupError> {
        Ok(floor)
    }
}

pub struct Fixture {
    pub dir: tempfile::TempDir,
    pub state: Arc<AppState>,
    pub gate: Arc<AtomicBool>,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();

        let mut config = Config::default();
        config.storage.data_dir = dir.path().join("data");
        config.storage.baseline_path = dir.path().join("baseline.txt");
        config.lookup.backoff_ms = 0;

        fs::create_dir_all(&config.storage.data_dir).unwrap();
        fs::write(config.storage.common_words_path(), "the\nwas\nseen\n").unwrap();
        fs::write(&config.storage.baseline_path, "the\nand\nof\n").unwrap();

        let gate = Arc::new(AtomicBool::new(true));
        let dictionary = GatedDictionary {
            inner: JsonDictionary::from_json(DEFINITIONS).unwrap(),
            open: gate.clone(),
        };
        let engine = Engine::new(
            &config,
            Box::new(EnglishProcessor::new()),
            Box::new(dictionary),
            Box::new(FloorOracle),
            CommonWordStore::load(config.storage.common_words_path()),
        );
        let state = AppState::with_engine(config, engine, Arc::new(PlainTextExtractor));

        Self {
            dir,
            state: Arc::new(state),
            gate,
        }
    }

    pub fn write_book(&self, name: &str, text: &str) -> PathBuf {
        let path = self.dir.path().join(format!("{name}.txt"));
        fs::write(&path, text).unwrap();
        path
    }

    pub fn set_gate(&self, open: bool) {
        self.gate.store(open, Ordering::SeqCst);
    }

    /// Start an event loop over this fixture's state
    pub fn start(&self) -> Session {
        let (command_tx, command_rx) = kanal::unbounded_async();
        let (output_tx, output_rx) = kanal::unbounded_async();
        let handle = tokio::spawn(event_loop(
            self.state.clone(),
            command_rx,
            output_tx,
            CancellationToken::new(),
        ));
        Session {
            command_tx,
            output_rx,
            handle,
        }
    }

    /// Handle `events` to completion and collect everything printed
    pub async fn run(&self, events: Vec<AppEvent>) -> Vec<AppEvent> {
        let session = self.start();
        for event in events {
            session.send(event).await;
        }
        session.finish().await
    }
}

pub struct Session {
    command_tx: AsyncSender<AppEvent>,
    output_rx: AsyncReceiver<AppEvent>,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl Session {
    pub async fn send(&self, event: AppEvent) {
        self.command_tx.send(event).await.unwrap();
    }

    /// Read output until `matches` accepts an event, returning all events read
    pub async fn wait_for(&self, matches: impl Fn(&AppEvent) -> bool) -> Vec<AppEvent> {
        let mut seen = Vec::new();
        let result = timeout(Duration::from_secs(5), async {
            loop {
                let event = self.output_rx.recv().await.expect("output closed");
                let done = matches(&event);
                seen.push(event);
                if done {
                    break;
                }
            }
        })
        .await;
        assert!(result.is_ok(), "Timeout waiting for output, saw {seen:?}");
        seen
    }

    pub async fn finish(self) -> Vec<AppEvent> {
        drop(self.command_tx);
        let mut seen = Vec::new();
        let result = timeout(Duration::from_secs(5), async {
            while let Ok(event) = self.output_rx.recv().await {
                seen.push(event);
            }
        })
        .await;
        assert!(result.is_ok(), "Timeout - event loop never finished, saw {seen:?}");

        timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("event loop did not exit")
            .expect("event loop panicked")
            .expect("event loop failed");
        seen
    }
}

pub fn process(path: &Path, level: &str) -> AppEvent {
    AppEvent::ProcessBook {
        path: path.display().to_string(),
        level: level.to_string(),
    }
}

pub fn lines(events: &[AppEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            AppEvent::ShowOutput(text) => Some(text.clone()),
            _ => None,
        })
        .collect()
}
