use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use glossa_config::Config;
use glossa_core::dictionary::DefinitionSource;
use glossa_core::document::PageExtractor;
use glossa_core::language::FrequencyOracle;
use glossa_core::search::SearchOptions;
use glossa_core::store::CommonWordStore;
use glossa_core::{BookSession, Engine};
use glossa_lang_english::{
    DictionaryLoader, EnglishFrequency, EnglishProcessor, HttpDictionary, PlainTextExtractor,
    WordListFrequency,
};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

pub struct AppState {
    pub config: Config,
    pub engine: Arc<Mutex<Engine>>,
    /// The single active book, replaced when a run finishes
    pub session: Mutex<BookSession>,
    pub extractor: Arc<dyn PageExtractor>,
    pub search: SearchOptions,
    current_run: Mutex<Option<CancellationToken>>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let engine = build_engine(&config)?;
        Ok(Self::with_engine(config, engine, Arc::new(PlainTextExtractor)))
    }

    pub fn with_engine(config: Config, engine: Engine, extractor: Arc<dyn PageExtractor>) -> Self {
        let session = engine.load_session();
        if let Some(name) = session.book_name() {
            tracing::info!("Restored '{}' ({} words)", name, session.definitions().len());
        }

        Self {
            search: SearchOptions::from(&config.search),
            config,
            engine: Arc::new(Mutex::new(engine)),
            session: Mutex::new(session),
            extractor,
            current_run: Mutex::new(None),
        }
    }

    pub async fn begin_run(&self, cancel: CancellationToken) {
        *self.current_run.lock().await = Some(cancel);
    }

    pub async fn end_run(&self) {
        self.current_run.lock().await.take();
    }

    /// Cancel the run in flight, returns whether there was one
    pub async fn cancel_run(&self) -> bool {
        match self.current_run.lock().await.as_ref() {
            Some(cancel) => {
                cancel.cancel();
                true
            }
            None => false,
        }
    }
}

fn build_engine(config: &Config) -> anyhow::Result<Engine> {
    let lookup = &config.lookup;

    let dictionary: Box<dyn DefinitionSource> = if lookup.online {
        tracing::info!("Using online dictionary at {}", lookup.api_url);
        Box::new(HttpDictionary::new(
            lookup.api_url.clone(),
            Duration::from_secs(lookup.timeout_seconds),
        ))
    } else {
        let Some(path) = lookup.dictionary_path.as_deref() else {
            anyhow::bail!("Offline lookups need lookup.dictionary_path pointing at a JSON lexicon");
        };
        Box::new(DictionaryLoader::load(Path::new(path))?)
    };

    let mut frequencies = EnglishFrequency::load(&lookup.corpus_variant)?;
    if let Some(path) = &lookup.frequency_path {
        frequencies = frequencies.with_overrides(WordListFrequency::load_from_file(Path::new(path))?);
    }
    let oracle: Box<dyn FrequencyOracle> = Box::new(frequencies);

    let store = CommonWordStore::load(config.storage.common_words_path());

    Ok(Engine::new(
        config,
        Box::new(EnglishProcessor::new()),
        dictionary,
        oracle,
        store,
    ))
}
