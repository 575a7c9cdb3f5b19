use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use glossa_config::Config;
use glossa_core::store::CommonWordStore;

const CONFIG_FILE: &str = "config.json";

/// Read a JSON config file
fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

/// `<data_dir>/config.json` when present, else environment and defaults
pub fn load_config() -> anyhow::Result<Config> {
    load_config_from(Config::new())
}

fn load_config_from(env_config: Config) -> anyhow::Result<Config> {
    let path = env_config.storage.data_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(env_config);
    }

    let mut config = load_config_file(&path)?;
    // The file lives in the data dir, so that location always wins
    config.storage.data_dir = env_config.storage.data_dir;
    Ok(config)
}

/// Create the data dir and seed the common-word store on first run
pub fn init_data_dir(config: &Config) -> anyhow::Result<()> {
    fs::create_dir_all(&config.storage.data_dir)?;

    let store_path = config.storage.common_words_path();
    match CommonWordStore::seed_from_baseline(&store_path, &config.storage.baseline_path) {
        Ok(true) => tracing::info!("Created common words store at {}", store_path.display()),
        Ok(false) => {}
        Err(e) => tracing::warn!("Could not seed common words: {}", e),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path) -> Config {
        let mut config = Config::default();
        config.storage.data_dir = dir.to_path_buf();
        config.storage.baseline_path = dir.join("baseline.txt");
        config
    }

    #[test]
    fn missing_file_keeps_environment_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(config_in(dir.path())).unwrap();
        assert_eq!(config.storage.data_dir, dir.path());
        assert_eq!(config.default_level, "Medium");
    }

    #[test]
    fn file_overrides_defaults_but_not_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "default_level": "Low", "storage": { "data_dir": "/elsewhere" } }"#,
        )
        .unwrap();

        let config = load_config_from(config_in(dir.path())).unwrap();
        assert_eq!(config.default_level, "Low");
        assert_eq!(config.storage.data_dir, dir.path());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "{ nope").unwrap();
        assert!(load_config_from(config_in(dir.path())).is_err());
    }

    #[test]
    fn first_run_seeds_store_from_baseline() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir.path().join("data"));
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(&config.storage.baseline_path, "the\nwhale\n").unwrap();

        init_data_dir(&config).unwrap();
        let store = CommonWordStore::load(config.storage.common_words_path());
        assert!(store.contains("whale"));

        // A second run leaves the grown store alone
        fs::write(config.storage.common_words_path(), "the\nwhale\nship\n").unwrap();
        init_data_dir(&config).unwrap();
        let store = CommonWordStore::load(config.storage.common_words_path());
        assert!(store.contains("ship"));
    }

    #[test]
    fn missing_baseline_seeds_built_in_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.storage.baseline_path = dir.path().join("elsewhere").join("baseline.txt");

        init_data_dir(&config).unwrap();

        let store = CommonWordStore::try_load(&config.storage.common_words_path()).unwrap();
        assert!(store.contains("the"));
        assert!(store.len() > 30);
    }
}
