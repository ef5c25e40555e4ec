//! Compute-once-per-key store for sport rule configurations.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use super::model::SportConfig;
use crate::error::ConfigError;

/// Loads, validates, and caches immutable per-sport rule configurations.
///
/// Documents come either from a config directory (`<sport_id>.json`) or from
/// documents registered in memory via [`insert_document`](Self::insert_document).
/// Successful loads are cached for the process lifetime; repeated loads for
/// the same sport return the identical `Arc<SportConfig>`.
///
/// The cache lock is held across a first load, so concurrent validations for
/// an unloaded sport trigger at most one parse. Loads are small and local;
/// blocking peers for that window keeps the at-most-once guarantee simple.
pub struct RuleConfigStore {
    config_dir: Option<PathBuf>,
    documents: Mutex<HashMap<String, String>>,
    cache: Mutex<HashMap<String, Arc<SportConfig>>>,
}

impl RuleConfigStore {
    /// A store backed by a directory of `<sport_id>.json` documents.
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: Some(config_dir.into()),
            documents: Mutex::new(HashMap::new()),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// A store that only serves documents registered in memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            config_dir: None,
            documents: Mutex::new(HashMap::new()),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Register a raw JSON document for a sport. In-memory documents take
    /// precedence over the config directory. Registering a document for an
    /// already-cached sport has no effect; the cache is process-lifetime.
    pub fn insert_document(&self, sport_id: &str, document: impl Into<String>) {
        self.documents
            .lock()
            .insert(canonical_sport_id(sport_id), document.into());
    }

    /// Load (or fetch from cache) the configuration for a sport.
    pub fn load(&self, sport_id: &str) -> Result<Arc<SportConfig>, ConfigError> {
        let key = canonical_sport_id(sport_id);

        let mut cache = self.cache.lock();
        if let Some(config) = cache.get(&key) {
            return Ok(Arc::clone(config));
        }

        let document = self.fetch_document(&key)?;
        let config = Arc::new(SportConfig::parse(&document)?);
        debug!(
            sport = %key,
            rules = config.parlay_rules.len(),
            books = config.sportsbook_rules.len(),
            "loaded sport rule configuration"
        );
        cache.insert(key, Arc::clone(&config));
        Ok(config)
    }

    /// Whether a sport's configuration is already cached.
    #[must_use]
    pub fn is_cached(&self, sport_id: &str) -> bool {
        self.cache.lock().contains_key(&canonical_sport_id(sport_id))
    }

    fn fetch_document(&self, key: &str) -> Result<String, ConfigError> {
        if let Some(document) = self.documents.lock().get(key) {
            return Ok(document.clone());
        }

        let Some(dir) = &self.config_dir else {
            return Err(ConfigError::NotFound { sport: key.into() });
        };

        let path = dir.join(format!("{key}.json"));
        match std::fs::read_to_string(&path) {
            Ok(document) => Ok(document),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ConfigError::NotFound { sport: key.into() })
            }
            Err(e) => Err(ConfigError::ReadFile(e)),
        }
    }
}

/// Sport ids are matched ignoring case and surrounding whitespace.
fn canonical_sport_id(sport_id: &str) -> String {
    sport_id.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "sport": "football",
        "market_definitions": {},
        "parlay_rules": [],
        "sportsbook_rules": {}
    }"#;

    #[test]
    fn load_caches_and_returns_same_instance() {
        let store = RuleConfigStore::in_memory();
        store.insert_document("Football", DOC);

        let first = store.load("football").unwrap();
        let second = store.load("  FOOTBALL  ").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(store.is_cached("football"));
    }

    #[test]
    fn unknown_sport_is_not_found() {
        let store = RuleConfigStore::in_memory();
        let err = store.load("hockey").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn malformed_document_is_parse_error() {
        let store = RuleConfigStore::in_memory();
        store.insert_document("football", "{not json");
        let err = store.load("football").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn concurrent_loads_share_one_config() {
        let store = Arc::new(RuleConfigStore::in_memory());
        store.insert_document("football", DOC);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.load("football").unwrap())
            })
            .collect();

        let configs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for config in &configs[1..] {
            assert!(Arc::ptr_eq(&configs[0], config));
        }
    }
}
