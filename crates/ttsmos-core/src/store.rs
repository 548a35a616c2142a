use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

use crate::i18n::Language;

/// Key under which the selected UI language is persisted.
pub const LANGUAGE_KEY: &str = "language";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Write failed for {key}: {message}")]
    Write { key: String, message: String },
}

/// Durable string key/value storage, e.g. browser `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store for tests and hosts without a browser.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store
            .entries
            .get_mut()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the persisted language, falling back to `default` when nothing usable is stored.
pub fn load_language(store: &impl KeyValueStore, default: Language) -> Language {
    let stored = match store.get(LANGUAGE_KEY) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("Failed to read language preference: {}", e);
            return default;
        }
    };

    let Some(code) = stored else {
        return default;
    };

    Language::from_code(&code).unwrap_or_else(|| {
        tracing::warn!("Ignoring unknown stored language: {}", code);
        default
    })
}

pub fn save_language(store: &impl KeyValueStore, language: Language) -> crate::Result<()> {
    store.set(LANGUAGE_KEY, language.code())?;
    tracing::debug!("Language saved: {}", language.code());
    Ok(())
}
