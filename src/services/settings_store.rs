//! Settings persisted in browser local storage

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{SecondsFormat, Utc};
use gloo_storage::errors::StorageError as GlooStorageError;
use gloo_storage::{LocalStorage, Storage};
use serde_json::Value;
use thiserror::Error;

use crate::models::SettingsBundle;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Stored value is not valid JSON: {0}")]
    Parse(String),
    #[error("Failed to write {key}: {message}")]
    Write { key: String, message: String },
}

/// JSON values stored by key
pub trait KeyValueStore {
    /// `Ok(None)` when nothing is stored under `key`
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError>;
    fn store(&self, key: &str, value: &Value) -> Result<(), StorageError>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError> {
        match LocalStorage::get::<Value>(key) {
            Ok(value) => Ok(Some(value)),
            Err(GlooStorageError::KeyNotFound(_)) => Ok(None),
            Err(GlooStorageError::SerdeError(e)) => Err(StorageError::Parse(e.to_string())),
            Err(e) => Err(StorageError::Unavailable(e.to_string())),
        }
    }

    fn store(&self, key: &str, value: &Value) -> Result<(), StorageError> {
        LocalStorage::set(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}

/// In-memory store holding raw strings, as the browser does
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put arbitrary text under `key`, bypassing serialization
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Make every subsequent write fail, like a full quota
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError> {
        match self.entries.borrow().get(key) {
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| StorageError::Parse(e.to_string())),
            None => Ok(None),
        }
    }

    fn store(&self, key: &str, value: &Value) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "QuotaExceededError".to_string(),
            });
        }

        self.insert_raw(key, &value.to_string());
        Ok(())
    }
}

/// Typed access to the settings bundles
#[derive(Clone)]
pub struct SettingsStore {
    backend: Rc<dyn KeyValueStore>,
}

impl SettingsStore {
    pub fn new(backend: Rc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    /// Stored bundle laid over the defaults; defaults on any failure
    pub fn load<B: SettingsBundle>(&self) -> B {
        match self.try_load::<B>() {
            Ok(bundle) => bundle,
            Err(e) => {
                log::warn!("Error loading {}: {}", B::STORAGE_KEY, e);
                B::defaults()
            }
        }
    }

    fn try_load<B: SettingsBundle>(&self) -> Result<B, StorageError> {
        let stored = match self.backend.load(B::STORAGE_KEY)? {
            Some(Value::Object(stored)) => stored,
            Some(Value::Null) | None => return Ok(B::defaults()),
            Some(other) => {
                return Err(StorageError::Parse(format!(
                    "expected an object, found {}",
                    other
                )))
            }
        };

        let mut merged = match serde_json::to_value(B::defaults()) {
            Ok(Value::Object(defaults)) => defaults,
            _ => return Ok(B::defaults()),
        };
        for (field, value) in stored {
            if value.is_null() {
                continue;
            }
            if !same_kind(merged.get(&field), &value) {
                log::warn!("Ignoring {}.{}: unexpected value {}", B::STORAGE_KEY, field, value);
                continue;
            }
            merged.insert(field, value);
        }

        serde_json::from_value(Value::Object(merged)).map_err(|e| StorageError::Parse(e.to_string()))
    }

    /// Stamp and write the whole bundle, returning what was written
    pub fn save<B: SettingsBundle>(&self, mut bundle: B) -> Result<B, StorageError> {
        bundle.stamp(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));

        let value = serde_json::to_value(&bundle).map_err(|e| StorageError::Write {
            key: B::STORAGE_KEY.to_string(),
            message: e.to_string(),
        })?;
        self.backend.store(B::STORAGE_KEY, &value)?;

        log::debug!("Saved {}", B::STORAGE_KEY);
        Ok(bundle)
    }
}

/// Stored fields must have the JSON type of their default; unset optional
/// fields are strings
fn same_kind(default: Option<&Value>, stored: &Value) -> bool {
    match default {
        Some(Value::String(_)) | None => stored.is_string(),
        Some(Value::Number(_)) => stored.is_number(),
        Some(Value::Bool(_)) => stored.is_boolean(),
        Some(Value::Array(_)) => stored.is_array(),
        Some(Value::Object(_)) => stored.is_object(),
        Some(Value::Null) => true,
    }
}
