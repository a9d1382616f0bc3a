use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::Event;

pub const MAX_KEY_LENGTH: usize = 128;
pub const MAX_VALUE_BYTES: usize = 64 * 1024;

/// Durable key-value storage backed by whatever the shell has available
/// (localStorage on web, UserDefaults/SharedPreferences on mobile).
#[derive(Clone)]
pub struct Storage<E> {
    context: CapabilityContext<StorageOperation, E>,
}

impl<Ev> Capability<Ev> for Storage<Ev> {
    type Operation = StorageOperation;
    type MappedSelf<MappedEv> = Storage<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Storage::new(self.context.map_event(f))
    }
}

impl<E> Storage<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<StorageOperation, E>) -> Self {
        Self { context }
    }

    pub fn get<F>(&self, key: &str, callback: F)
    where
        F: FnOnce(StorageResult) -> E + Send + 'static,
    {
        match validate_key(key) {
            Ok(key) => {
                let context = self.context.clone();
                self.context.spawn(async move {
                    let response = context
                        .request_from_shell(StorageOperation::Get { key })
                        .await;
                    context.update_app(callback(response));
                });
            }
            Err(err) => self.context.update_app(callback(Err(err))),
        }
    }

    pub fn set<F>(&self, key: &str, value: Vec<u8>, callback: F)
    where
        F: FnOnce(StorageResult) -> E + Send + 'static,
    {
        let key = match validate_key(key) {
            Ok(key) => key,
            Err(err) => {
                self.context.update_app(callback(Err(err)));
                return;
            }
        };
        if value.len() > MAX_VALUE_BYTES {
            self.context.update_app(callback(Err(StorageError::ValueTooLarge {
                size: value.len(),
                max: MAX_VALUE_BYTES,
            })));
            return;
        }
        let context = self.context.clone();
        self.context.spawn(async move {
            let response = context
                .request_from_shell(StorageOperation::Set { key, value })
                .await;
            context.update_app(callback(response));
        });
    }
}

fn validate_key(key: &str) -> Result<String, StorageError> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey {
            reason: "key is empty".to_string(),
        });
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(StorageError::InvalidKey {
            reason: format!("key exceeds {MAX_KEY_LENGTH} bytes"),
        });
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
    {
        return Err(StorageError::InvalidKey {
            reason: "key contains characters outside [a-zA-Z0-9-_.:]".to_string(),
        });
    }
    Ok(key.to_string())
}

#[cfg(any(test, feature = "test-utils"))]
impl<E> Default for Storage<E>
where
    E: 'static,
{
    fn default() -> Self {
        panic!("Storage::default() should only be used in test context with mocking")
    }
}

pub type StorageCapability = Storage<Event>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StorageOperation {
    Get { key: String },
    Set { key: String, value: Vec<u8> },
}

impl Operation for StorageOperation {
    type Output = StorageResult;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StorageOutput {
    /// Value for a `Get`; `None` when the key has never been written.
    Value(Option<Vec<u8>>),
    /// Whether a `Set` was accepted.
    Written(bool),
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum StorageError {
    #[error("invalid storage key: {reason}")]
    InvalidKey { reason: String },

    #[error("value too large: {size} bytes exceeds maximum of {max} bytes")]
    ValueTooLarge { size: usize, max: usize },

    #[error("storage backend unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("storage backend rejected the operation: {reason}")]
    Rejected { reason: String },
}

pub type StorageResult = Result<StorageOutput, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_typical_keys() {
        assert!(validate_key("takamatsu-trip-checklist").is_ok());
        assert!(validate_key("ns:app.settings_v2").is_ok());
    }

    #[test]
    fn test_validate_key_rejects_empty() {
        assert!(matches!(
            validate_key(""),
            Err(StorageError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_validate_key_rejects_bad_characters() {
        assert!(validate_key("has space").is_err());
        assert!(validate_key("slash/inside").is_err());
        assert!(validate_key("한글키").is_err());
    }

    #[test]
    fn test_validate_key_rejects_overlong() {
        let long = "k".repeat(MAX_KEY_LENGTH + 1);
        assert!(validate_key(&long).is_err());
        let exactly = "k".repeat(MAX_KEY_LENGTH);
        assert!(validate_key(&exactly).is_ok());
    }

    #[test]
    fn test_output_round_trips_through_json() {
        let output: StorageResult = Ok(StorageOutput::Value(Some(br#"["1","2"]"#.to_vec())));
        let json = serde_json::to_vec(&output).unwrap();
        let back: StorageResult = serde_json::from_slice(&json).unwrap();
        assert_eq!(back, output);
    }
}
