//! Nullable ledger — in-memory account records for testing.

use crt_accounts::{AccountError, AccountRecord};
use crt_types::AccountKey;
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory record store keyed by account address.
///
/// Records are held in their encoded form, so every load goes through the
/// same decoding and tag validation as records read from the real ledger.
pub struct NullLedger {
    records: Mutex<HashMap<AccountKey, Vec<u8>>>,
}

impl NullLedger {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Encode `record` and store it under `key`, replacing any previous record.
    pub fn store<T: AccountRecord>(&self, key: AccountKey, record: &T) -> Result<(), AccountError> {
        let bytes = record.to_bytes()?;
        self.records.lock().unwrap().insert(key, bytes);
        Ok(())
    }

    /// Load and decode the record under `key`.
    pub fn load<T: AccountRecord>(&self, key: &AccountKey) -> Result<Option<T>, AccountError> {
        let bytes = self.records.lock().unwrap().get(key).cloned();
        bytes.map(|b| T::from_bytes(&b)).transpose()
    }

    /// Store bytes as-is, e.g. a corrupted record.
    pub fn put_raw(&self, key: AccountKey, bytes: Vec<u8>) {
        self.records.lock().unwrap().insert(key, bytes);
    }

    pub fn contains(&self, key: &AccountKey) -> bool {
        self.records.lock().unwrap().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NullLedger {
    fn default() -> Self {
        Self::new()
    }
}
