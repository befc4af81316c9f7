//! Best score in the browser's LocalStorage

use web_sys::Storage;

use super::{PersistenceError, ScoreStore, parse_score};
use crate::consts::BEST_SCORE_KEY;

/// Stores the best score as a plain integer string
#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage, PersistenceError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| PersistenceError::Unavailable("LocalStorage".into()))
    }
}

impl ScoreStore for LocalStorageStore {
    fn load_best(&mut self) -> Result<u64, PersistenceError> {
        let storage = Self::storage()?;
        let raw = storage
            .get_item(BEST_SCORE_KEY)
            .map_err(|e| PersistenceError::Unavailable(format!("{:?}", e)))?;
        Ok(raw.as_deref().map(parse_score).unwrap_or(0))
    }

    fn save_best(&mut self, best: u64) -> Result<(), PersistenceError> {
        Self::storage()?
            .set_item(BEST_SCORE_KEY, &best.to_string())
            .map_err(|e| PersistenceError::Unavailable(format!("{:?}", e)))
    }
}
