//! Best-score persistence
//!
//! The game only ever stores one number. Stores are fallible, but callers
//! treat failures as "keep playing with the in-memory value".

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Errors from a best-score backend
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed score data: {0}")]
    Parse(#[from] serde_json::Error),

    /// No storage backend is reachable (e.g. LocalStorage disabled)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Somewhere to keep the best score between sessions
pub trait ScoreStore {
    fn load_best(&mut self) -> Result<u64, PersistenceError>;
    fn save_best(&mut self, best: u64) -> Result<(), PersistenceError>;
}

/// Load the best score, falling back to zero on any failure
pub fn load_best_or_default<S: ScoreStore + ?Sized>(store: &mut S) -> u64 {
    match store.load_best() {
        Ok(best) => {
            log::info!("Loaded best score {}", best);
            best
        }
        Err(e) => {
            log::warn!("Could not load best score, starting from 0: {}", e);
            0
        }
    }
}

/// Save the best score, logging (not propagating) failures
pub fn save_best_or_warn<S: ScoreStore + ?Sized>(store: &mut S, best: u64) {
    if let Err(e) = store.save_best(best) {
        log::warn!("Could not save best score {}: {}", best, e);
    }
}

/// Store that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: u64,
    /// Number of successful saves
    pub saves: usize,
}

impl MemoryStore {
    pub fn new(best: u64) -> Self {
        Self { best, saves: 0 }
    }

    pub fn best(&self) -> u64 {
        self.best
    }
}

impl ScoreStore for MemoryStore {
    fn load_best(&mut self) -> Result<u64, PersistenceError> {
        Ok(self.best)
    }

    fn save_best(&mut self, best: u64) -> Result<(), PersistenceError> {
        self.best = best;
        self.saves += 1;
        Ok(())
    }
}

/// Parse a stored score the way it is written: a plain integer
///
/// Anything unreadable counts as zero.
pub fn parse_score(raw: &str) -> u64 {
    let raw = raw.trim();
    if let Ok(score) = raw.parse::<u64>() {
        return score;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v as u64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store whose backend is always gone
    struct Broken;

    impl ScoreStore for Broken {
        fn load_best(&mut self) -> Result<u64, PersistenceError> {
            Err(PersistenceError::Unavailable("test".into()))
        }

        fn save_best(&mut self, _best: u64) -> Result<(), PersistenceError> {
            Err(PersistenceError::Unavailable("test".into()))
        }
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new(3);
        assert_eq!(load_best_or_default(&mut store), 3);
        save_best_or_warn(&mut store, 40);
        assert_eq!(store.best(), 40);
        assert_eq!(store.saves, 1);
    }

    #[test]
    fn test_failures_are_not_fatal() {
        let mut store = Broken;
        assert_eq!(load_best_or_default(&mut store), 0);
        save_best_or_warn(&mut store, 10);
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("42"), 42);
        assert_eq!(parse_score(" 17\n"), 17);
        assert_eq!(parse_score("12.9"), 12);
        assert_eq!(parse_score(""), 0);
        assert_eq!(parse_score("abc"), 0);
        assert_eq!(parse_score("-5"), 0);
    }

    #[test]
    fn test_error_messages() {
        let e = PersistenceError::Unavailable("no window".into());
        assert_eq!(e.to_string(), "storage unavailable: no window");
    }
}
