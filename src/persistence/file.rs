//! Best score in a small JSON file (native builds)

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{PersistenceError, ScoreStore};

#[derive(Debug, Serialize, Deserialize)]
struct BestScoreFile {
    best: u64,
}

/// Keeps `{"best": N}` at a path; a missing file means zero
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonFileStore {
    fn load_best(&mut self) -> Result<u64, PersistenceError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let file: BestScoreFile = serde_json::from_str(&json)?;
        Ok(file.best)
    }

    fn save_best(&mut self, best: u64) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(&BestScoreFile { best })?;
        // Write then rename so a crash mid-write never leaves a torn file
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("Best score {} saved to {}", best, self.path.display());
        Ok(())
    }
}
