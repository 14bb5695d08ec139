//! High score storage
//!
//! A store holds a single JSON-encoded integer. `JsonFileStore` backs it with
//! a file; `MemoryStore` keeps the encoded text in memory for tests and
//! sessions that should not touch disk.

use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// A named resource holding one high score
pub trait HighScoreStore {
    /// Read the stored value. `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> Result<Option<u32>, StoreError>;

    /// Replace the stored value
    fn save(&mut self, high_score: u32) -> Result<(), StoreError>;
}

fn decode(contents: &str) -> Result<u32, StoreError> {
    serde_json::from_str(contents.trim()).map_err(|e| StoreError::Malformed(e.to_string()))
}

fn encode(high_score: u32) -> Result<String, StoreError> {
    serde_json::to_string(&high_score).map_err(|e| StoreError::Malformed(e.to_string()))
}

/// High score kept in a JSON file
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

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<Option<u32>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => decode(&contents).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, high_score: u32) -> Result<(), StoreError> {
        std::fs::write(&self.path, encode(high_score)?)?;
        Ok(())
    }
}

/// High score kept in memory as encoded text
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose raw contents are given, valid or not
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<u32>, StoreError> {
        self.contents.as_deref().map(decode).transpose()
    }

    fn save(&mut self, high_score: u32) -> Result<(), StoreError> {
        self.contents = Some(encode(high_score)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("high_score.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("high_score.json"));

        store.save(4_294_967_295).unwrap();
        assert_eq!(store.load().unwrap(), Some(u32::MAX));
        assert_eq!(store.load().unwrap(), Some(u32::MAX));

        store.save(1250).unwrap();
        assert_eq!(store.load().unwrap(), Some(1250));
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "1250");
    }

    #[test]
    fn test_file_store_reads_hand_written_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("high_score.json");
        std::fs::write(&path, "3400\n").unwrap();
        assert_eq!(JsonFileStore::new(path).load().unwrap(), Some(3400));
    }

    #[test]
    fn test_file_store_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("high_score.json");
        std::fs::write(&path, "{\"score\": ").unwrap();
        assert!(matches!(
            JsonFileStore::new(path).load(),
            Err(StoreError::Malformed(_))
        ));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
        store.save(80).unwrap();
        assert_eq!(store.load().unwrap(), Some(80));
        assert_eq!(store.contents(), Some("80"));

        assert!(MemoryStore::with_contents("-5").load().is_err());
    }
}
