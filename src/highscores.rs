//! All-time high score policy
//!
//! Loaded once at startup, written back at most once on exit. Nothing is
//! persisted during play.

use crate::error::StoreError;
use crate::persistence::HighScoreStore;

/// Read the stored high score, treating a missing or unreadable store as 0
pub fn load_high_score<S: HighScoreStore + ?Sized>(store: &S) -> u32 {
    match store.load() {
        Ok(Some(score)) => {
            log::info!("Loaded high score {}", score);
            score
        }
        Ok(None) => {
            log::info!("No high score found, starting fresh");
            0
        }
        Err(e) => {
            log::warn!("Ignoring stored high score: {}", e);
            0
        }
    }
}

/// Write `high_score` if it beats what is stored now.
///
/// The store is re-read first since another run may have written it since
/// startup. An unreadable store is overwritten. Returns true if a write
/// happened.
pub fn sync_high_score<S: HighScoreStore + ?Sized>(
    store: &mut S,
    high_score: u32,
) -> Result<bool, StoreError> {
    let stored = match store.load() {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!("Replacing unreadable high score store: {}", e);
            None
        }
    };

    match stored {
        Some(stored) if high_score <= stored => {
            log::info!("High score {} does not beat stored {}", high_score, stored);
            Ok(false)
        }
        _ => {
            store.save(high_score)?;
            log::info!("High score {} saved", high_score);
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{JsonFileStore, MemoryStore};

    #[test]
    fn test_load_defaults() {
        assert_eq!(load_high_score(&MemoryStore::new()), 0);
        assert_eq!(load_high_score(&MemoryStore::with_contents("not a number")), 0);
        assert_eq!(load_high_score(&MemoryStore::with_contents("720")), 720);
    }

    #[test]
    fn test_sync_writes_when_absent() {
        let mut store = MemoryStore::new();
        assert!(sync_high_score(&mut store, 0).unwrap());
        assert_eq!(store.load().unwrap(), Some(0));
    }

    #[test]
    fn test_sync_only_raises() {
        let mut store = MemoryStore::with_contents("500");
        assert!(!sync_high_score(&mut store, 500).unwrap());
        assert!(!sync_high_score(&mut store, 200).unwrap());
        assert_eq!(store.load().unwrap(), Some(500));

        assert!(sync_high_score(&mut store, 650).unwrap());
        assert_eq!(store.load().unwrap(), Some(650));
    }

    #[test]
    fn test_sync_rereads_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("high_score.json");
        let mut store = JsonFileStore::new(&path);
        store.save(100).unwrap();
        let loaded = load_high_score(&store);

        // Another run wrote a better score meanwhile
        std::fs::write(&path, "900").unwrap();
        assert!(!sync_high_score(&mut store, loaded + 300).unwrap());
        assert_eq!(store.load().unwrap(), Some(900));
    }

    #[test]
    fn test_sync_replaces_malformed() {
        let mut store = MemoryStore::with_contents("[1, 2");
        assert!(sync_high_score(&mut store, 30).unwrap());
        assert_eq!(store.load().unwrap(), Some(30));
    }
}
