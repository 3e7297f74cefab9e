//! High score persistence
//!
//! The simulation sees one integer behind [`HighScoreStore`]. Adapters:
//! - [`MemoryStore`]: in-process, for tests and headless runs
//! - [`FileStore`]: versioned JSON envelope on disk (native)
//! - [`LocalStorageStore`]: browser LocalStorage (wasm32)
//!
//! Reads never fail from the caller's point of view: missing or corrupt data
//! reads as 0.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::{FileStore, StoreError};
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Key the high score is stored under
pub const HIGH_SCORE_KEY: &str = "dodgeGameHighScore";

/// Get/set port for the persisted high score
pub trait HighScoreStore {
    /// Stored high score, 0 when nothing usable is stored
    fn get_high_score(&self) -> u32;

    fn set_high_score(&mut self, score: u32);
}

/// Keeps the high score in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    high_score: u32,
    /// Number of writes, for callers that care when persistence happens
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            high_score,
            writes: 0,
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn get_high_score(&self) -> u32 {
        self.high_score
    }

    fn set_high_score(&mut self, score: u32) {
        self.high_score = score;
        self.writes += 1;
    }
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn get_high_score(&self) -> u32 {
        (**self).get_high_score()
    }

    fn set_high_score(&mut self, score: u32) {
        (**self).set_high_score(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_high_score(), 0);
        store.set_high_score(42);
        assert_eq!(store.get_high_score(), 42);
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn HighScoreStore> = Box::new(MemoryStore::with_high_score(7));
        assert_eq!(store.get_high_score(), 7);
        store.set_high_score(9);
        assert_eq!(store.get_high_score(), 9);
    }
}
