//! Browser LocalStorage high score store (wasm32 only)

use super::{HIGH_SCORE_KEY, HighScoreStore};

/// Stores the high score as a plain integer string
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl HighScoreStore for LocalStorageStore {
    fn get_high_score(&self) -> u32 {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, high score starts at 0");
            return 0;
        };
        match storage.get_item(HIGH_SCORE_KEY) {
            Ok(Some(value)) => value.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring corrupt high score {value:?}");
                0
            }),
            _ => 0,
        }
    }

    fn set_high_score(&mut self, score: u32) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(HIGH_SCORE_KEY, &score.to_string()).is_ok() {
                log::info!("High score {score} saved");
                return;
            }
        }
        log::warn!("Could not save high score");
    }
}
