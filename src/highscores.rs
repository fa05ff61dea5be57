//! Best score across games
//!
//! A single scalar stored as a decimal string. Storage failures are logged and
//! the value lives on in memory for the rest of the session.

use crate::platform::Storage;

/// The persisted best score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    best: u64,
}

impl HighScore {
    /// Storage key
    const STORAGE_KEY: &'static str = "frog_crossing_high_score";

    pub fn new(best: u64) -> Self {
        Self { best }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Read the stored best; absent or unreadable values count as 0
    pub fn load(storage: &dyn Storage) -> Self {
        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(value)) => match value.trim().parse::<u64>() {
                Ok(best) => {
                    log::info!("Loaded high score {}", best);
                    Self { best }
                }
                Err(_) => {
                    log::warn!("Ignoring unreadable high score {:?}", value);
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                Self::default()
            }
            Err(e) => {
                log::warn!("High score unavailable ({}), keeping it in memory", e);
                Self::default()
            }
        }
    }

    /// Record a finished game's score. Writes through only when the best
    /// improves; returns whether it did.
    pub fn record(&mut self, score: u64, storage: &mut dyn Storage) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(e) = storage.set_item(Self::STORAGE_KEY, &score.to_string()) {
            log::warn!("Could not persist high score {}: {}", score, e);
        } else {
            log::info!("High score saved ({})", score);
        }
        true
    }
}
