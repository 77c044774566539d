use super::CollectionStore;
use crate::error::{CatalogError, Result};
use crate::model::Game;
use parking_lot::Mutex;

/// In-memory storage for testing. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    games: Mutex<Vec<Game>>,
    simulate_write_error: Mutex<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_games(games: Vec<Game>) -> Self {
        Self {
            games: Mutex::new(games),
            ..Default::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.lock() = simulate;
    }
}

impl CollectionStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Game>> {
        Ok(self.games.lock().clone())
    }

    fn save(&self, games: &[Game]) -> Result<()> {
        if *self.simulate_write_error.lock() {
            return Err(CatalogError::Store("Simulated write error".to_string()));
        }
        *self.games.lock() = games.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::GameInput;
    use chrono::Utc;

    /// A small catalog covering every filter dimension of the browser view.
    pub fn sample_games() -> Vec<Game> {
        let now = Utc::now();
        vec![
            Game::new(
                "1".into(),
                GameInput::named("The Legend of Zelda")
                    .with_rating(9.0)
                    .with_platforms(["Nintendo Switch"])
                    .with_languages(["English", "Russian"])
                    .with_multiplayer(1.0, 0.0),
                now,
            ),
            Game::new(
                "2".into(),
                GameInput::named("Counter-Strike")
                    .with_rating(8.0)
                    .with_platforms(["PC"])
                    .with_languages(["English", "Russian"])
                    .with_multiplayer(0.0, 10.0),
                now,
            ),
            Game::new(
                "3".into(),
                GameInput::named("Halo")
                    .with_rating(8.5)
                    .with_platforms(["PC", "Xbox"])
                    .with_languages(["English"])
                    .with_multiplayer(4.0, 16.0),
                now,
            ),
            Game::new(
                "4".into(),
                GameInput::named("Journey")
                    .with_platforms(["PlayStation", "PC"])
                    .with_languages(["English"]),
                now,
            ),
        ]
    }

    pub fn sample_store() -> InMemoryStore {
        InMemoryStore::with_games(sample_games())
    }
}
