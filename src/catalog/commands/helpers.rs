use crate::error::{CatalogError, Result};
use crate::model::Game;
use chrono::{DateTime, Utc};

/// Picks an id for a new game: the creation time in epoch milliseconds,
/// bumped until it is free within `games`.
pub fn next_id(games: &[Game], now: DateTime<Utc>) -> String {
    let mut candidate = now.timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !games.iter().any(|g| g.id == id) {
            return id;
        }
        candidate += 1;
    }
}

/// Position of the game with `id`, or `GameNotFound`.
pub fn position(games: &[Game], id: &str) -> Result<usize> {
    games
        .iter()
        .position(|g| g.id == id)
        .ok_or_else(|| CatalogError::GameNotFound(id.to_string()))
}
