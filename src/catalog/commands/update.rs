use crate::error::Result;
use crate::model::{Game, GameInput};
use crate::store::CollectionStore;
use chrono::Utc;

use super::helpers::position;

/// Merges `input` into the game with `id` and refreshes its `updated_at`.
pub fn run<S: CollectionStore + ?Sized>(store: &S, id: &str, input: GameInput) -> Result<Game> {
    let mut games = store.load()?;
    let index = position(&games, id)?;
    games[index].merge(input, Utc::now());
    store.save(&games)?;
    Ok(games.swap_remove(index))
}
