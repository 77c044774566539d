use crate::error::Result;
use crate::model::{Game, GameInput};
use crate::store::CollectionStore;
use chrono::Utc;

use super::helpers::next_id;

/// Creates a game from `input` and appends it to the collection.
pub fn run<S: CollectionStore + ?Sized>(store: &S, input: GameInput) -> Result<Game> {
    let mut games = store.load()?;
    let now = Utc::now();
    let game = Game::new(next_id(&games, now), input, now);
    games.push(game.clone());
    store.save(&games)?;
    Ok(game)
}
