use crate::error::Result;
use crate::model::Game;
use crate::store::CollectionStore;

use super::helpers::position;

pub fn run<S: CollectionStore + ?Sized>(store: &S, id: &str) -> Result<Game> {
    let mut games = store.load()?;
    let index = position(&games, id)?;
    Ok(games.swap_remove(index))
}
