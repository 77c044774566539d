use crate::error::Result;
use crate::store::CollectionStore;

use super::helpers::position;

pub fn run<S: CollectionStore + ?Sized>(store: &S, id: &str) -> Result<()> {
    let mut games = store.load()?;
    let index = position(&games, id)?;
    games.remove(index);
    store.save(&games)
}
