//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for catalog operations, whatever the transport.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Serializes writers**: mutating commands run under one mutex, so their
//!   load → modify → save cycles never interleave within this process
//! - **Returns structured types** (`Result<Game>`, `Result<Vec<Game>>`)
//!
//! Reads take no lock. Saves replace the file by rename, so a reader sees
//! either the old collection or the new one.
//!
//! ## Generic Over CollectionStore
//!
//! - Production: `CatalogApi<FileStore>`
//! - Testing: `CatalogApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{Game, GameInput};
use crate::store::CollectionStore;
use parking_lot::Mutex;

pub use crate::commands::list::GameFilter;

pub struct CatalogApi<S: CollectionStore> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: CollectionStore> CatalogApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn list_games(&self, filter: &GameFilter) -> Result<Vec<Game>> {
        commands::list::run(&self.store, filter)
    }

    pub fn get_game(&self, id: &str) -> Result<Game> {
        commands::get::run(&self.store, id)
    }

    pub fn create_game(&self, input: GameInput) -> Result<Game> {
        let _guard = self.write_lock.lock();
        commands::create::run(&self.store, input)
    }

    pub fn update_game(&self, id: &str, input: GameInput) -> Result<Game> {
        let _guard = self.write_lock.lock();
        commands::update::run(&self.store, id, input)
    }

    pub fn delete_game(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock.lock();
        commands::delete::run(&self.store, id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn dispatches_crud() {
        let api = CatalogApi::new(InMemoryStore::new());
        let created = api.create_game(GameInput::named("Doom")).unwrap();
        assert_eq!(api.get_game(&created.id).unwrap().name, "Doom");

        let updated = api
            .update_game(&created.id, GameInput::default().with_rating(7.0))
            .unwrap();
        assert_eq!(updated.rating, Some(7.0));

        api.delete_game(&created.id).unwrap();
        assert!(api.list_games(&GameFilter::default()).unwrap().is_empty());
    }

    #[test]
    fn concurrent_creates_are_not_lost() {
        let api = Arc::new(CatalogApi::new(InMemoryStore::new()));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let api = Arc::clone(&api);
                thread::spawn(move || {
                    for i in 0..10 {
                        api.create_game(GameInput::named(format!("t{t}-{i}")))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let games = api.list_games(&GameFilter::default()).unwrap();
        assert_eq!(games.len(), 80);
    }
}
