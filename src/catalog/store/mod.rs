//! # Storage Layer
//!
//! The [`CollectionStore`] trait abstracts where the game collection lives.
//! The collection is the unit of persistence: it is always read and written
//! whole, never patched in place.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file holding an array of games.
//! - [`memory::InMemoryStore`]: For testing command logic without touching the filesystem.
//!
//! ## Storage Format
//!
//! ```text
//! db.json    # [{"id": "...", "name": "...", ...}, ...]
//! ```
//!
//! ## Concurrency
//!
//! Stores do no locking of their own. Two load → modify → save cycles that
//! overlap will lose the earlier write. [`crate::api::CatalogApi`] serializes
//! the cycles within one process; nothing protects against a second process
//! writing the same file.

use crate::error::Result;
use crate::model::Game;

pub mod fs;
pub mod memory;

/// Abstract interface for collection storage.
pub trait CollectionStore: Send + Sync {
    /// Load the full collection, initializing an empty one if none exists yet.
    fn load(&self) -> Result<Vec<Game>>;

    /// Replace the persisted collection with `games`.
    fn save(&self, games: &[Game]) -> Result<()>;
}
