//! # Command Layer
//!
//! The **core business logic** of the catalog. Each operation lives in its own
//! submodule as a plain `run` function over a [`CollectionStore`](crate::store::CollectionStore).
//!
//! Every mutating command is one full cycle: load the collection, change it in
//! memory, save it whole. Commands do no locking; callers that may run
//! concurrently go through [`crate::api::CatalogApi`], which serializes them.
//!
//! Commands know nothing about HTTP. They take Rust values and return
//! `Result<T>`; the router decides what a `GameNotFound` looks like on the wire.
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` and cover every branch, including store
//! write failures. This is where most of the testing lives.
//!
//! ## Command Modules
//!
//! - [`list`]: List games, optionally filtered by a name search
//! - [`get`]: Fetch one game by id
//! - [`create`]: Create a game with default substitution
//! - [`update`]: Merge a partial update into a game
//! - [`delete`]: Remove a game
//! - [`helpers`]: Id assignment and lookup shared by the commands above

pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod update;
