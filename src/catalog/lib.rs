//! # Game Catalog Architecture
//!
//! A game catalog persisted as one JSON file and served over a small REST
//! surface, plus the client-side filtering a catalog browser applies to the
//! list it fetched.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (server.rs)                                     │
//! │  - axum fallback handler, CORS, request tracing             │
//! │  - Buffers bodies, sets Content-Type and Location headers   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Router (router.rs)                                         │
//! │  - method + path + query → operation                        │
//! │  - Errors → status + {"message": ...}; never fails          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Serializes load → modify → save cycles                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list / get / create / update / delete                    │
//! │  - Default substitution and partial-update merging          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CollectionStore trait                                    │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The browser side lives in [`view`] (pure filtering and sorting over a
//! snapshot) and [`client`] (fetching the snapshot over HTTP).
//!
//! ## Partial Updates
//!
//! Create and update share one rule: a field takes the supplied value only if
//! it is present and truthy. Otherwise create uses the field default and
//! update keeps the stored value. An update can never set a rating to `0` or a
//! name to `""`. See [`model::Truthy`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Game`, `Multiplayer`, `GameInput`)
//! - [`router`]: Transport-agnostic request dispatch
//! - [`server`]: HTTP wiring
//! - [`config`]: Server configuration
//! - [`view`]: Client-side filter and sort pipeline
//! - [`client`]: HTTP client for the catalog
//! - [`error`]: Error types

pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod router;
pub mod server;
pub mod store;
pub mod view;
