//! Trello infrastructure adapter.
//!
//! Implements the [`rotation::BoardService`] trait over the Trello REST API
//! (`https://api.trello.com/1`) using [`reqwest`].
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules. Endpoint
//! paths, query-string authentication, JSON field names, and the mapping of
//! HTTP failures onto [`rotation::BoardError`] all live here; the [`rotation`]
//! crate never sees them.
//!
//! ## Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `list_board_lists` | `GET /boards/{id}/lists` |
//! | `list_cards` | `GET /lists/{id}/cards` |
//! | `create_list` | `POST /lists` |
//! | `create_card` | `POST /cards` |
//! | `add_label` | `POST /cards/{id}/labels` |
//!
//! Every request carries the application key and member token as `key` and
//! `token` query parameters.

mod client;
mod error;
mod wire;

pub use client::{TrelloClient, TrelloConfig, DEFAULT_BASE_URL};
pub use error::TrelloError;
