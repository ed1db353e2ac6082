//! Pair rotation domain.
//!
//! The pairing schedule lives on an external kanban board: lists are roster
//! categories and historical days, cards are developers, tracks, and daily
//! pairs, and label colours mark pair attributes. This crate turns that
//! loosely typed board into a typed model and writes new days back in the
//! same encoding.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! Board access goes through the [`BoardService`] trait, implemented by the
//! `trello` crate. Deciding *who* pairs with whom is out of scope; callers
//! hand a computed [`DayPairs`] to [`PairingBoard::materialize_day`].
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`DeveloperId`, `Track`, etc.) |
//! | [`types`] | Developers, companies, pairs, days, label colours |
//! | [`registry`] | Interning store for developers and companies |
//! | [`classify`] | List and roster-card title grammar |
//! | [`dates`] | Date format of pairing list names |
//! | [`board`] | `BoardService` port and board wire types |
//! | [`snapshot`] | Read model and card interpreter |
//! | [`pairing_board`] | Board reader and writer |
//! | [`errors`] | Error types |
//!
//! ## Board grammar
//!
//! | Title | Where | Meaning |
//! |-------|-------|---------|
//! | `devs` | list | roster |
//! | `tracks` | list | one card per track, in order |
//! | `pairing(dd/mm/yyyy)` | list | one historical day |
//! | `devs` | roster card | members are available |
//! | `devops:a,b` | roster card | companies `a` and `b` do devops |
//! | `new` | roster card | members are newcomers |
//! | anything else | roster card | company of the members |

pub mod board;
pub mod classify;
pub mod dates;
pub mod errors;
pub mod identifiers;
pub mod pairing_board;
pub mod registry;
pub mod snapshot;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use board::{BoardCard, BoardLabel, BoardList, BoardService};
pub use classify::{classify_list, classify_roster_card, ListKind, RosterCard};
pub use dates::{
    date_from_list_name, format_board_date, future_date, pairing_list_name, parse_board_date,
    BOARD_DATE_FORMAT,
};
pub use errors::{BoardError, DateError, RotationError};
pub use identifiers::{BoardId, CardId, CompanyName, DeveloperId, ListId, SyncRunId, Track};
pub use pairing_board::{MaterializedDay, PairingBoard, PublishedCard};
pub use registry::EntityRegistry;
pub use snapshot::{BoardSnapshot, ListIssue};
pub use types::{Company, DayPairs, Developer, LabelColor, LabelScheme, Pair};
