//! Newtype domain identifiers.
//!
//! Every board concept that has an identity is represented as a distinct newtype
//! wrapping a primitive. This prevents accidentally interchanging, for example,
//! a [`ListId`] with a [`CardId`] even though both are opaque board strings
//! under the hood.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers: assigned by the board service
// ---------------------------------------------------------------------------

string_id! {
    /// Identifies the pairing board that holds the roster, tracks, and history.
    BoardId
}

string_id! {
    /// Identifies a list (column) on the board.
    ListId
}

string_id! {
    /// Identifies a card within a list.
    CardId
}

string_id! {
    /// Identifies a developer.
    ///
    /// This is the board member id attached to cards. It is the sole basis of
    /// developer identity and equality.
    DeveloperId
}

// ---------------------------------------------------------------------------
// Identifiers: names encoded in card titles
// ---------------------------------------------------------------------------

string_id! {
    /// A company name as written on a roster card.
    ///
    /// Case-sensitive: `"Acme"` and `"acme"` are different companies.
    CompanyName
}

string_id! {
    /// A work stream that needs one pair per day.
    ///
    /// Tracks are declared as cards under the `tracks` list; pairing cards are
    /// titled with the track they cover.
    Track
}

// ---------------------------------------------------------------------------
// Identifiers: UUID-backed (internally generated)
// ---------------------------------------------------------------------------

/// Identifies a single sync or publish run against the board.
///
/// Generated fresh for every run and recorded on the run's tracing span so
/// all board calls from one run can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyncRunId(Uuid);

impl SyncRunId {
    /// Generates a new random run identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SyncRunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
