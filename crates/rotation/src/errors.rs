//! Error types for the pair rotation domain.
//!
//! [`RotationError`] covers conditions that abort a sync or publish run.
//! [`DateError`] is recoverable: a pairing list with a malformed date is
//! reported as a [`crate::ListIssue`] and the run continues with the next list.
//! [`BoardError`] is what a [`crate::BoardService`] implementation returns for
//! any transport failure; it is always fatal for the run.

use chrono::NaiveDate;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Board transport errors
// ---------------------------------------------------------------------------

/// A failed call to the board service.
///
/// Produced by infrastructure adapters; the domain never inspects the variant
/// beyond reporting it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The request never produced a response (connection refused, timeout, TLS).
    #[error("Board request failed: {message}")]
    Transport {
        /// Description of the underlying failure.
        message: String,
    },

    /// The board service answered with a non-success status.
    #[error("Board service returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body or the error message extracted from it.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("Could not decode board response: {message}")]
    Decode {
        /// Description of the decoding problem.
        message: String,
    },

    /// The response decoded but violates the board model (e.g. an empty id).
    #[error("Invalid board response: {message}")]
    InvalidResponse {
        /// Description of the violated expectation.
        message: String,
    },
}

// ---------------------------------------------------------------------------
// List date errors
// ---------------------------------------------------------------------------

/// A pairing list whose name does not carry a readable date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The name has no `(` ... `)` section to read the date from.
    #[error("List name '{list_name}' has no parenthesised date")]
    MissingParentheses {
        /// The full list name.
        list_name: String,
    },

    /// The text between the parentheses is not a date in the board format.
    #[error("'{text}' is not a date in the form {format}")]
    Unparseable {
        /// The text found between the parentheses.
        text: String,
        /// The expected `chrono` format string.
        format: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Run-level errors
// ---------------------------------------------------------------------------

/// Errors that abort a sync or publish run.
#[derive(Debug, Error)]
pub enum RotationError {
    /// A board read or write failed. Writes already performed stay on the board.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// Moving the day forward left chrono's representable date range.
    #[error("Cannot move {base} forward by {days} days")]
    DateOutOfRange {
        /// The date of the day being published.
        base: NaiveDate,
        /// Requested offset.
        days: u32,
    },
}
