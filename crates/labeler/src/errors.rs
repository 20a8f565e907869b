//! Error types for the labeler domain.
//!
//! [`TrackerError`] is what an [`crate::IssueTracker`] returns; it exposes
//! "not found" as an explicit discriminant so the reconciler never inspects
//! transport status codes.
//!
//! [`LabelerError`] is the single terminal failure of a run. Its `Display` text
//! is the exact message reported to the user.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Remote errors
// ---------------------------------------------------------------------------

/// A failed call to the remote issue tracker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// The label, issue, or repository does not exist.
    ///
    /// Expected at label-existence and label-removal call sites; fatal anywhere else.
    #[error("{message}")]
    NotFound {
        /// Message supplied by the tracker.
        message: String,
    },

    /// The tracker answered with any other failure status.
    #[error("{message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Message supplied by the tracker.
        message: String,
    },

    /// The request never produced a usable response (connection, timeout, decoding).
    #[error("{message}")]
    Transport {
        /// Description of the failure.
        message: String,
    },
}

impl TrackerError {
    /// Returns `true` if this is [`TrackerError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ---------------------------------------------------------------------------
// Run errors
// ---------------------------------------------------------------------------

/// Terminal failure of a labeling run.
///
/// Input variants are produced before any remote call is made; [`LabelerError::Remote`]
/// aborts the run at the first fatal tracker failure. Mutations already applied
/// are not rolled back.
#[derive(Debug, Error)]
pub enum LabelerError {
    /// The action input is neither `add` nor `remove`.
    #[error("Invalid action: {action}")]
    InvalidAction {
        /// The action as supplied.
        action: String,
    },

    /// `add` was requested with an empty label list.
    #[error("No labels provided for adding")]
    NoLabelsToAdd,

    /// `remove` was requested with neither labels nor label patterns.
    #[error("No labels or label patterns provided for removal")]
    NothingToRemove,

    /// A label pattern is not a valid regular expression.
    #[error("Invalid label pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// Compiler error text.
        reason: String,
    },

    /// The repository input is not in `owner/repo` form.
    #[error("Invalid repository: {value}")]
    InvalidRepository {
        /// The repository as supplied.
        value: String,
    },

    /// The issue number input is not a positive integer.
    #[error("Invalid issue number: {value}")]
    InvalidIssueNumber {
        /// The issue number as supplied.
        value: String,
    },

    /// A remote call failed with anything other than an expected "not found".
    #[error(transparent)]
    Remote(#[from] TrackerError),
}

impl LabelerError {
    /// Returns `true` for failures detected before any remote call.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Remote(_))
    }
}
