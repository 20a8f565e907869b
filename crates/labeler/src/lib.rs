//! Core domain for the issue labeler.
//!
//! This crate holds the label reconciliation procedure together with every type
//! it needs: newtype identifiers, value types, errors, input validation, and the
//! port traits that infrastructure implements. Infrastructure crates implement
//! the traits defined here; they never add labeling rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It decides *which* remote calls to make; the `github` crate decides *how*.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`LabelName`, `IssueNumber`, `RunId`, etc.) |
//! | [`types`] | Value types (`Action`, `IssueRef`, `LabelColor`, `LabelPattern`) |
//! | [`errors`] | `TrackerError` and the terminal `LabelerError` |
//! | [`ports`] | `IssueTracker`, `ColorSource`, `Reporter` |
//! | [`inputs`] | `LabelerInputs` and validation into a `ReconcileRequest` |
//! | [`reconciler`] | `LabelReconciler` |
//! | [`color`] | `RandomColorSource` |

pub mod color;
pub mod errors;
pub mod identifiers;
pub mod inputs;
pub mod ports;
pub mod reconciler;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use color::RandomColorSource;
pub use errors::{LabelerError, TrackerError};
pub use identifiers::{IssueNumber, LabelName, RepositoryName, RepositoryOwner, RunId};
pub use inputs::{
    parse_create_flag, split_input_list, LabelOperation, LabelerInputs, ReconcileRequest,
};
pub use ports::{ColorSource, IssueTracker, Reporter};
pub use reconciler::{LabelReconciler, ReconcileOutcome};
pub use types::{Action, IssueRef, Label, LabelColor, LabelPattern, RepositoryRef};
