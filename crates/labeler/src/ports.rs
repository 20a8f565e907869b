//! Port traits implemented by infrastructure and the composition root.
//!
//! | Trait | Implemented by |
//! |-------|----------------|
//! | [`IssueTracker`] | `github::GithubClient` |
//! | [`ColorSource`] | [`crate::RandomColorSource`] |
//! | [`Reporter`] | the CLI's workflow-command reporter |

use async_trait::async_trait;

use crate::{IssueRef, Label, LabelColor, LabelName, RepositoryRef, TrackerError};

/// The remote operations the reconciler needs from an issue tracker.
///
/// Implementations map their transport's "not found" response to
/// [`TrackerError::NotFound`] and every other failure to one of the remaining
/// variants. They must not retry on the reconciler's behalf.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetches a repository label by exact name.
    async fn get_label(
        &self,
        repository: &RepositoryRef,
        name: &LabelName,
    ) -> Result<Label, TrackerError>;

    /// Creates a repository label.
    async fn create_label(
        &self,
        repository: &RepositoryRef,
        name: &LabelName,
        color: &LabelColor,
    ) -> Result<(), TrackerError>;

    /// Attaches `labels` to the issue in a single request.
    async fn add_labels(&self, issue: &IssueRef, labels: &[LabelName])
        -> Result<(), TrackerError>;

    /// Returns the names of the labels currently attached to the issue.
    async fn get_issue_labels(&self, issue: &IssueRef) -> Result<Vec<LabelName>, TrackerError>;

    /// Detaches one label from the issue.
    async fn remove_label(&self, issue: &IssueRef, name: &LabelName) -> Result<(), TrackerError>;
}

/// Supplies colours for labels created during an `add` run.
pub trait ColorSource: Send + Sync {
    fn next_color(&self) -> LabelColor;
}

/// Receives the user-facing progress lines of a run.
pub trait Reporter: Send + Sync {
    fn info(&self, message: &str);

    fn warning(&self, message: &str);
}
