//! The label reconciliation procedure.
//!
//! [`LabelReconciler`] turns a validated [`ReconcileRequest`] into a strictly
//! sequential chain of [`IssueTracker`] calls. Each call is awaited before the
//! next is issued, and the first failure that is not an expected "not found"
//! ends the run. Nothing already applied is rolled back.

use tracing::{debug, info_span, Instrument};

use crate::{
    ColorSource, IssueRef, IssueTracker, LabelName, LabelOperation, LabelPattern, LabelerError,
    ReconcileRequest, Reporter, RunId,
};

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    Added {
        /// Every requested label, in request order.
        labels: Vec<LabelName>,
        /// The labels that were missing and got created.
        created: Vec<LabelName>,
    },
    Removed {
        /// The literal labels requested for removal, whether or not they were attached.
        labels: Vec<LabelName>,
        /// Labels removed because a pattern matched them, in removal order.
        matched: Vec<LabelName>,
    },
}

/// Applies label requests to an issue through an [`IssueTracker`].
pub struct LabelReconciler<T, C, R> {
    tracker: T,
    colors: C,
    reporter: R,
}

impl<T, C, R> LabelReconciler<T, C, R>
where
    T: IssueTracker,
    C: ColorSource,
    R: Reporter,
{
    pub fn new(tracker: T, colors: C, reporter: R) -> Self {
        Self {
            tracker,
            colors,
            reporter,
        }
    }

    /// Runs one reconciliation and reports `Done!` on success.
    pub async fn reconcile(
        &self,
        request: &ReconcileRequest,
    ) -> Result<ReconcileOutcome, LabelerError> {
        let span = info_span!(
            "reconcile",
            run_id = %RunId::new_random(),
            action = %request.action(),
            issue = %request.issue,
        );

        async {
            let outcome = match &request.operation {
                LabelOperation::Add { labels, create } => {
                    self.add(&request.issue, labels, *create).await?
                }
                LabelOperation::Remove { labels, patterns } => {
                    self.remove(&request.issue, labels, patterns).await?
                }
            };
            self.reporter.info("Done!");
            Ok::<_, LabelerError>(outcome)
        }
        .instrument(span)
        .await
    }

    async fn add(
        &self,
        issue: &IssueRef,
        labels: &[LabelName],
        create: bool,
    ) -> Result<ReconcileOutcome, LabelerError> {
        let repository = &issue.repository;

        let mut missing = Vec::new();
        for label in labels {
            match self.tracker.get_label(repository, label).await {
                Ok(_) => debug!(%label, "label exists"),
                Err(e) if e.is_not_found() => {
                    debug!(%label, "label missing");
                    missing.push(label.clone());
                }
                Err(e) => return Err(e.into()),
            }
        }

        let mut created = Vec::new();
        if create {
            for label in missing {
                let color = self.colors.next_color();
                self.tracker.create_label(repository, &label, &color).await?;
                self.reporter.info(&format!("Created label: {label}"));
                created.push(label);
            }
        }

        self.tracker.add_labels(issue, labels).await?;
        self.reporter.info(&format!(
            "Added labels to #{}: {}",
            issue.number,
            join(labels)
        ));

        Ok(ReconcileOutcome::Added {
            labels: labels.to_vec(),
            created,
        })
    }

    async fn remove(
        &self,
        issue: &IssueRef,
        labels: &[LabelName],
        patterns: &[LabelPattern],
    ) -> Result<ReconcileOutcome, LabelerError> {
        for label in labels {
            self.remove_one(issue, label).await?;
        }

        let mut matched = Vec::new();
        if !patterns.is_empty() {
            let attached = self.tracker.get_issue_labels(issue).await?;
            debug!(count = attached.len(), "fetched issue labels");

            for pattern in patterns {
                self.reporter
                    .info(&format!("Removing labels matching pattern: {pattern}"));

                for label in attached.iter().filter(|label| pattern.matches(label)) {
                    if self.remove_one(issue, label).await? {
                        self.reporter.info(&format!("Removed label: {label}"));
                        matched.push(label.clone());
                    }
                }
            }
        }

        self.reporter.info(&format!(
            "Removed labels from #{}: {}",
            issue.number,
            join(labels)
        ));

        Ok(ReconcileOutcome::Removed {
            labels: labels.to_vec(),
            matched,
        })
    }

    /// Removes one label; returns `false` if it was not attached.
    async fn remove_one(&self, issue: &IssueRef, label: &LabelName) -> Result<bool, LabelerError> {
        match self.tracker.remove_label(issue, label).await {
            Ok(()) => Ok(true),
            Err(e) if e.is_not_found() => {
                debug!(%label, "label not attached");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn join(labels: &[LabelName]) -> String {
    labels
        .iter()
        .map(LabelName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "reconciler_tests.rs"]
mod tests;
