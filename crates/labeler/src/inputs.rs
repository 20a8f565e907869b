//! Action inputs and their validation into a [`ReconcileRequest`].
//!
//! The composition root assembles a [`LabelerInputs`] once from wherever the
//! raw values come from (flags, `INPUT_*` environment variables) and hands it
//! over by value. Nothing in this crate reads configuration on its own.

use crate::{
    Action, IssueNumber, IssueRef, LabelName, LabelPattern, LabelerError, RepositoryRef, Reporter,
};

/// Raw action inputs, whitespace-trimmed but otherwise unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelerInputs {
    /// `add` or `remove`.
    pub action: String,
    /// REST API base URL the tracker client talks to.
    pub api_url: String,
    /// Whether missing labels are created during `add`.
    pub create: bool,
    /// Label names, one per entry.
    pub labels: Vec<String>,
    /// Regular expressions matched against the issue's labels during `remove`.
    pub label_patterns: Vec<String>,
    /// Issue number as supplied; parsed during validation.
    pub issue_number: String,
    /// Target repository in `owner/repo` form.
    pub repository: String,
}

/// Interprets the `create` input: only the exact text `true` enables creation.
pub fn parse_create_flag(value: &str) -> bool {
    value.trim() == "true"
}

/// Splits a newline-delimited input into entries.
///
/// The whole value is trimmed first. An absent input produces a single empty
/// entry, which is dropped; no other entry is touched, deduplicated, or
/// validated.
pub fn split_input_list(value: &str) -> Vec<String> {
    let mut entries: Vec<String> = value.trim().split('\n').map(str::to_owned).collect();
    if entries.first().is_some_and(String::is_empty) {
        entries.remove(0);
    }
    entries
}

impl LabelerInputs {
    /// Reports the resolved inputs, one line each. The token is never part of the inputs.
    pub fn report(&self, reporter: &impl Reporter) {
        reporter.info("Running action with the following inputs:");
        reporter.info(&format!("  - Action: {}", self.action));
        reporter.info(&format!("  - API URL: {}", self.api_url));
        reporter.info(&format!("  - Create: {}", self.create));
        reporter.info(&format!("  - Issue Number: {}", self.issue_number));
        reporter.info(&format!("  - Labels: {}", self.labels.join(", ")));
        reporter.info(&format!(
            "  - Label Patterns: {}",
            self.label_patterns.join(", ")
        ));
        reporter.info(&format!("  - Repository: {}", self.repository));
    }

    /// Validates the inputs into a request.
    ///
    /// Checks run in a fixed order and stop at the first failure: action, label
    /// presence, pattern syntax, repository, issue number. Patterns supplied
    /// with `add` are ignored with a warning.
    pub fn validate(self, reporter: &impl Reporter) -> Result<ReconcileRequest, LabelerError> {
        let action = Action::parse(&self.action).ok_or_else(|| LabelerError::InvalidAction {
            action: self.action.clone(),
        })?;

        let labels: Vec<LabelName> = self.labels.into_iter().map(LabelName::from).collect();

        let operation = match action {
            Action::Add => {
                if labels.is_empty() {
                    return Err(LabelerError::NoLabelsToAdd);
                }
                if !self.label_patterns.is_empty() {
                    reporter.warning("The label_patterns input is ignored when action is add");
                }
                LabelOperation::Add {
                    labels,
                    create: self.create,
                }
            }
            Action::Remove => {
                if labels.is_empty() && self.label_patterns.is_empty() {
                    return Err(LabelerError::NothingToRemove);
                }
                let patterns = self
                    .label_patterns
                    .into_iter()
                    .map(|source| {
                        LabelPattern::new(source.as_str()).map_err(|e| {
                            LabelerError::InvalidPattern {
                                pattern: source.clone(),
                                reason: e.to_string(),
                            }
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                LabelOperation::Remove { labels, patterns }
            }
        };

        let repository =
            RepositoryRef::parse(&self.repository).ok_or_else(|| LabelerError::InvalidRepository {
                value: self.repository.clone(),
            })?;

        let number = self
            .issue_number
            .parse::<u64>()
            .ok()
            .and_then(IssueNumber::new)
            .ok_or_else(|| LabelerError::InvalidIssueNumber {
                value: self.issue_number.clone(),
            })?;

        Ok(ReconcileRequest {
            issue: IssueRef::new(repository, number),
            operation,
        })
    }
}

/// A validated reconciliation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileRequest {
    /// The issue whose labels are reconciled.
    pub issue: IssueRef,
    /// What to do to it.
    pub operation: LabelOperation,
}

impl ReconcileRequest {
    /// Returns the action this request performs.
    pub fn action(&self) -> Action {
        match self.operation {
            LabelOperation::Add { .. } => Action::Add,
            LabelOperation::Remove { .. } => Action::Remove,
        }
    }
}

/// The per-action payload of a [`ReconcileRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOperation {
    /// Attach `labels` (never empty), creating missing ones when `create` is set.
    Add { labels: Vec<LabelName>, create: bool },
    /// Detach `labels` by name, then every attached label matching one of `patterns`.
    /// At least one of the two lists is non-empty.
    Remove {
        labels: Vec<LabelName>,
        patterns: Vec<LabelPattern>,
    },
}

#[cfg(test)]
#[path = "inputs_tests.rs"]
mod tests;
