//! In-memory fakes of the port traits for unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    ColorSource, IssueRef, IssueTracker, Label, LabelColor, LabelName, RepositoryRef, Reporter,
    TrackerError,
};

/// One recorded call against [`FakeTracker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetLabel(String),
    CreateLabel { name: String, color: String },
    AddLabels(Vec<String>),
    GetIssueLabels,
    RemoveLabel(String),
}

#[derive(Debug, Default)]
struct TrackerState {
    repo_labels: HashSet<String>,
    attached: Vec<String>,
    get_label_failures: HashMap<String, TrackerError>,
    remove_failures: HashMap<String, TrackerError>,
    create_failure: Option<TrackerError>,
    add_failure: Option<TrackerError>,
    get_issue_failure: Option<TrackerError>,
    calls: Vec<Call>,
}

/// A tracker holding one repository's labels and one issue's attached labels.
#[derive(Debug, Clone, Default)]
pub struct FakeTracker {
    state: Arc<Mutex<TrackerState>>,
}

impl FakeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repo_labels(self, names: &[&str]) -> Self {
        self.state
            .lock()
            .unwrap()
            .repo_labels
            .extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn with_attached(self, names: &[&str]) -> Self {
        self.state
            .lock()
            .unwrap()
            .attached
            .extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn fail_get_label(self, name: &str, error: TrackerError) -> Self {
        self.state
            .lock()
            .unwrap()
            .get_label_failures
            .insert(name.to_string(), error);
        self
    }

    pub fn fail_remove(self, name: &str, error: TrackerError) -> Self {
        self.state
            .lock()
            .unwrap()
            .remove_failures
            .insert(name.to_string(), error);
        self
    }

    pub fn fail_create(self, error: TrackerError) -> Self {
        self.state.lock().unwrap().create_failure = Some(error);
        self
    }

    pub fn fail_add(self, error: TrackerError) -> Self {
        self.state.lock().unwrap().add_failure = Some(error);
        self
    }

    pub fn fail_get_issue(self, error: TrackerError) -> Self {
        self.state.lock().unwrap().get_issue_failure = Some(error);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn attached(&self) -> Vec<String> {
        self.state.lock().unwrap().attached.clone()
    }

    pub fn repo_labels(&self) -> HashSet<String> {
        self.state.lock().unwrap().repo_labels.clone()
    }
}

pub fn not_found() -> TrackerError {
    TrackerError::NotFound {
        message: "Not Found".to_string(),
    }
}

pub fn api_error(status: u16, message: &str) -> TrackerError {
    TrackerError::Api {
        status,
        message: message.to_string(),
    }
}

#[async_trait]
impl IssueTracker for FakeTracker {
    async fn get_label(
        &self,
        _repository: &RepositoryRef,
        name: &LabelName,
    ) -> Result<Label, TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::GetLabel(name.to_string()));
        if let Some(error) = state.get_label_failures.get(name.as_str()) {
            return Err(error.clone());
        }
        if state.repo_labels.contains(name.as_str()) {
            Ok(Label {
                name: name.clone(),
                color: Some("ededed".to_string()),
            })
        } else {
            Err(not_found())
        }
    }

    async fn create_label(
        &self,
        _repository: &RepositoryRef,
        name: &LabelName,
        color: &LabelColor,
    ) -> Result<(), TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateLabel {
            name: name.to_string(),
            color: color.to_string(),
        });
        if let Some(error) = state.create_failure.clone() {
            return Err(error);
        }
        state.repo_labels.insert(name.to_string());
        Ok(())
    }

    async fn add_labels(&self, _issue: &IssueRef, labels: &[LabelName]) -> Result<(), TrackerError> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(Call::AddLabels(labels.iter().map(|l| l.to_string()).collect()));
        if let Some(error) = state.add_failure.clone() {
            return Err(error);
        }
        for label in labels {
            if !state.attached.iter().any(|a| a == label.as_str()) {
                state.attached.push(label.to_string());
            }
        }
        Ok(())
    }

    async fn get_issue_labels(&self, _issue: &IssueRef) -> Result<Vec<LabelName>, TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::GetIssueLabels);
        if let Some(error) = state.get_issue_failure.clone() {
            return Err(error);
        }
        Ok(state.attached.iter().map(|a| LabelName::from(a.as_str())).collect())
    }

    async fn remove_label(&self, _issue: &IssueRef, name: &LabelName) -> Result<(), TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::RemoveLabel(name.to_string()));
        if let Some(error) = state.remove_failures.get(name.as_str()) {
            return Err(error.clone());
        }
        match state.attached.iter().position(|a| a == name.as_str()) {
            Some(index) => {
                state.attached.remove(index);
                Ok(())
            }
            None => Err(not_found()),
        }
    }
}

/// Always returns the same colour.
#[derive(Debug, Clone, Copy)]
pub struct FixedColorSource(pub u32);

impl ColorSource for FixedColorSource {
    fn next_color(&self) -> LabelColor {
        LabelColor::from_rgb_masked(self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Info(String),
    Warning(String),
}

/// Records every reported line in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    lines: Arc<Mutex<Vec<Line>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<Line> {
        self.lines.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                Line::Info(text) => Some(text),
                Line::Warning(_) => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                Line::Warning(text) => Some(text),
                Line::Info(_) => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.lines.lock().unwrap().push(Line::Info(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push(Line::Warning(message.to_string()));
    }
}
