//! Input resolution.
//!
//! Every input is a flag that falls back to the environment variable the
//! Actions runner sets for it (`INPUT_<NAME>`), so the same binary runs as a
//! container action or by hand.

use clap::Parser;
use github::DEFAULT_API_URL;
use labeler::{parse_create_flag, split_input_list, LabelerInputs};

/// Adds or removes labels on a GitHub issue.
#[derive(Debug, Parser)]
#[command(name = "issue-labeler", version, about)]
pub struct Cli {
    /// `add` or `remove`.
    #[arg(long, env = "INPUT_ACTION")]
    pub action: String,

    /// GitHub REST API base URL.
    #[arg(long, env = "INPUT_API_URL")]
    pub api_url: Option<String>,

    /// Create missing labels when adding (`true` to enable).
    #[arg(long, env = "INPUT_CREATE", default_value = "")]
    pub create: String,

    /// Token used to authenticate against the API.
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// Newline-separated label names.
    #[arg(long, env = "INPUT_LABELS", default_value = "")]
    pub labels: String,

    /// Newline-separated regular expressions; labels on the issue that match are removed.
    #[arg(long, env = "INPUT_LABEL_PATTERNS", default_value = "")]
    pub label_patterns: String,

    /// Number of the issue to label.
    #[arg(long, env = "INPUT_ISSUE_NUMBER")]
    pub issue_number: String,

    /// Target repository, `owner/repo`.
    #[arg(long, env = "INPUT_REPOSITORY")]
    pub repository: String,
}

impl Cli {
    /// Splits the resolved values into the token and the labeling inputs.
    pub fn into_inputs(self) -> (String, LabelerInputs) {
        let api_url = self
            .api_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let inputs = LabelerInputs {
            action: self.action.trim().to_string(),
            api_url,
            create: parse_create_flag(&self.create),
            labels: split_input_list(&self.labels),
            label_patterns: split_input_list(&self.label_patterns),
            issue_number: self.issue_number.trim().to_string(),
            repository: self.repository.trim().to_string(),
        };
        (self.github_token.trim().to_string(), inputs)
    }
}
