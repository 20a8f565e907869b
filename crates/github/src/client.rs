//! [`GithubClient`]: the REST implementation of [`IssueTracker`].

use std::time::Duration;

use async_trait::async_trait;
use labeler::{IssueRef, IssueTracker, Label, LabelColor, LabelName, RepositoryRef, TrackerError};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// Public GitHub REST endpoint, used when no API URL is configured.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("issue-labeler/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while constructing a [`GithubClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API URL does not parse or cannot carry a path.
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },

    /// The token contains characters that are not valid in an HTTP header.
    #[error("GitHub token is not a valid header value")]
    InvalidToken,

    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// GitHub REST client authenticated with a bearer token.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GithubClient {
    /// Creates a client for `api_url` (e.g. [`DEFAULT_API_URL`] or
    /// `https://ghe.example.com/api/v3`).
    pub fn new(api_url: &str, token: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(api_url).map_err(|e| ClientError::InvalidApiUrl {
            url: api_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidApiUrl {
                url: api_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|_| ClientError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Appends percent-encoded `segments` to the base URL's path.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TrackerError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| TrackerError::Transport {
                message: format!("API URL cannot carry a path: {}", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn repo_endpoint(
        &self,
        repository: &RepositoryRef,
        rest: &[&str],
    ) -> Result<Url, TrackerError> {
        let mut segments = vec!["repos", repository.owner.as_str(), repository.name.as_str()];
        segments.extend_from_slice(rest);
        self.endpoint(&segments)
    }

    async fn send(&self, operation: &str, request: RequestBuilder) -> Result<Response, TrackerError> {
        let response = request.send().await.map_err(|e| TrackerError::Transport {
            message: format!("{operation} failed: {e}"),
        })?;

        let status = response.status();
        if status.is_success() {
            debug!(operation, status = status.as_u16(), "GitHub API call succeeded");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        debug!(operation, status = status.as_u16(), %message, "GitHub API call failed");

        if status == StatusCode::NOT_FOUND {
            Err(TrackerError::NotFound { message })
        } else {
            Err(TrackerError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> Result<T, TrackerError> {
        self.send(operation, request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| TrackerError::Transport {
                message: format!("failed to decode {operation} response: {e}"),
            })
    }
}

/// Picks the most useful failure text from a GitHub error response.
fn error_message(status: StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.message;
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct CreateLabelBody<'a> {
    name: &'a LabelName,
    color: &'a LabelColor,
}

#[derive(Serialize)]
struct AddLabelsBody<'a> {
    labels: &'a [LabelName],
}

#[derive(Deserialize)]
struct LabelResponse {
    name: String,
    #[serde(default)]
    color: Option<String>,
}

#[derive(Deserialize)]
struct IssueResponse {
    #[serde(default)]
    labels: Vec<IssueLabel>,
}

/// Issue labels come back as objects, but the schema also allows bare names.
#[derive(Deserialize)]
#[serde(untagged)]
enum IssueLabel {
    Name(String),
    Object {
        #[serde(default)]
        name: Option<String>,
    },
}

impl IssueLabel {
    fn into_name(self) -> Option<String> {
        match self {
            Self::Name(name) => Some(name),
            Self::Object { name } => name,
        }
    }
}

// ---------------------------------------------------------------------------
// IssueTracker
// ---------------------------------------------------------------------------

#[async_trait]
impl IssueTracker for GithubClient {
    #[instrument(skip(self, repository), fields(repository = %repository))]
    async fn get_label(
        &self,
        repository: &RepositoryRef,
        name: &LabelName,
    ) -> Result<Label, TrackerError> {
        let url = self.repo_endpoint(repository, &["labels", name.as_str()])?;
        let label: LabelResponse = self.send_json("get label", self.http.get(url)).await?;
        Ok(Label {
            name: LabelName::new(label.name),
            color: label.color,
        })
    }

    #[instrument(skip(self, repository), fields(repository = %repository))]
    async fn create_label(
        &self,
        repository: &RepositoryRef,
        name: &LabelName,
        color: &LabelColor,
    ) -> Result<(), TrackerError> {
        let url = self.repo_endpoint(repository, &["labels"])?;
        let body = CreateLabelBody { name, color };
        self.send("create label", self.http.post(url).json(&body))
            .await
            .map(drop)
    }

    #[instrument(skip(self, labels), fields(issue = %issue, count = labels.len()))]
    async fn add_labels(&self, issue: &IssueRef, labels: &[LabelName]) -> Result<(), TrackerError> {
        let number = issue.number.to_string();
        let url = self.repo_endpoint(&issue.repository, &["issues", number.as_str(), "labels"])?;
        let body = AddLabelsBody { labels };
        self.send("add labels", self.http.post(url).json(&body))
            .await
            .map(drop)
    }

    #[instrument(skip(self), fields(issue = %issue))]
    async fn get_issue_labels(&self, issue: &IssueRef) -> Result<Vec<LabelName>, TrackerError> {
        let number = issue.number.to_string();
        let url = self.repo_endpoint(&issue.repository, &["issues", number.as_str()])?;
        let response: IssueResponse = self.send_json("get issue", self.http.get(url)).await?;
        Ok(response
            .labels
            .into_iter()
            .filter_map(IssueLabel::into_name)
            .filter(|name| !name.is_empty())
            .map(LabelName::new)
            .collect())
    }

    #[instrument(skip(self), fields(issue = %issue))]
    async fn remove_label(&self, issue: &IssueRef, name: &LabelName) -> Result<(), TrackerError> {
        let number = issue.number.to_string();
        let url = self.repo_endpoint(
            &issue.repository,
            &["issues", number.as_str(), "labels", name.as_str()],
        )?;
        self.send("remove label", self.http.delete(url))
            .await
            .map(drop)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
