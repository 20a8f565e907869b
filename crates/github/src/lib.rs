//! Issue labeler GitHub infrastructure adapter.
//!
//! Implements the [`labeler::IssueTracker`] trait against the GitHub REST API
//! (`api.github.com` or a GitHub Enterprise Server `/api/v3` endpoint).
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain labeling rules. Request
//! construction, authentication headers, path encoding, and the mapping from
//! HTTP statuses to [`labeler::TrackerError`] live here; the [`labeler`] crate
//! never sees them.
//!
//! ## Error Mapping
//!
//! | Response | `TrackerError` |
//! |----------|----------------|
//! | `404 Not Found` | `NotFound` |
//! | any other non-2xx | `Api { status, message }`, message from the JSON body |
//! | no response / undecodable body | `Transport` |
//!
//! No retries are made; a failed call is reported to the caller as-is.

mod client;

pub use client::{ClientError, GithubClient, DEFAULT_API_URL};
