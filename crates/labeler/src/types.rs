//! Shared value types for the labeler domain.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! invariants (a colour is always six hex digits, a pattern always compiles) and
//! participate directly in reconciliation decisions.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{IssueNumber, LabelName, RepositoryName, RepositoryOwner};

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// What the run does to the issue's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Ensure the labels exist (optionally creating them) and attach them.
    Add,
    /// Detach labels by name and by pattern.
    Remove,
}

impl Action {
    /// Parses the action input. Matching is exact: `"Add"` is not an action.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            _ => None,
        }
    }

    /// Returns the input spelling of the action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Repository and issue references
// ---------------------------------------------------------------------------

/// A repository in `owner/repo` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryRef {
    pub owner: RepositoryOwner,
    pub name: RepositoryName,
}

impl RepositoryRef {
    /// Creates a reference from already-validated parts.
    pub fn new(owner: RepositoryOwner, name: RepositoryName) -> Self {
        Self { owner, name }
    }

    /// Parses an `owner/repo` string.
    ///
    /// The owner is the text before the first `/` and the name is the text
    /// between the first and second `/`. Returns `None` if either is empty.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split('/');
        let owner = RepositoryOwner::new(parts.next()?)?;
        let name = RepositoryName::new(parts.next()?)?;
        Some(Self { owner, name })
    }
}

impl std::fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Identifies the issue whose labels are being reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueRef {
    pub repository: RepositoryRef,
    pub number: IssueNumber,
}

impl IssueRef {
    pub fn new(repository: RepositoryRef, number: IssueNumber) -> Self {
        Self { repository, number }
    }
}

impl std::fmt::Display for IssueRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.repository, self.number)
    }
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// A repository label as reported by the issue tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: LabelName,
    /// Colour as returned by the tracker; not validated.
    pub color: Option<String>,
}

/// A label colour: exactly six lowercase hexadecimal digits, no leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelColor(String);

impl LabelColor {
    /// Largest representable colour (`ffffff`).
    pub const MAX_RGB: u32 = 0x00ff_ffff;

    /// Creates a colour from a 24-bit RGB value, returning `None` if it is out of range.
    pub fn from_rgb(rgb: u32) -> Option<Self> {
        if rgb > Self::MAX_RGB {
            None
        } else {
            Some(Self(format!("{rgb:06x}")))
        }
    }

    /// Creates a colour from the low 24 bits of `rgb`, ignoring anything above.
    pub fn from_rgb_masked(rgb: u32) -> Self {
        Self(format!("{:06x}", rgb & Self::MAX_RGB))
    }

    /// Returns the colour as a hex string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LabelColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A compiled regular expression matched against existing label names.
///
/// Matching is an unanchored search: `"bug"` matches `"not-a-bug"`. Anchor the
/// pattern with `^`/`$` to require a full match.
#[derive(Debug, Clone)]
pub struct LabelPattern {
    source: String,
    regex: Regex,
}

impl LabelPattern {
    /// Compiles a pattern, returning the compiler's error on invalid syntax.
    pub fn new(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        let regex = Regex::new(&source)?;
        Ok(Self { source, regex })
    }

    /// Returns the pattern text as supplied.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns `true` if the pattern matches anywhere in `label`.
    pub fn matches(&self, label: &LabelName) -> bool {
        self.regex.is_match(label.as_str())
    }
}

impl PartialEq for LabelPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for LabelPattern {}

impl std::fmt::Display for LabelPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
