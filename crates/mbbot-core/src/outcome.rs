use crate::page::Page;
use crate::{Error, Result};
use serde::Serialize;

/// Phrases the site renders after a form submission
pub mod markers {
    /// Any accepted edit
    pub const EDIT_ACCEPTED: &str = "Thank you, your edit has been";
    /// URL relationship that is already present
    pub const ALREADY_EXISTS: &str = "already exists";
    /// Entity edit that would not change anything
    pub const NO_CHANGES: &str = "any changes to the data already present";
    /// Relationship edit colliding with an existing relationship
    pub const RELATIONSHIP_EXISTS: &str = "exists with these attributes";
    /// Merge queue confirmation page
    pub const MERGE_QUEUE: &str = "You are about to merge";
    /// Landing page of a completed release editor session
    pub const RELEASE_INFORMATION: &str = "Release information";
}

/// Why an edit was not attempted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// The field already holds data (or the target value) and is left alone
    AlreadySet { field: String },
    /// The field no longer holds the value the caller expected to replace
    ValueChanged { field: String },
}

impl SkipReason {
    pub fn already_set(field: impl Into<String>) -> Self {
        SkipReason::AlreadySet {
            field: field.into(),
        }
    }

    pub fn value_changed(field: impl Into<String>) -> Self {
        SkipReason::ValueChanged {
            field: field.into(),
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::AlreadySet { field } => write!(f, "{} already set, not changing", field),
            SkipReason::ValueChanged { field } => write!(f, "{} has changed, aborting", field),
        }
    }
}

/// Result of an edit procedure that did not fail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EditOutcome {
    /// The site accepted the edit
    Applied,
    /// The site recognised the edit as a duplicate or a no-op
    Unchanged,
    /// A read-before-write guard refused to submit
    Skipped(SkipReason),
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EditOutcome::Applied => "applied",
            EditOutcome::Unchanged => "unchanged",
            EditOutcome::Skipped(_) => "skipped",
        }
    }
}

/// Classify the page returned by an edit submission
///
/// The accepted marker wins; otherwise `duplicate_marker` (when given) turns
/// the response into [`EditOutcome::Unchanged`]. Anything else is a rejected
/// edit.
pub fn classify(page: &Page, duplicate_marker: Option<&str>) -> Result<EditOutcome> {
    if page.contains(markers::EDIT_ACCEPTED) {
        tracing::debug!("Edit accepted at {}", page.url());
        return Ok(EditOutcome::Applied);
    }

    if let Some(marker) = duplicate_marker {
        if page.contains(marker) {
            tracing::debug!("Edit reported as duplicate ({:?})", marker);
            return Ok(EditOutcome::Unchanged);
        }
    }

    tracing::warn!("Edit rejected at {} (status {})", page.url(), page.status());
    Err(Error::EditRejected(format!(
        "no confirmation on {}",
        page.url()
    )))
}

/// Succeed only if `marker` appears on the page
pub fn require(page: &Page, marker: &str) -> Result<()> {
    if page.contains(marker) {
        Ok(())
    } else {
        tracing::warn!("Expected {:?} on {}", marker, page.url());
        Err(Error::EditRejected(format!(
            "{:?} missing from {}",
            marker,
            page.url()
        )))
    }
}
