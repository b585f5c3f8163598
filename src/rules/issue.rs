//! Validation issues and the validation report.

use serde::{Deserialize, Serialize};

use super::paragon::BucketCounts;

/// Issue severity. Only `Error` makes a deck invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// Which rule family produced an issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    General,
    Size,
    Souls,
    Reserve,
    Dominants,
    Format,
    Paragon,
}

impl IssueCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            IssueCategory::General => "general",
            IssueCategory::Size => "size",
            IssueCategory::Souls => "souls",
            IssueCategory::Reserve => "reserve",
            IssueCategory::Dominants => "dominants",
            IssueCategory::Format => "format",
            IssueCategory::Paragon => "paragon",
        }
    }
}

/// A single finding about a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub category: IssueCategory,
    pub message: String,
}

impl ValidationIssue {
    pub fn error(category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            category,
            message: message.into(),
        }
    }

    pub fn warning(category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            category,
            message: message.into(),
        }
    }

    pub fn info(category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            category,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}/{}] {}", self.severity.as_str(), self.category.as_str(), self.message)
    }
}

/// Good/Evil/other card counts for one zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentCounts {
    pub good: u32,
    pub evil: u32,
    pub other: u32,
}

/// Aggregate numbers computed while validating.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    pub main_deck_size: u32,
    pub reserve_size: u32,
    /// Main deck Lost Souls, excluding Hopper exemptions.
    pub main_deck_lost_souls: u32,
    /// Dominants in main deck and reserve.
    pub dominant_count: u32,
    /// Lost Soul requirement, once the main deck reaches minimum size.
    pub required_lost_souls: Option<u32>,
    pub main_alignment: AlignmentCounts,
    pub reserve_alignment: AlignmentCounts,
    /// Realized Paragon buckets (Paragon format only).
    pub paragon_buckets: Option<BucketCounts>,
}

/// Result of validating a deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub issues: Vec<ValidationIssue>,
    pub stats: DeckStats,
}

impl ValidationReport {
    /// Build a report; validity is derived from the issues.
    #[must_use]
    pub fn new(issues: Vec<ValidationIssue>, stats: DeckStats) -> Self {
        let is_valid = !issues.iter().any(ValidationIssue::is_error);
        Self {
            is_valid,
            issues,
            stats,
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    /// Issues of any severity in one category.
    pub fn by_category(&self, category: IssueCategory) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.category == category)
    }
}
