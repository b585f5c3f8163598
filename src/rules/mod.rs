//! Deck construction rules.
//!
//! - `ValidatorConfig` / `FormatRules`: per-format numbers and policies
//! - `required_lost_souls`: deck-size-indexed Lost Soul requirement
//! - `ParagonTable`: per-character bucket quotas for the Paragon format
//! - `DeckValidator`: Deck -> `ValidationReport`
//!
//! Validation never fails: rule violations are returned as issues.

pub mod config;
pub mod issue;
pub mod paragon;
pub mod souls;
pub mod validator;

pub use config::{DominantCap, FormatRules, HopperExemption, ValidatorConfig};
pub use issue::{AlignmentCounts, DeckStats, IssueCategory, Severity, ValidationIssue, ValidationReport};
pub use paragon::{BucketCounts, ParagonBucket, ParagonQuota, ParagonTable};
pub use souls::required_lost_souls;
pub use validator::{validate_deck, DeckValidator};
