//! # redemption-deck
//!
//! Card normalization and deck legality engine for the Redemption CCG.
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Parsing, normalization and validation perform no
//!    I/O and hold no shared mutable state. The same input always gives the
//!    same output, so results can be cached freely.
//!
//! 2. **Two Error Channels**: Malformed catalog data is a hard fault
//!    (`BrigadeError`), isolated per row. A deck breaking a construction
//!    rule is an expected outcome, reported as `ValidationIssue`s.
//!
//! 3. **Immutable Catalog**: The catalog is loaded and normalized once,
//!    then shared by reference (`Arc<Card>`).
//!
//! ## Modules
//!
//! - `cards`: Card records, brigade normalizer, testament classifier, catalog
//! - `deck`: Deck aggregate and Lackey text import/export
//! - `rules`: Format rules, Lost Soul table, Paragon quotas, validator
//! - `error`: Hard-fault error types

pub mod cards;
pub mod deck;
pub mod error;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::cards::{
    Alignment, Brigade, BrigadeNormalizer, BrigadeOverrides, Brigades, Card, CardKey, Catalog,
    CatalogLoad, Testament,
};

pub use crate::deck::{export_text, import_text, Deck, DeckCard, DeckFormat, ExportStyle, ImportReport};

pub use crate::error::{BrigadeError, CatalogError, ImportError};

pub use crate::rules::{
    required_lost_souls, validate_deck, DeckStats, DeckValidator, FormatRules, IssueCategory,
    ParagonQuota, ParagonTable, Severity, ValidationIssue, ValidationReport, ValidatorConfig,
};
