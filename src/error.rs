//! Error types for hard faults.
//!
//! Deck rule violations are never errors in this sense: they are reported as
//! `ValidationIssue`s. The types here cover malformed catalog data and
//! problems found while importing deck text.

use thiserror::Error;

/// A brigade token that does not resolve to a known brigade.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BrigadeError {
    /// The token survived normalization but is not a Good or Evil brigade.
    #[error("invalid brigade {token:?} on card {card:?}")]
    InvalidBrigade { card: String, token: String },
}

/// Errors raised while loading or caching a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A single row failed brigade normalization.
    #[error("line {line}: {source}")]
    Row {
        line: usize,
        #[source]
        source: BrigadeError,
    },

    /// Snapshot encoding or decoding failed.
    #[error("catalog snapshot: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Problems found while importing deck text.
///
/// Import never fails as a whole; these are collected alongside the
/// partially imported deck.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The line is not `<quantity>\t<name>[\t<set>]`.
    #[error("line {line}: expected \"<quantity>\\t<card name>\", got {text:?}")]
    MalformedLine { line: usize, text: String },

    /// The quantity column is not a positive integer.
    #[error("line {line}: invalid quantity {text:?}")]
    InvalidQuantity { line: usize, text: String },

    /// No printing of the card exists in the catalog.
    #[error("line {line}: card not found: {name}")]
    UnknownCard { line: usize, name: String },
}

impl ImportError {
    /// Line number (1-based) the error refers to.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            ImportError::MalformedLine { line, .. }
            | ImportError::InvalidQuantity { line, .. }
            | ImportError::UnknownCard { line, .. } => *line,
        }
    }
}
