//! Lackey-style deck text import and export.
//!
//! ```text
//! 2	Moses
//! 1	Son of God
//! Reserve:
//! 1	Angel of the Lord
//! Tokens:
//! (ignored)
//! ```
//!
//! An optional third tab-separated column carries the set code so that a
//! round trip reproduces the exact printings.

use std::fmt::Write as _;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::aggregate::{Deck, DeckFormat};
use crate::cards::{normalize_apostrophes, Card, Catalog};
use crate::error::ImportError;

/// Output style for [`export_text`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportStyle {
    /// `<quantity>\t<name>`, readable by Lackey.
    #[default]
    Lackey,
    /// `<quantity>\t<name>\t<set>`.
    WithSets,
}

/// Render a deck as text.
#[must_use]
pub fn export_text(deck: &Deck, style: ExportStyle) -> String {
    let mut out = String::new();
    for entry in deck.main_deck() {
        write_line(&mut out, entry.quantity, &entry.card, style);
    }

    let mut reserve = deck.reserve().peekable();
    if reserve.peek().is_some() {
        out.push_str("Reserve:\n");
        for entry in reserve {
            write_line(&mut out, entry.quantity, &entry.card, style);
        }
    }
    out
}

fn write_line(out: &mut String, quantity: u32, card: &Card, style: ExportStyle) {
    // Writing to a String cannot fail.
    let _ = match style {
        ExportStyle::Lackey => writeln!(out, "{quantity}\t{}", card.name),
        ExportStyle::WithSets => writeln!(out, "{quantity}\t{}\t{}", card.name, card.set),
    };
}

/// Outcome of an import.
///
/// `deck` is `None` only when nothing could be imported and errors were
/// found. A partial deck is returned alongside its errors; the caller
/// decides whether that is acceptable.
#[derive(Clone, Debug, Default)]
pub struct ImportReport {
    pub deck: Option<Deck>,
    pub errors: Vec<ImportError>,
    pub warnings: Vec<String>,
}

impl ImportReport {
    /// Did every line import cleanly?
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A parsed, not yet resolved, deck line.
struct ParsedLine<'a> {
    quantity: u32,
    name: &'a str,
    set: Option<&'a str>,
}

fn parse_line(line_no: usize, line: &str) -> Result<ParsedLine<'_>, ImportError> {
    let (qty, rest) = match line.split_once('\t') {
        Some(parts) => parts,
        None => line
            .split_once(char::is_whitespace)
            .ok_or_else(|| ImportError::MalformedLine {
                line: line_no,
                text: line.to_string(),
            })?,
    };

    let quantity = match qty.trim().parse::<u32>() {
        Ok(q) if q > 0 => q,
        _ => {
            return Err(ImportError::InvalidQuantity {
                line: line_no,
                text: qty.trim().to_string(),
            })
        }
    };

    let mut cols = rest.split('\t').map(str::trim);
    let name = cols.next().unwrap_or_default();
    if name.is_empty() {
        return Err(ImportError::MalformedLine {
            line: line_no,
            text: line.to_string(),
        });
    }
    let set = cols.next().filter(|s| !s.is_empty());

    Ok(ParsedLine { quantity, name, set })
}

fn is_marker(line: &str, marker: &str) -> bool {
    line.trim_end_matches(':').trim().eq_ignore_ascii_case(marker)
}

/// Find the printing for a line: exact set first, then first by name.
fn resolve<'c>(
    catalog: &'c Catalog,
    line_no: usize,
    parsed: &ParsedLine<'_>,
    warnings: &mut Vec<String>,
) -> Result<&'c Arc<Card>, ImportError> {
    let name = normalize_apostrophes(parsed.name);

    if let Some(set) = parsed.set {
        if let Some(card) = catalog.find(&name, set) {
            return Ok(card);
        }
    }

    let mut printings = catalog.find_by_name(&name);
    let first = printings.next().ok_or_else(|| ImportError::UnknownCard {
        line: line_no,
        name: name.clone(),
    })?;
    let others = printings.count();

    if let Some(set) = parsed.set {
        let msg = format!("line {line_no}: {name} has no printing in set {set}; using {}", first.set);
        tracing::warn!("{msg}");
        warnings.push(msg);
    } else if others > 0 {
        let msg = format!(
            "line {line_no}: {name} has {} printings; using {}",
            others + 1,
            first.set
        );
        tracing::warn!("{msg}");
        warnings.push(msg);
    }

    Ok(first)
}

/// Parse deck text against a catalog.
///
/// Blank lines are skipped, `Reserve:` switches to the reserve, and
/// everything after `Tokens:` is ignored. Repeated lines for the same
/// printing and zone are merged.
pub fn import_text(name: &str, text: &str, catalog: &Catalog, format: DeckFormat) -> ImportReport {
    let mut deck = Deck::new(name, format);
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut in_reserve = false;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if is_marker(line, "Tokens") {
            break;
        }
        if is_marker(line, "Reserve") {
            in_reserve = true;
            continue;
        }

        let card = parse_line(line_no, line)
            .and_then(|parsed| resolve(catalog, line_no, &parsed, &mut warnings).map(|c| (c, parsed.quantity)));

        match card {
            Ok((card, quantity)) => deck.add_card(Arc::clone(card), quantity, in_reserve),
            Err(err) => errors.push(err),
        }
    }

    tracing::debug!(entries = deck.len(), errors = errors.len(), "deck text imported");

    let deck = if deck.is_empty() && !errors.is_empty() {
        None
    } else {
        Some(deck)
    };

    ImportReport {
        deck,
        errors,
        warnings,
    }
}
