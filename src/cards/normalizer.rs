//! Brigade normalization.
//!
//! Turns a card's raw brigade column into a canonical, sorted list of
//! concrete brigades. The raw column may contain `/`-joined brigades, the
//! word "and", a parenthetical list, and the placeholders "Gold" and
//! "Multi" that are shared between alignments.
//!
//! ## Steps
//!
//! 1. Tokenize the raw text.
//! 2. Resolve "Multi" (two tokens: both alignments; one token: by name
//!    override, then by alignment; more than two are left unresolved).
//! 3. Resolve "Gold" by alignment, position and name override.
//! 4. Expand "Good Multi" / "Evil Multi" into their full enumerations.
//! 5. Reject any token that is not a concrete brigade.
//! 6. Sort and de-duplicate.
//!
//! Every consumer that loads cards goes through [`BrigadeNormalizer`], so
//! the same raw row always resolves the same way.

use serde::{Deserialize, Serialize};

use super::brigade::{Brigade, Brigades, EVIL_BRIGADES, GOOD_BRIGADES};
use super::card::{Alignment, Card};
use crate::error::BrigadeError;

/// Which side a "Multi" placeholder expands to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MultiSide {
    Good,
    Evil,
    Both,
}

/// Named exceptions to the alignment-based placeholder rules.
///
/// Kept as data so that additions are explicit and testable on their own.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrigadeOverrides {
    /// Neutral cards whose "Gold" resolves to Good Gold even when Gold is
    /// not the first token.
    pub good_gold_names: Vec<String>,

    /// Cards whose single "Multi" token resolves to a fixed side,
    /// regardless of alignment.
    pub multi_sides: Vec<(String, MultiSide)>,
}

impl BrigadeOverrides {
    /// The built-in override table.
    ///
    /// The Good Gold names are placeholders, not an authoritative list of
    /// the printed exceptions. Hosts with the official names should build
    /// their own table with [`BrigadeOverrides::with_good_gold`].
    #[must_use]
    pub fn standard() -> Self {
        Self {
            good_gold_names: vec![
                "Ark of the Covenant".to_string(),
                "Golden Lampstand".to_string(),
            ],
            multi_sides: Vec::new(),
        }
    }

    /// An empty table (alignment rules only).
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Add a Good Gold name exception.
    #[must_use]
    pub fn with_good_gold(mut self, name: impl Into<String>) -> Self {
        self.good_gold_names.push(name.into());
        self
    }

    /// Add a Multi side exception.
    #[must_use]
    pub fn with_multi_side(mut self, name: impl Into<String>, side: MultiSide) -> Self {
        self.multi_sides.push((name.into(), side));
        self
    }

    /// Is `name` on the Good Gold exception list?
    #[must_use]
    pub fn is_good_gold(&self, name: &str) -> bool {
        self.good_gold_names.iter().any(|n| n.eq_ignore_ascii_case(name.trim()))
    }

    /// Side override for a card's "Multi" token, if any.
    #[must_use]
    pub fn multi_side(&self, name: &str) -> Option<MultiSide> {
        self.multi_sides
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name.trim()))
            .map(|(_, side)| *side)
    }
}

/// Intermediate token during resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot<'a> {
    Brigade(Brigade),
    Multi,
    Gold,
    GoodMulti,
    EvilMulti,
    Unknown(&'a str),
}

impl<'a> Slot<'a> {
    fn parse(token: &'a str) -> Self {
        if token.eq_ignore_ascii_case("Multi") {
            Slot::Multi
        } else if token.eq_ignore_ascii_case("Gold") {
            Slot::Gold
        } else if token.eq_ignore_ascii_case("Good Multi") {
            Slot::GoodMulti
        } else if token.eq_ignore_ascii_case("Evil Multi") {
            Slot::EvilMulti
        } else {
            Brigade::from_name(token).map_or(Slot::Unknown(token), Slot::Brigade)
        }
    }

    fn text(self) -> &'a str {
        match self {
            Slot::Brigade(b) => b.as_str(),
            Slot::Multi => "Multi",
            Slot::Gold => "Gold",
            Slot::GoodMulti => "Good Multi",
            Slot::EvilMulti => "Evil Multi",
            Slot::Unknown(token) => token,
        }
    }
}

/// Split the raw brigade column into trimmed tokens.
///
/// - Text containing "and": only the part before "and" is used.
/// - Text containing "(": the part before it plus the parenthesised list.
/// - Otherwise split on `/`.
#[must_use]
pub fn tokenize(raw: &str) -> Vec<&str> {
    fn split_slash(text: &str) -> impl Iterator<Item = &str> {
        text.split('/').map(str::trim).filter(|t| !t.is_empty())
    }

    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    if let Some(idx) = raw.find("and") {
        return split_slash(&raw[..idx]).collect();
    }

    if let Some(open) = raw.find('(') {
        let inner = &raw[open + 1..];
        let inner = inner.split(')').next().unwrap_or(inner);
        return split_slash(&raw[..open]).chain(split_slash(inner)).collect();
    }

    split_slash(raw).collect()
}

/// Resolves raw brigade text into concrete brigades.
///
/// ## Example
///
/// ```
/// use redemption_deck::cards::{Alignment, Brigade, BrigadeNormalizer};
///
/// let normalizer = BrigadeNormalizer::standard();
/// let brigades = normalizer.normalize("Gideon", "Red/Gold", Alignment::Good).unwrap();
/// assert_eq!(brigades.as_slice(), &[Brigade::GoodGold, Brigade::Red]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BrigadeNormalizer {
    overrides: BrigadeOverrides,
}

impl BrigadeNormalizer {
    /// Create a normalizer with a custom override table.
    #[must_use]
    pub fn new(overrides: BrigadeOverrides) -> Self {
        Self { overrides }
    }

    /// Create a normalizer with the built-in overrides.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(BrigadeOverrides::standard())
    }

    #[must_use]
    pub fn overrides(&self) -> &BrigadeOverrides {
        &self.overrides
    }

    /// Normalize a raw brigade field.
    ///
    /// Returns `InvalidBrigade` for any token outside the Good and Evil
    /// enumerations once placeholders are resolved.
    pub fn normalize(
        &self,
        name: &str,
        raw: &str,
        alignment: Alignment,
    ) -> Result<Brigades, BrigadeError> {
        let mut slots: Vec<Slot<'_>> = tokenize(raw).into_iter().map(Slot::parse).collect();

        self.resolve_multi(name, alignment, &mut slots);
        self.resolve_gold(name, alignment, &mut slots);

        let mut resolved = Vec::with_capacity(slots.len());
        for slot in slots {
            match slot {
                Slot::Brigade(b) => resolved.push(b),
                Slot::GoodMulti => resolved.extend_from_slice(&GOOD_BRIGADES),
                Slot::EvilMulti => resolved.extend_from_slice(&EVIL_BRIGADES),
                Slot::Multi | Slot::Gold | Slot::Unknown(_) => {
                    return Err(BrigadeError::InvalidBrigade {
                        card: name.to_string(),
                        token: slot.text().to_string(),
                    });
                }
            }
        }

        Ok(Brigades::resolved(resolved))
    }

    /// Normalize, falling back to the raw text on failure.
    ///
    /// The error is returned alongside the degraded value so the caller can
    /// report it without dropping the row.
    pub fn normalize_or_raw(
        &self,
        name: &str,
        raw: &str,
        alignment: Alignment,
    ) -> (Brigades, Option<BrigadeError>) {
        match self.normalize(name, raw, alignment) {
            Ok(brigades) => (brigades, None),
            Err(err) => (Brigades::Unresolved(raw.trim().to_string()), Some(err)),
        }
    }

    /// Normalize a card's `raw_brigade` into its `brigades` field.
    pub fn apply(&self, card: &mut Card) -> Result<(), BrigadeError> {
        let (brigades, err) = self.normalize_or_raw(&card.name, &card.raw_brigade, card.alignment);
        card.brigades = brigades;
        match err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn resolve_multi(&self, name: &str, alignment: Alignment, slots: &mut Vec<Slot<'_>>) {
        let count = slots.iter().filter(|s| **s == Slot::Multi).count();
        if count == 0 {
            return;
        }

        // More than two Multi tokens is malformed; leave them for validation.
        let side = match count {
            1 => self
                .overrides
                .multi_side(name)
                .unwrap_or_else(|| default_multi_side(alignment)),
            2 => MultiSide::Both,
            _ => return,
        };

        match side {
            MultiSide::Good | MultiSide::Evil => {
                let replacement = if side == MultiSide::Good {
                    Slot::GoodMulti
                } else {
                    Slot::EvilMulti
                };
                for slot in slots.iter_mut().filter(|s| **s == Slot::Multi) {
                    *slot = replacement;
                }
            }
            MultiSide::Both => {
                slots.retain(|s| *s != Slot::Multi);
                slots.push(Slot::GoodMulti);
                slots.push(Slot::EvilMulti);
            }
        }
    }

    fn resolve_gold(&self, name: &str, alignment: Alignment, slots: &mut [Slot<'_>]) {
        for (idx, slot) in slots.iter_mut().enumerate() {
            if *slot != Slot::Gold {
                continue;
            }
            let brigade = match alignment {
                Alignment::Good | Alignment::Unspecified => Brigade::GoodGold,
                Alignment::Evil => Brigade::EvilGold,
                Alignment::Neutral | Alignment::GoodEvil => {
                    if idx == 0 || self.overrides.is_good_gold(name) {
                        Brigade::GoodGold
                    } else {
                        Brigade::EvilGold
                    }
                }
            };
            *slot = Slot::Brigade(brigade);
        }
    }
}

/// Side for a single "Multi" token with no name override.
fn default_multi_side(alignment: Alignment) -> MultiSide {
    match alignment {
        Alignment::Good | Alignment::Neutral | Alignment::Unspecified => MultiSide::Good,
        Alignment::Evil => MultiSide::Evil,
        Alignment::GoodEvil => MultiSide::Both,
    }
}
