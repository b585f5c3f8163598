//! Brigades - the color/faction affiliation of a card.
//!
//! There are 9 Good brigades and 7 Evil brigades. The raw catalog uses a
//! single "Gold" token for both Good Gold and Evil Gold, and "Multi" as a
//! placeholder for "every brigade of one alignment". Those placeholders are
//! resolved by the normalizer; a resolved card only ever carries the
//! concrete brigades listed here.
//!
//! Variants are declared in alphabetical order of their display names, so
//! the derived `Ord` is the canonical sort order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A concrete, resolved brigade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Brigade {
    Black,
    Blue,
    Brown,
    Clay,
    Crimson,
    #[serde(rename = "Evil Gold")]
    EvilGold,
    #[serde(rename = "Good Gold")]
    GoodGold,
    Gray,
    Green,
    Orange,
    #[serde(rename = "Pale Green")]
    PaleGreen,
    Purple,
    Red,
    Silver,
    Teal,
    White,
}

/// The 9 Good brigades, sorted.
pub const GOOD_BRIGADES: [Brigade; 9] = [
    Brigade::Blue,
    Brigade::Clay,
    Brigade::GoodGold,
    Brigade::Green,
    Brigade::Purple,
    Brigade::Red,
    Brigade::Silver,
    Brigade::Teal,
    Brigade::White,
];

/// The 7 Evil brigades, sorted.
pub const EVIL_BRIGADES: [Brigade; 7] = [
    Brigade::Black,
    Brigade::Brown,
    Brigade::Crimson,
    Brigade::EvilGold,
    Brigade::Gray,
    Brigade::Orange,
    Brigade::PaleGreen,
];

impl Brigade {
    /// Display name as it appears in the catalog.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Brigade::Black => "Black",
            Brigade::Blue => "Blue",
            Brigade::Brown => "Brown",
            Brigade::Clay => "Clay",
            Brigade::Crimson => "Crimson",
            Brigade::EvilGold => "Evil Gold",
            Brigade::GoodGold => "Good Gold",
            Brigade::Gray => "Gray",
            Brigade::Green => "Green",
            Brigade::Orange => "Orange",
            Brigade::PaleGreen => "Pale Green",
            Brigade::Purple => "Purple",
            Brigade::Red => "Red",
            Brigade::Silver => "Silver",
            Brigade::Teal => "Teal",
            Brigade::White => "White",
        }
    }

    /// Parse an exact display name. Case-insensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        GOOD_BRIGADES
            .iter()
            .chain(EVIL_BRIGADES.iter())
            .copied()
            .find(|b| b.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Is this one of the Good brigades?
    #[must_use]
    pub fn is_good(self) -> bool {
        GOOD_BRIGADES.contains(&self)
    }

    /// Is this one of the Evil brigades?
    #[must_use]
    pub fn is_evil(self) -> bool {
        EVIL_BRIGADES.contains(&self)
    }

    /// Does this brigade satisfy a target brigade name?
    ///
    /// Matching is case-insensitive. The bare target "Gold" matches both
    /// Good Gold and Evil Gold.
    #[must_use]
    pub fn matches_name(self, target: &str) -> bool {
        brigade_name_matches(self.as_str(), target)
    }
}

impl std::fmt::Display for Brigade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive brigade name comparison with the "Gold" wildcard.
pub(crate) fn brigade_name_matches(name: &str, target: &str) -> bool {
    let name = name.trim();
    let target = target.trim();
    if target.eq_ignore_ascii_case("Gold") {
        return name.eq_ignore_ascii_case("Good Gold")
            || name.eq_ignore_ascii_case("Evil Gold")
            || name.eq_ignore_ascii_case("Gold");
    }
    name.eq_ignore_ascii_case(target)
}

/// Sorted, de-duplicated list of resolved brigades.
pub type BrigadeList = SmallVec<[Brigade; 4]>;

/// A card's brigade field after normalization.
///
/// Rows whose raw brigade could not be resolved keep the raw text as a
/// single best-effort entry instead of failing the whole catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brigades {
    /// Fully resolved brigades in canonical order.
    Resolved(BrigadeList),
    /// The raw text of a row that failed normalization.
    Unresolved(String),
}

impl Default for Brigades {
    fn default() -> Self {
        Brigades::Resolved(BrigadeList::new())
    }
}

impl Brigades {
    /// Build from any list of brigades, sorting and de-duplicating.
    pub fn resolved(brigades: impl IntoIterator<Item = Brigade>) -> Self {
        let mut list: BrigadeList = brigades.into_iter().collect();
        list.sort_unstable();
        list.dedup();
        Brigades::Resolved(list)
    }

    /// Is this a degraded, unresolved entry?
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Brigades::Unresolved(_))
    }

    /// Is the field empty (no brigade)?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Brigades::Resolved(list) => list.is_empty(),
            Brigades::Unresolved(raw) => raw.trim().is_empty(),
        }
    }

    /// Resolved brigades, empty for an unresolved entry.
    #[must_use]
    pub fn as_slice(&self) -> &[Brigade] {
        match self {
            Brigades::Resolved(list) => list,
            Brigades::Unresolved(_) => &[],
        }
    }

    /// Iterate over brigade names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let (resolved, raw) = match self {
            Brigades::Resolved(list) => (list.as_slice(), None),
            Brigades::Unresolved(raw) => (&[][..], Some(raw.as_str())),
        };
        resolved.iter().map(|b| b.as_str()).chain(raw)
    }

    /// Does any brigade satisfy the target name? See [`Brigade::matches_name`].
    #[must_use]
    pub fn contains_name(&self, target: &str) -> bool {
        self.names().any(|name| brigade_name_matches(name, target))
    }

    /// Canonical slash-joined form used for storage and display.
    #[must_use]
    pub fn joined(&self) -> String {
        self.names().collect::<Vec<_>>().join("/")
    }
}

impl std::fmt::Display for Brigades {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.joined())
    }
}
