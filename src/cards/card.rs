//! Card records - one printed card variant from the catalog.
//!
//! A `Card` is immutable reference data: it is built once per catalog load,
//! enriched with normalized brigades and testament tags, and shared by
//! reference afterwards.

use serde::{Deserialize, Serialize};

use super::brigade::Brigades;

/// Card alignment.
///
/// The catalog writes dual-aligned cards as "Good/Evil"; blank or
/// unrecognised values are `Unspecified`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    Good,
    Evil,
    Neutral,
    #[serde(rename = "Good/Evil")]
    GoodEvil,
    #[default]
    Unspecified,
}

impl Alignment {
    /// Parse the catalog's alignment column.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("good") {
            Alignment::Good
        } else if raw.eq_ignore_ascii_case("evil") {
            Alignment::Evil
        } else if raw.eq_ignore_ascii_case("neutral") {
            Alignment::Neutral
        } else if raw.eq_ignore_ascii_case("good/evil") || raw.eq_ignore_ascii_case("evil/good") {
            Alignment::GoodEvil
        } else {
            Alignment::Unspecified
        }
    }

    /// Catalog spelling, empty for `Unspecified`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Alignment::Good => "Good",
            Alignment::Evil => "Evil",
            Alignment::Neutral => "Neutral",
            Alignment::GoodEvil => "Good/Evil",
            Alignment::Unspecified => "",
        }
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a printing: name plus set code.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardKey {
    pub name: String,
    pub set: String,
}

impl CardKey {
    pub fn new(name: impl Into<String>, set: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            set: set.into(),
        }
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.set.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{} ({})", self.name, self.set)
        }
    }
}

/// One printed card variant.
///
/// ## Example
///
/// ```
/// use redemption_deck::cards::{Alignment, Card};
///
/// let card = Card::new("Lost Soul \"Hopper\"", "Pi")
///     .with_type("Lost Soul")
///     .with_reference("II Chronicles 28:13");
///
/// assert!(card.is_lost_soul());
/// assert_eq!(card.alignment, Alignment::Unspecified);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub set: String,
    pub img_file: String,
    pub official_set: String,
    /// Card type, e.g. "Hero", "Evil Character", "Lost Soul", "Hero/GE".
    pub card_type: String,
    /// Raw brigade column as printed in the catalog.
    pub raw_brigade: String,
    /// Normalized brigades.
    pub brigades: Brigades,
    pub strength: String,
    pub toughness: String,
    /// Sub-type tags, e.g. "Warrior", "Weapon", "Territory".
    pub class: String,
    pub identifier: String,
    pub special_ability: String,
    pub rarity: String,
    /// Scripture reference(s).
    pub reference: String,
    pub alignment: Alignment,
    /// Rotation status.
    pub legality: String,
    /// "OT", "NT", "OT/NT" or empty.
    pub testament: String,
    pub is_gospel: bool,
}

impl Card {
    /// Create a card with only a name and set.
    #[must_use]
    pub fn new(name: impl Into<String>, set: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            set: set.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = card_type.into();
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_brigades(mut self, brigades: Brigades) -> Self {
        self.brigades = brigades;
        self
    }

    #[must_use]
    pub fn with_special_ability(mut self, text: impl Into<String>) -> Self {
        self.special_ability = text.into();
        self
    }

    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    /// Identity of this printing.
    #[must_use]
    pub fn key(&self) -> CardKey {
        CardKey::new(self.name.clone(), self.set.clone())
    }

    /// Does this card's identity equal `key`?
    #[must_use]
    pub fn has_key(&self, key: &CardKey) -> bool {
        self.name == key.name && self.set == key.set
    }

    #[must_use]
    pub fn is_lost_soul(&self) -> bool {
        self.card_type.contains("Lost Soul")
    }

    #[must_use]
    pub fn is_dominant(&self) -> bool {
        self.card_type.contains("Dominant")
    }

    /// Does the card carry special ability text?
    #[must_use]
    pub fn has_special_ability(&self) -> bool {
        !self.special_ability.trim().is_empty()
    }
}

/// Fold curly apostrophes and quotes to their straight forms.
///
/// Card names are matched after this folding so that text pasted from
/// word processors still resolves.
#[must_use]
pub fn normalize_apostrophes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{2032}' | '`' | '\u{00B4}' => '\'',
            '\u{201C}' | '\u{201D}' | '\u{201F}' => '"',
            other => other,
        })
        .collect()
}
