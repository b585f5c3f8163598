//! Deck aggregate.
//!
//! A deck is a name, a format, an optional Paragon, and a list of
//! (card, quantity, reserve) entries. There is at most one entry per
//! (card identity, zone); adding more copies folds into that entry.
//!
//! Entries live in an `im::Vector`, so cloning a deck (e.g. for undo
//! history) is O(1).

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKey};

/// Construction format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckFormat {
    #[default]
    #[serde(rename = "Type 1")]
    Type1,
    #[serde(rename = "Type 2")]
    Type2,
    Paragon,
}

impl DeckFormat {
    /// Parse a format name. Unknown or blank names mean Type 1.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let compact: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match compact.as_str() {
            "type2" | "t2" => DeckFormat::Type2,
            "paragon" => DeckFormat::Paragon,
            _ => DeckFormat::Type1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DeckFormat::Type1 => "Type 1",
            DeckFormat::Type2 => "Type 2",
            DeckFormat::Paragon => "Paragon",
        }
    }
}

impl std::fmt::Display for DeckFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCard {
    pub card: Arc<Card>,
    /// Always at least 1.
    pub quantity: u32,
    pub is_reserve: bool,
}

impl DeckCard {
    #[must_use]
    pub fn new(card: Arc<Card>, quantity: u32, is_reserve: bool) -> Self {
        Self {
            card,
            quantity,
            is_reserve,
        }
    }

    fn same_slot(&self, key: &CardKey, is_reserve: bool) -> bool {
        self.is_reserve == is_reserve && self.card.has_key(key)
    }
}

/// A constructed deck.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use redemption_deck::cards::Card;
/// use redemption_deck::deck::{Deck, DeckFormat};
///
/// let hero = Arc::new(Card::new("Moses", "Pa").with_type("Hero"));
/// let mut deck = Deck::new("Exodus", DeckFormat::Type1);
/// deck.add_card(hero.clone(), 1, false);
/// deck.add_card(hero.clone(), 2, false);
///
/// assert_eq!(deck.len(), 1);
/// assert_eq!(deck.quantity_of(&hero.key(), false), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub format: DeckFormat,
    /// Paragon character; meaningful only for the Paragon format.
    pub paragon: Option<String>,
    cards: Vector<DeckCard>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new(name: impl Into<String>, format: DeckFormat) -> Self {
        Self {
            name: name.into(),
            format,
            paragon: None,
            cards: Vector::new(),
        }
    }

    /// Set the Paragon character (builder pattern).
    #[must_use]
    pub fn with_paragon(mut self, paragon: impl Into<String>) -> Self {
        self.paragon = Some(paragon.into());
        self
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All entries, main deck and reserve.
    pub fn cards(&self) -> impl Iterator<Item = &DeckCard> {
        self.cards.iter()
    }

    /// Main deck entries.
    pub fn main_deck(&self) -> impl Iterator<Item = &DeckCard> {
        self.cards.iter().filter(|dc| !dc.is_reserve)
    }

    /// Reserve entries.
    pub fn reserve(&self) -> impl Iterator<Item = &DeckCard> {
        self.cards.iter().filter(|dc| dc.is_reserve)
    }

    /// Sum of quantities across both zones, saturating at `u32::MAX`.
    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.cards
            .iter()
            .fold(0u32, |acc, dc| acc.saturating_add(dc.quantity))
    }

    /// Quantity of a printing in one zone.
    #[must_use]
    pub fn quantity_of(&self, key: &CardKey, is_reserve: bool) -> u32 {
        self.position(key, is_reserve)
            .map_or(0, |idx| self.cards[idx].quantity)
    }

    fn position(&self, key: &CardKey, is_reserve: bool) -> Option<usize> {
        self.cards.iter().position(|dc| dc.same_slot(key, is_reserve))
    }

    /// Add copies of a card, folding into an existing entry for the zone.
    ///
    /// Adding zero copies is a no-op.
    pub fn add_card(&mut self, card: Arc<Card>, quantity: u32, is_reserve: bool) {
        if quantity == 0 {
            return;
        }
        match self.position(&card.key(), is_reserve) {
            Some(idx) => {
                let entry = &mut self.cards[idx];
                entry.quantity = entry.quantity.saturating_add(quantity);
            }
            None => self.cards.push_back(DeckCard::new(card, quantity, is_reserve)),
        }
    }

    /// Remove up to `quantity` copies. Returns how many were removed.
    pub fn remove_card(&mut self, key: &CardKey, quantity: u32, is_reserve: bool) -> u32 {
        let Some(idx) = self.position(key, is_reserve) else {
            return 0;
        };
        let current = self.cards[idx].quantity;
        let removed = quantity.min(current);
        if removed == current {
            self.cards.remove(idx);
        } else {
            self.cards[idx].quantity = current - removed;
        }
        removed
    }

    /// Set the exact quantity of a printing already in the deck.
    ///
    /// Zero removes the entry. Returns false if the card is not present.
    pub fn set_quantity(&mut self, key: &CardKey, quantity: u32, is_reserve: bool) -> bool {
        let Some(idx) = self.position(key, is_reserve) else {
            return false;
        };
        if quantity == 0 {
            self.cards.remove(idx);
        } else {
            self.cards[idx].quantity = quantity;
        }
        true
    }

    /// Entries as sorted (identity, zone, quantity) triples.
    #[must_use]
    pub fn contents(&self) -> Vec<(CardKey, bool, u32)> {
        let mut entries: Vec<_> = self
            .cards
            .iter()
            .map(|dc| (dc.card.key(), dc.is_reserve, dc.quantity))
            .collect();
        entries.sort();
        entries
    }

    /// Do both decks hold the same cards in the same zones, in any order?
    #[must_use]
    pub fn same_cards(&self, other: &Deck) -> bool {
        self.contents() == other.contents()
    }

    /// Move copies between the main deck and the reserve.
    ///
    /// Returns how many copies were moved.
    pub fn move_card(&mut self, key: &CardKey, quantity: u32, to_reserve: bool) -> u32 {
        let Some(idx) = self.position(key, !to_reserve) else {
            return 0;
        };
        let card = Arc::clone(&self.cards[idx].card);
        let moved = self.remove_card(key, quantity, !to_reserve);
        self.add_card(card, moved, to_reserve);
        moved
    }
}
