//! Card catalog: parsing and the immutable catalog snapshot.
//!
//! The catalog arrives as tab-separated text with one header row. Parsing
//! is a pure transform into `Card` records; `Catalog::load` then
//! normalizes brigades and testaments once and freezes the result.
//!
//! ## Columns
//!
//! `name, set, imgFile, officialSet, type, brigade, strength, toughness,
//! class, identifier, specialAbility, rarity, reference, (unused),
//! alignment, legality`

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::card::{normalize_apostrophes, Alignment, Card, CardKey};
use super::normalizer::BrigadeNormalizer;
use super::testament::classify_reference;
use crate::error::CatalogError;

/// Number of columns in a catalog row.
pub const COLUMN_COUNT: usize = 16;

/// Parse catalog text into raw card records.
///
/// The first line is the header and is skipped. Blank lines are skipped.
/// Missing trailing columns become empty strings. Brigades are left
/// unnormalized (`raw_brigade` only).
///
/// Returns each card with its 1-based source line number.
#[must_use]
pub fn parse_rows(text: &str) -> Vec<(usize, Card)> {
    text.lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, parse_row(line)))
        .collect()
}

/// Parse a single data row.
#[must_use]
pub fn parse_row(line: &str) -> Card {
    let mut cols: SmallVec<[&str; COLUMN_COUNT]> = line.split('\t').map(str::trim).collect();
    cols.resize(COLUMN_COUNT, "");
    let col = |i: usize| cols[i].to_string();

    Card {
        name: col(0),
        set: col(1),
        img_file: col(2),
        official_set: col(3),
        card_type: col(4),
        raw_brigade: col(5),
        strength: col(6),
        toughness: col(7),
        class: col(8),
        identifier: col(9),
        special_ability: col(10),
        rarity: col(11),
        reference: col(12),
        // Column 13 is unused.
        alignment: Alignment::parse(cols[14]),
        legality: col(15),
        ..Card::default()
    }
}

/// Key used for name lookups: apostrophes folded, trimmed, lowercase.
#[must_use]
pub fn name_key(name: &str) -> String {
    normalize_apostrophes(name).trim().to_lowercase()
}

/// Result of loading a catalog.
///
/// Rows with an unresolvable brigade are kept with the raw text as their
/// brigade; the faults are listed here.
#[derive(Debug)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub faults: Vec<CatalogError>,
}

/// Immutable snapshot of the normalized card catalog.
///
/// Cards are held behind `Arc` so decks and lookups can share them
/// without copying.
///
/// ## Example
///
/// ```
/// use redemption_deck::cards::{BrigadeNormalizer, Catalog};
///
/// let text = "Name\tSet\tImg\tOfficial\tType\tBrigade\n\
///             Moses\tPa\tmoses\tPatriarchs\tHero\tGreen\t\t\t\t\t\t\tExodus 14:21\t\tGood\tRotation\n";
/// let load = Catalog::load(text, &BrigadeNormalizer::standard());
/// assert!(load.faults.is_empty());
///
/// let moses = load.catalog.find_first("moses").unwrap();
/// assert_eq!(moses.brigades.joined(), "Green");
/// assert_eq!(moses.testament, "OT");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vec<Arc<Card>>,
    by_name: FxHashMap<String, SmallVec<[usize; 2]>>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and normalize catalog text.
    pub fn load(text: &str, normalizer: &BrigadeNormalizer) -> CatalogLoad {
        let rows = parse_rows(text);
        let mut faults = Vec::new();
        let mut cards = Vec::with_capacity(rows.len());

        for (line, mut card) in rows {
            if let Err(source) = normalizer.apply(&mut card) {
                tracing::warn!(line, card = %card.name, raw = %card.raw_brigade, "unresolved brigade, keeping raw text");
                faults.push(CatalogError::Row { line, source });
            }
            let info = classify_reference(&card.reference);
            card.testament = info.joined();
            card.is_gospel = info.is_gospel;
            cards.push(card);
        }

        tracing::debug!(cards = cards.len(), faults = faults.len(), "catalog loaded");

        CatalogLoad {
            catalog: Self::from_cards(cards),
            faults,
        }
    }

    /// Build a catalog from already-normalized cards, keeping their order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let cards: Vec<Arc<Card>> = cards.into_iter().map(Arc::new).collect();
        let mut by_name: FxHashMap<String, SmallVec<[usize; 2]>> = FxHashMap::default();
        for (idx, card) in cards.iter().enumerate() {
            by_name.entry(name_key(&card.name)).or_default().push(idx);
        }
        Self { cards, by_name }
    }

    /// Number of printings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all printings in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.iter()
    }

    /// All printings with this name, in catalog order.
    ///
    /// Matching ignores case and apostrophe style.
    pub fn find_by_name(&self, name: &str) -> impl Iterator<Item = &Arc<Card>> {
        self.by_name
            .get(&name_key(name))
            .into_iter()
            .flatten()
            .map(move |&idx| &self.cards[idx])
    }

    /// First printing with this name in catalog order.
    #[must_use]
    pub fn find_first(&self, name: &str) -> Option<&Arc<Card>> {
        self.find_by_name(name).next()
    }

    /// Exact printing by name and set.
    #[must_use]
    pub fn find(&self, name: &str, set: &str) -> Option<&Arc<Card>> {
        let set = set.trim();
        self.find_by_name(name)
            .find(|card| card.set.eq_ignore_ascii_case(set))
    }

    /// Printing by identity.
    #[must_use]
    pub fn get(&self, key: &CardKey) -> Option<&Arc<Card>> {
        self.find(&key.name, &key.set)
    }

    /// Printings matching a predicate, in catalog order.
    pub fn search<F>(&self, predicate: F) -> impl Iterator<Item = &Arc<Card>>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }

    /// Encode the normalized snapshot for caching.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CatalogError> {
        Ok(bincode::serialize(&self.cards)?)
    }

    /// Decode a snapshot produced by [`Catalog::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CatalogError> {
        let cards: Vec<Card> = bincode::deserialize(bytes)?;
        Ok(Self::from_cards(cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Brigade;

    const HEADER: &str = "Name\tSet\tImage\tOfficial Set\tType\tBrigade\tStrength\tToughness\tClass\tIdentifier\tSpecial Ability\tRarity\tReference\tSound\tAlignment\tLegality";

    fn row(name: &str, set: &str, card_type: &str, brigade: &str, alignment: &str) -> String {
        format!("{name}\t{set}\t{name}.jpg\t{set}\t{card_type}\t{brigade}\t5\t5\t\t\t\tCommon\tGenesis 1:1\t\t{alignment}\tRotation")
    }

    #[test]
    fn test_parse_row_full() {
        let card = parse_row(&row("Abraham", "Pa", "Hero", "Green", "Good"));
        assert_eq!(card.name, "Abraham");
        assert_eq!(card.set, "Pa");
        assert_eq!(card.img_file, "Abraham.jpg");
        assert_eq!(card.card_type, "Hero");
        assert_eq!(card.raw_brigade, "Green");
        assert_eq!(card.strength, "5");
        assert_eq!(card.rarity, "Common");
        assert_eq!(card.reference, "Genesis 1:1");
        assert_eq!(card.alignment, Alignment::Good);
        assert_eq!(card.legality, "Rotation");
        assert!(card.brigades.is_empty());
    }

    #[test]
    fn test_parse_row_missing_columns() {
        let card = parse_row("Lonely\tXX");
        assert_eq!(card.name, "Lonely");
        assert_eq!(card.set, "XX");
        assert_eq!(card.card_type, "");
        assert_eq!(card.legality, "");
        assert_eq!(card.alignment, Alignment::Unspecified);
    }

    #[test]
    fn test_parse_rows_skips_header_and_blank_lines() {
        let text = format!("{HEADER}\n{}\n\n   \n{}\n", row("A", "S", "Hero", "Blue", "Good"), row("B", "S", "Hero", "Red", "Good"));
        let rows = parse_rows(&text);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, 2);
        assert_eq!(rows[1].0, 5);
        assert_eq!(rows[1].1.name, "B");
    }

    #[test]
    fn test_load_isolates_bad_rows() {
        let text = format!(
            "{HEADER}\n{}\n{}\n{}\n",
            row("Good One", "S", "Hero", "Blue", "Good"),
            row("Bad One", "S", "Hero", "Plaid", "Good"),
            row("Evil One", "S", "Evil Character", "Gold", "Evil"),
        );
        let load = Catalog::load(&text, &BrigadeNormalizer::standard());
        assert_eq!(load.catalog.len(), 3);
        assert_eq!(load.faults.len(), 1);
        assert!(matches!(load.faults[0], CatalogError::Row { line: 3, .. }));

        let bad = load.catalog.find_first("Bad One").unwrap();
        assert!(bad.brigades.is_unresolved());
        assert_eq!(bad.brigades.joined(), "Plaid");

        let evil = load.catalog.find_first("Evil One").unwrap();
        assert_eq!(evil.brigades.as_slice(), &[Brigade::EvilGold]);
        assert_eq!(evil.testament, "OT");
    }

    #[test]
    fn test_lookup_by_name_and_set() {
        let catalog = Catalog::from_cards(vec![
            Card::new("Solomon's Temple", "Ki"),
            Card::new("Solomon's Temple", "Pri"),
            Card::new("Moses", "Pa"),
        ]);

        let printings: Vec<_> = catalog.find_by_name("solomon\u{2019}s temple").collect();
        assert_eq!(printings.len(), 2);
        assert_eq!(printings[0].set, "Ki");

        assert_eq!(catalog.find("Solomon's Temple", "Pri").unwrap().set, "Pri");
        assert!(catalog.find("Solomon's Temple", "Wa").is_none());
        assert!(catalog.get(&CardKey::new("Moses", "Pa")).is_some());
        assert!(catalog.find_first("Aaron").is_none());
    }

    #[test]
    fn test_search() {
        let catalog = Catalog::from_cards(vec![
            Card::new("A", "S").with_type("Dominant"),
            Card::new("B", "S").with_type("Hero"),
        ]);
        let dominants: Vec<_> = catalog.search(|c| c.is_dominant()).collect();
        assert_eq!(dominants.len(), 1);
        assert_eq!(dominants[0].name, "A");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let text = format!("{HEADER}\n{}\n{}\n", row("A", "S", "Hero", "Multi", "Good"), row("B", "T", "Lost Soul", "", "Neutral"));
        let catalog = Catalog::load(&text, &BrigadeNormalizer::standard()).catalog;
        let bytes = catalog.to_bytes().unwrap();
        let restored = Catalog::from_bytes(&bytes).unwrap();

        assert_eq!(restored.len(), 2);
        assert_eq!(restored.find_first("a").unwrap().brigades.as_slice().len(), 9);
        assert_eq!(**restored.find("B", "T").unwrap(), **catalog.find("B", "T").unwrap());
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(Catalog::from_bytes(&[0xff, 0xff, 0xff]), Err(CatalogError::Snapshot(_))));
    }
}
