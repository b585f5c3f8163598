//! Paragon quota table and compliance checker.
//!
//! A Paragon deck names one character. That character fixes how many cards
//! fall into each of five buckets across main deck and reserve:
//!
//! | Bucket        | Cards                                              |
//! |---------------|----------------------------------------------------|
//! | primary good  | Good cards in the Paragon's primary Good brigade   |
//! | other good    | every other Good card                              |
//! | neutral       | Neutral, unaligned and Good/Evil cards             |
//! | primary evil  | Evil cards in the Paragon's primary Evil brigade   |
//! | other evil    | every other Evil card                              |
//!
//! Lost Souls are never counted. Dominants count toward their alignment
//! bucket (their separate cap is a format rule).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::issue::{IssueCategory, ValidationIssue};
use crate::cards::{Alignment, Card};
use crate::deck::Deck;

/// One of the five quota buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParagonBucket {
    PrimaryGood,
    OtherGood,
    Neutral,
    PrimaryEvil,
    OtherEvil,
}

impl ParagonBucket {
    /// All buckets in report order.
    pub const ALL: [ParagonBucket; 5] = [
        ParagonBucket::PrimaryGood,
        ParagonBucket::OtherGood,
        ParagonBucket::Neutral,
        ParagonBucket::PrimaryEvil,
        ParagonBucket::OtherEvil,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ParagonBucket::PrimaryGood => "primary Good",
            ParagonBucket::OtherGood => "other Good",
            ParagonBucket::Neutral => "Neutral",
            ParagonBucket::PrimaryEvil => "primary Evil",
            ParagonBucket::OtherEvil => "other Evil",
        }
    }
}

/// A count per bucket. Used both for quotas and realized counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketCounts {
    pub primary_good: u32,
    pub other_good: u32,
    pub neutral: u32,
    pub primary_evil: u32,
    pub other_evil: u32,
}

impl BucketCounts {
    #[must_use]
    pub const fn new(
        primary_good: u32,
        other_good: u32,
        neutral: u32,
        primary_evil: u32,
        other_evil: u32,
    ) -> Self {
        Self {
            primary_good,
            other_good,
            neutral,
            primary_evil,
            other_evil,
        }
    }

    #[must_use]
    pub fn get(&self, bucket: ParagonBucket) -> u32 {
        match bucket {
            ParagonBucket::PrimaryGood => self.primary_good,
            ParagonBucket::OtherGood => self.other_good,
            ParagonBucket::Neutral => self.neutral,
            ParagonBucket::PrimaryEvil => self.primary_evil,
            ParagonBucket::OtherEvil => self.other_evil,
        }
    }

    pub fn add(&mut self, bucket: ParagonBucket, n: u32) {
        let slot = match bucket {
            ParagonBucket::PrimaryGood => &mut self.primary_good,
            ParagonBucket::OtherGood => &mut self.other_good,
            ParagonBucket::Neutral => &mut self.neutral,
            ParagonBucket::PrimaryEvil => &mut self.primary_evil,
            ParagonBucket::OtherEvil => &mut self.other_evil,
        };
        *slot = slot.saturating_add(n);
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        ParagonBucket::ALL
            .iter()
            .fold(0u32, |acc, b| acc.saturating_add(self.get(*b)))
    }
}

/// Quotas for one Paragon character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagonQuota {
    pub name: String,
    /// Primary Good brigade name. "Gold" matches Good Gold.
    pub primary_good: String,
    /// Primary Evil brigade name. "Gold" matches Evil Gold.
    pub primary_evil: String,
    pub quotas: BucketCounts,
}

impl ParagonQuota {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        primary_good: impl Into<String>,
        primary_evil: impl Into<String>,
        quotas: BucketCounts,
    ) -> Self {
        Self {
            name: name.into(),
            primary_good: primary_good.into(),
            primary_evil: primary_evil.into(),
            quotas,
        }
    }

    /// Bucket a card falls into, or `None` for Lost Souls.
    #[must_use]
    pub fn bucket_for(&self, card: &Card) -> Option<ParagonBucket> {
        if card.is_lost_soul() {
            return None;
        }
        let bucket = match card.alignment {
            Alignment::Good if card.brigades.contains_name(&self.primary_good) => {
                ParagonBucket::PrimaryGood
            }
            Alignment::Good => ParagonBucket::OtherGood,
            Alignment::Evil if card.brigades.contains_name(&self.primary_evil) => {
                ParagonBucket::PrimaryEvil
            }
            Alignment::Evil => ParagonBucket::OtherEvil,
            Alignment::Neutral | Alignment::GoodEvil | Alignment::Unspecified => ParagonBucket::Neutral,
        };
        Some(bucket)
    }

    /// Realized bucket counts for a deck (main deck and reserve).
    #[must_use]
    pub fn count(&self, deck: &Deck) -> BucketCounts {
        let mut counts = BucketCounts::default();
        for entry in deck.cards() {
            if let Some(bucket) = self.bucket_for(&entry.card) {
                counts.add(bucket, entry.quantity);
            }
        }
        counts
    }

    /// Compare a deck against this Paragon's quotas.
    ///
    /// Returns the realized counts and one error per mismatched bucket.
    #[must_use]
    pub fn check(&self, deck: &Deck) -> (BucketCounts, Vec<ValidationIssue>) {
        let counts = self.count(deck);
        let issues = ParagonBucket::ALL
            .iter()
            .filter(|b| counts.get(**b) != self.quotas.get(**b))
            .map(|&b| {
                let required = self.quotas.get(b);
                let actual = counts.get(b);
                ValidationIssue::error(
                    IssueCategory::Paragon,
                    format!(
                        "{} requires exactly {required} {}{} cards, found {actual}",
                        self.name,
                        b.label(),
                        self.brigade_suffix(b),
                    ),
                )
            })
            .collect();
        (counts, issues)
    }

    fn brigade_suffix(&self, bucket: ParagonBucket) -> String {
        match bucket {
            ParagonBucket::PrimaryGood => format!(" ({})", self.primary_good),
            ParagonBucket::PrimaryEvil => format!(" ({})", self.primary_evil),
            _ => String::new(),
        }
    }
}

/// Read-only table of known Paragons.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagonTable {
    entries: Vec<ParagonQuota>,
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl ParagonTable {
    /// Build a table from entries. Later duplicates of a name are ignored.
    #[must_use]
    pub fn new(entries: Vec<ParagonQuota>) -> Self {
        let mut index = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            index.entry(entry.name.to_lowercase()).or_insert(i);
        }
        Self { entries, index }
    }

    /// The built-in table.
    ///
    /// Not the official Paragon list: the rows are sample data whose quotas
    /// each total 50. Load the published table through serde for real
    /// legality checks.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN
                .iter()
                .map(|&(name, good, evil, q)| {
                    ParagonQuota::new(name, good, evil, BucketCounts::new(q[0], q[1], q[2], q[3], q[4]))
                })
                .collect(),
        )
    }

    /// Look up a Paragon by name (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParagonQuota> {
        let key = name.trim().to_lowercase();
        match self.index.get(&key) {
            Some(&i) => self.entries.get(i),
            // Deserialized tables have no index.
            None => self.entries.iter().find(|e| e.name.to_lowercase() == key),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParagonQuota> {
        self.entries.iter()
    }

    /// Check a Paragon-format deck.
    ///
    /// No Paragon selected is a warning; an unknown Paragon is an error.
    /// Otherwise every mismatched bucket is an error.
    #[must_use]
    pub fn check(&self, deck: &Deck) -> (Option<BucketCounts>, Vec<ValidationIssue>) {
        let Some(name) = deck.paragon.as_deref().filter(|n| !n.trim().is_empty()) else {
            return (
                None,
                vec![ValidationIssue::warning(
                    IssueCategory::Paragon,
                    "No Paragon selected; quotas cannot be checked",
                )],
            );
        };

        match self.get(name) {
            Some(quota) => {
                let (counts, issues) = quota.check(deck);
                (Some(counts), issues)
            }
            None => (
                None,
                vec![ValidationIssue::error(
                    IssueCategory::Paragon,
                    format!("Unknown Paragon: {name}"),
                )],
            ),
        }
    }
}

/// (name, primary Good brigade, primary Evil brigade,
///  [primary good, other good, neutral, primary evil, other evil])
///
/// Sample rows, not authoritative quotas.
type BuiltinRow = (&'static str, &'static str, &'static str, [u32; 5]);

const BUILTIN: &[BuiltinRow] = &[
    ("Aaron", "Purple", "Gray", [12, 12, 5, 11, 10]),
    ("Abigail", "White", "Brown", [13, 11, 5, 10, 11]),
    ("Abraham", "Blue", "Black", [12, 11, 6, 11, 10]),
    ("Barnabas", "Teal", "Pale Green", [14, 10, 5, 12, 9]),
    ("Boaz", "White", "Orange", [11, 13, 5, 10, 11]),
    ("Caleb", "Red", "Brown", [12, 12, 6, 10, 10]),
    ("Daniel", "Green", "Orange", [13, 12, 4, 11, 10]),
    ("David", "Red", "Gold", [12, 12, 5, 11, 10]),
    ("Deborah", "Clay", "Brown", [10, 13, 6, 11, 10]),
    ("Elijah", "Green", "Crimson", [13, 11, 5, 10, 11]),
    ("Elisha", "Green", "Black", [12, 11, 6, 11, 10]),
    ("Esther", "White", "Crimson", [14, 10, 5, 12, 9]),
    ("Ezra", "Purple", "Orange", [11, 13, 5, 10, 11]),
    ("Gideon", "Gold", "Pale Green", [12, 12, 6, 10, 10]),
    ("Hannah", "White", "Gray", [13, 12, 4, 11, 10]),
    ("Hezekiah", "Purple", "Crimson", [10, 13, 6, 11, 10]),
    ("Isaiah", "Green", "Crimson", [12, 12, 5, 11, 10]),
    ("Jacob", "Blue", "Gray", [13, 11, 5, 10, 11]),
    ("Jeremiah", "Green", "Orange", [12, 11, 6, 11, 10]),
    ("Job", "Blue", "Black", [14, 10, 5, 12, 9]),
    ("John", "Teal", "Pale Green", [11, 13, 5, 10, 11]),
    ("Jonathan", "Red", "Gold", [12, 12, 6, 10, 10]),
    ("Joseph", "Blue", "Gray", [13, 12, 4, 11, 10]),
    ("Joshua", "Gold", "Brown", [10, 13, 6, 11, 10]),
    ("Josiah", "Purple", "Gray", [12, 12, 5, 11, 10]),
    ("Lydia", "Teal", "Pale Green", [13, 11, 5, 10, 11]),
    ("Mary", "Clay", "Pale Green", [12, 11, 6, 11, 10]),
    ("Miriam", "Silver", "Gray", [14, 10, 5, 12, 9]),
    ("Moses", "Purple", "Black", [11, 13, 5, 10, 11]),
    ("Nehemiah", "Gold", "Orange", [12, 12, 6, 10, 10]),
    ("Noah", "Blue", "Black", [13, 12, 4, 11, 10]),
    ("Paul", "Teal", "Pale Green", [10, 13, 6, 11, 10]),
    ("Peter", "Clay", "Pale Green", [12, 12, 5, 11, 10]),
    ("Priscilla", "Teal", "Crimson", [13, 11, 5, 10, 11]),
    ("Ruth", "White", "Gold", [12, 11, 6, 11, 10]),
    ("Samuel", "Silver", "Brown", [14, 10, 5, 12, 9]),
    ("Solomon", "Purple", "Gold", [11, 13, 5, 10, 11]),
    ("Stephen", "Silver", "Pale Green", [12, 12, 6, 10, 10]),
];
