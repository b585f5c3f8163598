//! Testament and Gospel classification from scripture references.
//!
//! References look like "Genesis 12:1", "I Kings 18:38",
//! "Matthew 4:1; Luke 4:1" or "Judges 16:30 (Hebrews 11:32, 34)".
//! Each component reference is matched on its book name; the result feeds
//! display and filtering only.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// One half of the canon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Testament {
    #[serde(rename = "OT")]
    Old,
    #[serde(rename = "NT")]
    New,
}

impl Testament {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Testament::Old => "OT",
            Testament::New => "NT",
        }
    }
}

/// Books of the Old Testament, lowercase.
const OLD_TESTAMENT: &[&str] = &[
    "genesis", "exodus", "leviticus", "numbers", "deuteronomy", "joshua", "judges", "ruth",
    "samuel", "kings", "chronicles", "ezra", "nehemiah", "esther", "job", "psalms", "proverbs",
    "ecclesiastes", "song of solomon", "isaiah", "jeremiah", "lamentations", "ezekiel",
    "daniel", "hosea", "joel", "amos", "obadiah", "jonah", "micah", "nahum", "habakkuk",
    "zephaniah", "haggai", "zechariah", "malachi",
];

/// Books of the New Testament, lowercase.
const NEW_TESTAMENT: &[&str] = &[
    "matthew", "mark", "luke", "john", "acts", "romans", "corinthians", "galatians",
    "ephesians", "philippians", "colossians", "thessalonians", "timothy", "titus", "philemon",
    "hebrews", "james", "peter", "jude", "revelation",
];

const GOSPELS: &[&str] = &["matthew", "mark", "luke", "john"];

/// Leading ordinals on numbered books ("I Kings", "2 Samuel", "First John").
const ORDINALS: &[&str] = &[
    "i", "ii", "iii", "1", "2", "3", "1st", "2nd", "3rd", "one", "two", "three", "first",
    "second", "third",
];

/// Classification of a card's reference field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestamentInfo {
    /// Matched testaments, sorted, de-duplicated.
    pub testaments: Vec<Testament>,
    /// Does any component reference come from a Gospel?
    pub is_gospel: bool,
}

impl TestamentInfo {
    /// Stored form: "", "OT", "NT" or "OT/NT".
    #[must_use]
    pub fn joined(&self) -> String {
        self.testaments
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Split a reference field into independent component references.
///
/// Segments are separated by `;`. A segment with a parenthetical yields the
/// text before `(` plus each comma-separated item inside it.
#[must_use]
pub fn split_references(reference: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    for segment in reference.split(';') {
        match segment.find('(') {
            Some(open) => {
                parts.push(segment[..open].trim());
                let inner = &segment[open + 1..];
                let inner = inner.split(')').next().unwrap_or(inner);
                parts.extend(inner.split(',').map(str::trim));
            }
            None => parts.push(segment.trim()),
        }
    }
    parts.retain(|p| !p.is_empty());
    parts
}

/// Normalize a word for book matching: lowercase, trailing '.' removed.
fn normalize_word(word: &str) -> String {
    word.trim_end_matches('.').to_ascii_lowercase()
}

/// The book word of a reference, skipping a leading ordinal.
fn book_word(reference: &str) -> Option<String> {
    let mut words = reference.split_whitespace();
    let first = normalize_word(words.next()?);
    if ORDINALS.contains(&first.as_str()) {
        words.next().map(normalize_word)
    } else {
        Some(first)
    }
}

/// Does the book word name a book in `books`?
///
/// Exact first-word matches win; otherwise the word must be a prefix of a
/// book's first word (abbreviations like "Gen" or "Matt").
fn match_book(word: &str, books: &[&str]) -> bool {
    if word.len() < 2 {
        return false;
    }
    books.iter().any(|book| {
        let head = book.split_whitespace().next().unwrap_or(book);
        head == word || head.starts_with(word)
    })
}

/// Which testament does a single reference belong to?
#[must_use]
pub fn testament_of(reference: &str) -> Option<Testament> {
    let word = book_word(reference)?;
    // Exact names win over prefix matches.
    if OLD_TESTAMENT.iter().any(|b| b.split_whitespace().next() == Some(word.as_str())) {
        return Some(Testament::Old);
    }
    if NEW_TESTAMENT.iter().any(|b| b.split_whitespace().next() == Some(word.as_str())) {
        return Some(Testament::New);
    }
    if match_book(&word, OLD_TESTAMENT) {
        Some(Testament::Old)
    } else if match_book(&word, NEW_TESTAMENT) {
        Some(Testament::New)
    } else {
        None
    }
}

/// Is the reference from a Gospel?
///
/// Only the literal first word counts, so "I John" is not a Gospel.
#[must_use]
pub fn is_gospel_reference(reference: &str) -> bool {
    reference
        .split_whitespace()
        .next()
        .map(normalize_word)
        .is_some_and(|word| GOSPELS.contains(&word.as_str()))
}

/// Classify a full reference field.
///
/// ```
/// use redemption_deck::cards::{classify_reference, Testament};
///
/// let info = classify_reference("Exodus 14:21; Matthew 17:3");
/// assert_eq!(info.testaments, vec![Testament::Old, Testament::New]);
/// assert!(info.is_gospel);
/// assert_eq!(info.joined(), "OT/NT");
/// ```
#[must_use]
pub fn classify_reference(reference: &str) -> TestamentInfo {
    let parts = split_references(reference);
    let found: FxHashSet<Testament> = parts.iter().filter_map(|p| testament_of(p)).collect();
    let mut testaments: Vec<Testament> = found.into_iter().collect();
    testaments.sort_unstable();

    TestamentInfo {
        testaments,
        is_gospel: parts.iter().any(|p| is_gospel_reference(p)),
    }
}
