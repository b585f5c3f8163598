//! Catalog load and deck validation benchmarks.
//!
//! Measures normalizing a synthetic catalog at a few sizes, restoring it
//! from a snapshot, and validating a deck drawn from it.
//!
//! Run with: `cargo bench --bench catalog`

use std::fmt::Write as _;
use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use redemption_deck::cards::{BrigadeNormalizer, Catalog};
use redemption_deck::deck::{Deck, DeckFormat};
use redemption_deck::rules::DeckValidator;

const HEADER: &str = "Name\tSet\tImgFile\tOfficialSet\tType\tBrigade\tStrength\tToughness\tClass\tIdentifier\tSpecialAbility\tRarity\tReference\tUnused\tAlignment\tLegality";

const BRIGADES: [(&str, &str, &str); 6] = [
    ("Hero", "Blue/Green", "Good"),
    ("Hero", "Multi", "Good"),
    ("Evil Character", "Gold", "Evil"),
    ("Evil Character", "Crimson (Black/Gray)", "Evil"),
    ("Site", "Gold/Green", "Neutral"),
    ("Lost Soul", "", ""),
];

const REFERENCES: [&str; 4] = [
    "Genesis 12:1",
    "Matthew 5:1; John 3:16",
    "I Kings 18:38 (Hebrews 11:32)",
    "Revelation 12:9",
];

fn synthetic_catalog(rows: usize) -> String {
    let mut text = String::from(HEADER);
    for i in 0..rows {
        let (card_type, brigade, alignment) = BRIGADES[i % BRIGADES.len()];
        let reference = REFERENCES[i % REFERENCES.len()];
        let _ = write!(
            text,
            "\nCard {i}\tS{}\tcard{i}\tSet {}\t{card_type}\t{brigade}\t5\t5\t\t\tAbility {i}\tCommon\t{reference}\t\t{alignment}\tRotation",
            i % 20,
            i % 20
        );
    }
    text
}

fn bench_catalog_load(c: &mut Criterion) {
    let normalizer = BrigadeNormalizer::standard();
    let mut group = c.benchmark_group("catalog_load");
    for rows in [1_000, 5_000, 20_000] {
        let text = synthetic_catalog(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &text, |b, text| {
            b.iter(|| Catalog::load(black_box(text), &normalizer));
        });
    }
    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let catalog = Catalog::load(&synthetic_catalog(5_000), &BrigadeNormalizer::standard()).catalog;
    let Ok(bytes) = catalog.to_bytes() else {
        return;
    };
    c.bench_function("catalog_from_bytes_5000", |b| {
        b.iter(|| Catalog::from_bytes(black_box(&bytes)));
    });
}

fn bench_validate(c: &mut Criterion) {
    let catalog = Catalog::load(&synthetic_catalog(1_000), &BrigadeNormalizer::standard()).catalog;
    let mut deck = Deck::new("Bench", DeckFormat::Type2);
    for card in catalog.iter().take(150) {
        deck.add_card(Arc::clone(card), 1, false);
    }
    let validator = DeckValidator::standard();
    c.bench_function("validate_type2_150", |b| {
        b.iter(|| validator.validate(black_box(&deck)));
    });
}

criterion_group!(benches, bench_catalog_load, bench_snapshot, bench_validate);
criterion_main!(benches);
