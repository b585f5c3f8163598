//! Catalog loading tests.
//!
//! Tests parsing, brigade normalization and testament tagging across a
//! whole catalog, including isolation of bad rows.

use redemption_deck::cards::{Brigade, BrigadeNormalizer, BrigadeOverrides, Catalog, EVIL_BRIGADES, GOOD_BRIGADES};
use redemption_deck::error::{BrigadeError, CatalogError};

const HEADER: &str = "Name\tSet\tImgFile\tOfficialSet\tType\tBrigade\tStrength\tToughness\tClass\tIdentifier\tSpecialAbility\tRarity\tReference\tUnused\tAlignment\tLegality";

fn row(name: &str, set: &str, card_type: &str, brigade: &str, reference: &str, alignment: &str) -> String {
    format!("{name}\t{set}\t{name}.jpg\t{set}\t{card_type}\t{brigade}\t5\t5\t\t\t\tCommon\t{reference}\t\t{alignment}\tRotation")
}

fn catalog_text(rows: &[String]) -> String {
    let mut text = String::from(HEADER);
    for r in rows {
        text.push('\n');
        text.push_str(r);
    }
    text.push('\n');
    text
}

/// Test a clean catalog loads every row with normalized brigades.
#[test]
fn test_load_clean_catalog() {
    let text = catalog_text(&[
        row("Moses", "Pa", "Hero", "Green", "Exodus 14:21", "Good"),
        row("Goliath", "Ki", "Evil Character", "Orange", "I Samuel 17:4", "Evil"),
        row("Angel of the Lord", "Pri", "Hero", "Multi", "Luke 2:9", "Good"),
        row("Golden Calf", "Pa", "Evil Character", "Gold", "Exodus 32:4", "Evil"),
    ]);

    let load = Catalog::load(&text, &BrigadeNormalizer::standard());
    assert!(load.faults.is_empty(), "{:?}", load.faults);
    assert_eq!(load.catalog.len(), 4);

    let angel = load.catalog.find_first("angel of the lord").unwrap();
    assert_eq!(angel.brigades.as_slice(), &GOOD_BRIGADES[..]);
    assert_eq!(angel.testament, "NT");
    assert!(angel.is_gospel);

    let calf = load.catalog.find("Golden Calf", "Pa").unwrap();
    assert_eq!(calf.brigades.as_slice(), &[Brigade::EvilGold]);

    let goliath = load.catalog.find_first("Goliath").unwrap();
    assert_eq!(goliath.testament, "OT");
    assert!(!goliath.is_gospel);
}

/// Test a bad brigade faults one row without blocking the others.
#[test]
fn test_bad_row_is_isolated() {
    let text = catalog_text(&[
        row("Moses", "Pa", "Hero", "Green", "", "Good"),
        row("Mystery", "Pa", "Hero", "Green/Plaid", "", "Good"),
        row("Goliath", "Ki", "Evil Character", "Orange", "", "Evil"),
    ]);

    let load = Catalog::load(&text, &BrigadeNormalizer::standard());
    assert_eq!(load.catalog.len(), 3);
    assert_eq!(load.faults.len(), 1);

    match &load.faults[0] {
        CatalogError::Row { line, source } => {
            assert_eq!(*line, 3);
            assert_eq!(
                source,
                &BrigadeError::InvalidBrigade {
                    card: "Mystery".to_string(),
                    token: "Plaid".to_string(),
                }
            );
        }
        other => panic!("unexpected fault {other:?}"),
    }

    let mystery = load.catalog.find_first("Mystery").unwrap();
    assert!(mystery.brigades.is_unresolved());
    assert_eq!(mystery.brigades.joined(), "Green/Plaid");

    let goliath = load.catalog.find_first("Goliath").unwrap();
    assert_eq!(goliath.brigades.as_slice(), &[Brigade::Orange]);
}

/// Test the Multi placeholder across alignments.
#[test]
fn test_multi_resolution() {
    let text = catalog_text(&[
        row("Good Multi", "S", "Hero", "Multi", "", "Good"),
        row("Evil Multi", "S", "Evil Character", "Multi", "", "Evil"),
        row("Neutral Multi", "S", "Artifact", "Multi", "", "Neutral"),
        row("Dual Multi", "S", "Site", "Multi/Multi", "", "Good/Evil"),
    ]);
    let catalog = Catalog::load(&text, &BrigadeNormalizer::standard()).catalog;

    let find = |name: &str| catalog.find_first(name).unwrap().brigades.as_slice().to_vec();
    assert_eq!(find("Good Multi"), GOOD_BRIGADES.to_vec());
    assert_eq!(find("Evil Multi"), EVIL_BRIGADES.to_vec());
    assert_eq!(find("Neutral Multi"), GOOD_BRIGADES.to_vec());

    let dual = find("Dual Multi");
    assert_eq!(dual.len(), 16);
    assert!(dual.windows(2).all(|w| w[0] < w[1]));
}

/// Test the Gold placeholder for Neutral cards.
#[test]
fn test_neutral_gold_resolution() {
    let text = catalog_text(&[
        row("Gold First", "S", "Site", "Gold/Green", "", "Neutral"),
        row("Gold Second", "S", "Site", "Green/Gold", "", "Neutral"),
        row("Unaligned Gold", "S", "Site", "Gold", "", ""),
    ]);
    let catalog = Catalog::load(&text, &BrigadeNormalizer::standard()).catalog;

    let first = catalog.find_first("Gold First").unwrap();
    assert_eq!(first.brigades.as_slice(), &[Brigade::GoodGold, Brigade::Green]);

    let second = catalog.find_first("Gold Second").unwrap();
    assert_eq!(second.brigades.as_slice(), &[Brigade::EvilGold, Brigade::Green]);

    let unaligned = catalog.find_first("Unaligned Gold").unwrap();
    assert_eq!(unaligned.brigades.as_slice(), &[Brigade::GoodGold]);
}

/// Test named overrides change the Gold and Multi defaults.
#[test]
fn test_named_overrides() {
    let text = catalog_text(&[
        row("Shared Treasure", "S", "Artifact", "Green/Gold", "", "Neutral"),
        row("Dark Banner", "S", "Artifact", "Multi", "", "Neutral"),
    ]);
    let overrides = BrigadeOverrides::none()
        .with_good_gold("Shared Treasure")
        .with_multi_side("Dark Banner", redemption_deck::cards::MultiSide::Evil);
    let catalog = Catalog::load(&text, &BrigadeNormalizer::new(overrides)).catalog;

    let treasure = catalog.find_first("Shared Treasure").unwrap();
    assert_eq!(treasure.brigades.as_slice(), &[Brigade::GoodGold, Brigade::Green]);

    let banner = catalog.find_first("Dark Banner").unwrap();
    assert_eq!(banner.brigades.as_slice(), &EVIL_BRIGADES[..]);
}

/// Test short rows, blank lines and smart apostrophes in lookups.
#[test]
fn test_short_rows_and_lookup() {
    let text = format!("{HEADER}\n\nSolomon's Temple\tKi\n   \nNoah\tPa\t\t\tHero\tBlue\n");
    let load = Catalog::load(&text, &BrigadeNormalizer::standard());
    assert!(load.faults.is_empty());
    assert_eq!(load.catalog.len(), 2);

    let temple = load.catalog.find_first("Solomon\u{2019}s Temple").unwrap();
    assert_eq!(temple.set, "Ki");
    assert!(temple.card_type.is_empty());
    assert!(temple.brigades.is_empty());
    assert_eq!(temple.testament, "");
}

/// Test a snapshot restores the same lookups.
#[test]
fn test_snapshot_round_trip() {
    let text = catalog_text(&[
        row("Moses", "Pa", "Hero", "Green", "Exodus 14:21", "Good"),
        row("Moses", "Pri", "Hero", "Green", "Exodus 14:21", "Good"),
    ]);
    let catalog = Catalog::load(&text, &BrigadeNormalizer::standard()).catalog;

    let bytes = catalog.to_bytes().unwrap();
    let restored = Catalog::from_bytes(&bytes).unwrap();
    assert_eq!(restored.len(), 2);
    assert_eq!(restored.find_by_name("moses").count(), 2);
    assert_eq!(restored.find("Moses", "Pri").unwrap().set, "Pri");
}
