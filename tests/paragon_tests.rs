//! Paragon format tests.
//!
//! Tests quota compliance against a 12/12/5/11/10 Paragon across main deck
//! and reserve, plus the format's Lost Soul and Dominant rules.

use std::sync::Arc;

use redemption_deck::cards::{Alignment, Brigade, Brigades, Card};
use redemption_deck::deck::{Deck, DeckFormat};
use redemption_deck::rules::{
    validate_deck, BucketCounts, DeckValidator, IssueCategory, ParagonQuota, ParagonTable, Severity,
    ValidatorConfig,
};

fn card(name: &str, card_type: &str, alignment: Alignment, brigade: Option<Brigade>) -> Arc<Card> {
    let brigades = brigade.map_or_else(Brigades::default, |b| Brigades::resolved([b]));
    Arc::new(
        Card::new(name, "Par")
            .with_type(card_type)
            .with_alignment(alignment)
            .with_brigades(brigades),
    )
}

/// Deck for Aaron (Purple / Gray): 12 Purple, 12 Blue, 5 Neutral, 11 Gray,
/// 10 Black. The Black cards sit in the reserve, leaving a 40-card main deck.
fn aaron_deck() -> Deck {
    let mut deck = Deck::new("Aaron", DeckFormat::Paragon).with_paragon("Aaron");
    for i in 0..12 {
        deck.add_card(card(&format!("Purple {i}"), "Hero", Alignment::Good, Some(Brigade::Purple)), 1, false);
        deck.add_card(card(&format!("Blue {i}"), "Hero", Alignment::Good, Some(Brigade::Blue)), 1, false);
    }
    for i in 0..5 {
        deck.add_card(card(&format!("Site {i}"), "Site", Alignment::Neutral, None), 1, false);
    }
    for i in 0..11 {
        deck.add_card(card(&format!("Gray {i}"), "Evil Character", Alignment::Evil, Some(Brigade::Gray)), 1, false);
    }
    for i in 0..10 {
        deck.add_card(card(&format!("Black {i}"), "Evil Character", Alignment::Evil, Some(Brigade::Black)), 1, true);
    }
    deck
}

/// Test an exact quota match produces no Paragon errors.
#[test]
fn test_exact_quotas() {
    let deck = aaron_deck();
    let report = validate_deck(&deck);

    assert!(report.is_valid, "{:?}", report.issues);
    assert_eq!(report.stats.main_deck_size, 40);
    assert_eq!(report.stats.reserve_size, 10);
    assert_eq!(report.stats.paragon_buckets, Some(BucketCounts::new(12, 12, 5, 11, 10)));
    assert_eq!(report.stats.required_lost_souls, None);
}

/// Test changing any single bucket by one gives exactly one Paragon error.
#[test]
fn test_single_bucket_off_by_one() {
    let extras = [
        card("Extra Purple", "Hero", Alignment::Good, Some(Brigade::Purple)),
        card("Extra Blue", "Hero", Alignment::Good, Some(Brigade::Blue)),
        card("Extra Site", "Site", Alignment::GoodEvil, None),
        card("Extra Gray", "Evil Character", Alignment::Evil, Some(Brigade::Gray)),
        card("Extra Black", "Evil Character", Alignment::Evil, Some(Brigade::Black)),
    ];
    for extra in extras {
        let mut deck = aaron_deck();
        deck.add_card(Arc::clone(&extra), 1, false);
        let report = validate_deck(&deck);
        let paragon: Vec<_> = report.by_category(IssueCategory::Paragon).collect();
        assert_eq!(paragon.len(), 1, "adding {}: {paragon:?}", extra.name);
        assert!(paragon[0].is_error());
    }

    let removals = [
        ("Purple 0", false),
        ("Blue 0", false),
        ("Site 0", false),
        ("Gray 0", false),
        ("Black 0", true),
    ];
    for (name, is_reserve) in removals {
        let mut deck = aaron_deck();
        assert_eq!(deck.remove_card(&Card::new(name, "Par").key(), 1, is_reserve), 1);
        let report = validate_deck(&deck);
        let paragon: Vec<_> = report.by_category(IssueCategory::Paragon).collect();
        assert_eq!(paragon.len(), 1, "removing {name}: {paragon:?}");
    }
}

/// Test the error names the bucket and both counts.
#[test]
fn test_quota_message() {
    let mut deck = aaron_deck();
    deck.remove_card(&Card::new("Gray 0", "Par").key(), 1, false);
    let report = validate_deck(&deck);
    let paragon: Vec<_> = report.by_category(IssueCategory::Paragon).collect();
    assert_eq!(
        paragon[0].message,
        "Aaron requires exactly 11 primary Evil (Gray) cards, found 10"
    );
}

/// Test Lost Souls are forbidden and never counted into buckets.
#[test]
fn test_lost_souls_forbidden() {
    let mut deck = aaron_deck();
    deck.add_card(card("Lost Soul", "Lost Soul", Alignment::Neutral, None), 2, false);

    let report = validate_deck(&deck);
    let souls: Vec<_> = report.by_category(IssueCategory::Souls).collect();
    assert_eq!(souls.len(), 1);
    assert!(souls[0].message.contains("cannot contain Lost Souls"));
    assert_eq!(report.stats.paragon_buckets, Some(BucketCounts::new(12, 12, 5, 11, 10)));
}

/// Test the flat Dominant cap of 7.
#[test]
fn test_dominant_cap() {
    let mut deck = Deck::new("Dominants", DeckFormat::Paragon).with_paragon("Aaron");
    for i in 0..8 {
        deck.add_card(card(&format!("Dominant {i}"), "Dominant", Alignment::Good, None), 1, false);
    }
    let report = validate_deck(&deck);
    let doms: Vec<_> = report.by_category(IssueCategory::Dominants).collect();
    assert_eq!(doms.len(), 1);
    assert!(doms[0].message.contains("at most 7"));
}

/// Test missing and unknown Paragons.
#[test]
fn test_missing_and_unknown_paragon() {
    let mut deck = aaron_deck();
    deck.paragon = None;
    let report = validate_deck(&deck);
    let paragon: Vec<_> = report.by_category(IssueCategory::Paragon).collect();
    assert_eq!(paragon.len(), 1);
    assert_eq!(paragon[0].severity, Severity::Warning);
    assert!(report.is_valid);

    deck.paragon = Some("Nobody".to_string());
    let report = validate_deck(&deck);
    assert!(!report.is_valid);
    assert!(report.errors().any(|i| i.message.contains("Unknown Paragon")));
}

/// Test a custom table with a Gold primary brigade.
#[test]
fn test_custom_table_gold_primary() {
    let table = ParagonTable::new(vec![ParagonQuota::new(
        "Tester",
        "Gold",
        "Gold",
        BucketCounts::new(1, 0, 0, 1, 0),
    )]);
    let validator = DeckValidator::new(ValidatorConfig::default(), table);

    let mut deck = Deck::new("Gold", DeckFormat::Paragon).with_paragon("tester");
    deck.add_card(card("Good Gold", "Hero", Alignment::Good, Some(Brigade::GoodGold)), 1, false);
    deck.add_card(card("Evil Gold", "Evil Character", Alignment::Evil, Some(Brigade::EvilGold)), 1, false);

    let report = validator.validate(&deck);
    assert_eq!(report.by_category(IssueCategory::Paragon).count(), 0);
    assert_eq!(report.stats.paragon_buckets, Some(BucketCounts::new(1, 0, 0, 1, 0)));
}
