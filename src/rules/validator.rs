//! Deck validator.
//!
//! `DeckValidator::validate` is a pure function of the deck: it evaluates
//! every construction rule, collects all violations, and never stops at
//! the first one.
//!
//! ## Rules
//!
//! 1. Main deck size within the format's bounds.
//! 2. Lost Soul requirement (or, in Paragon, no Lost Souls at all).
//! 3. Reserve size cap.
//! 4. No Dominants or Lost Souls in the reserve.
//! 5. One copy per Dominant.
//! 6. Dominant total cap.
//! 7. Good/Evil parity per zone (Type 2).
//! 8. Copy limits for Lost Souls with special abilities.
//! 9. Paragon bucket quotas (Paragon).

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::config::{DominantCap, FormatRules, ValidatorConfig};
use super::issue::{AlignmentCounts, DeckStats, IssueCategory, ValidationIssue, ValidationReport};
use super::paragon::ParagonTable;
use super::souls::required_lost_souls;
use crate::cards::{Alignment, Card};
use crate::deck::{Deck, DeckCard};

/// Validates decks against a configuration and a Paragon table.
///
/// ## Example
///
/// ```
/// use redemption_deck::deck::{Deck, DeckFormat};
/// use redemption_deck::rules::DeckValidator;
///
/// let report = DeckValidator::standard().validate(&Deck::new("Empty", DeckFormat::Type1));
/// assert!(!report.is_valid);
/// assert_eq!(report.stats.main_deck_size, 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DeckValidator {
    config: ValidatorConfig,
    paragons: ParagonTable,
}

impl DeckValidator {
    #[must_use]
    pub fn new(config: ValidatorConfig, paragons: ParagonTable) -> Self {
        Self { config, paragons }
    }

    /// Default rules and the built-in Paragon table.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(ValidatorConfig::default(), ParagonTable::builtin())
    }

    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    #[must_use]
    pub fn paragons(&self) -> &ParagonTable {
        &self.paragons
    }

    /// Validate a deck.
    #[must_use]
    pub fn validate(&self, deck: &Deck) -> ValidationReport {
        let rules = self.config.rules_for(deck.format);
        let mut stats = self.collect_stats(deck, rules);
        let mut issues = Vec::new();

        if deck.is_empty() {
            issues.push(ValidationIssue::info(IssueCategory::General, "Deck is empty"));
        }

        check_size(deck, rules, &stats, &mut issues);
        self.check_lost_souls(deck, rules, &stats, &mut issues);
        check_reserve(deck, rules, &stats, &mut issues);
        check_dominants(deck, rules, &stats, &mut issues);
        if rules.alignment_parity {
            check_parity("Main deck", stats.main_alignment, &mut issues);
            check_parity("Reserve", stats.reserve_alignment, &mut issues);
        }
        check_soul_copies(deck, rules, &mut issues);

        if rules.paragon_quotas {
            let (buckets, paragon_issues) = self.paragons.check(deck);
            stats.paragon_buckets = buckets;
            issues.extend(paragon_issues);
        }

        let report = ValidationReport::new(issues, stats);
        tracing::debug!(
            deck = %deck.name,
            format = %deck.format,
            main = report.stats.main_deck_size,
            reserve = report.stats.reserve_size,
            errors = report.errors().count(),
            "deck validated"
        );
        report
    }

    fn collect_stats(&self, deck: &Deck, rules: &FormatRules) -> DeckStats {
        let mut stats = DeckStats::default();
        for entry in deck.cards() {
            let card = &entry.card;
            let qty = entry.quantity;
            let zone = if entry.is_reserve {
                stats.reserve_size = stats.reserve_size.saturating_add(qty);
                &mut stats.reserve_alignment
            } else {
                stats.main_deck_size = stats.main_deck_size.saturating_add(qty);
                &mut stats.main_alignment
            };
            let slot = match card.alignment {
                Alignment::Good => &mut zone.good,
                Alignment::Evil => &mut zone.evil,
                Alignment::Neutral | Alignment::GoodEvil | Alignment::Unspecified => &mut zone.other,
            };
            *slot = slot.saturating_add(qty);

            if !entry.is_reserve && card.is_lost_soul() && !self.config.hopper.is_exempt(card) {
                stats.main_deck_lost_souls = stats.main_deck_lost_souls.saturating_add(qty);
            }
            if card.is_dominant() {
                stats.dominant_count = stats.dominant_count.saturating_add(qty);
            }
        }

        if rules.lost_souls_allowed && stats.main_deck_size >= rules.min_main {
            stats.required_lost_souls = Some(required_lost_souls(stats.main_deck_size));
        }
        stats
    }

    fn check_lost_souls(
        &self,
        deck: &Deck,
        rules: &FormatRules,
        stats: &DeckStats,
        issues: &mut Vec<ValidationIssue>,
    ) {
        if !rules.lost_souls_allowed {
            let found: u32 = deck
                .cards()
                .filter(|e| e.card.is_lost_soul())
                .fold(0u32, |acc, e| acc.saturating_add(e.quantity));
            if found > 0 {
                issues.push(ValidationIssue::error(
                    IssueCategory::Souls,
                    format!("{} decks cannot contain Lost Souls ({found} found)", deck.format),
                ));
            }
            return;
        }

        let Some(required) = stats.required_lost_souls else {
            return;
        };
        let have = stats.main_deck_lost_souls;
        if have < required {
            issues.push(ValidationIssue::error(
                IssueCategory::Souls,
                format!(
                    "Main deck has {have} Lost Souls but {} cards require {required} (deficit of {})",
                    stats.main_deck_size,
                    required - have
                ),
            ));
        } else if have > required {
            issues.push(ValidationIssue::error(
                IssueCategory::Souls,
                format!(
                    "Main deck has {have} Lost Souls but {} cards require {required} (surplus of {})",
                    stats.main_deck_size,
                    have - required
                ),
            ));
        }
    }
}

fn check_size(deck: &Deck, rules: &FormatRules, stats: &DeckStats, issues: &mut Vec<ValidationIssue>) {
    let size = stats.main_deck_size;
    let bounds = if rules.min_main == rules.max_main {
        format!("exactly {}", rules.min_main)
    } else {
        format!("{}-{}", rules.min_main, rules.max_main)
    };

    if size < rules.min_main {
        issues.push(ValidationIssue::error(
            IssueCategory::Size,
            format!(
                "Main deck is too small: {size} cards ({} requires {bounds})",
                deck.format
            ),
        ));
    } else if size > rules.max_main {
        issues.push(ValidationIssue::error(
            IssueCategory::Size,
            format!(
                "Main deck is too large: {size} cards ({} requires {bounds})",
                deck.format
            ),
        ));
    }
}

fn check_reserve(deck: &Deck, rules: &FormatRules, stats: &DeckStats, issues: &mut Vec<ValidationIssue>) {
    if stats.reserve_size > rules.max_reserve {
        issues.push(ValidationIssue::error(
            IssueCategory::Reserve,
            format!(
                "Reserve has {} cards; {} allows at most {}",
                stats.reserve_size, deck.format, rules.max_reserve
            ),
        ));
    }

    for entry in deck.reserve() {
        if entry.card.is_dominant() {
            issues.push(ValidationIssue::error(
                IssueCategory::Reserve,
                format!("Dominant {} cannot be in the Reserve", entry.card.name),
            ));
        }
        if entry.card.is_lost_soul() {
            issues.push(ValidationIssue::error(
                IssueCategory::Reserve,
                format!("Lost Soul {} cannot be in the Reserve", entry.card.name),
            ));
        }
    }
}

/// Sum quantities by case-insensitive card name, keeping first-seen order.
fn count_by_name<'a>(entries: impl Iterator<Item = &'a DeckCard>) -> Vec<(&'a Card, u32)> {
    let mut order: Vec<(&'a Card, u32)> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    for entry in entries {
        let key = entry.card.name.trim().to_lowercase();
        match index.get(&key) {
            Some(&i) => order[i].1 = order[i].1.saturating_add(entry.quantity),
            None => {
                index.insert(key, order.len());
                order.push((&entry.card, entry.quantity));
            }
        }
    }
    order
}

fn check_dominants(deck: &Deck, rules: &FormatRules, stats: &DeckStats, issues: &mut Vec<ValidationIssue>) {
    // One error per excess copy, bounded by the largest legal deck.
    let report_cap = rules.max_main.saturating_add(rules.max_reserve);
    for (card, count) in count_by_name(deck.cards().filter(|e| e.card.is_dominant())) {
        let excess = count.saturating_sub(1).min(report_cap);
        for copy in 2..excess.saturating_add(2) {
            issues.push(ValidationIssue::error(
                IssueCategory::Dominants,
                format!(
                    "Only one copy of Dominant {} is allowed (copy {copy} of {count})",
                    card.name
                ),
            ));
        }
    }

    let cap = match rules.dominant_cap {
        DominantCap::Flat(cap) => Some(cap),
        DominantCap::SoulBudget => {
            (stats.main_deck_size >= rules.min_main).then(|| required_lost_souls(stats.main_deck_size))
        }
    };
    if let Some(cap) = cap {
        if stats.dominant_count > cap {
            issues.push(ValidationIssue::error(
                IssueCategory::Dominants,
                format!(
                    "Deck has {} Dominants; at most {cap} allowed",
                    stats.dominant_count
                ),
            ));
        }
    }
}

fn check_parity(zone: &str, counts: AlignmentCounts, issues: &mut Vec<ValidationIssue>) {
    let (more, fewer, diff) = match counts.good.cmp(&counts.evil) {
        std::cmp::Ordering::Equal => return,
        std::cmp::Ordering::Greater => ("Evil", "Good", counts.good - counts.evil),
        std::cmp::Ordering::Less => ("Good", "Evil", counts.evil - counts.good),
    };
    issues.push(ValidationIssue::error(
        IssueCategory::Format,
        format!(
            "{zone} needs {diff} more {more} cards to match {fewer} ({} Good, {} Evil)",
            counts.good, counts.evil
        ),
    ));
}

fn check_soul_copies(deck: &Deck, rules: &FormatRules, issues: &mut Vec<ValidationIssue>) {
    let Some(limit) = rules.lost_soul_copy_limit else {
        return;
    };
    let souls = deck
        .cards()
        .filter(|e| e.card.is_lost_soul() && e.card.has_special_ability());
    for (card, count) in count_by_name(souls) {
        if count > limit {
            let rule = if limit == 1 {
                "must be unique".to_string()
            } else {
                format!("is limited to {limit} copies")
            };
            issues.push(ValidationIssue::error(
                IssueCategory::Souls,
                format!("Lost Soul {} {rule} in {} ({count} found)", card.name, deck.format),
            ));
        }
    }
}

/// Validate with the default rules and built-in Paragon table.
#[must_use]
pub fn validate_deck(deck: &Deck) -> ValidationReport {
    static STANDARD: OnceLock<DeckValidator> = OnceLock::new();
    STANDARD.get_or_init(DeckValidator::standard).validate(deck)
}
