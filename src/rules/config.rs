//! Validator configuration.
//!
//! Each format has a `FormatRules` record with its size bounds, reserve cap
//! and Lost Soul / Dominant policy. `ValidatorConfig::default()` gives the
//! published construction rules; hosts may deserialize a variant.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::DeckFormat;

/// How the total number of Dominants is capped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DominantCap {
    /// Same deck-size-indexed number as the Lost Soul requirement.
    SoulBudget,
    /// Fixed maximum.
    Flat(u32),
}

/// Construction rules for one format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRules {
    /// Minimum main deck size.
    pub min_main: u32,

    /// Maximum main deck size.
    pub max_main: u32,

    /// Maximum reserve size.
    pub max_reserve: u32,

    /// May the deck contain Lost Souls at all?
    pub lost_souls_allowed: bool,

    /// Copy limit for Lost Souls with special ability text.
    /// `None` = no limit.
    pub lost_soul_copy_limit: Option<u32>,

    /// Cap on Dominants across main deck and reserve.
    pub dominant_cap: DominantCap,

    /// Must Good and Evil card counts match in each zone?
    pub alignment_parity: bool,

    /// Are Paragon bucket quotas enforced?
    pub paragon_quotas: bool,
}

impl FormatRules {
    /// Type 1: 50-154 cards, reserve 10, unique ability Lost Souls.
    #[must_use]
    pub fn type1() -> Self {
        Self {
            min_main: 50,
            max_main: 154,
            max_reserve: 10,
            lost_souls_allowed: true,
            lost_soul_copy_limit: Some(1),
            dominant_cap: DominantCap::SoulBudget,
            alignment_parity: false,
            paragon_quotas: false,
        }
    }

    /// Type 2: 100-252 cards, reserve 15, Good/Evil parity.
    #[must_use]
    pub fn type2() -> Self {
        Self {
            min_main: 100,
            max_main: 252,
            max_reserve: 15,
            lost_souls_allowed: true,
            lost_soul_copy_limit: Some(2),
            dominant_cap: DominantCap::SoulBudget,
            alignment_parity: true,
            paragon_quotas: false,
        }
    }

    /// Paragon: exactly 40 cards, reserve 10, no Lost Souls, 7 Dominants.
    #[must_use]
    pub fn paragon() -> Self {
        Self {
            min_main: 40,
            max_main: 40,
            max_reserve: 10,
            lost_souls_allowed: false,
            lost_soul_copy_limit: None,
            dominant_cap: DominantCap::Flat(7),
            alignment_parity: false,
            paragon_quotas: true,
        }
    }

    /// Set the main deck bounds.
    #[must_use]
    pub fn with_main_bounds(mut self, min: u32, max: u32) -> Self {
        self.min_main = min;
        self.max_main = max;
        self
    }

    /// Set the reserve cap.
    #[must_use]
    pub fn with_max_reserve(mut self, max: u32) -> Self {
        self.max_reserve = max;
        self
    }

    /// Set the Dominant cap.
    #[must_use]
    pub fn with_dominant_cap(mut self, cap: DominantCap) -> Self {
        self.dominant_cap = cap;
        self
    }
}

/// Lost Souls excluded from the requirement count.
///
/// A card is exempt if its name contains one of `name_substrings`
/// (case-insensitive), its reference contains one of `references`, or its
/// name is listed exactly in `names`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopperExemption {
    pub name_substrings: Vec<String>,
    pub references: Vec<String>,
    pub names: Vec<String>,
}

impl Default for HopperExemption {
    fn default() -> Self {
        Self {
            name_substrings: vec!["hopper".to_string()],
            references: vec!["II Chronicles 28:13".to_string()],
            names: Vec::new(),
        }
    }
}

impl HopperExemption {
    /// Only cards named exactly in `names` are exempt.
    #[must_use]
    pub fn explicit(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name_substrings: Vec::new(),
            references: Vec::new(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Is this Lost Soul excluded from the requirement count?
    #[must_use]
    pub fn is_exempt(&self, card: &Card) -> bool {
        if !card.is_lost_soul() {
            return false;
        }
        let name = card.name.to_lowercase();
        self.names.iter().any(|n| n.eq_ignore_ascii_case(card.name.trim()))
            || self
                .name_substrings
                .iter()
                .any(|s| name.contains(&s.to_lowercase()))
            || self.references.iter().any(|r| card.reference.contains(r.as_str()))
    }
}

/// Full validator configuration.
///
/// ## Example
///
/// ```
/// use redemption_deck::deck::DeckFormat;
/// use redemption_deck::rules::ValidatorConfig;
///
/// let config = ValidatorConfig::default();
/// assert_eq!(config.rules_for(DeckFormat::Type2).max_reserve, 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    pub type1: FormatRules,
    pub type2: FormatRules,
    pub paragon: FormatRules,
    #[serde(default)]
    pub hopper: HopperExemption,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            type1: FormatRules::type1(),
            type2: FormatRules::type2(),
            paragon: FormatRules::paragon(),
            hopper: HopperExemption::default(),
        }
    }
}

impl ValidatorConfig {
    /// Rules for a format.
    #[must_use]
    pub fn rules_for(&self, format: DeckFormat) -> &FormatRules {
        match format {
            DeckFormat::Type1 => &self.type1,
            DeckFormat::Type2 => &self.type2,
            DeckFormat::Paragon => &self.paragon,
        }
    }

    /// Replace the rules for one format.
    #[must_use]
    pub fn with_rules(mut self, format: DeckFormat, rules: FormatRules) -> Self {
        match format {
            DeckFormat::Type1 => self.type1 = rules,
            DeckFormat::Type2 => self.type2 = rules,
            DeckFormat::Paragon => self.paragon = rules,
        }
        self
    }

    /// Replace the Hopper exemption list.
    #[must_use]
    pub fn with_hopper(mut self, hopper: HopperExemption) -> Self {
        self.hopper = hopper;
        self
    }
}
