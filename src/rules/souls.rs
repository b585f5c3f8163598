//! Lost Soul requirement table.
//!
//! A 50-56 card main deck needs 7 Lost Souls, and every further full band of
//! 7 cards adds one more, up to 35 at 246-252 cards. Past the table the
//! requirement is `ceil((size - 50) / 7) + 7`. The same number caps the
//! Dominant total in Type 1 and Type 2.

/// Smallest deck size in the table.
pub const TABLE_MIN: u32 = 50;

/// Largest deck size in the table.
pub const TABLE_MAX: u32 = 252;

/// Cards per band.
pub const BAND: u32 = 7;

/// Requirement for the smallest band.
pub const BASE_REQUIREMENT: u32 = 7;

/// Lost Souls required for a main deck of `size` cards.
///
/// Sizes below the table return the base requirement.
///
/// ```
/// use redemption_deck::rules::required_lost_souls;
///
/// assert_eq!(required_lost_souls(50), 7);
/// assert_eq!(required_lost_souls(57), 8);
/// assert_eq!(required_lost_souls(252), 35);
/// ```
#[must_use]
pub fn required_lost_souls(size: u32) -> u32 {
    if size <= TABLE_MIN {
        BASE_REQUIREMENT
    } else if size <= TABLE_MAX {
        BASE_REQUIREMENT + (size - TABLE_MIN) / BAND
    } else {
        BASE_REQUIREMENT + (size - TABLE_MIN).div_ceil(BAND)
    }
}
