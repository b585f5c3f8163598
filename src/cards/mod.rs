//! Card system: records, brigades, and the catalog.
//!
//! ## Key Types
//!
//! - `Card`: One printed card variant with normalized brigades
//! - `Brigade` / `Brigades`: Resolved color/faction affiliation
//! - `BrigadeNormalizer`: Raw brigade text to canonical brigades
//! - `Catalog`: Immutable, indexed snapshot of every printing
//!
//! ## Load Pipeline
//!
//! raw text -> `parse_rows` -> `BrigadeNormalizer` -> testament tags -> `Catalog`

pub mod brigade;
pub mod card;
pub mod catalog;
pub mod normalizer;
pub mod testament;

pub use brigade::{Brigade, BrigadeList, Brigades, EVIL_BRIGADES, GOOD_BRIGADES};
pub use card::{normalize_apostrophes, Alignment, Card, CardKey};
pub use catalog::{name_key, parse_row, parse_rows, Catalog, CatalogLoad, COLUMN_COUNT};
pub use normalizer::{tokenize, BrigadeNormalizer, BrigadeOverrides, MultiSide};
pub use testament::{classify_reference, Testament, TestamentInfo};
