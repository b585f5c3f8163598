//! Decks: the in-memory aggregate and its text interchange format.
//!
//! Decks are produced by hosts (UI, import, cloud load) and consumed by the
//! validator in `rules`.

pub mod aggregate;
pub mod text;

pub use aggregate::{Deck, DeckCard, DeckFormat};
pub use text::{export_text, import_text, ExportStyle, ImportReport};
