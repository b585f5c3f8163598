//! Python bindings for the catalog and deck validator.
//!
//! # Quick Start
//!
//! ```python
//! import redemption_deck as rd
//!
//! catalog = rd.Catalog.from_text(open("carddata.txt").read())
//! deck, errors, warnings = rd.Deck.import_text("My Deck", text, catalog, "Type 1")
//!
//! report = deck.validate()
//! for severity, category, message in report.issues:
//!     print(severity, category, message)
//! ```

use pyo3::prelude::*;

mod py_cards;
mod py_rules;

pub use py_cards::*;
pub use py_rules::*;

/// redemption_deck: card catalog normalization and deck legality checks.
#[pymodule]
fn redemption_deck(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyCatalog>()?;
    m.add_class::<PyDeck>()?;
    m.add_class::<PyValidationReport>()?;
    m.add_function(wrap_pyfunction!(required_lost_souls, m)?)?;
    Ok(())
}
