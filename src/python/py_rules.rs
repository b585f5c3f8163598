//! Deck and validation bindings for Python.

use pyo3::prelude::*;

use crate::deck::{export_text, import_text, Deck, DeckFormat, ExportStyle};
use crate::rules::{validate_deck, ValidationReport};

use super::py_cards::{PyCard, PyCatalog};

/// Python wrapper for a deck.
#[pyclass(name = "Deck")]
#[derive(Clone, Debug)]
pub struct PyDeck(pub Deck);

#[pymethods]
impl PyDeck {
    #[new]
    #[pyo3(signature = (name, format = "Type 1", paragon = None))]
    fn new(name: &str, format: &str, paragon: Option<String>) -> Self {
        let mut deck = Deck::new(name, DeckFormat::parse(format));
        deck.paragon = paragon;
        Self(deck)
    }

    /// Import Lackey-style text. Returns `(deck_or_none, errors, warnings)`.
    #[staticmethod]
    #[pyo3(signature = (name, text, catalog, format = "Type 1"))]
    fn import_text(
        name: &str,
        text: &str,
        catalog: &PyCatalog,
        format: &str,
    ) -> (Option<PyDeck>, Vec<String>, Vec<String>) {
        let report = import_text(name, text, &catalog.inner, DeckFormat::parse(format));
        (
            report.deck.map(PyDeck),
            report.errors.iter().map(ToString::to_string).collect(),
            report.warnings,
        )
    }

    #[pyo3(signature = (with_sets = false))]
    fn export_text(&self, with_sets: bool) -> String {
        let style = if with_sets {
            ExportStyle::WithSets
        } else {
            ExportStyle::Lackey
        };
        export_text(&self.0, style)
    }

    #[pyo3(signature = (card, quantity = 1, reserve = false))]
    fn add_card(&mut self, card: &PyCard, quantity: u32, reserve: bool) {
        self.0.add_card(card.0.clone(), quantity, reserve);
    }

    #[pyo3(signature = (card, quantity = 1, reserve = false))]
    fn remove_card(&mut self, card: &PyCard, quantity: u32, reserve: bool) -> u32 {
        self.0.remove_card(&card.0.key(), quantity, reserve)
    }

    #[getter]
    fn format(&self) -> &'static str {
        self.0.format.as_str()
    }

    #[getter]
    fn total_cards(&self) -> u32 {
        self.0.total_cards()
    }

    /// Validate with the default rules.
    fn validate(&self) -> PyValidationReport {
        PyValidationReport(validate_deck(&self.0))
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!("Deck({:?}, format={:?}, cards={})", self.0.name, self.0.format.as_str(), self.0.total_cards())
    }
}

/// Python wrapper for a validation report.
#[pyclass(name = "ValidationReport")]
#[derive(Clone, Debug)]
pub struct PyValidationReport(pub ValidationReport);

#[pymethods]
impl PyValidationReport {
    #[getter]
    fn is_valid(&self) -> bool {
        self.0.is_valid
    }

    /// Issues as `(severity, category, message)` tuples.
    #[getter]
    fn issues(&self) -> Vec<(&'static str, &'static str, String)> {
        self.0
            .issues
            .iter()
            .map(|i| (i.severity.as_str(), i.category.as_str(), i.message.clone()))
            .collect()
    }

    #[getter]
    fn main_deck_size(&self) -> u32 {
        self.0.stats.main_deck_size
    }

    #[getter]
    fn reserve_size(&self) -> u32 {
        self.0.stats.reserve_size
    }

    #[getter]
    fn main_deck_lost_souls(&self) -> u32 {
        self.0.stats.main_deck_lost_souls
    }

    #[getter]
    fn dominant_count(&self) -> u32 {
        self.0.stats.dominant_count
    }

    #[getter]
    fn required_lost_souls(&self) -> Option<u32> {
        self.0.stats.required_lost_souls
    }

    fn __repr__(&self) -> String {
        format!("ValidationReport(is_valid={}, issues={})", self.0.is_valid, self.0.issues.len())
    }
}

/// Lost Souls required for a main deck of `size` cards.
#[pyfunction]
pub fn required_lost_souls(size: u32) -> u32 {
    crate::rules::required_lost_souls(size)
}
