//! Card and catalog bindings for Python.

use std::sync::Arc;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::cards::{BrigadeNormalizer, Card, Catalog};

/// Python wrapper for a catalog card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Arc<Card>);

#[pymethods]
impl PyCard {
    #[getter]
    fn name(&self) -> &str {
        &self.0.name
    }

    #[getter]
    fn set(&self) -> &str {
        &self.0.set
    }

    #[getter]
    fn card_type(&self) -> &str {
        &self.0.card_type
    }

    /// Normalized brigades, slash-joined.
    #[getter]
    fn brigade(&self) -> String {
        self.0.brigades.joined()
    }

    #[getter]
    fn alignment(&self) -> &'static str {
        self.0.alignment.as_str()
    }

    #[getter]
    fn special_ability(&self) -> &str {
        &self.0.special_ability
    }

    #[getter]
    fn reference(&self) -> &str {
        &self.0.reference
    }

    #[getter]
    fn testament(&self) -> &str {
        &self.0.testament
    }

    #[getter]
    fn is_gospel(&self) -> bool {
        self.0.is_gospel
    }

    fn __repr__(&self) -> String {
        format!("Card({:?}, set={:?})", self.0.name, self.0.set)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0.key() == other.0.key()
    }
}

/// Python wrapper for the normalized catalog.
#[pyclass(name = "Catalog")]
#[derive(Clone, Debug)]
pub struct PyCatalog {
    pub inner: Catalog,
    faults: Vec<String>,
}

#[pymethods]
impl PyCatalog {
    /// Parse and normalize tab-separated catalog text.
    #[staticmethod]
    fn from_text(text: &str) -> Self {
        let load = Catalog::load(text, &BrigadeNormalizer::standard());
        Self {
            inner: load.catalog,
            faults: load.faults.iter().map(ToString::to_string).collect(),
        }
    }

    /// Restore a snapshot produced by `to_bytes`.
    #[staticmethod]
    fn from_bytes(bytes: &[u8]) -> PyResult<Self> {
        let inner = Catalog::from_bytes(bytes).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            inner,
            faults: Vec::new(),
        })
    }

    fn to_bytes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self.inner.to_bytes().map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Rows whose brigade could not be resolved.
    #[getter]
    fn faults(&self) -> Vec<String> {
        self.faults.clone()
    }

    /// Find a printing by name, optionally pinned to a set.
    #[pyo3(signature = (name, set = None))]
    fn find(&self, name: &str, set: Option<&str>) -> Option<PyCard> {
        let card = match set {
            Some(set) => self.inner.find(name, set),
            None => self.inner.find_first(name),
        };
        card.cloned().map(PyCard)
    }

    /// All printings of a name, in catalog order.
    fn find_all(&self, name: &str) -> Vec<PyCard> {
        self.inner.find_by_name(name).cloned().map(PyCard).collect()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!("Catalog(cards={}, faults={})", self.inner.len(), self.faults.len())
    }
}
