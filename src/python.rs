use crate::error::ResolveError;
use crate::resolver::{Resolver, UnknownComponentPolicy};
use crate::tree::DisplayTree;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

fn to_py_err(e: ResolveError) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

/// A Flex Message layout resolver.
///
/// The resolver is configured once at construction and can then resolve any
/// number of documents.
#[pyclass(name = "Resolver")]
struct ResolverPy {
    resolver: Resolver,
}

#[pymethods]
impl ResolverPy {
    /// Creates a resolver.
    ///
    /// Args:
    ///     strict (bool): When true, a nested component with an unrecognized
    ///         type fails the whole document instead of being skipped.
    #[new]
    #[pyo3(signature = (strict = false))]
    fn new(strict: bool) -> Self {
        let policy = if strict {
            UnknownComponentPolicy::Reject
        } else {
            UnknownComponentPolicy::Skip
        };
        ResolverPy {
            resolver: Resolver::builder().with_unknown_components(policy).build(),
        }
    }

    /// Resolves a Flex Message document.
    ///
    /// Args:
    ///     message_json (str): The document as a JSON string.
    ///
    /// Returns:
    ///     str: The resolved visual tree as a JSON string.
    ///
    /// Raises:
    ///     ValueError: If the JSON is malformed, the envelope is not a Flex
    ///         Message carrying a bubble or carousel, or (in strict mode) a
    ///         component type is unrecognized.
    fn resolve(&self, message_json: &str) -> PyResult<String> {
        let message = self.resolver.resolve_json(message_json).map_err(to_py_err)?;
        message
            .to_json_string()
            .map_err(|e| PyErr::new::<PyRuntimeError, _>(e.to_string()))
    }

    /// Resolves a document and returns the indented tree rendering.
    fn render_tree(&self, message_json: &str) -> PyResult<String> {
        let message = self.resolver.resolve_json(message_json).map_err(to_py_err)?;
        Ok(DisplayTree::new(&message).to_string())
    }
}

/// Resolves a Flex Message JSON string with the default settings.
#[pyfunction]
fn resolve_json(message_json: &str) -> PyResult<String> {
    let message = crate::resolver::resolve_json(message_json).map_err(to_py_err)?;
    message
        .to_json_string()
        .map_err(|e| PyErr::new::<PyRuntimeError, _>(e.to_string()))
}

/// Python bindings to the fukidashi layout resolver.
#[pymodule]
fn fukidashi(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ResolverPy>()?;
    m.add_function(wrap_pyfunction!(resolve_json, m)?)?;
    Ok(())
}
