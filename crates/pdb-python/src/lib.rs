//! Python bindings for the PDB reader.
//!
//! Exposes `Structure(path)` and read-only `Chain`, `Residue` and `Atom` views under the
//! module name `pdb_parser`. Every class is a snapshot copied out of the parsed
//! structure; changing attributes from Python is not supported.

use pdb::{Atom, Chain, PdbError, Residue, Structure};
use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyFileNotFoundError, PyIOError, PyValueError};
use pyo3::prelude::*;
use std::path::PathBuf;

create_exception!(
    pdb_parser,
    ParseError,
    PyException,
    "Raised when a PDB record holds a malformed numeric field."
);

fn to_py_err(err: PdbError) -> PyErr {
    match err {
        PdbError::FileNotFound { .. } => PyFileNotFoundError::new_err(err.to_string()),
        PdbError::Parse { .. } => ParseError::new_err(err.to_string()),
        PdbError::Io(_) => PyIOError::new_err(err.to_string()),
        PdbError::Json(_) => PyValueError::new_err(err.to_string()),
    }
}

fn char_arg(value: &str, what: &str) -> PyResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(PyValueError::new_err(format!(
            "{} must be a single character, got '{}'",
            what, value
        ))),
    }
}

#[pyclass(name = "Atom", module = "pdb_parser", frozen)]
#[derive(Clone)]
pub struct PyAtom {
    inner: Atom,
}

#[pymethods]
impl PyAtom {
    #[getter]
    fn serial(&self) -> usize {
        self.inner.serial
    }

    #[getter]
    fn name(&self) -> &str {
        &self.inner.name
    }

    #[getter]
    fn alt_loc(&self) -> Option<char> {
        self.inner.alt_loc
    }

    #[getter]
    fn element(&self) -> &str {
        &self.inner.element
    }

    #[getter]
    fn x(&self) -> f64 {
        self.inner.x()
    }

    #[getter]
    fn y(&self) -> f64 {
        self.inner.y()
    }

    #[getter]
    fn z(&self) -> f64 {
        self.inner.z()
    }

    /// `(x, y, z)` in Ångström.
    #[getter]
    fn position(&self) -> (f64, f64, f64) {
        (self.inner.x(), self.inner.y(), self.inner.z())
    }

    #[getter]
    fn occupancy(&self) -> f64 {
        self.inner.occupancy
    }

    #[getter]
    fn temp_factor(&self) -> f64 {
        self.inner.temp_factor
    }

    #[getter]
    fn chain_id(&self) -> char {
        self.inner.chain_id
    }

    #[getter]
    fn res_seq(&self) -> isize {
        self.inner.res_seq
    }

    #[getter]
    fn ins_code(&self) -> Option<char> {
        self.inner.ins_code
    }

    #[getter]
    fn hetero(&self) -> bool {
        self.inner.hetero
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

#[pyclass(name = "Residue", module = "pdb_parser", frozen)]
#[derive(Clone)]
pub struct PyResidue {
    inner: Residue,
}

#[pymethods]
impl PyResidue {
    #[getter]
    fn name(&self) -> &str {
        &self.inner.name
    }

    #[getter]
    fn seq_num(&self) -> isize {
        self.inner.seq_num
    }

    #[getter]
    fn ins_code(&self) -> Option<char> {
        self.inner.ins_code
    }

    #[getter]
    fn chain_id(&self) -> char {
        self.inner.chain_id
    }

    #[getter]
    fn atoms(&self) -> Vec<PyAtom> {
        self.inner
            .atoms()
            .iter()
            .map(|atom| PyAtom {
                inner: atom.clone(),
            })
            .collect()
    }

    fn atom(&self, name: &str) -> Option<PyAtom> {
        self.inner.atom(name).map(|atom| PyAtom {
            inner: atom.clone(),
        })
    }

    fn is_polymer(&self) -> bool {
        self.inner.is_polymer()
    }

    fn __len__(&self) -> usize {
        self.inner.atoms().len()
    }

    fn __repr__(&self) -> String {
        format!("{:#}", self.inner)
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

#[pyclass(name = "Chain", module = "pdb_parser", frozen)]
#[derive(Clone)]
pub struct PyChain {
    inner: Chain,
}

#[pymethods]
impl PyChain {
    #[getter]
    fn id(&self) -> char {
        self.inner.id
    }

    #[getter]
    fn residues(&self) -> Vec<PyResidue> {
        self.inner
            .residues()
            .iter()
            .map(|residue| PyResidue {
                inner: residue.clone(),
            })
            .collect()
    }

    /// One-letter sequence of the chain's polymer residues.
    fn get_sequence(&self) -> String {
        self.inner.get_sequence()
    }

    fn atom_count(&self) -> usize {
        self.inner.atom_count()
    }

    fn __len__(&self) -> usize {
        self.inner.residues().len()
    }

    fn __repr__(&self) -> String {
        format!("{:#}", self.inner)
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

#[pyclass(name = "Structure", module = "pdb_parser", frozen)]
pub struct PyStructure {
    inner: Structure,
}

#[pymethods]
impl PyStructure {
    /// Parses the PDB file at `path`.
    ///
    /// Raises `FileNotFoundError` if the file cannot be opened and
    /// `pdb_parser.ParseError` for a malformed record.
    #[new]
    fn new(py: Python<'_>, path: PathBuf) -> PyResult<Self> {
        let inner = py
            .allow_threads(|| Structure::from_path(&path))
            .map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn name(&self) -> &str {
        self.inner.name()
    }

    #[getter]
    fn source_path(&self) -> &str {
        self.inner.source_path()
    }

    #[getter]
    fn chains(&self) -> Vec<PyChain> {
        self.inner
            .chains()
            .iter()
            .map(|chain| PyChain {
                inner: chain.clone(),
            })
            .collect()
    }

    /// Looks up a chain by its one-character identifier.
    fn chain(&self, id: &str) -> PyResult<Option<PyChain>> {
        let id = char_arg(id, "chain id")?;
        Ok(self.inner.chain(id).map(|chain| PyChain {
            inner: chain.clone(),
        }))
    }

    fn residue_count(&self) -> usize {
        self.inner.residue_count()
    }

    fn atom_count(&self) -> usize {
        self.inner.atom_count()
    }

    #[pyo3(signature = (pretty = false))]
    fn dump_to_json(&self, pretty: bool) -> PyResult<String> {
        let document = if pretty {
            self.inner.dump_to_json_pretty()
        } else {
            self.inner.dump_to_json()
        };
        document.map_err(to_py_err)
    }

    fn __len__(&self) -> usize {
        self.inner.chains().len()
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

#[pymodule]
fn pdb_parser(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAtom>()?;
    m.add_class::<PyResidue>()?;
    m.add_class::<PyChain>()?;
    m.add_class::<PyStructure>()?;
    m.add("ParseError", m.py().get_type::<ParseError>())?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
