use super::atom::Atom;
use super::chain::Chain;
use super::residue::Residue;
use crate::core::config::ParseConfig;
use crate::core::io::error::PdbError;
use crate::core::io::json;
use crate::workflows;
use std::fmt;
use std::path::Path;

/// A parsed PDB entry: chains in first-appearance order, each owning its residues.
///
/// A `Structure` is produced once per parse and never mutated afterwards. Chain
/// identifiers are unique within a structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    pub(crate) name: String,
    pub(crate) source_path: String,
    pub(crate) chains: Vec<Chain>,
}

impl Structure {
    pub(crate) fn new(name: String, source_path: String, chains: Vec<Chain>) -> Self {
        Self {
            name,
            source_path,
            chains,
        }
    }

    /// Parses the PDB file at `path` with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PdbError::FileNotFound`] if the path cannot be opened and
    /// [`PdbError::Parse`] for the first malformed numeric field.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PdbError> {
        workflows::load::run(path.as_ref(), &ParseConfig::default())
    }

    pub fn from_path_with_config<P: AsRef<Path>>(
        path: P,
        config: &ParseConfig,
    ) -> Result<Self, PdbError> {
        workflows::load::run(path.as_ref(), config)
    }

    /// Title resolved from HEADER/TITLE/COMPND records, or the file stem.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The path the structure was read from, as given by the caller.
    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn chain(&self, id: char) -> Option<&Chain> {
        self.chains.iter().find(|c| c.id == id)
    }

    pub fn residues(&self) -> impl Iterator<Item = &Residue> {
        self.chains.iter().flat_map(|c| c.residues.iter())
    }

    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.residues().flat_map(|r| r.atoms.iter())
    }

    pub fn residue_count(&self) -> usize {
        self.chains.iter().map(|c| c.residues.len()).sum()
    }

    pub fn atom_count(&self) -> usize {
        self.chains.iter().map(|c| c.atom_count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Renders the structure as a compact JSON document.
    pub fn dump_to_json(&self) -> Result<String, PdbError> {
        json::to_string(self)
    }

    pub fn dump_to_json_pretty(&self) -> Result<String, PdbError> {
        json::to_string_pretty(self)
    }

    /// The nested mapping behind [`dump_to_json`](Self::dump_to_json).
    pub fn to_json_value(&self) -> Result<serde_json::Value, PdbError> {
        json::to_value(self)
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Structure \"{}\": {} chains, {} residues, {} atoms",
            self.name,
            self.chains.len(),
            self.residue_count(),
            self.atom_count()
        )
    }
}
