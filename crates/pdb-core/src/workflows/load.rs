use crate::core::config::ParseConfig;
use crate::core::io::error::PdbError;
use crate::core::io::pdb::PdbFile;
use crate::core::io::traits::StructureFile;
use crate::core::models::structure::Structure;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Parses the PDB file at `path` into a [`Structure`].
///
/// # Errors
///
/// Returns [`PdbError::FileNotFound`] when the file cannot be opened, and
/// [`PdbError::Parse`] for the first malformed numeric field.
#[instrument(skip_all, name = "load_structure", fields(path = %path.display()))]
pub fn run(path: &Path, config: &ParseConfig) -> Result<Structure, PdbError> {
    debug!(
        model = ?config.model,
        residue_names = %config.residue_name_policy,
        include_hetero = config.include_hetero,
        "Reading structure file."
    );

    let structure = PdbFile::read_from_path(path, config)?;

    info!(
        chains = structure.chains().len(),
        residues = structure.residue_count(),
        atoms = structure.atom_count(),
        "Loaded structure '{}'.",
        structure.name()
    );
    Ok(structure)
}
