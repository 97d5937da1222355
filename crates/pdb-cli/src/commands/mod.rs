pub mod info;
pub mod json;
pub mod sequence;

use crate::error::{CliError, Result};
use pdb_parser::{ParseConfig, Structure};
use std::path::Path;
use tracing::info;

/// Parses one input file, attaching its path to any failure.
pub(crate) fn load(path: &Path, config: &ParseConfig) -> Result<Structure> {
    info!("Loading input structure from {:?}", path);
    Structure::from_path_with_config(path, config).map_err(|e| CliError::file_parsing(path, e))
}
