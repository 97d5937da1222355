use super::error::PdbError;
use crate::core::config::ParseConfig;
use crate::core::models::structure::Structure;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading a structure file format.
///
/// Implementors handle format-specific parsing from any buffered reader; opening
/// files is shared through [`read_from_path`](StructureFile::read_from_path).
pub trait StructureFile {
    /// Reads a structure from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    /// * `source_path` - Recorded as the structure's source path.
    /// * `fallback_name` - Used as the structure name when the file carries none.
    /// * `config` - Model selection and residue naming options.
    ///
    /// # Errors
    ///
    /// Returns an error if a record is malformed or reading fails.
    fn read_from(
        reader: &mut impl BufRead,
        source_path: &str,
        fallback_name: &str,
        config: &ParseConfig,
    ) -> Result<Structure, PdbError>;

    /// Reads a structure from a file path.
    ///
    /// The file handle lives only for the duration of this call and is released on
    /// every exit path. The fallback name is the file's base name without extension.
    ///
    /// # Errors
    ///
    /// Returns [`PdbError::FileNotFound`] if the path is missing, unreadable or not a
    /// regular file, before any parsing happens.
    fn read_from_path<P: AsRef<Path>>(path: P, config: &ParseConfig) -> Result<Structure, PdbError> {
        let path = path.as_ref();
        let not_found = |source: io::Error| PdbError::FileNotFound {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(not_found)?;
        if !file.metadata().map_err(not_found)?.is_file() {
            return Err(not_found(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }

        let fallback_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut reader = BufReader::new(file);
        Self::read_from(
            &mut reader,
            &path.to_string_lossy(),
            &fallback_name,
            config,
        )
    }
}
