use super::error::PdbError;
use super::record;
use super::traits::StructureFile;
use crate::core::config::ParseConfig;
use crate::core::models::builder::StructureBuilder;
use crate::core::models::structure::Structure;
use std::io::BufRead;

/// Reader for the Protein Data Bank fixed-column text format.
pub struct PdbFile;

impl StructureFile for PdbFile {
    fn read_from(
        reader: &mut impl BufRead,
        source_path: &str,
        fallback_name: &str,
        config: &ParseConfig,
    ) -> Result<Structure, PdbError> {
        let mut builder = StructureBuilder::new(config);
        let mut buf = Vec::new();
        let mut line_num = 0;

        // Lines are decoded lossily; non-UTF-8 bytes never fail a read.
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_num += 1;
            let mut content = buf.as_slice();
            if let Some(rest) = content.strip_suffix(b"\n") {
                content = rest;
            }
            if let Some(rest) = content.strip_suffix(b"\r") {
                content = rest;
            }
            let line = String::from_utf8_lossy(content);
            let record = record::classify(&line, line_num)?;
            if builder.observe(record).is_break() {
                break;
            }
        }

        Ok(builder.build(fallback_name, source_path.to_string()))
    }
}
