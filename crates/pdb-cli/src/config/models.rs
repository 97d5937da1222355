use pdb_parser::ParseConfig;

/// Output formatting resolved from defaults, the config file and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    pub pretty_json: bool,
    /// Residues per FASTA line; 0 writes each sequence on one line.
    pub fasta_width: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub parse: ParseConfig,
    pub output: OutputOptions,
}
