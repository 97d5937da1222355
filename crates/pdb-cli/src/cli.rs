use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "pdbp",
    author = "pdb-parser contributors",
    version,
    about = "pdbp - Inspect Protein Data Bank files: structure summaries, chain sequences and JSON dumps.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used when parsing several files.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a one-line summary (name, chains, residues, atoms) for each file.
    Info(InfoArgs),
    /// Print the one-letter polymer sequence of each chain.
    Sequence(SequenceArgs),
    /// Dump a structure as JSON.
    Json(JsonArgs),
}

/// Parse options shared by every subcommand. These override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ParseArgs {
    /// Read this model serial from multi-model files instead of the first model.
    #[arg(long, value_name = "SERIAL")]
    pub model: Option<u32>,

    /// When a residue's atoms disagree on its name, keep the last name seen.
    #[arg(long)]
    pub last_seen_names: bool,

    /// Drop HETATM records (waters, ligands, ions).
    #[arg(long)]
    pub no_hetero: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S parse.model=2
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// PDB files to summarize.
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub parse: ParseArgs,
}

/// Arguments for the `sequence` subcommand.
#[derive(Args, Debug)]
pub struct SequenceArgs {
    /// Path to the input PDB file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Only print the sequence of this chain.
    #[arg(long, value_name = "ID")]
    pub chain: Option<char>,

    /// Emit FASTA records instead of `<chain>: <sequence>` lines.
    #[arg(long)]
    pub fasta: bool,

    #[command(flatten)]
    pub parse: ParseArgs,
}

/// Arguments for the `json` subcommand.
#[derive(Args, Debug)]
pub struct JsonArgs {
    /// Path to the input PDB file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the document to this path instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Indent the document.
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub parse: ParseArgs,
}
