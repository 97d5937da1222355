use super::load;
use crate::cli::SequenceArgs;
use crate::config;
use crate::error::{CliError, Result};
use pdb_parser::Chain;
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub fn run(args: &SequenceArgs, config_path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let app = config::build_config(config_path, &args.parse)?;
    let structure = load(&args.file, &app.parse)?;

    let chains: Vec<&Chain> = match args.chain {
        Some(id) => vec![structure.chain(id).ok_or_else(|| {
            CliError::Argument(format!(
                "Chain '{}' not found in '{}'",
                id,
                args.file.display()
            ))
        })?],
        None => structure.chains().iter().collect(),
    };

    for chain in chains {
        let sequence = chain.get_sequence();
        if args.fasta {
            if sequence.is_empty() && args.chain.is_none() {
                debug!("Chain '{}' has no polymer residues; no FASTA record.", chain.id);
                continue;
            }
            writeln!(out, ">{}:{}", structure.name(), chain.id)?;
            write_wrapped(out, &sequence, app.output.fasta_width)?;
        } else {
            writeln!(out, "{}: {}", chain.id, sequence)?;
        }
    }
    Ok(())
}

fn write_wrapped(out: &mut impl Write, sequence: &str, width: usize) -> Result<()> {
    if width == 0 || sequence.len() <= width {
        writeln!(out, "{}", sequence)?;
        return Ok(());
    }
    // One-letter codes are ASCII, so byte chunks are whole residues.
    for line in sequence.as_bytes().chunks(width) {
        out.write_all(line)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
