use super::load;
use crate::cli::JsonArgs;
use crate::config;
use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn run(args: &JsonArgs, config_path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let app = config::build_config(config_path, &args.parse)?;
    let structure = load(&args.file, &app.parse)?;

    let mut document = if args.pretty || app.output.pretty_json {
        structure.dump_to_json_pretty()?
    } else {
        structure.dump_to_json()?
    };
    document.push('\n');

    match &args.output {
        Some(path) => {
            fs::write(path, document)?;
            info!("Wrote JSON for '{}' to {:?}", structure.name(), path);
        }
        None => out.write_all(document.as_bytes())?,
    }
    Ok(())
}
