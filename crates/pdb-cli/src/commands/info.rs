use super::load;
use crate::cli::InfoArgs;
use crate::config;
use crate::error::{CliError, Result};
use rayon::prelude::*;
use std::io::Write;
use std::path::Path;
use tracing::{error, info};

/// Writes `<path>: <summary>` for every readable file, in argument order.
///
/// Files are parsed in parallel. A failing file is logged and does not stop the
/// others; the command fails afterwards if any file could not be read.
pub fn run(args: &InfoArgs, config_path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let app = config::build_config(config_path, &args.parse)?;

    let results: Vec<_> = args
        .files
        .par_iter()
        .map(|path| load(path, &app.parse))
        .collect();

    let mut failed = 0;
    for (path, result) in args.files.iter().zip(results) {
        match result {
            Ok(structure) => writeln!(out, "{}: {}", path.display(), structure)?,
            Err(e) => {
                error!("{}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Batch {
            failed,
            total: args.files.len(),
        });
    }
    info!("Summarized {} file(s).", args.files.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ParseArgs;
    use std::fs;
    use tempfile::tempdir;

    const ALA: &str = "\
ATOM      1  N   ALA A   1       0.000   0.000   0.000  1.00 20.00           N
ATOM      2  CA  ALA A   1       1.458   0.000   0.000  1.00 20.00           C
TER
END
";

    #[test]
    fn prints_one_line_per_file_in_argument_order() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.pdb");
        let second = dir.path().join("second.pdb");
        fs::write(&first, ALA).unwrap();
        fs::write(&second, format!("HETATM    1  O   HOH W   1       0.000   0.000   0.000\n{}", ALA)).unwrap();

        let args = InfoArgs {
            files: vec![second.clone(), first.clone()],
            parse: ParseArgs::default(),
        };
        let mut out = Vec::new();
        run(&args, None, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            format!(
                "{}: Structure \"second\": 2 chains, 2 residues, 3 atoms",
                second.display()
            )
        );
        assert_eq!(
            lines[1],
            format!(
                "{}: Structure \"first\": 1 chains, 1 residues, 2 atoms",
                first.display()
            )
        );
    }

    #[test]
    fn missing_file_fails_after_reporting_the_others() {
        let dir = tempdir().unwrap();
        let present = dir.path().join("ok.pdb");
        fs::write(&present, ALA).unwrap();

        let args = InfoArgs {
            files: vec![present, dir.path().join("missing.pdb")],
            parse: ParseArgs::default(),
        };
        let mut out = Vec::new();
        let err = run(&args, None, &mut out).unwrap_err();

        assert!(matches!(err, CliError::Batch { failed: 1, total: 2 }));
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
