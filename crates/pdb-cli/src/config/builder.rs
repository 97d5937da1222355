use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, OutputOptions};
use crate::cli::ParseArgs;
use crate::error::{CliError, Result};
use pdb_parser::{ModelSelection, ParseConfigBuilder, ResidueNamePolicy};
use std::path::Path;
use std::str::FromStr;

/// Merges defaults, the optional config file, `-S` overrides and CLI flags, in
/// increasing order of precedence.
pub fn build_config(config_path: Option<&Path>, args: &ParseArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match config_path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let parse_file = file_config.parse.take().unwrap_or_default();
    let output_file = file_config.output.take().unwrap_or_default();

    let model = match args.model.or(parse_file.model) {
        Some(serial) => ModelSelection::Serial(serial),
        None => ModelSelection::First,
    };

    let residue_name_policy = if args.last_seen_names {
        ResidueNamePolicy::LastSeen
    } else {
        let name = parse_file
            .residue_names
            .as_deref()
            .unwrap_or(defaults.residue_names);
        ResidueNamePolicy::from_str(name).map_err(|e| CliError::Config(e.to_string()))?
    };

    let include_hetero = if args.no_hetero {
        false
    } else {
        parse_file.include_hetero.unwrap_or(defaults.include_hetero)
    };

    let parse = ParseConfigBuilder::new()
        .model(model)
        .residue_name_policy(residue_name_policy)
        .include_hetero(include_hetero)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let output = OutputOptions {
        pretty_json: output_file.pretty_json.unwrap_or(defaults.pretty_json),
        fasta_width: output_file.fasta_width.unwrap_or(defaults.fasta_width),
    };

    Ok(AppConfig { parse, output })
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "parse.model" => {
                config.parse.get_or_insert_with(Default::default).model =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "parse.residue-names" => {
                config
                    .parse
                    .get_or_insert_with(Default::default)
                    .residue_names = Some(value_str.to_string());
            }
            "parse.include-hetero" => {
                config
                    .parse
                    .get_or_insert_with(Default::default)
                    .include_hetero = Some(parse_value(key, value_str, "boolean")?);
            }
            "output.pretty-json" => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .pretty_json = Some(parse_value(key, value_str, "boolean")?);
            }
            "output.fasta-width" => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .fasta_width = Some(parse_value(key, value_str, "integer")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
