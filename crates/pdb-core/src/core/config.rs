use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Model serial numbers start at 1 (got {0})")]
    InvalidModelSerial(u32),
    #[error("Unknown residue name policy '{0}'. Expected 'first-seen' or 'last-seen'.")]
    UnknownNamePolicy(String),
}

/// Which model of a multi-model (NMR) file is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelSelection {
    /// The first model, or the unnamed default model of a single-model file.
    #[default]
    First,
    /// The model whose `MODEL` record carries this serial number.
    Serial(u32),
}

/// Which residue name wins when atoms of one residue disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResidueNamePolicy {
    #[default]
    FirstSeen,
    LastSeen,
}

impl FromStr for ResidueNamePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first-seen" | "first_seen" | "first" => Ok(ResidueNamePolicy::FirstSeen),
            "last-seen" | "last_seen" | "last" => Ok(ResidueNamePolicy::LastSeen),
            _ => Err(ConfigError::UnknownNamePolicy(s.to_string())),
        }
    }
}

impl fmt::Display for ResidueNamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ResidueNamePolicy::FirstSeen => "first-seen",
                ResidueNamePolicy::LastSeen => "last-seen",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    pub model: ModelSelection,
    pub residue_name_policy: ResidueNamePolicy,
    /// When false, `HETATM` records are dropped before they reach the builders.
    pub include_hetero: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            model: ModelSelection::First,
            residue_name_policy: ResidueNamePolicy::FirstSeen,
            include_hetero: true,
        }
    }
}

#[derive(Default)]
pub struct ParseConfigBuilder {
    model: Option<ModelSelection>,
    residue_name_policy: Option<ResidueNamePolicy>,
    include_hetero: Option<bool>,
}

impl ParseConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: ModelSelection) -> Self {
        self.model = Some(model);
        self
    }
    pub fn residue_name_policy(mut self, policy: ResidueNamePolicy) -> Self {
        self.residue_name_policy = Some(policy);
        self
    }
    pub fn include_hetero(mut self, include: bool) -> Self {
        self.include_hetero = Some(include);
        self
    }

    pub fn build(self) -> Result<ParseConfig, ConfigError> {
        let defaults = ParseConfig::default();
        let model = self.model.unwrap_or(defaults.model);
        if let ModelSelection::Serial(0) = model {
            return Err(ConfigError::InvalidModelSerial(0));
        }
        Ok(ParseConfig {
            model,
            residue_name_policy: self
                .residue_name_policy
                .unwrap_or(defaults.residue_name_policy),
            include_hetero: self.include_hetero.unwrap_or(defaults.include_hetero),
        })
    }
}
