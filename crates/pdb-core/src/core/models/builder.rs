use super::chain::Chain;
use super::residue::Residue;
use super::structure::Structure;
use crate::core::config::{ModelSelection, ParseConfig, ResidueNamePolicy};
use crate::core::io::record::{AtomRecord, Record};
use std::collections::HashMap;
use std::ops::ControlFlow;
use tracing::{debug, trace, warn};

/// Groups consecutive atom records with the same (chain id, sequence number,
/// insertion code) into one residue.
pub struct ResidueBuilder {
    current: Option<Residue>,
    name_policy: ResidueNamePolicy,
}

impl ResidueBuilder {
    pub fn new(name_policy: ResidueNamePolicy) -> Self {
        Self {
            current: None,
            name_policy,
        }
    }

    /// Adds a record to the open residue, or opens a new one.
    ///
    /// # Return
    ///
    /// The residue closed by this record when its key differs from the open residue.
    pub fn observe(&mut self, record: AtomRecord) -> Option<Residue> {
        let AtomRecord { residue_name, atom } = record;

        let same_key = self
            .current
            .as_ref()
            .is_some_and(|open| open.key() == atom.residue_key());

        if same_key {
            if let Some(open) = self.current.as_mut() {
                if open.name != residue_name {
                    debug!(
                        "Residue {}{} in chain '{}' is named both '{}' and '{}'; keeping the {} name.",
                        open.seq_num,
                        open.ins_code.map(String::from).unwrap_or_default(),
                        open.chain_id,
                        open.name,
                        residue_name,
                        self.name_policy
                    );
                    if self.name_policy == ResidueNamePolicy::LastSeen {
                        open.name = residue_name;
                    }
                }
                open.add_atom(atom);
            }
            return None;
        }

        let mut residue = Residue::new(&residue_name, atom.res_seq, atom.ins_code, atom.chain_id);
        residue.add_atom(atom);
        self.current.replace(residue)
    }

    /// Closes and returns the open residue, if any.
    pub fn finalize(&mut self) -> Option<Residue> {
        self.current.take()
    }
}

/// Collects residues into chains in first-appearance order.
///
/// A chain id that shows up again after its chain was closed (typically waters filed
/// under the polymer's letter after `TER`) continues the existing chain.
pub struct ChainBuilder {
    chains: Vec<Chain>,
    chain_index: HashMap<char, usize>,
    current: Option<char>,
    residues: ResidueBuilder,
}

impl ChainBuilder {
    pub fn new(name_policy: ResidueNamePolicy) -> Self {
        Self {
            chains: Vec::new(),
            chain_index: HashMap::new(),
            current: None,
            residues: ResidueBuilder::new(name_policy),
        }
    }

    pub fn observe(&mut self, record: AtomRecord) {
        let chain_id = record.atom.chain_id;
        if self.current != Some(chain_id) {
            self.terminate();
            self.open_chain(chain_id);
        }
        if let Some(closed) = self.residues.observe(record) {
            self.push_residue(closed);
        }
    }

    /// Closes the open residue and chain (`TER`, model boundaries, chain switches).
    pub fn terminate(&mut self) {
        if let Some(residue) = self.residues.finalize() {
            self.push_residue(residue);
        }
        self.current = None;
    }

    pub fn finalize(mut self) -> Vec<Chain> {
        self.terminate();
        self.chains
    }

    fn open_chain(&mut self, id: char) {
        let next_index = self.chains.len();
        let index = *self.chain_index.entry(id).or_insert(next_index);
        if index == next_index {
            self.chains.push(Chain::new(id));
        } else {
            trace!("Chain '{}' re-entered; appending to existing chain.", id);
        }
        self.current = Some(id);
    }

    fn push_residue(&mut self, residue: Residue) {
        if let Some(&index) = self.chain_index.get(&residue.chain_id) {
            self.chains[index].add_residue(residue);
        }
    }
}

#[derive(Default)]
struct NameCandidates {
    id_code: Option<String>,
    title: Vec<String>,
    compound: Option<String>,
}

impl NameCandidates {
    fn resolve(self, fallback: &str) -> String {
        let title = self.title.join(" ");
        [self.id_code, Some(title), self.compound]
            .into_iter()
            .flatten()
            .find(|candidate| !candidate.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Extracts the molecule name from a `COMPND` line.
///
/// Current-format files carry `MOLECULE: <name>;`; legacy files carry free text.
fn compound_molecule_name(text: &str) -> Option<String> {
    if let Some(rest) = text.strip_prefix("MOLECULE:") {
        let name = rest.trim().trim_end_matches(';').trim();
        return (!name.is_empty()).then(|| name.to_string());
    }
    if text.contains(':') || text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Drives residue and chain construction from classified records, keeping a single
/// model and collecting name candidates.
pub struct StructureBuilder {
    chains: ChainBuilder,
    model: ModelSelection,
    include_hetero: bool,
    accepting: bool,
    model_done: bool,
    models_started: u32,
    model_matched: bool,
    skipped_atoms: usize,
    names: NameCandidates,
}

impl StructureBuilder {
    pub fn new(config: &ParseConfig) -> Self {
        let accepting = match config.model {
            ModelSelection::First => true,
            ModelSelection::Serial(serial) => serial == 1,
        };
        Self {
            chains: ChainBuilder::new(config.residue_name_policy),
            model: config.model,
            include_hetero: config.include_hetero,
            accepting,
            model_done: false,
            models_started: 0,
            model_matched: false,
            skipped_atoms: 0,
            names: NameCandidates::default(),
        }
    }

    /// Feeds one record into the builder.
    ///
    /// # Return
    ///
    /// `ControlFlow::Break` once `END` has been seen; nothing after it is read.
    pub fn observe(&mut self, record: Record) -> ControlFlow<()> {
        match record {
            Record::Atom(atom_record) => {
                if !self.accepting {
                    self.skipped_atoms += 1;
                } else if atom_record.atom.hetero && !self.include_hetero {
                    trace!("Dropping HETATM record {}.", atom_record.atom.serial);
                } else {
                    self.chains.observe(atom_record);
                }
            }
            Record::ChainTerminator => {
                if self.accepting {
                    self.chains.terminate();
                }
            }
            Record::ModelStart(serial) => self.start_model(serial),
            Record::ModelEnd => {
                self.chains.terminate();
                if self.accepting && self.models_started > 0 {
                    self.model_done = true;
                }
                self.accepting = false;
            }
            Record::EndOfFile => return ControlFlow::Break(()),
            Record::Header { id_code, .. } => {
                if self.names.id_code.is_none() && !id_code.is_empty() {
                    self.names.id_code = Some(id_code);
                }
            }
            Record::Title(text) => {
                if !text.is_empty() {
                    self.names.title.push(text);
                }
            }
            Record::Compound(text) => {
                if self.names.compound.is_none() {
                    self.names.compound = compound_molecule_name(&text);
                }
            }
            Record::Unrecognized => {}
        }
        ControlFlow::Continue(())
    }

    fn start_model(&mut self, serial: Option<u32>) {
        self.chains.terminate();
        let is_first = self.models_started == 0;
        self.models_started += 1;
        let serial = serial.unwrap_or(self.models_started);

        let wanted = match self.model {
            ModelSelection::First => is_first,
            ModelSelection::Serial(target) => serial == target,
        };
        self.accepting = wanted && !self.model_done;
        if self.accepting {
            debug!("Reading atoms of model {}.", serial);
            self.model_matched = true;
        } else {
            trace!("Skipping model {}.", serial);
        }
    }

    /// Finalizes all open builders into an immutable [`Structure`].
    ///
    /// `fallback_name` is used when no HEADER, TITLE or COMPND name was found.
    pub fn build(self, fallback_name: &str, source_path: String) -> Structure {
        if self.skipped_atoms > 0 {
            debug!(
                "Skipped {} atom records outside the selected model.",
                self.skipped_atoms
            );
        }
        if let ModelSelection::Serial(serial) = self.model {
            let default_model_used = self.models_started == 0 && serial == 1;
            if !self.model_matched && !default_model_used {
                warn!(
                    "Model {} was not found in '{}'; the structure is empty.",
                    serial, source_path
                );
            }
        }
        let name = self.names.resolve(fallback_name);
        Structure::new(name, source_path, self.chains.finalize())
    }
}
