//! JSON rendering of a parsed [`Structure`].
//!
//! The document mirrors the ownership tree: structure → chains → residues → atoms.
//! Field names are stable; absent optional values are written as `null`.

use super::error::PdbError;
use crate::core::models::atom::Atom;
use crate::core::models::chain::Chain;
use crate::core::models::residue::Residue;
use crate::core::models::structure::Structure;
use serde::Serialize;

#[derive(Serialize)]
struct StructureDocument<'a> {
    name: &'a str,
    source_path: &'a str,
    chains: Vec<ChainDocument<'a>>,
}

#[derive(Serialize)]
struct ChainDocument<'a> {
    id: char,
    residues: Vec<ResidueDocument<'a>>,
}

#[derive(Serialize)]
struct ResidueDocument<'a> {
    name: &'a str,
    seq_num: isize,
    ins_code: Option<char>,
    atoms: Vec<AtomDocument<'a>>,
}

#[derive(Serialize)]
struct AtomDocument<'a> {
    serial: usize,
    name: &'a str,
    alt_loc: Option<char>,
    element: &'a str,
    x: f64,
    y: f64,
    z: f64,
    occupancy: f64,
    temp_factor: f64,
    chain_id: char,
    res_seq: isize,
    ins_code: Option<char>,
    hetero: bool,
}

impl<'a> From<&'a Atom> for AtomDocument<'a> {
    fn from(atom: &'a Atom) -> Self {
        Self {
            serial: atom.serial,
            name: &atom.name,
            alt_loc: atom.alt_loc,
            element: &atom.element,
            x: atom.x(),
            y: atom.y(),
            z: atom.z(),
            occupancy: atom.occupancy,
            temp_factor: atom.temp_factor,
            chain_id: atom.chain_id,
            res_seq: atom.res_seq,
            ins_code: atom.ins_code,
            hetero: atom.hetero,
        }
    }
}

impl<'a> From<&'a Residue> for ResidueDocument<'a> {
    fn from(residue: &'a Residue) -> Self {
        Self {
            name: &residue.name,
            seq_num: residue.seq_num,
            ins_code: residue.ins_code,
            atoms: residue.atoms.iter().map(AtomDocument::from).collect(),
        }
    }
}

impl<'a> From<&'a Chain> for ChainDocument<'a> {
    fn from(chain: &'a Chain) -> Self {
        Self {
            id: chain.id,
            residues: chain.residues.iter().map(ResidueDocument::from).collect(),
        }
    }
}

impl<'a> From<&'a Structure> for StructureDocument<'a> {
    fn from(structure: &'a Structure) -> Self {
        Self {
            name: &structure.name,
            source_path: &structure.source_path,
            chains: structure.chains.iter().map(ChainDocument::from).collect(),
        }
    }
}

pub fn to_value(structure: &Structure) -> Result<serde_json::Value, PdbError> {
    Ok(serde_json::to_value(StructureDocument::from(structure))?)
}

pub fn to_string(structure: &Structure) -> Result<String, PdbError> {
    Ok(serde_json::to_string(&StructureDocument::from(structure))?)
}

pub fn to_string_pretty(structure: &Structure) -> Result<String, PdbError> {
    Ok(serde_json::to_string_pretty(&StructureDocument::from(
        structure,
    ))?)
}
