use super::atom::Atom;
use crate::core::utils::identifiers::{self, PolymerKind, ResidueCodeTable};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub name: String,             // Residue name (e.g., "ALA", "HOH")
    pub seq_num: isize,           // Residue sequence number from source file
    pub ins_code: Option<char>,   // Insertion code, absent when blank
    pub chain_id: char,           // Identifier of the owning chain
    pub(crate) atoms: Vec<Atom>,  // Atoms in file order
}

impl Residue {
    pub(crate) fn new(name: &str, seq_num: isize, ins_code: Option<char>, chain_id: char) -> Self {
        Self {
            name: name.to_string(),
            seq_num,
            ins_code,
            chain_id,
            atoms: Vec::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Returns the first atom with the given name.
    pub fn atom(&self, name: &str) -> Option<&Atom> {
        self.atoms.iter().find(|atom| atom.name == name)
    }

    pub fn key(&self) -> (char, isize, Option<char>) {
        (self.chain_id, self.seq_num, self.ins_code)
    }

    pub fn polymer_kind(&self) -> Option<PolymerKind> {
        identifiers::classify_polymer(&self.name, self.atoms.iter().map(|a| a.name.as_str()))
    }

    /// True when the residue carries a peptide or nucleotide backbone.
    pub fn is_polymer(&self) -> bool {
        self.polymer_kind().is_some()
    }

    pub fn one_letter_code(&self, table: &ResidueCodeTable) -> char {
        table.one_letter(&self.name)
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Residue \"{}\" {}", self.name, self.seq_num)?;
        if let Some(code) = self.ins_code {
            write!(f, "{}", code)?;
        }
        write!(f, " ({} atoms)", self.atoms.len())?;
        if f.alternate() {
            for atom in &self.atoms {
                write!(f, "\n\t{}", atom)?;
            }
        }
        Ok(())
    }
}
