use super::residue::Residue;
use crate::core::utils::identifiers::ResidueCodeTable;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub id: char,                       // Chain identifier (e.g., 'A', 'B')
    pub(crate) residues: Vec<Residue>,  // Residues in file order, not sorted by number
}

impl Chain {
    pub(crate) fn new(id: char) -> Self {
        Self {
            id,
            residues: Vec::new(),
        }
    }

    pub(crate) fn add_residue(&mut self, residue: Residue) {
        debug_assert_eq!(residue.chain_id, self.id);
        self.residues.push(residue);
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    /// Finds a residue by sequence number and insertion code. If a number occurs more
    /// than once (re-entered chain), the first occurrence is returned.
    pub fn residue(&self, seq_num: isize, ins_code: Option<char>) -> Option<&Residue> {
        self.residues
            .iter()
            .find(|r| r.seq_num == seq_num && r.ins_code == ins_code)
    }

    pub fn atom_count(&self) -> usize {
        self.residues.iter().map(|r| r.atoms.len()).sum()
    }

    /// Residues that carry a polymer backbone, in chain order.
    pub fn polymer_residues(&self) -> impl Iterator<Item = &Residue> {
        self.residues.iter().filter(|r| r.is_polymer())
    }

    /// One-letter sequence of the polymer residues using the standard code table.
    pub fn get_sequence(&self) -> String {
        self.sequence_with(ResidueCodeTable::standard())
    }

    pub fn sequence_with(&self, table: &ResidueCodeTable) -> String {
        self.polymer_residues()
            .map(|r| r.one_letter_code(table))
            .collect()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chain \"{}\": {} residues, {} atoms",
            self.id,
            self.residues.len(),
            self.atom_count()
        )?;
        if f.alternate() {
            for residue in &self.residues {
                write!(f, "\n\t{} {}", residue.seq_num, residue.name)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use nalgebra::Point3;

    fn residue(name: &str, seq_num: isize, atom_names: &[&str]) -> Residue {
        let mut residue = Residue::new(name, seq_num, None, 'A');
        for (i, atom_name) in atom_names.iter().enumerate() {
            residue.add_atom(Atom::new(i + 1, atom_name, Point3::origin()));
        }
        residue
    }

    fn chain_with(residues: Vec<Residue>) -> Chain {
        let mut chain = Chain::new('A');
        for r in residues {
            chain.add_residue(r);
        }
        chain
    }

    #[test]
    fn new_chain_is_empty() {
        let chain = Chain::new('B');
        assert_eq!(chain.id, 'B');
        assert!(chain.residues().is_empty());
        assert_eq!(chain.get_sequence(), "");
    }

    #[test]
    fn sequence_maps_polymer_residues_in_order() {
        let chain = chain_with(vec![
            residue("MET", 1, &["N", "CA", "C", "O"]),
            residue("LYS", 2, &["N", "CA", "C", "O"]),
            residue("MSE", 3, &["N", "CA", "C", "O", "SE"]),
        ]);
        assert_eq!(chain.get_sequence(), "MKM");
    }

    #[test]
    fn sequence_skips_water_and_ligands_but_residue_list_keeps_them() {
        let chain = chain_with(vec![
            residue("GLY", 1, &["N", "CA", "C", "O"]),
            residue("HEM", 2, &["FE", "NA", "NB"]),
            residue("HOH", 3, &["O"]),
        ]);
        assert_eq!(chain.residues().len(), 3);
        assert_eq!(chain.get_sequence(), "G");
        assert!(chain.get_sequence().len() <= chain.residues().len());
    }

    #[test]
    fn unknown_polymer_residue_maps_to_x() {
        let chain = chain_with(vec![
            residue("ALA", 1, &["N", "CA"]),
            residue("ZZZ", 2, &["N", "CA", "C"]),
        ]);
        assert_eq!(chain.get_sequence(), "AX");
    }

    #[test]
    fn nucleotide_chain_sequence() {
        let chain = chain_with(vec![
            residue("DA", 1, &["P", "O5'", "C5'", "C4'"]),
            residue("DC", 2, &["P", "O5'", "C5'", "C4'"]),
            residue("DG", 3, &["P", "O5'", "C5'", "C4'"]),
        ]);
        assert_eq!(chain.get_sequence(), "ACG");
    }

    #[test]
    fn residue_lookup_and_atom_count() {
        let chain = chain_with(vec![
            residue("ALA", 1, &["N", "CA"]),
            residue("GLY", 2, &["N", "CA", "C"]),
        ]);
        assert_eq!(chain.residue(2, None).map(|r| r.name.as_str()), Some("GLY"));
        assert!(chain.residue(2, Some('A')).is_none());
        assert_eq!(chain.atom_count(), 5);
    }

    #[test]
    fn display_summarizes_and_alternate_lists_residues() {
        let chain = chain_with(vec![
            residue("ALA", 1, &["N", "CA"]),
            residue("HOH", 2, &["O"]),
        ]);
        assert_eq!(chain.to_string(), "Chain \"A\": 2 residues, 3 atoms");
        assert_eq!(
            format!("{:#}", chain),
            "Chain \"A\": 2 residues, 3 atoms\n\t1 ALA\n\t2 HOH"
        );
    }
}
