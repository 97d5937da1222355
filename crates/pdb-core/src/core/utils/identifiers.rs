use phf::{Map, Set, phf_map, phf_set};

static AMINO_ACID_CODES: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D', "CYS" => 'C',
    "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G', "HIS" => 'H', "ILE" => 'I',
    "LEU" => 'L', "LYS" => 'K', "MET" => 'M', "PHE" => 'F', "PRO" => 'P',
    "SER" => 'S', "THR" => 'T', "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',
    // Protonation and force-field variants
    "HSD" => 'H', "HSE" => 'H', "HSP" => 'H', "HID" => 'H', "HIE" => 'H', "HIP" => 'H',
    "CYX" => 'C', "CYM" => 'C', "ASH" => 'D', "GLH" => 'E', "LYN" => 'K',
    // Modified residues with a standard parent
    "MSE" => 'M', "SEP" => 'S', "TPO" => 'T', "PTR" => 'Y', "CSO" => 'C',
    "MLY" => 'K', "KCX" => 'K', "HYP" => 'P',
    "SEC" => 'U', "PYL" => 'O',
    "ASX" => 'B', "GLX" => 'Z', "UNK" => 'X',
};

static NUCLEOTIDE_CODES: Map<&'static str, char> = phf_map! {
    "A" => 'A', "C" => 'C', "G" => 'G', "U" => 'U', "T" => 'T', "I" => 'I',
    "DA" => 'A', "DC" => 'C', "DG" => 'G', "DT" => 'T', "DU" => 'U', "DI" => 'I',
};

static PEPTIDE_FLANK_ATOM_NAMES: Set<&'static str> = phf_set! { "N", "C" };

static NUCLEOTIDE_MARKER_ATOM_NAMES: Set<&'static str> = phf_set! {
    "C1'", "C2'", "C3'", "C4'", "C5'", "O3'", "O4'", "O5'",
    "C1*", "C2*", "C3*", "C4*", "C5*", "O3*", "O4*", "O5*",
};

const ALPHA_CARBON_ATOM_NAME: &str = "CA";

/// Code emitted for residue names the table does not know.
pub const UNKNOWN_RESIDUE_CODE: char = 'X';

/// The kind of polymer backbone a residue carries, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolymerKind {
    Peptide,
    Nucleotide,
}

/// Immutable three-letter → one-letter residue code table.
///
/// The table is built at compile time; callers hold it by reference and hand it to
/// [`Chain::sequence_with`](crate::core::models::chain::Chain::sequence_with).
#[derive(Debug)]
pub struct ResidueCodeTable {
    amino_acids: &'static Map<&'static str, char>,
    nucleotides: &'static Map<&'static str, char>,
}

static STANDARD_TABLE: ResidueCodeTable = ResidueCodeTable {
    amino_acids: &AMINO_ACID_CODES,
    nucleotides: &NUCLEOTIDE_CODES,
};

impl ResidueCodeTable {
    /// The 20 standard amino acids plus common variants, and the standard nucleotides.
    pub fn standard() -> &'static ResidueCodeTable {
        &STANDARD_TABLE
    }

    /// Returns the one-letter code for `residue_name`, or `X` if it is unknown.
    pub fn one_letter(&self, residue_name: &str) -> char {
        self.lookup(residue_name).unwrap_or(UNKNOWN_RESIDUE_CODE)
    }

    pub fn lookup(&self, residue_name: &str) -> Option<char> {
        let name = residue_name.trim();
        self.amino_acids
            .get(name)
            .or_else(|| self.nucleotides.get(name))
            .copied()
    }

    pub fn is_amino_acid(&self, residue_name: &str) -> bool {
        self.amino_acids.contains_key(residue_name.trim())
    }
}

/// Decides whether a residue is part of a polymer from its name and atom names.
///
/// Peptides need an alpha carbon next to `N` or `C`; a lone `CA` only counts when the
/// residue name is a known amino acid (alpha-carbon traces), which keeps calcium ions
/// out. Nucleotides are recognised by any sugar atom.
pub fn classify_polymer<'a>(
    residue_name: &str,
    atom_names: impl IntoIterator<Item = &'a str>,
) -> Option<PolymerKind> {
    let mut has_alpha_carbon = false;
    let mut has_flank = false;

    for name in atom_names {
        let name = name.trim();
        if NUCLEOTIDE_MARKER_ATOM_NAMES.contains(name) {
            return Some(PolymerKind::Nucleotide);
        }
        if name == ALPHA_CARBON_ATOM_NAME {
            has_alpha_carbon = true;
        } else if PEPTIDE_FLANK_ATOM_NAMES.contains(name) {
            has_flank = true;
        }
    }

    let is_peptide = has_alpha_carbon
        && (has_flank || ResidueCodeTable::standard().is_amino_acid(residue_name));
    is_peptide.then_some(PolymerKind::Peptide)
}
