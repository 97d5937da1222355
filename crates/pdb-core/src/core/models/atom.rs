use nalgebra::Point3;
use std::fmt;

/// One physical atom as read from an `ATOM` or `HETATM` record.
///
/// The identifying residue fields (`chain_id`, `res_seq`, `ins_code`) are stored by value
/// so that an atom stays self-describing once it is detached from its residue, e.g. in a
/// JSON dump.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Atom serial number (columns 7-11).
    pub serial: usize,
    /// The atom name with surrounding blanks removed (e.g. "CA", "OXT").
    pub name: String,
    /// Alternate location indicator, absent when the column is blank.
    pub alt_loc: Option<char>,
    /// Element symbol, read from columns 77-78 or derived from the atom name.
    pub element: String,
    /// Cartesian coordinates in Angstroms.
    pub position: Point3<f64>,
    pub occupancy: f64,
    pub temp_factor: f64,
    pub chain_id: char,
    pub res_seq: isize,
    pub ins_code: Option<char>,
    /// True for `HETATM` records.
    pub hetero: bool,
}

impl Atom {
    /// Creates an atom with the given identity and position; every other field takes its
    /// blank-column default.
    pub fn new(serial: usize, name: &str, position: Point3<f64>) -> Self {
        Self {
            serial,
            name: name.to_string(),
            alt_loc: None,
            element: String::new(),
            position,
            occupancy: 0.0,
            temp_factor: 0.0,
            chain_id: ' ',
            res_seq: 0,
            ins_code: None,
            hetero: false,
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    /// The residue key this atom belongs to.
    pub fn residue_key(&self) -> (char, isize, Option<char>) {
        (self.chain_id, self.res_seq, self.ins_code)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Atom \"{}\" #{} {{{:.3}, {:.3}, {:.3}}}",
            self.name, self.serial, self.position.x, self.position.y, self.position.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_has_expected_default_fields() {
        let atom = Atom::new(7, "CA", Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.serial, 7);
        assert_eq!(atom.name, "CA");
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.alt_loc, None);
        assert_eq!(atom.element, "");
        assert_eq!(atom.occupancy, 0.0);
        assert_eq!(atom.temp_factor, 0.0);
        assert_eq!(atom.ins_code, None);
        assert!(!atom.hetero);
    }

    #[test]
    fn coordinate_accessors_read_position() {
        let atom = Atom::new(1, "N", Point3::new(-1.5, 0.25, 12.0));
        assert_eq!(atom.x(), -1.5);
        assert_eq!(atom.y(), 0.25);
        assert_eq!(atom.z(), 12.0);
    }

    #[test]
    fn residue_key_combines_identifying_fields() {
        let mut atom = Atom::new(1, "N", Point3::origin());
        atom.chain_id = 'B';
        atom.res_seq = -3;
        atom.ins_code = Some('A');
        assert_eq!(atom.residue_key(), ('B', -3, Some('A')));
    }

    #[test]
    fn display_shows_name_serial_and_rounded_coordinates() {
        let atom = Atom::new(12, "OXT", Point3::new(1.23456, -2.0, 0.1));
        assert_eq!(atom.to_string(), "Atom \"OXT\" #12 {1.235, -2.000, 0.100}");
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let mut atom1 = Atom::new(3, "C", Point3::new(0.0, 0.0, 0.0));
        atom1.hetero = true;
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
