use super::error::{ParseErrorKind, PdbError};
use crate::core::models::atom::Atom;
use nalgebra::Point3;

/// One `ATOM`/`HETATM` line: the atom itself plus the residue name it was filed under.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub residue_name: String,
    pub atom: Atom,
}

/// The classified content of a single PDB line.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Atom(AtomRecord),
    /// `TER`: the current chain's polymer has ended.
    ChainTerminator,
    /// `MODEL`, with its serial number when one is given.
    ModelStart(Option<u32>),
    /// `ENDMDL`.
    ModelEnd,
    /// `END`.
    EndOfFile,
    Header {
        classification: String,
        id_code: String,
    },
    /// Text of one `TITLE` line (continuation marker stripped).
    Title(String),
    /// Text of one `COMPND` line (continuation marker stripped).
    Compound(String),
    /// Any other record type. Skipped, never an error.
    Unrecognized,
}

impl Record {
    pub fn is_model_boundary(&self) -> bool {
        matches!(self, Record::ModelStart(_) | Record::ModelEnd)
    }
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end.min(line.len())).unwrap_or("").trim()
}

fn optional_char(line: &str, column: usize) -> Option<char> {
    line.get(column..column + 1)
        .and_then(|s| s.chars().next())
        .filter(|c| !c.is_whitespace())
}

fn parse_int<T: std::str::FromStr>(
    value: &str,
    line: usize,
    field: &'static str,
    columns: &'static str,
) -> Result<T, PdbError> {
    value.parse().map_err(|_| PdbError::Parse {
        line,
        kind: ParseErrorKind::InvalidInt {
            field,
            columns,
            value: value.into(),
        },
    })
}

fn parse_float(
    value: &str,
    line: usize,
    field: &'static str,
    columns: &'static str,
) -> Result<f64, PdbError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PdbError::Parse {
            line,
            kind: ParseErrorKind::InvalidFloat {
                field,
                columns,
                value: value.into(),
            },
        })
}

/// Blank or missing columns default to 0.0.
fn parse_optional_float(
    value: &str,
    line: usize,
    field: &'static str,
    columns: &'static str,
) -> Result<f64, PdbError> {
    if value.is_empty() {
        Ok(0.0)
    } else {
        parse_float(value, line, field, columns)
    }
}

/// Derives an element symbol from the raw (untrimmed) atom-name columns 13-16.
///
/// In well-formed files the symbol is right-justified in columns 13-14, so a blank or
/// digit in column 13 means a one-letter element in column 14. Four-character names
/// starting with `H` are hydrogens.
pub fn element_from_atom_name(raw_name: &str) -> String {
    let mut chars = raw_name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), Some(d)) if c == ' ' || c.is_ascii_digit() => {
            if d.is_ascii_alphabetic() {
                d.to_ascii_uppercase().to_string()
            } else {
                String::new()
            }
        }
        (Some(c), _) if c.eq_ignore_ascii_case(&'H') && raw_name.trim_end().len() == 4 => {
            "H".to_string()
        }
        (Some(c), Some(d)) if c.is_ascii_alphabetic() && d.is_ascii_alphabetic() => {
            format!("{}{}", c.to_ascii_uppercase(), d.to_ascii_uppercase())
        }
        (Some(c), _) if c.is_ascii_alphabetic() => c.to_ascii_uppercase().to_string(),
        _ => String::new(),
    }
}

fn parse_atom_record(line: &str, line_num: usize, hetero: bool) -> Result<AtomRecord, PdbError> {
    let serial_str = slice_and_trim(line, 6, 11);
    let raw_name = line.get(12..16.min(line.len())).unwrap_or("");
    let res_name_str = slice_and_trim(line, 17, 20);
    let res_seq_str = slice_and_trim(line, 22, 26);
    let x_str = slice_and_trim(line, 30, 38);
    let y_str = slice_and_trim(line, 38, 46);
    let z_str = slice_and_trim(line, 46, 54);
    let occupancy_str = slice_and_trim(line, 54, 60);
    let temp_factor_str = slice_and_trim(line, 60, 66);
    let element_str = slice_and_trim(line, 76, 78);

    let serial: usize = parse_int(serial_str, line_num, "serial", "7-11")?;
    let res_seq: isize = parse_int(res_seq_str, line_num, "resSeq", "23-26")?;
    let x = parse_float(x_str, line_num, "x", "31-38")?;
    let y = parse_float(y_str, line_num, "y", "39-46")?;
    let z = parse_float(z_str, line_num, "z", "47-54")?;
    let occupancy = parse_optional_float(occupancy_str, line_num, "occupancy", "55-60")?;
    let temp_factor = parse_optional_float(temp_factor_str, line_num, "tempFactor", "61-66")?;

    let element = if element_str.is_empty() {
        element_from_atom_name(raw_name)
    } else {
        element_str.to_ascii_uppercase()
    };

    let atom = Atom {
        serial,
        name: raw_name.trim().to_string(),
        alt_loc: optional_char(line, 16),
        element,
        position: Point3::new(x, y, z),
        occupancy,
        temp_factor,
        chain_id: line
            .get(21..22)
            .and_then(|s| s.chars().next())
            .unwrap_or(' '),
        res_seq,
        ins_code: optional_char(line, 26),
        hetero,
    };

    Ok(AtomRecord {
        residue_name: res_name_str.to_string(),
        atom,
    })
}

/// Classifies one line of a PDB file.
///
/// `line_num` is the 1-based line number used in error reports.
///
/// # Errors
///
/// Returns [`PdbError::Parse`] when a numeric field holds non-numeric content. Unknown
/// record types are not errors; they classify as [`Record::Unrecognized`].
pub fn classify(line: &str, line_num: usize) -> Result<Record, PdbError> {
    let keyword = line.get(0..6).unwrap_or(line).trim_end();

    let record = match keyword {
        "ATOM" => Record::Atom(parse_atom_record(line, line_num, false)?),
        "HETATM" => Record::Atom(parse_atom_record(line, line_num, true)?),
        "TER" => Record::ChainTerminator,
        "MODEL" => {
            let serial_str = slice_and_trim(line, 6, 80);
            if serial_str.is_empty() {
                Record::ModelStart(None)
            } else {
                Record::ModelStart(Some(parse_int(
                    serial_str,
                    line_num,
                    "model serial",
                    "11-14",
                )?))
            }
        }
        "ENDMDL" => Record::ModelEnd,
        "END" => Record::EndOfFile,
        "HEADER" => Record::Header {
            classification: slice_and_trim(line, 10, 50).to_string(),
            id_code: slice_and_trim(line, 62, 66).to_string(),
        },
        "TITLE" => Record::Title(slice_and_trim(line, 10, 80).to_string()),
        "COMPND" => Record::Compound(slice_and_trim(line, 10, 80).to_string()),
        _ => Record::Unrecognized,
    };
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::test_utils::{atom_line, hetatm_line};

    const FULL_LINE: &str =
        "ATOM      1  N   GLY A   3      17.119   0.186  36.320  1.00 64.10           N  ";

    fn expect_atom(record: Record) -> AtomRecord {
        match record {
            Record::Atom(atom) => atom,
            other => panic!("expected an atom record, got {:?}", other),
        }
    }

    #[test]
    fn classify_full_atom_line_extracts_every_field() {
        let record = expect_atom(classify(FULL_LINE, 1).unwrap());
        let atom = record.atom;
        assert_eq!(record.residue_name, "GLY");
        assert_eq!(atom.serial, 1);
        assert_eq!(atom.name, "N");
        assert_eq!(atom.alt_loc, None);
        assert_eq!(atom.chain_id, 'A');
        assert_eq!(atom.res_seq, 3);
        assert_eq!(atom.ins_code, None);
        assert_eq!(atom.position, Point3::new(17.119, 0.186, 36.320));
        assert_eq!(atom.occupancy, 1.0);
        assert_eq!(atom.temp_factor, 64.10);
        assert_eq!(atom.element, "N");
        assert!(!atom.hetero);
    }

    #[test]
    fn classify_atom_line_truncated_after_coordinates_uses_defaults() {
        let line = &FULL_LINE[..54];
        let atom = expect_atom(classify(line, 1).unwrap()).atom;
        assert_eq!(atom.occupancy, 0.0);
        assert_eq!(atom.temp_factor, 0.0);
        assert_eq!(atom.element, "N");
        assert_eq!(atom.position, Point3::new(17.119, 0.186, 36.320));
    }

    #[test]
    fn classify_atom_line_with_partial_occupancy_column() {
        let line = &FULL_LINE[..58];
        let atom = expect_atom(classify(line, 1).unwrap()).atom;
        assert_eq!(atom.occupancy, 1.0);
        assert_eq!(atom.temp_factor, 0.0);
    }

    #[test]
    fn classify_reads_alt_loc_and_insertion_code() {
        let mut line = atom_line(5, "CA", "SER", 'B', 12, [1.0, 2.0, 3.0]);
        line.replace_range(16..17, "A");
        line.replace_range(26..27, "C");
        let atom = expect_atom(classify(&line, 1).unwrap()).atom;
        assert_eq!(atom.alt_loc, Some('A'));
        assert_eq!(atom.ins_code, Some('C'));
        assert_eq!(atom.residue_key(), ('B', 12, Some('C')));
    }

    #[test]
    fn classify_hetatm_sets_hetero_flag() {
        let line = hetatm_line(900, "O", "HOH", 'A', 301, [0.5, -0.5, 1.25]);
        let record = expect_atom(classify(&line, 1).unwrap());
        assert_eq!(record.residue_name, "HOH");
        assert!(record.atom.hetero);
        assert_eq!(record.atom.res_seq, 301);
    }

    #[test]
    fn classify_rejects_non_numeric_x_coordinate_with_line_number() {
        let mut line = atom_line(1, "N", "ALA", 'A', 1, [0.0, 0.0, 0.0]);
        line.replace_range(30..38, "  abc.de");
        let err = classify(&line, 17).unwrap_err();
        assert_eq!(err.line(), Some(17));
        assert_eq!(err.field(), Some("x"));
        match err {
            PdbError::Parse {
                kind: ParseErrorKind::InvalidFloat { value, columns, .. },
                ..
            } => {
                assert_eq!(value, "abc.de");
                assert_eq!(columns, "31-38");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn classify_rejects_nan_and_infinite_coordinates() {
        let mut nan_x = atom_line(1, "N", "ALA", 'A', 1, [0.0, 0.0, 0.0]);
        nan_x.replace_range(30..38, "     NaN");
        let err = classify(&nan_x, 4).unwrap_err();
        assert_eq!(err.line(), Some(4));
        assert_eq!(err.field(), Some("x"));

        let mut inf_y = atom_line(2, "CA", "ALA", 'A', 1, [0.0, 0.0, 0.0]);
        inf_y.replace_range(38..46, "     inf");
        let err = classify(&inf_y, 5).unwrap_err();
        assert_eq!(err.line(), Some(5));
        assert_eq!(err.field(), Some("y"));

        let mut infinite_b = atom_line(3, "C", "ALA", 'A', 1, [0.0, 0.0, 0.0]);
        infinite_b.replace_range(60..66, "  -inf");
        let err = classify(&infinite_b, 6).unwrap_err();
        assert_eq!(err.field(), Some("tempFactor"));
    }

    #[test]
    fn classify_rejects_non_numeric_serial_and_res_seq() {
        let mut line = atom_line(1, "N", "ALA", 'A', 1, [0.0, 0.0, 0.0]);
        line.replace_range(6..11, "  1x2");
        assert_eq!(classify(&line, 2).unwrap_err().field(), Some("serial"));

        let mut line = atom_line(1, "N", "ALA", 'A', 1, [0.0, 0.0, 0.0]);
        line.replace_range(22..26, "  ?1");
        assert_eq!(classify(&line, 3).unwrap_err().field(), Some("resSeq"));
    }

    #[test]
    fn classify_rejects_malformed_occupancy() {
        let line = format!("{}{}", &FULL_LINE[..54], "  x.00");
        let err = classify(&line, 9).unwrap_err();
        assert_eq!(err.field(), Some("occupancy"));
        assert_eq!(err.line(), Some(9));
    }

    #[test]
    fn classify_atom_line_missing_coordinates_is_a_parse_error() {
        let err = classify(&FULL_LINE[..30], 1).unwrap_err();
        assert_eq!(err.field(), Some("x"));
    }

    #[test]
    fn classify_structural_records() {
        assert_eq!(classify("TER", 1).unwrap(), Record::ChainTerminator);
        assert_eq!(
            classify("TER     100      GLY A  12", 1).unwrap(),
            Record::ChainTerminator
        );
        assert_eq!(classify("END", 1).unwrap(), Record::EndOfFile);
        assert_eq!(classify("END   ", 1).unwrap(), Record::EndOfFile);
        assert_eq!(classify("ENDMDL", 1).unwrap(), Record::ModelEnd);
        assert_eq!(
            classify("MODEL        2", 1).unwrap(),
            Record::ModelStart(Some(2))
        );
        assert_eq!(classify("MODEL", 1).unwrap(), Record::ModelStart(None));
        assert!(classify("MODEL        1", 1).unwrap().is_model_boundary());
    }

    #[test]
    fn classify_rejects_non_numeric_model_serial() {
        let err = classify("MODEL        A", 4).unwrap_err();
        assert_eq!(err.field(), Some("model serial"));
    }

    #[test]
    fn classify_title_records() {
        let header =
            "HEADER    VIRAL PROTEIN                           10-JUL-21   7V39              ";
        assert_eq!(
            classify(header, 1).unwrap(),
            Record::Header {
                classification: "VIRAL PROTEIN".to_string(),
                id_code: "7V39".to_string(),
            }
        );
        assert_eq!(
            classify("TITLE     CRYSTAL STRUCTURE OF A SPIKE", 2).unwrap(),
            Record::Title("CRYSTAL STRUCTURE OF A SPIKE".to_string())
        );
        assert_eq!(
            classify("COMPND   2 MOLECULE: SPIKE GLYCOPROTEIN;", 3).unwrap(),
            Record::Compound("MOLECULE: SPIKE GLYCOPROTEIN;".to_string())
        );
    }

    #[test]
    fn classify_short_and_unknown_lines_as_unrecognized() {
        assert_eq!(classify("", 1).unwrap(), Record::Unrecognized);
        assert_eq!(classify("AT", 1).unwrap(), Record::Unrecognized);
        assert_eq!(classify("REMARK   2 RESOLUTION.", 1).unwrap(), Record::Unrecognized);
        assert_eq!(
            classify("CONECT    1    2", 1).unwrap(),
            Record::Unrecognized
        );
        assert_eq!(classify("ATOMS ARE FUN", 1).unwrap(), Record::Unrecognized);
    }

    #[test]
    fn element_is_derived_from_atom_name_alignment() {
        assert_eq!(element_from_atom_name(" CA "), "C");
        assert_eq!(element_from_atom_name("CA  "), "CA");
        assert_eq!(element_from_atom_name("FE  "), "FE");
        assert_eq!(element_from_atom_name("1HG2"), "H");
        assert_eq!(element_from_atom_name("HG21"), "H");
        assert_eq!(element_from_atom_name(" O  "), "O");
        assert_eq!(element_from_atom_name(""), "");
    }

    #[test]
    fn explicit_element_column_wins_over_derivation() {
        let mut line = atom_line(1, "CA", "CA", 'A', 1, [0.0, 0.0, 0.0]);
        line.replace_range(76..78, "CA");
        let atom = expect_atom(classify(&line, 1).unwrap()).atom;
        assert_eq!(atom.element, "CA");
    }
}
