//! Fixed-column line builders shared by the reader tests.

fn record_line(
    record: &str,
    serial: usize,
    name: &str,
    res_name: &str,
    chain_id: char,
    res_seq: isize,
    position: [f64; 3],
) -> String {
    let name_field = if name.len() < 4 {
        format!(" {:<3}", name)
    } else {
        name.to_string()
    };
    format!(
        "{:<6}{:>5} {:<4} {:>3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}{:>14}",
        record,
        serial,
        name_field,
        res_name,
        chain_id,
        res_seq,
        position[0],
        position[1],
        position[2],
        1.0,
        20.0,
        ""
    )
}

pub fn atom_line(
    serial: usize,
    name: &str,
    res_name: &str,
    chain_id: char,
    res_seq: isize,
    position: [f64; 3],
) -> String {
    record_line("ATOM", serial, name, res_name, chain_id, res_seq, position)
}

pub fn hetatm_line(
    serial: usize,
    name: &str,
    res_name: &str,
    chain_id: char,
    res_seq: isize,
    position: [f64; 3],
) -> String {
    record_line("HETATM", serial, name, res_name, chain_id, res_seq, position)
}

/// Joins lines into file content with a trailing newline.
pub fn pdb_text(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
