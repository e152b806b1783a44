// src/io/poscar.rs

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::model::{Atom, Structure};

// POSCAR preamble: comment, scale, 3 lattice vectors, elements, counts,
// "Selective dynamics", "Direct". Passed through verbatim.
const HEADER_LINES: usize = 9;

pub fn parse(path: &str) -> io::Result<Structure> {
    let file = File::open(Path::new(path))?;
    parse_from(io::BufReader::new(file))
}

pub fn parse_from<R: BufRead>(reader: R) -> io::Result<Structure> {
    let mut header: Vec<String> = Vec::with_capacity(HEADER_LINES);
    let mut atoms: Vec<Atom> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;

        if i < HEADER_LINES {
            header.push(line);
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Position line {} has fewer than 3 fields", i + 1),
            ));
        }

        let mut position = [0.0; 3];
        for (axis, field) in parts.iter().take(3).enumerate() {
            position[axis] = field.parse::<f64>().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("Invalid coordinate '{}' on line {}", field, i + 1),
                )
            })?;
        }

        atoms.push(Atom::new(atoms.len() + 1, position));
    }

    if header.len() < HEADER_LINES {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Truncated header: expected {} lines", HEADER_LINES),
        ));
    }

    log::info!("Parsed {} atoms", atoms.len());
    Ok(Structure { header, atoms })
}

pub fn write(path: &str, structure: &Structure) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = io::BufWriter::new(file);
    write_to(&mut writer, structure)
}

pub fn write_to<W: Write>(writer: &mut W, structure: &Structure) -> io::Result<()> {
    // 1. Header, untouched
    for line in &structure.header {
        writeln!(writer, "{}", line)?;
    }

    // 2. One line per atom, 6-decimal direct coordinates.
    // All axes stay relaxable, hence the fixed "T T T".
    for atom in &structure.atoms {
        writeln!(
            writer,
            "  {:.6}  {:.6}  {:.6}  T T T",
            atom.position[0], atom.position[1], atom.position[2]
        )?;
    }

    Ok(())
}
