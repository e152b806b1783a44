// src/io/mod.rs
pub mod poscar;

use crate::model::Structure;
use std::io;

pub fn load_structure(path: &str) -> io::Result<Structure> {
    // POSCAR/CONTCAR is the only format this tool consumes
    poscar::parse(path)
}

pub fn save_structure(path: &str, structure: &Structure) -> io::Result<()> {
    poscar::write(path, structure)
}
