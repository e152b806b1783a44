use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Atom {
    // Fractional (direct) coordinates along a, b, c in [0, 1].
    pub position: [f64; 3],
    // 1-based ordinal reflecting input order. Traceability only,
    // never consulted by the classification rules.
    pub index: usize,
    // Signed displacement applied on the last transformation pass.
    #[serde(skip)]
    pub shift: f64,
}

impl Atom {
    pub fn new(index: usize, position: [f64; 3]) -> Self {
        Self {
            position,
            index,
            shift: 0.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Structure {
    // The 9 POSCAR header lines, kept verbatim and written back unmodified.
    pub header: Vec<String>,
    pub atoms: Vec<Atom>,
}
