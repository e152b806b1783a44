// src/physics/collapse.rs
//
// Applies the classified shift to every atom of the collection. The
// per-atom step is independent of every other atom, so the pass runs
// as a parallel map.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::model::Structure;
use crate::physics::classification::{self, Variant};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollapseSettings {
    /// 1.0 = full collapse, 2.0 = half collapse
    #[serde(default = "default_factor")]
    pub factor: f64,
    /// Explicit shift magnitude, replacing the derived delta when set
    #[serde(default)]
    pub delta_override: Option<f64>,
}

fn default_factor() -> f64 {
    1.0
}

impl Default for CollapseSettings {
    fn default() -> Self {
        Self {
            factor: 1.0,
            delta_override: None,
        }
    }
}

impl CollapseSettings {
    /// Per-axis shift magnitude: ((1/6)/3)/2 divided by the collapse
    /// factor, i.e. 1/36 for a full collapse.
    pub fn delta(&self) -> f64 {
        self.delta_override
            .unwrap_or_else(|| ((1.0 / 6.0) / 3.0 / 2.0) / self.factor)
    }
}

// Sign of delta*m along each axis. The sum-based variants shift all
// three axes in phase; for the axis-based variants the b axis
// compensates elastically, moving against a and c.
fn axis_signs(variant: Variant) -> [f64; 3] {
    match variant {
        Variant::Omega1 | Variant::Omega2 => [1.0, 1.0, 1.0],
        Variant::Omega3 | Variant::Omega4 => [1.0, -1.0, 1.0],
    }
}

/// Shift every atom in place according to `variant`. Order and count
/// of the collection are preserved; each atom's `shift` records the
/// signed displacement it received.
pub fn beta_to_omega(structure: &mut Structure, variant: Variant, settings: &CollapseSettings) {
    let delta = settings.delta();
    let signs = axis_signs(variant);

    structure.atoms.par_iter_mut().for_each(|atom| {
        let m = classification::multiplier(atom, variant);
        atom.shift = delta * m as f64;
        for axis in 0..3 {
            atom.position[axis] += signs[axis] * atom.shift;
        }
    });

    let shifted = structure.atoms.iter().filter(|a| a.shift != 0.0).count();
    log::info!(
        "Applied {:?} with delta {:.6}: {} atoms shifted, {} invariant",
        variant,
        delta,
        shifted,
        structure.atoms.len() - shifted
    );
}
