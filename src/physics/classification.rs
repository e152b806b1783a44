// src/physics/classification.rs
//
// Classifies one atom of a beta-phase 3x3x3 bcc supercell into a shift
// multiplier m in {-1, 0, +1}. Four variants exist, one per historical
// convention for the beta -> omega relationship; the caller selects
// exactly one. Variants 1-2 classify on the coordinate sum, variants
// 3-4 on the c coordinate and the a-b difference.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::model::Atom;

/// Absolute tolerance for matching rescaled coordinates against the
/// integer reference grid. Coordinates originate from 6-decimal text,
/// so the comparands sit within ~1e-5 of their targets; bucket spacing
/// is 1, so 1e-4 stays unambiguous.
pub const TOLERANCE: f64 = 1e-4;

/// Map a sixth-index k (0..=6) onto the fractional coordinate k/6,
/// the beta reference grid along each axis.
pub fn scale(k: i64) -> f64 {
    k as f64 / 6.0
}

pub fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Omega1,
    Omega2,
    Omega3,
    Omega4,
}

/// Shift multiplier for one atom under one variant.
///
/// Returns 0 when the atom matches no reference bucket; out-of-lattice
/// positions are left invariant rather than rejected.
pub fn multiplier(atom: &Atom, variant: Variant) -> i32 {
    match variant {
        Variant::Omega1 => sum_rule(atom, [0, 1, -1]),
        Variant::Omega2 => sum_rule(atom, [1, -1, 0]),
        Variant::Omega3 => axis_rule(atom, 1),
        Variant::Omega4 => axis_rule(atom, -1),
    }
}

// Sum-based rule (variants 1-2). s = 6(a+b+c) falls into one of three
// integer buckets; `table` holds the multipliers for them in order:
//   table[0]:    02,05,08,11,14
//   table[1]: 00,03,06,09,12,15,18
//   table[2]:    04,07,10,13,16
fn sum_rule(atom: &Atom, table: [i32; 3]) -> i32 {
    let s = 6.0 * (atom.position[0] + atom.position[1] + atom.position[2]);
    let k = s.round() as i64;
    if !is_close(s, k as f64) {
        return unclassified(atom);
    }

    match k {
        2 | 5 | 8 | 11 | 14 => table[0],
        0 | 3 | 6 | 9 | 12 | 15 | 18 => table[1],
        4 | 7 | 10 | 13 | 16 => table[2],
        _ => unclassified(atom),
    }
}

// Axis-based rule (variants 3-4), keyed on the sixth the c coordinate
// sits on and on d = 6(a-b). Each c-group carries a (base, override,
// residual) multiplier triple selected by d ~ 0, d ~ -2 or +4, and
// anything else respectively. Variant 4 negates every multiplier of
// variant 3, which `sign` expresses.
fn axis_rule(atom: &Atom, sign: i32) -> i32 {
    let c = atom.position[2];
    let group = match (0..=6).find(|&k| is_close(c, scale(k))) {
        Some(k) => k % 3,
        None => return unclassified(atom),
    };

    let (base, over, residual) = match group {
        2 => (0, 1, -1), // c in {2/6, 5/6}: naturally invariant
        0 => (1, -1, 0), // c in {0, 3/6, 1}: shifted up
        _ => (-1, 0, 1), // c in {1/6, 4/6}: shifted down
    };

    let d = 6.0 * (atom.position[0] - atom.position[1]);
    let m = if is_close(d, 0.0) {
        base
    } else if is_close(d, -2.0) || is_close(d, 4.0) {
        over
    } else {
        residual
    };

    sign * m
}

fn unclassified(atom: &Atom) -> i32 {
    log::debug!(
        "Atom {} at ({:.6}, {:.6}, {:.6}) matches no reference bucket, leaving it invariant",
        atom.index,
        atom.position[0],
        atom.position[1],
        atom.position[2]
    );
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(a: f64, b: f64, c: f64) -> Atom {
        Atom::new(1, [a, b, c])
    }

    #[test]
    fn test_sum_up_bucket() {
        // 6(a+b+c) = 3
        let a = atom(0.0, 1.0 / 6.0, 1.0 / 3.0);
        assert_eq!(multiplier(&a, Variant::Omega1), 1);
        assert_eq!(multiplier(&a, Variant::Omega2), -1);
    }

    #[test]
    fn test_sum_invariant_bucket() {
        // 6(a+b+c) = 2
        let a = atom(0.0, 1.0 / 6.0, 1.0 / 6.0);
        assert_eq!(multiplier(&a, Variant::Omega1), 0);
        assert_eq!(multiplier(&a, Variant::Omega2), 1);
    }

    #[test]
    fn test_sum_down_bucket() {
        // 6(a+b+c) = 4
        let a = atom(1.0 / 6.0, 1.0 / 6.0, 1.0 / 3.0);
        assert_eq!(multiplier(&a, Variant::Omega1), -1);
        assert_eq!(multiplier(&a, Variant::Omega2), 0);
    }

    #[test]
    fn test_sum_gap_integer_is_unclassified() {
        // s = 1 is an integer but belongs to no bucket
        let a = atom(0.0, 0.0, 1.0 / 6.0);
        assert_eq!(multiplier(&a, Variant::Omega1), 0);
        assert_eq!(multiplier(&a, Variant::Omega2), 0);
    }

    #[test]
    fn test_sum_non_integer_is_unclassified() {
        let a = atom(0.05, 0.05, 0.05);
        assert_eq!(multiplier(&a, Variant::Omega1), 0);
        assert_eq!(multiplier(&a, Variant::Omega2), 0);
    }

    #[test]
    fn test_sum_tolerates_truncated_decimals() {
        // 0.166666 x 3 sums to 2.999988 / 6ths, still bucket 3
        let a = atom(0.166666, 0.166666, 0.166666);
        assert_eq!(multiplier(&a, Variant::Omega1), 1);
    }

    #[test]
    fn test_axis_base_invariant_group() {
        // c = 2/6, d = 0
        let a = atom(0.5, 0.5, 1.0 / 3.0);
        assert_eq!(multiplier(&a, Variant::Omega3), 0);
        assert_eq!(multiplier(&a, Variant::Omega4), 0);
    }

    #[test]
    fn test_axis_base_up_group() {
        // c = 3/6, d = 0
        let a = atom(0.5, 0.5, 0.5);
        assert_eq!(multiplier(&a, Variant::Omega3), 1);
        assert_eq!(multiplier(&a, Variant::Omega4), -1);
    }

    #[test]
    fn test_axis_base_down_group() {
        // c = 1/6, d = 0
        let a = atom(1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0);
        assert_eq!(multiplier(&a, Variant::Omega3), -1);
        assert_eq!(multiplier(&a, Variant::Omega4), 1);
    }

    #[test]
    fn test_axis_override_branch() {
        // c = 3/6, d = -2
        let a = atom(0.0, 1.0 / 3.0, 0.5);
        assert_eq!(multiplier(&a, Variant::Omega3), -1);
        assert_eq!(multiplier(&a, Variant::Omega4), 1);

        // c = 3/6, d = +4
        let b = atom(5.0 / 6.0, 1.0 / 6.0, 0.5);
        assert_eq!(multiplier(&b, Variant::Omega3), -1);
        assert_eq!(multiplier(&b, Variant::Omega4), 1);
    }

    #[test]
    fn test_axis_residual_branch() {
        // c = 2/6, d = 1: neither the base nor the override case
        let a = atom(1.0 / 6.0, 0.0, 1.0 / 3.0);
        assert_eq!(multiplier(&a, Variant::Omega3), -1);
        assert_eq!(multiplier(&a, Variant::Omega4), 1);
    }

    #[test]
    fn test_axis_off_grid_c_is_unclassified() {
        let a = atom(0.5, 0.5, 0.25);
        assert_eq!(multiplier(&a, Variant::Omega3), 0);
        assert_eq!(multiplier(&a, Variant::Omega4), 0);
    }

    #[test]
    fn test_variant4_negates_variant3_on_grid() {
        // Every sixth-grid position in the cell
        for i in 0..=6 {
            for j in 0..=6 {
                for k in 0..=6 {
                    let a = atom(scale(i), scale(j), scale(k));
                    let m3 = multiplier(&a, Variant::Omega3);
                    let m4 = multiplier(&a, Variant::Omega4);
                    assert_eq!(m4, -m3, "at sixths ({}, {}, {})", i, j, k);
                }
            }
        }
    }

    #[test]
    fn test_classification_is_deterministic() {
        let a = atom(0.166666, 0.333333, 0.5);
        for variant in [
            Variant::Omega1,
            Variant::Omega2,
            Variant::Omega3,
            Variant::Omega4,
        ] {
            assert_eq!(multiplier(&a, variant), multiplier(&a, variant));
        }
    }
}
