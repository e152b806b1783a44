// src/physics/mod.rs

pub mod classification;
pub mod collapse;

// Re-export commonly used items
pub use classification::{multiplier, Variant};
pub use collapse::{beta_to_omega, CollapseSettings};
