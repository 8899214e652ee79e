pub mod matrix;
pub mod vector;

pub use matrix::{Matrix3, rotate};
pub use vector::{Vector3, add};

/// The golden ratio φ = (1 + √5) / 2
pub fn golden_ratio() -> f64 {
    (1.0 + 5.0_f64.sqrt()) / 2.0
}
