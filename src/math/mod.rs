//! Engine math value types.
//!
//! Vectors, quaternions and matrices are glam's `f64` types. The engine's matrix
//! convention (row vectors, translation in the last row) is glam's column-major layout
//! read column by column, so `Matrix::to_cols_array_2d` yields the engine's rows.
//!
//! What glam does not have lives here: the Euler [`Rotator`] in degrees with its
//! quaternion conversion, and the scale/rotation/translation [`Transform`]. Textual
//! forms live in `format::describe`.

pub mod rotator;
pub mod transform;

pub use glam::{DMat4 as Matrix, DQuat as Quat, DVec3 as Vector};
pub use rotator::Rotator;
pub use transform::Transform;
