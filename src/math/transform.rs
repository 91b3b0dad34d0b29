use super::{Matrix, Quat, Rotator, Vector};
use serde::{Deserialize, Serialize};

/// Rotation, translation and non-uniform scale, applied scale -> rotate -> translate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub rotation: Quat,
    pub translation: Vector,
    pub scale: Vector,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform::new(Quat::IDENTITY, Vector::ZERO, Vector::ONE);

    pub const fn new(rotation: Quat, translation: Vector, scale: Vector) -> Self {
        Self {
            rotation,
            translation,
            scale,
        }
    }

    pub fn from_rotator(rotator: Rotator, translation: Vector, scale: Vector) -> Self {
        Self::new(rotator.quaternion(), translation, scale)
    }

    pub fn from_translation(translation: Vector) -> Self {
        Self::new(Quat::IDENTITY, translation, Vector::ONE)
    }

    pub fn rotator(&self) -> Rotator {
        Rotator::from_quat(self.rotation)
    }

    pub fn to_matrix(&self) -> Matrix {
        Matrix::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    pub fn transform_position(&self, v: Vector) -> Vector {
        self.to_matrix().transform_point3(v)
    }
}
