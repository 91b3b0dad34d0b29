use super::Quat;
use serde::{Deserialize, Serialize};

/// Pitch is clamped to +/-90 degrees once the test value crosses this.
const SINGULARITY_THRESHOLD: f64 = 0.499_999_5;

/// Euler rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotator {
    /// Rotation around the right axis (looking up and down)
    pub pitch: f64,
    /// Rotation around the up axis (turning left and right)
    pub yaw: f64,
    /// Rotation around the forward axis (tilting the head)
    pub roll: f64,
}

impl Rotator {
    pub const ZERO: Rotator = Rotator::new(0.0, 0.0, 0.0);

    pub const fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Clamp an angle to `[0, 360)`.
    pub fn clamp_axis(angle: f64) -> f64 {
        let angle = angle % 360.0;
        if angle < 0.0 { angle + 360.0 } else { angle }
    }

    /// Normalize an angle to `(-180, 180]`.
    pub fn normalize_axis(angle: f64) -> f64 {
        let angle = Self::clamp_axis(angle);
        if angle > 180.0 { angle - 360.0 } else { angle }
    }

    pub fn normalized(self) -> Self {
        Self::new(
            Self::normalize_axis(self.pitch),
            Self::normalize_axis(self.yaw),
            Self::normalize_axis(self.roll),
        )
    }

    pub fn quaternion(self) -> Quat {
        let half = std::f64::consts::PI / 360.0;
        let (sp, cp) = (self.pitch % 360.0 * half).sin_cos();
        let (sy, cy) = (self.yaw % 360.0 * half).sin_cos();
        let (sr, cr) = (self.roll % 360.0 * half).sin_cos();

        Quat::from_xyzw(
            cr * sp * sy - sr * cp * cy,
            -cr * sp * cy - sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
            cr * cp * cy + sr * sp * sy,
        )
    }

    /// Euler angles for `q`, yaw and roll in `(-180, 180]`.
    pub fn from_quat(q: Quat) -> Self {
        let rad_to_deg = 180.0 / std::f64::consts::PI;
        let singularity_test = q.z * q.x - q.w * q.y;
        let yaw_y = 2.0 * (q.w * q.z + q.x * q.y);
        let yaw_x = 1.0 - 2.0 * (q.y * q.y + q.z * q.z);
        let yaw = yaw_y.atan2(yaw_x) * rad_to_deg;

        if singularity_test < -SINGULARITY_THRESHOLD {
            let roll = Self::normalize_axis(-yaw - 2.0 * q.x.atan2(q.w) * rad_to_deg);
            Self::new(-90.0, yaw, roll)
        } else if singularity_test > SINGULARITY_THRESHOLD {
            let roll = Self::normalize_axis(yaw - 2.0 * q.x.atan2(q.w) * rad_to_deg);
            Self::new(90.0, yaw, roll)
        } else {
            let pitch = (2.0 * singularity_test).clamp(-1.0, 1.0).asin() * rad_to_deg;
            // + 0.0 folds -0.0 so an identity rotation prints as zero
            let roll = (-2.0 * (q.w * q.x + q.y * q.z))
                .atan2(1.0 - 2.0 * (q.x * q.x + q.y * q.y))
                * rad_to_deg
                + 0.0;
            Self::new(pitch, yaw, roll)
        }
    }

    pub fn is_nearly_equal(self, other: Rotator, tolerance: f64) -> bool {
        let diff = |a: f64, b: f64| Self::normalize_axis(a - b).abs() <= tolerance;
        diff(self.pitch, other.pitch) && diff(self.yaw, other.yaw) && diff(self.roll, other.roll)
    }
}

impl From<Quat> for Rotator {
    fn from(q: Quat) -> Self {
        Self::from_quat(q)
    }
}
