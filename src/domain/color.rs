use glam::Vec4;
use serde::{Deserialize, Serialize};

/// Linear-space RGBA color with `f32` channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LinearColor {
    pub const WHITE: LinearColor = LinearColor::rgb(1.0, 1.0, 1.0);
    pub const BLACK: LinearColor = LinearColor::rgb(0.0, 0.0, 0.0);
    pub const RED: LinearColor = LinearColor::rgb(1.0, 0.0, 0.0);
    pub const DARK_RED: LinearColor = LinearColor::rgb(0.5, 0.0, 0.0);
    pub const GREEN: LinearColor = LinearColor::rgb(0.0, 1.0, 0.0);
    pub const YELLOW: LinearColor = LinearColor::rgb(1.0, 1.0, 0.0);
    pub const CYAN: LinearColor = LinearColor::rgb(0.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Quantize to 8-bit channels, clamping out-of-range values.
    pub fn to_rgba8(self) -> [u8; 4] {
        let scaled = (Vec4::from(self).clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();
        scaled.to_array().map(|c| c as u8)
    }
}

impl From<LinearColor> for Vec4 {
    fn from(color: LinearColor) -> Self {
        Vec4::new(color.r, color.g, color.b, color.a)
    }
}

impl From<Vec4> for LinearColor {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgba8_clamps() {
        assert_eq!(LinearColor::CYAN.to_rgba8(), [0, 255, 255, 255]);
        assert_eq!(LinearColor::new(2.0, -1.0, 0.5, 1.0).to_rgba8(), [255, 0, 128, 255]);
    }

    #[test]
    fn test_vec4_conversion_keeps_channel_order() {
        let color = LinearColor::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(Vec4::from(color), Vec4::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(LinearColor::from(Vec4::from(color)), color);
    }
}
