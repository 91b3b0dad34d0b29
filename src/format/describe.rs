use super::phrases::{FALSE, TRUE};
use super::{Name, Number};
use crate::domain::LinearColor;
use crate::math::{Matrix, Quat, Rotator, Transform, Vector};
use std::fmt::Write;

/// A value that can render itself as log text.
///
/// Implementors append to a caller-owned buffer so prefix, body and suffix share one
/// allocation.
pub trait Describe {
    fn describe_into(&self, out: &mut String);

    fn describe(&self) -> String {
        let mut out = String::new();
        self.describe_into(&mut out);
        out
    }
}

/// `prefix + value + suffix`, with no separators.
pub fn compose<D: Describe + ?Sized>(prefix: &str, value: &D, suffix: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + suffix.len() + 16);
    out.push_str(prefix);
    value.describe_into(&mut out);
    out.push_str(suffix);
    out
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe_into(&self, out: &mut String) {
        (**self).describe_into(out);
    }
}

impl Describe for str {
    fn describe_into(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Describe for String {
    fn describe_into(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Describe for Name {
    fn describe_into(&self, out: &mut String) {
        out.push_str(self.as_str());
    }
}

impl Describe for bool {
    fn describe_into(&self, out: &mut String) {
        out.push_str(if *self { TRUE } else { FALSE });
    }
}

impl Describe for Number {
    fn describe_into(&self, out: &mut String) {
        let _ = write!(out, "{self}");
    }
}

macro_rules! describe_as_number {
    ($($ty:ty),+) => {
        $(
            impl Describe for $ty {
                fn describe_into(&self, out: &mut String) {
                    Number::from(*self).describe_into(out);
                }
            }
        )+
    };
}

describe_as_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// A number followed directly by `%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percent(pub f32);

impl Describe for Percent {
    fn describe_into(&self, out: &mut String) {
        Number::Float(self.0).describe_into(out);
        out.push('%');
    }
}

impl Describe for Vector {
    fn describe_into(&self, out: &mut String) {
        let _ = write!(out, "X={:.3} Y={:.3} Z={:.3}", self.x, self.y, self.z);
    }
}

impl Describe for Rotator {
    fn describe_into(&self, out: &mut String) {
        let _ = write!(out, "P={:.6} Y={:.6} R={:.6}", self.pitch, self.yaw, self.roll);
    }
}

impl Describe for Quat {
    fn describe_into(&self, out: &mut String) {
        let _ = write!(
            out,
            "X={:.9} Y={:.9} Z={:.9} W={:.9}",
            self.x, self.y, self.z, self.w
        );
    }
}

impl Describe for Matrix {
    fn describe_into(&self, out: &mut String) {
        // Engine rows are glam columns: the three axes, then the translation
        for row in self.to_cols_array_2d() {
            let _ = write!(out, "[{} {} {} {}] ", row[0], row[1], row[2], row[3]);
        }
    }
}

impl Describe for LinearColor {
    fn describe_into(&self, out: &mut String) {
        let _ = write!(
            out,
            "(R={:.6},G={:.6},B={:.6},A={:.6})",
            self.r, self.g, self.b, self.a
        );
    }
}

/// Compact form: `tx,ty,tz|pitch,yaw,roll|sx,sy,sz`.
impl Describe for Transform {
    fn describe_into(&self, out: &mut String) {
        let t = self.translation;
        let r = self.rotator();
        let s = self.scale;
        let _ = write!(
            out,
            "{:.6},{:.6},{:.6}|{:.6},{:.6},{:.6}|{:.6},{:.6},{:.6}",
            t.x, t.y, t.z, r.pitch, r.yaw, r.roll, s.x, s.y, s.z
        );
    }
}

/// Multi-line transform: translation, rotation and scale each on their own line.
#[derive(Debug, Clone, Copy)]
pub struct ExpandedTransform<'a>(pub &'a Transform);

impl Describe for ExpandedTransform<'_> {
    fn describe_into(&self, out: &mut String) {
        out.push_str("Translation: ");
        self.0.translation.describe_into(out);
        out.push_str("\nRotation: ");
        self.0.rotator().describe_into(out);
        out.push_str("\nScale: ");
        self.0.scale.describe_into(out);
    }
}
