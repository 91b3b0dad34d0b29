use std::fmt;

/// Any loggable number, tagged by kind.
///
/// Integer widths collapse into `Int`/`UInt`. `f32` keeps its own variant so that it
/// prints with single-precision shortest form (`0.1`, not `0.10000000149011612`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f32),
    Double(f64),
}

macro_rules! impl_from_number {
    ($variant:ident($target:ty): $($source:ty),+) => {
        $(
            impl From<$source> for Number {
                fn from(value: $source) -> Self {
                    Number::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from_number!(Int(i64): i8, i16, i32, i64);
impl_from_number!(UInt(u64): u8, u16, u32, u64);
impl_from_number!(Float(f32): f32);
impl_from_number!(Double(f64): f64);

impl From<isize> for Number {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        Number::Int(value as i64)
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number::UInt(value as u64)
    }
}

impl Number {
    pub fn is_integer(self) -> bool {
        matches!(self, Number::Int(_) | Number::UInt(_))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            Number::UInt(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v}"),
            Number::Double(v) => write!(f, "{v}"),
        }
    }
}
