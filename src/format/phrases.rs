//! Fixed phrases used by the convenience entry points.

pub const HELLO: &str = "Hello";
pub const YES: &str = "Yes";
pub const NO: &str = "No";
pub const VALID: &str = "Valid";
pub const INVALID: &str = "Invalid";
pub const TRUE: &str = "True";
pub const FALSE: &str = "False";
