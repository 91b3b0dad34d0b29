//! Value formatting.
//!
//! Everything the router can log goes through [`Describe`]. Numbers of every width are
//! folded into the tagged [`Number`] first, the engine math types have one impl each, and
//! a few wrappers ([`Percent`], [`ExpandedTransform`]) select alternate renderings.

pub mod describe;
pub mod name;
pub mod number;
pub mod phrases;
pub mod validity;

pub use describe::{Describe, ExpandedTransform, Percent, compose};
pub use name::Name;
pub use number::Number;
pub use validity::Validity;
