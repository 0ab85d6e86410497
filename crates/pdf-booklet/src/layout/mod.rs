//! Page ordering calculations for booklet signatures
//!
//! Everything in here is pure arithmetic over page indices:
//! - Permutation tables per (signature size, pages per sheet)
//! - Padding to a whole number of signatures
//! - Grouping a signature into printed sheet sides

mod padding;
mod signature;
mod types;

pub use padding::*;
pub use signature::*;
pub use types::*;
