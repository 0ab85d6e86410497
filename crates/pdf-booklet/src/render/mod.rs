//! PDF content operations
//!
//! - Reading page geometry from MediaBox entries
//! - Overlaying page numbers onto existing pages

mod geometry;
mod page_numbers;

pub use geometry::{media_box, page_dimensions};
pub use page_numbers::stamp_page_numbers;
