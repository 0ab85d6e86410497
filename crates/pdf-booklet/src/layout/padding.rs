//! Padding arithmetic

use crate::types::{BookletError, Result};

/// Number of blank pages needed to bring `page_count` up to a multiple of
/// `signature_size`.
///
/// Always in `[0, signature_size)`. A zero signature size is rejected.
pub fn blanks_needed(page_count: usize, signature_size: usize) -> Result<usize> {
    if signature_size == 0 {
        return Err(BookletError::InvalidArgument(
            "signature size must be positive".to_string(),
        ));
    }
    Ok((signature_size - page_count % signature_size) % signature_size)
}

/// Page count after padding
pub fn padded_page_count(page_count: usize, signature_size: usize) -> Result<usize> {
    Ok(page_count + blanks_needed(page_count, signature_size)?)
}
