//! Reordering a document into signature order

use super::pages::PageList;
use crate::layout::{SignatureKey, signature_order};
use crate::types::*;
use lopdf::Document;

/// Result of reordering a document's pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderOutcome {
    /// Signatures emitted, including a trailing partial one
    pub signatures: usize,
    /// Pages in the reordered document
    pub pages: usize,
    /// Whether the last signature was short of `signature_size` pages.
    ///
    /// Its pages are still emitted once each in table order, but that order
    /// does not fold into a correct booklet. Pad first to avoid this.
    pub partial_signature: bool,
}

/// Rewrite the page order of `doc` into signature order for `key`.
///
/// Page objects are moved, never copied or altered.
pub fn reorder_document(doc: &mut Document, key: SignatureKey) -> Result<ReorderOutcome> {
    let mut list = PageList::flatten(doc)?;
    let total = list.len();
    let size = key.signature_size();

    let partial_signature = total % size != 0;
    if partial_signature {
        log::warn!(
            "{} pages is not a multiple of the {}-page signature; the last {} page(s) will not fold correctly",
            total,
            size,
            total % size
        );
    }

    let signatures = total.div_ceil(size);
    for block in 0..signatures {
        let start = block * size;
        let end = (start + size).min(total);
        log::debug!(
            "Signature {}/{}: pages {}-{} with order {:?}",
            block + 1,
            signatures,
            start + 1,
            end,
            key.permutation()
        );
    }

    let order = signature_order(total, key);
    let reordered = order.iter().map(|&index| list.pages[index]).collect();
    list.set_pages(doc, reordered)?;

    Ok(ReorderOutcome {
        signatures,
        pages: list.len(),
        partial_signature,
    })
}
