//! Signature permutation tables
//!
//! A signature of S pages is printed K pages per sheet side, then the stacked
//! sheets are folded (and, for K = 4, cut horizontally) so the leaves read in
//! ascending order. Each table lists, in output order, the in-signature page
//! offset that must be emitted at that position.
//!
//! ## Duplex, 2 pages per sheet side
//!
//! Saddle-stitch nesting: the outermost sheet carries the first and last
//! pages, each sheet inward carries the next pair.
//!
//! **4 pages:** front [4, 1], back [2, 3]
//!
//! ## 4 pages per sheet side, cut horizontally
//!
//! Each sheet is cut into two booklet halves after printing, which interleaves
//! the inner pairs of consecutive half-sheets.
//!
//! **8 pages:** front [8, 1, 6, 3], back [2, 7, 4, 5]

use crate::types::{BookletError, Result};

use super::{PrintedSide, SheetSide};

// =============================================================================
// Tables
// =============================================================================

/// Signature sizes that have permutation tables
pub const SUPPORTED_SIGNATURE_SIZES: [usize; 4] = [4, 8, 16, 32];

/// Pages per sheet side that have permutation tables
pub const SUPPORTED_PAGES_PER_SHEET: [usize; 2] = [2, 4];

const DUPLEX_4: [usize; 4] = [3, 0, 1, 2];
const DUPLEX_8: [usize; 8] = [7, 0, 1, 6, 5, 2, 3, 4];
const DUPLEX_16: [usize; 16] = [15, 0, 1, 14, 13, 2, 3, 12, 11, 4, 5, 10, 9, 6, 7, 8];
const DUPLEX_32: [usize; 32] = [
    31, 0, 1, 30, 29, 2, 3, 28, 27, 4, 5, 26, 25, 6, 7, 24, //
    23, 8, 9, 22, 21, 10, 11, 20, 19, 12, 13, 18, 17, 14, 15, 16,
];

const CUT_4: [usize; 4] = [3, 0, 1, 2];
const CUT_8: [usize; 8] = [7, 0, 5, 2, 1, 6, 3, 4];
const CUT_16: [usize; 16] = [15, 0, 13, 2, 1, 14, 3, 12, 11, 4, 9, 6, 5, 10, 7, 8];
const CUT_32: [usize; 32] = [
    31, 0, 29, 2, 1, 30, 3, 28, 27, 4, 25, 6, 5, 26, 7, 24, //
    23, 8, 21, 10, 9, 22, 11, 20, 19, 12, 17, 14, 13, 18, 15, 16,
];

/// Look up the table for (pages per sheet, signature size)
fn lookup(pages_per_sheet: usize, signature_size: usize) -> Option<&'static [usize]> {
    match (pages_per_sheet, signature_size) {
        (2, 4) => Some(&DUPLEX_4),
        (2, 8) => Some(&DUPLEX_8),
        (2, 16) => Some(&DUPLEX_16),
        (2, 32) => Some(&DUPLEX_32),
        (4, 4) => Some(&CUT_4),
        (4, 8) => Some(&CUT_8),
        (4, 16) => Some(&CUT_16),
        (4, 32) => Some(&CUT_32),
        _ => None,
    }
}

/// Human-readable list of every supported (signature size, pages per sheet) pair
pub fn supported_configurations() -> String {
    SignatureKey::all()
        .map(|key| format!("{}/{}", key.signature_size(), key.pages_per_sheet()))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Signature Key
// =============================================================================

/// A validated (signature size, pages per sheet) pair with its table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureKey {
    signature_size: usize,
    pages_per_sheet: usize,
    table: &'static [usize],
}

impl SignatureKey {
    /// Resolve the permutation table for a signature size and pages-per-sheet.
    ///
    /// Zero values are rejected as `InvalidArgument`; any other pair without a
    /// table is `UnsupportedConfiguration`.
    pub fn new(signature_size: usize, pages_per_sheet: usize) -> Result<Self> {
        if signature_size == 0 {
            return Err(BookletError::InvalidArgument(
                "signature size must be positive".to_string(),
            ));
        }
        if pages_per_sheet == 0 {
            return Err(BookletError::InvalidArgument(
                "pages per sheet must be positive".to_string(),
            ));
        }

        let table = lookup(pages_per_sheet, signature_size).ok_or(
            BookletError::UnsupportedConfiguration {
                signature_size,
                pages_per_sheet,
            },
        )?;

        Ok(Self {
            signature_size,
            pages_per_sheet,
            table,
        })
    }

    /// Every supported key, ordered by pages per sheet then signature size
    pub fn all() -> impl Iterator<Item = SignatureKey> {
        SUPPORTED_PAGES_PER_SHEET.into_iter().flat_map(|k| {
            SUPPORTED_SIGNATURE_SIZES
                .into_iter()
                .filter_map(move |s| SignatureKey::new(s, k).ok())
        })
    }

    pub fn signature_size(self) -> usize {
        self.signature_size
    }

    pub fn pages_per_sheet(self) -> usize {
        self.pages_per_sheet
    }

    /// In-signature offsets in output order
    pub fn permutation(self) -> &'static [usize] {
        self.table
    }
}

// =============================================================================
// Page Ordering
// =============================================================================

/// Closed-form duplex saddle-stitch order for a signature of `signature_size`
/// pages.
///
/// Walking the leaves inward, even steps emit `(last - i, i)` and odd steps
/// emit `(i, last - i)`. Reproduces every 2-pages-per-sheet table.
pub fn saddle_stitch_order(signature_size: usize) -> Vec<usize> {
    let last = signature_size.saturating_sub(1);
    (0..signature_size / 2)
        .flat_map(|i| {
            if i % 2 == 0 {
                [last - i, i]
            } else {
                [i, last - i]
            }
        })
        .collect()
}

/// Absolute page indices, in output order, for a document of `page_count`
/// pages.
///
/// Each consecutive block of `signature_size` pages is emitted through the
/// table on its own; blocks never interleave. Indices past the end of the
/// document are skipped, so a trailing partial block still yields each of its
/// pages exactly once, in table order.
pub fn signature_order(page_count: usize, key: SignatureKey) -> Vec<usize> {
    let size = key.signature_size();
    (0..page_count.div_ceil(size))
        .flat_map(|block| {
            key.permutation()
                .iter()
                .map(move |&offset| block * size + offset)
        })
        .filter(|&index| index < page_count)
        .collect()
}

/// Reorder any page sequence into signature order
pub fn reorder<T: Clone>(pages: &[T], key: SignatureKey) -> Vec<T> {
    signature_order(pages.len(), key)
        .into_iter()
        .map(|index| pages[index].clone())
        .collect()
}

/// Largest supported signature size that does not exceed the page count
pub fn suggest_signature_size(total_pages: usize) -> Option<usize> {
    SUPPORTED_SIGNATURE_SIZES
        .into_iter()
        .rev()
        .find(|&size| total_pages >= size)
}

/// Group a signature's table into printed sheet sides.
///
/// Consecutive runs of `pages_per_sheet` entries form one side; sides
/// alternate front and back, two per sheet.
pub fn printed_sides(key: SignatureKey) -> Vec<PrintedSide> {
    key.permutation()
        .chunks(key.pages_per_sheet())
        .enumerate()
        .map(|(i, chunk)| PrintedSide {
            sheet: i / 2,
            side: if i % 2 == 0 {
                SheetSide::Front
            } else {
                SheetSide::Back
            },
            pages: chunk.to_vec(),
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(table: &[usize]) -> Vec<usize> {
        let mut v = table.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_every_table_is_a_permutation() {
        for key in SignatureKey::all() {
            let expected: Vec<usize> = (0..key.signature_size()).collect();
            assert_eq!(sorted(key.permutation()), expected, "{key:?}");
        }
    }

    #[test]
    fn test_supported_set_is_complete() {
        assert_eq!(SignatureKey::all().count(), 8);
        for key in SignatureKey::all() {
            assert_eq!(key.signature_size() % key.pages_per_sheet(), 0);
        }
    }

    #[test]
    fn test_closed_form_matches_duplex_32() {
        assert_eq!(
            saddle_stitch_order(32),
            vec![
                31, 0, 1, 30, 29, 2, 3, 28, 27, 4, 5, 26, 25, 6, 7, 24, 23, 8, 9, 22, 21, 10, 11,
                20, 19, 12, 13, 18, 17, 14, 15, 16
            ]
        );
        assert_eq!(saddle_stitch_order(32), DUPLEX_32.to_vec());
    }

    #[test]
    fn test_closed_form_matches_smaller_duplex_tables() {
        assert_eq!(saddle_stitch_order(4), DUPLEX_4.to_vec());
        assert_eq!(saddle_stitch_order(8), DUPLEX_8.to_vec());
        assert_eq!(saddle_stitch_order(16), DUPLEX_16.to_vec());
    }

    #[test]
    fn test_sixteen_page_tables_differ_by_layout() {
        let duplex = SignatureKey::new(16, 2).unwrap();
        let cut = SignatureKey::new(16, 4).unwrap();
        assert_eq!(
            duplex.permutation(),
            &[15, 0, 1, 14, 13, 2, 3, 12, 11, 4, 5, 10, 9, 6, 7, 8]
        );
        assert_eq!(
            cut.permutation(),
            &[15, 0, 13, 2, 1, 14, 3, 12, 11, 4, 9, 6, 5, 10, 7, 8]
        );
    }

    #[test]
    fn test_duplex_front_back_pairs() {
        // Each side-by-side pair takes one page from each end of the signature
        for key in SignatureKey::all().filter(|k| k.pages_per_sheet() == 2) {
            let last = key.signature_size() - 1;
            for pair in key.permutation().chunks(2) {
                assert_eq!(pair[0] + pair[1], last, "{key:?}");
            }
        }
    }

    #[test]
    fn test_printed_sides_folio() {
        let sides = printed_sides(SignatureKey::new(4, 2).unwrap());
        assert_eq!(sides.len(), 2);
        assert_eq!(sides[0].sheet, 0);
        assert_eq!(sides[0].side, SheetSide::Front);
        assert_eq!(sides[0].pages, vec![3, 0]);
        assert_eq!(sides[1].side, SheetSide::Back);
        assert_eq!(sides[1].pages, vec![1, 2]);
    }

    #[test]
    fn test_printed_sides_cut_sixteen() {
        let sides = printed_sides(SignatureKey::new(16, 4).unwrap());
        assert_eq!(sides.len(), 4);
        assert_eq!(sides[3].sheet, 1);
        assert_eq!(sides[3].side, SheetSide::Back);
        assert_eq!(sides[3].pages, vec![5, 10, 7, 8]);
    }
}
