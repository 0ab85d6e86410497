use crate::layout::padded_page_count;
use crate::options::BookletOptions;
use crate::types::*;
use lopdf::Document;

/// Calculate statistics for a booklet run without modifying the document
pub fn calculate_statistics(
    document: &Document,
    options: &BookletOptions,
) -> Result<BookletStatistics> {
    let key = options.signature_key()?;
    let source_pages = document.get_pages().len();

    if source_pages == 0 {
        return Err(BookletError::NoPages);
    }

    let output_pages = padded_page_count(source_pages, key.signature_size())?;
    let blank_pages_added = output_pages - source_pages;
    let signatures = output_pages / key.signature_size();

    // Each sheet is printed on both sides
    let sheets = output_pages.div_ceil(key.pages_per_sheet() * 2);

    Ok(BookletStatistics {
        source_pages,
        blank_pages_added,
        signatures,
        output_pages,
        sheets,
    })
}
