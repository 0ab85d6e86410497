//! Booklet preparation pipeline
//!
//! This module orchestrates the three document stages:
//! 1. Stamp page numbers (optional, original pages only)
//! 2. Pad with blank pages to a whole number of signatures
//! 3. Reorder pages into signature print order

mod io;
mod padding;
mod pages;
mod reorder;

pub use io::{
    default_output_path, load_pdf, resolve_input_path, resolve_output_path, save_pdf,
};
pub use padding::pad_document;
pub(crate) use pages::PageList;
pub use reorder::{ReorderOutcome, reorder_document};

use crate::options::BookletOptions;
use crate::render::stamp_page_numbers;
use crate::types::*;
use lopdf::Document;

/// A prepared booklet and what was done to produce it
#[derive(Debug, Clone)]
pub struct Booklet {
    pub document: Document,
    pub report: BookletReport,
}

/// Main booklet function
pub async fn make_booklet(document: Document, options: &BookletOptions) -> Result<Booklet> {
    options.validate()?;

    let options = options.clone();
    tokio::task::spawn_blocking(move || make_booklet_sync(document, &options)).await?
}

/// Blocking form of [`make_booklet`].
///
/// All configuration is checked before the document is touched.
pub fn make_booklet_sync(mut document: Document, options: &BookletOptions) -> Result<Booklet> {
    options.validate()?;
    let key = options.signature_key()?;

    let original_pages = document.get_pages().len();
    if original_pages == 0 {
        return Err(BookletError::NoPages);
    }
    log::info!("Original pages: {}", original_pages);

    let pages_numbered = if options.stamp_page_numbers {
        let stamped = stamp_page_numbers(&mut document, &options.page_numbers)?;
        log::info!("Numbered {} page(s)", stamped);
        stamped
    } else {
        0
    };

    let blank_pages_added =
        pad_document(&mut document, key.signature_size(), options.blank_page_size)?;
    if blank_pages_added > 0 {
        log::info!("Added {} blank page(s)", blank_pages_added);
    } else {
        log::info!("No blank pages needed");
    }

    let outcome = reorder_document(&mut document, key)?;
    log::info!(
        "Reordered {} signature(s) of {} pages ({} per sheet side)",
        outcome.signatures,
        key.signature_size(),
        key.pages_per_sheet()
    );

    Ok(Booklet {
        document,
        report: BookletReport {
            original_pages,
            pages_numbered,
            blank_pages_added,
            signatures: outcome.signatures,
            final_pages: outcome.pages,
        },
    })
}
