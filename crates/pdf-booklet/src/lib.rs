pub mod constants;
pub mod impose;
pub mod layout;
mod options;
pub mod render;
mod stats;
mod types;

pub use impose::{
    Booklet, ReorderOutcome, default_output_path, load_pdf, make_booklet, make_booklet_sync,
    pad_document, reorder_document, resolve_input_path, resolve_output_path, save_pdf,
};
pub use layout::{
    PrintedSide, SUPPORTED_PAGES_PER_SHEET, SUPPORTED_SIGNATURE_SIZES, SheetSide, SignatureKey,
    blanks_needed, padded_page_count, printed_sides, reorder, saddle_stitch_order,
    signature_order, suggest_signature_size, supported_configurations,
};
pub use options::*;
pub use render::{page_dimensions, stamp_page_numbers};
pub use stats::calculate_statistics;
pub use types::*;
