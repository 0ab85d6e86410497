//! Blank page padding

use super::pages::PageList;
use crate::constants::pt_to_mm;
use crate::layout::blanks_needed;
use crate::render::media_box;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Append blank pages until the page count is a multiple of `signature_size`.
///
/// Original pages keep their order and object identity; the blanks go at the
/// end. Returns the number of pages added.
pub fn pad_document(
    doc: &mut Document,
    signature_size: usize,
    blank_size: BlankPageSize,
) -> Result<usize> {
    let needed = blanks_needed(doc.get_pages().len(), signature_size)?;
    if needed == 0 {
        return Ok(0);
    }

    let mut list = PageList::flatten(doc)?;

    let media_box = blank_media_box(doc, &list, blank_size)?;
    log::debug!(
        "Appending {} blank page(s) of {:.0}x{:.0} mm",
        needed,
        pt_to_mm(media_box[2] - media_box[0]),
        pt_to_mm(media_box[3] - media_box[1]),
    );

    let content_id = doc.add_object(Stream::new(Dictionary::new(), Vec::new()));
    let mut pages = list.pages.clone();
    for _ in 0..needed {
        pages.push(create_blank_page(doc, &media_box, content_id, list.root));
    }
    list.set_pages(doc, pages)?;

    Ok(needed)
}

/// MediaBox for blank pages as `[llx, lly, urx, ury]` in points
fn blank_media_box(doc: &Document, list: &PageList, size: BlankPageSize) -> Result<[f32; 4]> {
    match size {
        BlankPageSize::Paper(paper) => {
            let (width, height) = paper.dimensions_pt();
            Ok([0.0, 0.0, width, height])
        }
        BlankPageSize::MatchFirstPage => match list.pages.first() {
            Some(&first) => media_box(doc, first),
            None => {
                let (width, height) = PaperSize::A4.dimensions_pt();
                Ok([0.0, 0.0, width, height])
            }
        },
    }
}

/// Create a blank page with the given media box
fn create_blank_page(
    doc: &mut Document,
    media_box: &[f32; 4],
    content_id: ObjectId,
    parent_id: ObjectId,
) -> ObjectId {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_id));
    page_dict.set(
        "MediaBox",
        Object::Array(media_box.iter().map(|&v| Object::Real(v)).collect()),
    );
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(Dictionary::new()));

    doc.add_object(page_dict)
}
