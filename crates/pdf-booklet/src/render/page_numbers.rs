//! Page number stamping
//!
//! Each page keeps its own content and gains one extra content stream that
//! draws its number centered near the bottom of its MediaBox. The original
//! content is wrapped in `q`/`Q` so its graphics state cannot leak into the
//! overlay, and any `q` the page itself leaves open is closed before the
//! number is drawn. Stamping is not idempotent: running it twice draws two
//! numbers.

use super::geometry::media_box;
use crate::constants::{HELVETICA_DIGIT_WIDTH_RATIO, PAGE_NUMBER_FONT_RESOURCE};
use crate::impose::PageList;
use crate::options::PageNumberStyle;
use crate::types::Result;
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Overlay sequential page numbers on every page of the document.
///
/// The first page gets `style.first_number`. Returns the number of pages
/// stamped.
pub fn stamp_page_numbers(doc: &mut Document, style: &PageNumberStyle) -> Result<usize> {
    let list = PageList::flatten(doc)?;

    let font_id = doc.add_object(helvetica_font());
    let save_state_id = doc.add_object(Stream::new(Dictionary::new(), b"q\n".to_vec()));

    for (index, &page_id) in list.pages.iter().enumerate() {
        let number = style.first_number + index;
        let open_states = unclosed_save_states(doc, page_id);
        let overlay = overlay_content(doc, page_id, number, open_states, style)?;
        let overlay_id = doc.add_object(Stream::new(Dictionary::new(), overlay.into_bytes()));

        let resources = resources_with_font(doc, page_id, font_id)?;
        let contents = wrapped_contents(doc, page_id, save_state_id, overlay_id)?;

        let page = doc.get_dictionary_mut(page_id)?;
        page.set("Resources", Object::Dictionary(resources));
        page.set("Contents", Object::Array(contents));
    }

    log::debug!("Stamped {} page number(s)", list.len());
    Ok(list.len())
}

fn helvetica_font() -> Dictionary {
    let mut font_dict = Dictionary::new();
    font_dict.set("Type", Object::Name(b"Font".to_vec()));
    font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    font_dict.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
    font_dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
    font_dict
}

/// Number of `q` operators in the page content without a matching `Q`.
///
/// Content that fails to decode is treated as balanced.
fn unclosed_save_states(doc: &Document, page_id: ObjectId) -> usize {
    let content = match doc
        .get_page_content(page_id)
        .and_then(|bytes| Content::decode(&bytes))
    {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Could not decode content of page {:?}: {}", page_id, e);
            return 0;
        }
    };

    content
        .operations
        .iter()
        .fold(0usize, |depth, op| match op.operator.as_str() {
            "q" => depth + 1,
            "Q" => depth.saturating_sub(1),
            _ => depth,
        })
}

/// Content stream drawing `number` at bottom-center of the page.
///
/// `open_states` extra `Q` operators unwind state the page content left
/// saved.
fn overlay_content(
    doc: &Document,
    page_id: ObjectId,
    number: usize,
    open_states: usize,
    style: &PageNumberStyle,
) -> Result<String> {
    let [llx, lly, urx, _] = media_box(doc, page_id)?;
    let text = number.to_string();
    let text_width = text.len() as f32 * style.font_size * HELVETICA_DIGIT_WIDTH_RATIO;
    let x = llx + (urx - llx) / 2.0 - text_width / 2.0;
    let y = lly + style.bottom_offset_pt;

    // Streams are concatenated as-is, so the overlay must not start mid-token.
    // The last Q closes the q opened ahead of the original content.
    let restore = "Q\n".repeat(open_states + 1);
    Ok(format!(
        "\n{}q BT /{} {:.2} Tf 0 g {:.2} {:.2} Td ({}) Tj ET Q\n",
        restore, PAGE_NUMBER_FONT_RESOURCE, style.font_size, x, y, text
    ))
}

/// Page resources with the page number font registered, as an inline
/// dictionary.
///
/// Shared resource dictionaries are copied rather than edited so other pages
/// referencing them are left alone.
fn resources_with_font(doc: &Document, page_id: ObjectId, font_id: ObjectId) -> Result<Dictionary> {
    let page = doc.get_dictionary(page_id)?;
    let mut resources = match page.get(b"Resources") {
        Ok(obj) => resolve_dictionary(doc, obj)?,
        Err(_) => Dictionary::new(),
    };

    let mut fonts = match resources.get(b"Font") {
        Ok(obj) => resolve_dictionary(doc, obj)?,
        Err(_) => Dictionary::new(),
    };
    fonts.set(PAGE_NUMBER_FONT_RESOURCE, Object::Reference(font_id));
    resources.set("Font", Object::Dictionary(fonts));

    Ok(resources)
}

/// `[q, original contents..., overlay]`
fn wrapped_contents(
    doc: &Document,
    page_id: ObjectId,
    save_state_id: ObjectId,
    overlay_id: ObjectId,
) -> Result<Vec<Object>> {
    let page = doc.get_dictionary(page_id)?;
    let mut contents = vec![Object::Reference(save_state_id)];

    match page.get(b"Contents") {
        Ok(Object::Reference(id)) => match doc.get_object(*id)? {
            Object::Array(streams) => contents.extend(streams.iter().cloned()),
            _ => contents.push(Object::Reference(*id)),
        },
        Ok(Object::Array(streams)) => contents.extend(streams.iter().cloned()),
        _ => {}
    }

    contents.push(Object::Reference(overlay_id));
    Ok(contents)
}

fn resolve_dictionary(doc: &Document, obj: &Object) -> Result<Dictionary> {
    match obj {
        Object::Reference(id) => Ok(doc.get_dictionary(*id)?.clone()),
        Object::Dictionary(dict) => Ok(dict.clone()),
        _ => Ok(Dictionary::new()),
    }
}
