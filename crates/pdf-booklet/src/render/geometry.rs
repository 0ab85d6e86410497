//! Page geometry

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::types::Result;
use lopdf::{Document, Object, ObjectId};

/// MediaBox of a page as `[llx, lly, urx, ury]` in points.
///
/// Only the page's own entry is consulted; call on a flattened page tree so
/// inherited boxes have been pushed down. A missing or unreadable box falls
/// back to US Letter at the origin.
pub fn media_box(doc: &Document, page_id: ObjectId) -> Result<[f32; 4]> {
    let page_dict = doc.get_dictionary(page_id)?;

    let values = match page_dict.get(b"MediaBox") {
        Ok(Object::Array(arr)) => Some(arr.clone()),
        Ok(Object::Reference(id)) => doc.get_object(*id)?.as_array().ok().cloned(),
        _ => None,
    };

    let numbers: Option<Vec<f32>> =
        values.and_then(|arr| arr.iter().map(extract_number).collect());
    match numbers {
        Some(v) if v.len() == 4 => Ok(normalize([v[0], v[1], v[2], v[3]])),
        _ => Ok([
            0.0,
            0.0,
            DEFAULT_PAGE_DIMENSIONS.0,
            DEFAULT_PAGE_DIMENSIONS.1,
        ]),
    }
}

/// Page dimensions (width, height) in points
pub fn page_dimensions(doc: &Document, page_id: ObjectId) -> Result<(f32, f32)> {
    let [llx, lly, urx, ury] = media_box(doc, page_id)?;
    Ok((urx - llx, ury - lly))
}

/// Rectangles may list any two opposite corners
fn normalize([x0, y0, x1, y1]: [f32; 4]) -> [f32; 4] {
    [x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1)]
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
