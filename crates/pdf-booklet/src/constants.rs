//! Shared constants for booklet preparation

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Fallback page width in points when a page has no usable MediaBox (US Letter)
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Fallback page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Fallback page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Page Numbers
// =============================================================================

/// Default font size for stamped page numbers (points)
pub const PAGE_NUMBER_FONT_SIZE: f32 = 12.0;

/// Default distance from the bottom edge of the MediaBox to the baseline (points)
pub const PAGE_NUMBER_BOTTOM_OFFSET: f32 = 30.0;

/// Advance width of a Helvetica digit, as a fraction of the font size
pub const HELVETICA_DIGIT_WIDTH_RATIO: f32 = 0.556;

/// Resource name under which the page number font is registered
pub const PAGE_NUMBER_FONT_RESOURCE: &str = "FBookletNum";
