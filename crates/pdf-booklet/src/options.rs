use crate::constants::{PAGE_NUMBER_BOTTOM_OFFSET, PAGE_NUMBER_FONT_SIZE};
use crate::layout::SignatureKey;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet preparation configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    // Signature layout
    pub signature_size: usize,
    pub pages_per_sheet: usize,

    // Page numbering
    pub stamp_page_numbers: bool,
    pub page_numbers: PageNumberStyle,

    // Padding
    pub blank_page_size: BlankPageSize,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            signature_size: 16,
            pages_per_sheet: 2,
            stamp_page_numbers: false,
            page_numbers: PageNumberStyle::default(),
            blank_page_size: BlankPageSize::default(),
        }
    }
}

/// How stamped page numbers are drawn
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageNumberStyle {
    /// Helvetica size in points
    pub font_size: f32,
    /// Baseline distance above the bottom edge of the page, in points
    pub bottom_offset_pt: f32,
    /// Number printed on the first page
    pub first_number: usize,
}

impl Default for PageNumberStyle {
    fn default() -> Self {
        Self {
            font_size: PAGE_NUMBER_FONT_SIZE,
            bottom_offset_pt: PAGE_NUMBER_BOTTOM_OFFSET,
            first_number: 1,
        }
    }
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes).map_err(|e| {
            BookletError::InvalidArgument(format!("Failed to parse config: {}", e))
        })?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            BookletError::InvalidArgument(format!("Failed to serialize config: {}", e))
        })?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Resolve the signature table these options select
    pub fn signature_key(&self) -> Result<SignatureKey> {
        SignatureKey::new(self.signature_size, self.pages_per_sheet)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        self.signature_key()?;

        if self.stamp_page_numbers {
            let style = &self.page_numbers;
            if !(style.font_size.is_finite() && style.font_size > 0.0) {
                return Err(BookletError::InvalidArgument(
                    "Page number font size must be positive".to_string(),
                ));
            }
            if !(style.bottom_offset_pt.is_finite() && style.bottom_offset_pt >= 0.0) {
                return Err(BookletError::InvalidArgument(
                    "Page number offset must not be negative".to_string(),
                ));
            }
        }

        if let BlankPageSize::Paper(PaperSize::Custom {
            width_mm,
            height_mm,
        }) = self.blank_page_size
        {
            if !(width_mm > 0.0 && height_mm > 0.0) {
                return Err(BookletError::InvalidArgument(format!(
                    "Blank page size {}x{} mm must be positive",
                    width_mm, height_mm
                )));
            }
        }

        Ok(())
    }
}
