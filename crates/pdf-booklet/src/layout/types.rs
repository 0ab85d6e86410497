//! Layout data types for signature ordering

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSide {
    /// Front of the sheet (printed first in duplex)
    Front,
    /// Back of the sheet (printed second in duplex)
    Back,
}

impl std::fmt::Display for SheetSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetSide::Front => f.write_str("front"),
            SheetSide::Back => f.write_str("back"),
        }
    }
}

/// One printed side of one sheet within a signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintedSide {
    /// Sheet index within the signature (0 = outermost)
    pub sheet: usize,
    /// Which side of that sheet
    pub side: SheetSide,
    /// In-signature page offsets, in print order (0-based)
    pub pages: Vec<usize>,
}
