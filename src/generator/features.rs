use bitflags::bitflags;

bitflags! {
    /// Sheet formatting features to enable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RenderFeatures: u8 {
        /// Freeze the header row and the first column.
        const FREEZE_PANES = 0b0001;
        /// Add an autofilter over the header and data range.
        const AUTOFILTER = 0b0010;
        /// Alternate data row backgrounds.
        const BANDED_ROWS = 0b0100;
        /// Thin borders around every written cell.
        const BORDERS = 0b1000;

        /// All features enabled (default).
        const ALL = Self::FREEZE_PANES.bits()
                  | Self::AUTOFILTER.bits()
                  | Self::BANDED_ROWS.bits()
                  | Self::BORDERS.bits();

        /// No features (plain grid).
        const NONE = 0b0000;
    }
}

impl Default for RenderFeatures {
    fn default() -> Self {
        Self::ALL
    }
}
