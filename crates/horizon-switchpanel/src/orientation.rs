//! Selector strip orientation.

/// Layout direction of the selector strip relative to the content panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Selectors in a row above the panes; the strip is width-aware and
    /// relocates selectors that do not fit into the overflow group.
    #[default]
    Horizontal,
    /// Selectors in a column beside the panes; the strip never overflows.
    Vertical,
}

impl Orientation {
    /// Returns true if the strip lays selectors out in a row.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::Horizontal)
    }

    /// Returns true if the strip lays selectors out in a column.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Orientation::Vertical)
    }
}
