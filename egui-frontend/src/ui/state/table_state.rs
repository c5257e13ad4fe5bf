//! # Table State Module
//!
//! State backing the customer table view.
//!
//! ## Purpose:
//! The filter text is the only table-specific state. It is transient and
//! drives no side effect beyond re-deriving the visible rows each frame.

/// Customer table state.
#[derive(Debug, Default)]
pub struct TableState {
    /// Current contents of the filter text box
    pub filter: String,
}

impl TableState {
    /// Create new table state with an empty filter
    pub fn new() -> Self {
        Self::default()
    }
}
