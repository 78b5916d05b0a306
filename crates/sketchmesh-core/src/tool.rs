//! Drawing tools.

use serde::{Deserialize, Serialize};

/// Available tools.
///
/// The active tool is read at paint time, never captured at gesture start,
/// so switching tools mid-stroke changes behavior from the very next move
/// event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tool {
    #[default]
    Draw,
    Erase,
}

impl Tool {
    /// Cell value this tool writes into the grid.
    pub fn paints_occupied(self) -> bool {
        matches!(self, Tool::Draw)
    }
}
