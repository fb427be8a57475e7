//! A single Sudoku cell

use serde::{Deserialize, Serialize};

use crate::render::colors;

/// Validation highlight applied to a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tone {
    /// Unvalidated
    #[default]
    Clear,
    /// Part of a row/column/field whose sum failed
    Invalid,
    /// Board validated successfully
    Valid,
}

/// Plain cell data. Rendering is a free function of the board; the cell
/// carries no drawable state beyond its highlight tone.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Cell {
    /// 1-9, or 0 for empty
    pub value: u8,
    /// Which of the nine 3x3 fields this cell belongs to (0-8, row-major)
    pub field: u8,
    pub selected: bool,
    pub tone: Tone,
}

impl Cell {
    pub fn new(field: u8) -> Self {
        Self {
            field,
            ..Default::default()
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Fill color for drawing. Until the board is validated the selection
    /// highlight wins; afterwards the validation tone does.
    pub fn fill_color(&self, finished: bool) -> [f32; 4] {
        if finished {
            match self.tone {
                Tone::Invalid => colors::CELL_INVALID,
                Tone::Valid => colors::CELL_VALID,
                Tone::Clear => colors::CELL_CLEAR,
            }
        } else if self.selected {
            colors::CELL_SELECTED
        } else {
            colors::CELL_CLEAR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_color_selection_vs_validation() {
        let mut cell = Cell::new(4);
        cell.selected = true;
        assert_eq!(cell.fill_color(false), colors::CELL_SELECTED);

        cell.tone = Tone::Invalid;
        // Validation tone only applies once the board is finished
        assert_eq!(cell.fill_color(false), colors::CELL_SELECTED);
        assert_eq!(cell.fill_color(true), colors::CELL_INVALID);
    }

    #[test]
    fn test_new_cell_is_empty() {
        let cell = Cell::new(0);
        assert!(cell.is_empty());
        assert_eq!(cell.tone, Tone::Clear);
        assert!(!cell.selected);
    }
}
