//! The 9x9 Sudoku board
//!
//! Validation is sum-based, as in the reference game: every row, column, and
//! 3x3 field of a finished board must sum to 45. Generation produces a fully
//! valid board deterministically from a seed.

use glam::Vec2;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, Tone};
use crate::consts::{BOARD_LINE_SUM, CELL_SIZE, FIELD_SIZE};
use crate::render::colors;
use crate::scene::Scene;

/// Selection movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One player command against the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardCommand {
    /// Enter a value 1-9 into the selected cell
    SetValue(u8),
    /// Move the selection one cell
    Move(Direction),
    /// Select the cell under a point (mouse click), if any
    SelectAt(Vec2),
    /// Check all sums and highlight the result
    Validate,
    /// Clear highlighting and return to the unvalidated state
    Reset,
}

/// Outcome of a validation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub rows_ok: [bool; 9],
    pub cols_ok: [bool; 9],
    pub fields_ok: [bool; 9],
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.rows_ok.iter().all(|&ok| ok)
            && self.cols_ok.iter().all(|&ok| ok)
            && self.fields_ok.iter().all(|&ok| ok)
    }
}

/// The board: 81 cells, a screen-space origin for layout/hit-testing, and a
/// finished flag driving the highlight state machine
/// (Unvalidated -> Finished(valid | invalid) -> Reset -> Unvalidated).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 9]; 9],
    origin: Vec2,
    finished: bool,
}

impl Board {
    /// Create an empty board anchored at `origin` (top-left corner).
    pub fn new(origin: Vec2) -> Self {
        let mut cells = [[Cell::default(); 9]; 9];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = Cell::new((r / 3 * 3 + c / 3) as u8);
            }
        }
        Self {
            cells,
            origin,
            finished: false,
        }
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Set a cell value directly (used by generation and tests).
    pub fn set_value(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row][col].value = value;
    }

    /// Apply one player command.
    pub fn apply(&mut self, cmd: BoardCommand) {
        match cmd {
            BoardCommand::SetValue(n) => self.enter_value(n),
            BoardCommand::Move(dir) => self.move_selected(dir),
            BoardCommand::SelectAt(point) => self.select_at(point),
            BoardCommand::Validate => {
                self.validate();
            }
            BoardCommand::Reset => self.reset(),
        }
    }

    /// Fill the board with a valid solution, deterministically from `seed`.
    ///
    /// Starts from the canonical shifted-row pattern and applies
    /// validity-preserving transforms: digit relabeling, row shuffles within
    /// each horizontal band, column shuffles within each vertical stack, and
    /// band/stack shuffles.
    pub fn generate(&mut self, seed: u64) {
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut values = [[0u8; 9]; 9];
        for (r, row) in values.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = ((r * 3 + r / 3 + c) % 9 + 1) as u8;
            }
        }

        let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        digits.shuffle(&mut rng);
        for row in values.iter_mut() {
            for v in row.iter_mut() {
                *v = digits[(*v - 1) as usize];
            }
        }

        // Rows within bands, then whole bands
        let mut shuffled = values;
        for band in 0..3 {
            let mut order = [0usize, 1, 2];
            order.shuffle(&mut rng);
            for (i, &o) in order.iter().enumerate() {
                shuffled[band * 3 + i] = values[band * 3 + o];
            }
        }
        let mut band_order = [0usize, 1, 2];
        band_order.shuffle(&mut rng);
        let banded = shuffled;
        for (i, &b) in band_order.iter().enumerate() {
            for r in 0..3 {
                shuffled[i * 3 + r] = banded[b * 3 + r];
            }
        }

        // Columns within stacks, then whole stacks
        let columned = shuffled;
        for stack in 0..3 {
            let mut order = [0usize, 1, 2];
            order.shuffle(&mut rng);
            for (i, &o) in order.iter().enumerate() {
                for r in 0..9 {
                    shuffled[r][stack * 3 + i] = columned[r][stack * 3 + o];
                }
            }
        }
        let mut stack_order = [0usize, 1, 2];
        stack_order.shuffle(&mut rng);
        let stacked = shuffled;
        for (i, &s) in stack_order.iter().enumerate() {
            for r in 0..9 {
                for c in 0..3 {
                    shuffled[r][i * 3 + c] = stacked[r][s * 3 + c];
                }
            }
        }

        for r in 0..9 {
            for c in 0..9 {
                self.cells[r][c].value = shuffled[r][c];
            }
        }
        self.reset();
        log::info!("Generated board from seed {}", seed);
    }

    // --- selection ---

    /// Row-major index of the selected cell, if any
    fn selected_index(&self) -> Option<usize> {
        self.cells
            .iter()
            .flatten()
            .position(|cell| cell.selected)
    }

    fn select_index(&mut self, index: usize) {
        for (i, cell) in self.cells.iter_mut().flatten().enumerate() {
            cell.selected = i == index;
        }
    }

    /// Move the selection one cell, clamping at the board edges. With no
    /// current selection, the first cell is selected instead.
    pub fn move_selected(&mut self, dir: Direction) {
        let index = match self.selected_index() {
            None => {
                self.select_index(0);
                return;
            }
            Some(i) => i,
        };

        let next = match dir {
            Direction::Up if index >= 9 => index - 9,
            Direction::Down if index + 9 <= 80 => index + 9,
            Direction::Left if index >= 1 => index - 1,
            Direction::Right if index + 1 <= 80 => index + 1,
            _ => index,
        };
        self.select_index(next);
    }

    /// Select the cell under `point`, deselecting everything else. A point
    /// outside the board clears the selection.
    pub fn select_at(&mut self, point: Vec2) {
        let rel = point - self.origin;
        let side = FIELD_SIZE * 3.0;

        for cell in self.cells.iter_mut().flatten() {
            cell.selected = false;
        }
        if rel.x < 0.0 || rel.y < 0.0 || rel.x >= side || rel.y >= side {
            return;
        }

        let col = (rel.x / CELL_SIZE) as usize;
        let row = (rel.y / CELL_SIZE) as usize;
        self.cells[row][col].selected = true;
    }

    /// Enter a value into the selected cell. Out-of-range values are ignored
    /// with a warning; without a selection this is a no-op.
    pub fn enter_value(&mut self, value: u8) {
        if !(1..=9).contains(&value) {
            log::warn!("Rejected out-of-range cell value {}", value);
            return;
        }
        if let Some(cell) = self.cells.iter_mut().flatten().find(|c| c.selected) {
            cell.value = value;
        }
    }

    // --- sums & validation ---

    pub fn row_sum(&self, row: usize) -> u32 {
        self.cells[row].iter().map(|c| u32::from(c.value)).sum()
    }

    pub fn col_sum(&self, col: usize) -> u32 {
        self.cells.iter().map(|row| u32::from(row[col].value)).sum()
    }

    pub fn field_sum(&self, field: u8) -> u32 {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.field == field)
            .map(|c| u32::from(c.value))
            .sum()
    }

    /// Check every row, column, and field sum against 45, marking failures
    /// red. On success every cell turns green. Transitions the board into
    /// the finished state either way.
    pub fn validate(&mut self) -> ValidationReport {
        let mut report = ValidationReport {
            rows_ok: [true; 9],
            cols_ok: [true; 9],
            fields_ok: [true; 9],
        };

        for i in 0..9 {
            report.rows_ok[i] = self.row_sum(i) == BOARD_LINE_SUM;
            report.cols_ok[i] = self.col_sum(i) == BOARD_LINE_SUM;
            report.fields_ok[i] = self.field_sum(i as u8) == BOARD_LINE_SUM;
        }

        if report.is_valid() {
            for cell in self.cells.iter_mut().flatten() {
                cell.tone = Tone::Valid;
            }
        } else {
            for r in 0..9 {
                for c in 0..9 {
                    let cell = &mut self.cells[r][c];
                    if !report.rows_ok[r]
                        || !report.cols_ok[c]
                        || !report.fields_ok[cell.field as usize]
                    {
                        cell.tone = Tone::Invalid;
                    }
                }
            }
        }

        self.finished = true;
        report
    }

    /// Clear highlighting and the finished flag. Cell values are untouched,
    /// so resetting an unvalidated board is a no-op on them.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.tone = Tone::Clear;
        }
        self.finished = false;
    }

    // --- drawing ---

    /// Emit the board: cell fills and values, field outlines, board outline.
    pub fn emit(&self, scene: &mut Scene) {
        let cell_size = Vec2::splat(CELL_SIZE);

        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let pos = self.origin + Vec2::new(c as f32, r as f32) * CELL_SIZE;
                scene.push_rect(pos, cell_size, cell.fill_color(self.finished));
                scene.push_rect_outline(pos, cell_size, 1.0, colors::GRID_LINE);
                if !cell.is_empty() {
                    scene.push_text(
                        pos + cell_size / 2.0,
                        cell.value.to_string(),
                        65.0,
                        colors::TEXT_BLACK,
                    );
                }
            }
        }

        for field_row in 0..3 {
            for field_col in 0..3 {
                let pos =
                    self.origin + Vec2::new(field_col as f32, field_row as f32) * FIELD_SIZE;
                scene.push_rect_outline(pos, Vec2::splat(FIELD_SIZE), 2.0, colors::GRID_LINE);
            }
        }
        scene.push_rect_outline(
            self.origin,
            Vec2::splat(FIELD_SIZE * 3.0),
            4.0,
            colors::GRID_LINE,
        );
    }
}
