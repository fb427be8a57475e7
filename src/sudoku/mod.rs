//! Sudoku mini-game
//!
//! Board state, selection, and the sum-based validator. Input arrives as
//! [`BoardCommand`]s from the host; drawing goes out through the scene layer.

pub mod board;
pub mod cell;

pub use board::{Board, BoardCommand, Direction, ValidationReport};
pub use cell::{Cell, Tone};
