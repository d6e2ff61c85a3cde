//! Core board data structures for sudoku applications.
//!
//! This crate provides the 9×9 board abstraction shared by UI, solving, and
//! persistence layers: flat cell storage with structured access to rows,
//! columns, and 3×3 blocks, plus the distinction between player-editable
//! cells and the puzzle's original givens.
//!
//! # Overview
//!
//! - [`digit`]: type-safe representation of cell digits 1-9; an empty cell is
//!   `Option::<Digit>::None`.
//! - [`grid`]: the [`Grid`] store with its row-major coordinate bijection,
//!   row/column/block accessors, and givens snapshot.
//! - [`codec`]: the 81-character board token, the crate's only boundary
//!   format ([`encode`](codec::encode) / [`decode`](codec::decode)).
//!
//! The grid deliberately stops at structural invariants: writes through
//! [`Grid::set_cell`] are unconditional, and "don't overwrite a given cell"
//! is policy the caller applies via [`Grid::is_given`]. Coordinate and size
//! violations are programming errors and panic; malformed tokens are external
//! data and surface as typed [`DecodeError`] values.
//!
//! # Examples
//!
//! ```
//! use sudoku_board::{Digit, Grid};
//!
//! // Load a board: row-major token, '0' marks an empty cell.
//! let token = format!("530070000{}", "0".repeat(72));
//! let mut grid = Grid::from_token(&token)?;
//!
//! assert_eq!(grid.cell_at(1, 1), Some(Digit::D5));
//! assert!(grid.is_given(1, 1));
//!
//! // Player fills an empty cell; the givens snapshot is untouched.
//! grid.set_cell(2, 1, Some(Digit::D6));
//! assert!(!grid.is_given(2, 1));
//!
//! // The first row, in column order.
//! assert_eq!(grid.row_values(1)[4], Some(Digit::D7));
//! # Ok::<(), sudoku_board::DecodeError>(())
//! ```

pub mod codec;
pub mod digit;
pub mod grid;

pub use self::{codec::DecodeError, digit::Digit, grid::Grid};
