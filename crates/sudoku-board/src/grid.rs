//! The 9×9 board grid: flat storage with row, column, and block accessors.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{
    codec::{self, DecodeError},
    digit::Digit,
};

/// The grid dimension. Also the upper bound of the digit range.
pub const SIZE: u8 = 9;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (SIZE as usize) * (SIZE as usize);

/// Dimension of one 3×3 block.
const BLOCK: u8 = 3;

/// A 9×9 sudoku board with given-cell tracking.
///
/// The grid owns a flat, row-major sequence of 81 cells plus a snapshot of
/// the values it was constructed with (the "givens"). The snapshot never
/// changes afterwards; it exists only to answer whether a cell belongs to the
/// original puzzle.
///
/// Coordinates are 1-based `(row, column)` pairs, each in 1-9. The mapping
/// between coordinates and linear indices is the standard row-major bijection
/// implemented by [`index_of`](Self::index_of) and
/// [`coordinates_of`](Self::coordinates_of); every accessor uses the same
/// mapping.
///
/// The grid is a plain store: [`set_cell`](Self::set_cell) overwrites any
/// cell, including givens. Keeping players from overwriting givens is the
/// caller's job, informed by [`is_given`](Self::is_given). This keeps rule
/// enforcement out of the storage layer, where game logic can evolve
/// independently.
///
/// # Examples
///
/// ```
/// use sudoku_board::{Digit, Grid};
///
/// let mut cells = vec![None; 81];
/// cells[0] = Some(Digit::D5);
/// let mut grid = Grid::new(cells);
///
/// assert_eq!(grid.cell_at(1, 1), Some(Digit::D5));
/// assert!(grid.is_given(1, 1));
/// assert!(!grid.is_given(1, 2));
///
/// grid.set_cell(1, 2, Some(Digit::D7));
/// assert_eq!(grid.cell_at(1, 2), Some(Digit::D7));
/// assert!(!grid.is_given(1, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Option<Digit>>,
    givens: Vec<Option<Digit>>,
}

impl Grid {
    /// Creates a grid from a flat, row-major sequence of 81 cells.
    ///
    /// The sequence becomes the live cell store, and an independent copy of
    /// it is kept as the givens snapshot.
    ///
    /// # Panics
    ///
    /// Panics if `cells` does not contain exactly 81 elements.
    #[must_use]
    pub fn new(cells: Vec<Option<Digit>>) -> Self {
        assert_eq!(
            cells.len(),
            CELL_COUNT,
            "cell sequence must have {CELL_COUNT} elements"
        );
        let givens = cells.clone();
        Self { cells, givens }
    }

    /// Creates a grid from an 81-character board token.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the token has the wrong length or
    /// contains a non-digit character.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_board::{Digit, Grid};
    ///
    /// let token = format!("5{}", "0".repeat(80));
    /// let grid = Grid::from_token(&token)?;
    /// assert_eq!(grid.cell_at(1, 1), Some(Digit::D5));
    /// # Ok::<(), sudoku_board::DecodeError>(())
    /// ```
    pub fn from_token(token: &str) -> Result<Self, DecodeError> {
        Ok(Self::new(codec::decode(token)?))
    }

    /// Encodes the current cells as an 81-character board token.
    #[must_use]
    pub fn to_token(&self) -> String {
        codec::encode(&self.cells)
    }

    /// Computes the 0-based linear index of a 1-based coordinate.
    ///
    /// This is the canonical row-major bijection,
    /// `(row - 1) * 9 + (col - 1)`; [`coordinates_of`](Self::coordinates_of)
    /// is its exact inverse.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_board::Grid;
    ///
    /// assert_eq!(Grid::index_of(1, 1), 0);
    /// assert_eq!(Grid::index_of(1, 9), 8);
    /// assert_eq!(Grid::index_of(2, 1), 9);
    /// assert_eq!(Grid::index_of(9, 9), 80);
    /// ```
    #[must_use]
    pub fn index_of(row: u8, col: u8) -> usize {
        assert_coordinate(row, col);
        (usize::from(row) - 1) * usize::from(SIZE) + (usize::from(col) - 1)
    }

    /// Computes the 1-based coordinate of a 0-based linear index.
    ///
    /// The exact inverse of [`index_of`](Self::index_of).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below 81.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_board::Grid;
    ///
    /// assert_eq!(Grid::coordinates_of(0), (1, 1));
    /// assert_eq!(Grid::coordinates_of(80), (9, 9));
    /// ```
    #[must_use]
    pub fn coordinates_of(index: usize) -> (u8, u8) {
        assert!(index < CELL_COUNT, "index must be 0-80, got {index}");
        // index < 81, so both quotient and remainder fit in u8.
        #[expect(clippy::cast_possible_truncation)]
        let (row, col) = (
            (index / usize::from(SIZE)) as u8 + 1,
            (index % usize::from(SIZE)) as u8 + 1,
        );
        (row, col)
    }

    /// Returns the current value at a 1-based coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside 1-9.
    #[must_use]
    pub fn cell_at(&self, row: u8, col: u8) -> Option<Digit> {
        self.cells[Self::index_of(row, col)]
    }

    /// Returns the nine values of a row, in column order 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside 1-9.
    #[must_use]
    pub fn row_values(&self, row: u8) -> [Option<Digit>; SIZE as usize] {
        let start = Self::index_of(row, 1);
        let mut values = [None; SIZE as usize];
        values.copy_from_slice(&self.cells[start..start + SIZE as usize]);
        values
    }

    /// Returns the nine values of a column, in row order 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `col` is outside 1-9.
    #[must_use]
    pub fn column_values(&self, col: u8) -> [Option<Digit>; SIZE as usize] {
        let offset = Self::index_of(1, col);
        std::array::from_fn(|i| self.cells[offset + i * usize::from(SIZE)])
    }

    /// Returns the nine values of the 3×3 block containing `(row, col)`,
    /// flattened in row-major order within the block.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside 1-9.
    #[must_use]
    pub fn block_values(&self, row: u8, col: u8) -> [Option<Digit>; SIZE as usize] {
        assert_coordinate(row, col);
        let block_row = (row - 1) / BLOCK;
        let block_col = (col - 1) / BLOCK;
        std::array::from_fn(|i| {
            // i counts the block's cells row by row, so i / 3 and i % 3 are
            // the offsets within the block.
            #[expect(clippy::cast_possible_truncation)]
            let (dr, dc) = ((i / 3) as u8, (i % 3) as u8);
            let index = Self::index_of(block_row * BLOCK + dr + 1, block_col * BLOCK + dc + 1);
            self.cells[index]
        })
    }

    /// Returns the 0-based id (0-8) of the block containing `(row, col)`.
    ///
    /// Blocks are numbered row by row: the top-left block is 0, the center
    /// block is 4, the bottom-right block is 8.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_board::Grid;
    ///
    /// assert_eq!(Grid::block_index(1, 1), 0);
    /// assert_eq!(Grid::block_index(4, 4), 4);
    /// assert_eq!(Grid::block_index(9, 9), 8);
    /// ```
    #[must_use]
    pub fn block_index(row: u8, col: u8) -> u8 {
        assert_coordinate(row, col);
        (row - 1) / BLOCK * BLOCK + (col - 1) / BLOCK
    }

    /// Returns whether the cell at `(row, col)` is part of the original
    /// puzzle.
    ///
    /// Given cells should not be overwritten by player input; consult this
    /// before calling [`set_cell`](Self::set_cell).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside 1-9.
    #[must_use]
    pub fn is_given(&self, row: u8, col: u8) -> bool {
        self.givens[Self::index_of(row, col)].is_some()
    }

    /// Overwrites the cell at `(row, col)` with `value`.
    ///
    /// The write is unconditional: the grid does not check
    /// [`is_given`](Self::is_given), and the givens snapshot is not affected.
    /// `None` clears the cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside 1-9.
    pub fn set_cell(&mut self, row: u8, col: u8, value: Option<Digit>) {
        self.cells[Self::index_of(row, col)] = value;
    }

    /// Returns the flat, row-major cell sequence.
    #[must_use]
    pub fn cells(&self) -> &[Option<Digit>] {
        &self.cells
    }

    /// Returns the flat, row-major givens snapshot.
    #[must_use]
    pub fn givens(&self) -> &[Option<Digit>] {
        &self.givens
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_token())
    }
}

impl FromStr for Grid {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

fn assert_coordinate(row: u8, col: u8) {
    assert!((1..=SIZE).contains(&row), "row must be 1-9, got {row}");
    assert!((1..=SIZE).contains(&col), "column must be 1-9, got {col}");
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn sample_grid() -> Grid {
        // Digits 1-9 cycling through all 81 cells, row r shifted by r.
        let cells = (0..CELL_COUNT)
            .map(|i| {
                let (row, col) = Grid::coordinates_of(i);
                Digit::try_from_value((row + col - 2) % 9 + 1)
            })
            .collect();
        Grid::new(cells)
    }

    #[test]
    fn test_construction_snapshots_givens() {
        let mut cells = vec![None; CELL_COUNT];
        cells[0] = Some(Digit::D5);
        let grid = Grid::new(cells.clone());
        assert_eq!(grid.cells(), cells.as_slice());
        assert_eq!(grid.givens(), cells.as_slice());
    }

    #[test]
    #[should_panic(expected = "cell sequence must have 81 elements")]
    fn test_construction_rejects_short_sequence() {
        let _ = Grid::new(vec![None; 80]);
    }

    #[test]
    #[should_panic(expected = "row must be 1-9, got 0")]
    fn test_index_of_rejects_row_zero() {
        let _ = Grid::index_of(0, 1);
    }

    #[test]
    #[should_panic(expected = "column must be 1-9, got 10")]
    fn test_index_of_rejects_column_ten() {
        let _ = Grid::index_of(1, 10);
    }

    #[test]
    #[should_panic(expected = "index must be 0-80, got 81")]
    fn test_coordinates_of_rejects_out_of_range() {
        let _ = Grid::coordinates_of(81);
    }

    #[test]
    fn test_row_values_match_cell_at() {
        let grid = sample_grid();
        for row in 1..=SIZE {
            let values = grid.row_values(row);
            for col in 1..=SIZE {
                assert_eq!(values[usize::from(col) - 1], grid.cell_at(row, col));
            }
        }
    }

    #[test]
    fn test_column_values_match_cell_at() {
        let grid = sample_grid();
        for col in 1..=SIZE {
            let values = grid.column_values(col);
            for row in 1..=SIZE {
                assert_eq!(values[usize::from(row) - 1], grid.cell_at(row, col));
            }
        }
    }

    #[test]
    fn test_block_values_match_cell_at() {
        let grid = sample_grid();
        for row in 1..=SIZE {
            for col in 1..=SIZE {
                let values = grid.block_values(row, col);
                let block_row = (row - 1) / 3;
                let block_col = (col - 1) / 3;
                let mut i = 0;
                for r in (block_row * 3 + 1)..=(block_row * 3 + 3) {
                    for c in (block_col * 3 + 1)..=(block_col * 3 + 3) {
                        assert_eq!(values[i], grid.cell_at(r, c));
                        i += 1;
                    }
                }
            }
        }
    }

    #[test]
    fn test_block_index_constant_within_block_and_distinct_across() {
        // Every cell of a block reports the block's id, and each of the nine
        // ids covers exactly nine cells.
        let mut counts = [0usize; 9];
        for row in 1..=SIZE {
            for col in 1..=SIZE {
                let id = Grid::block_index(row, col);
                assert_eq!(id, Grid::block_index((row - 1) / 3 * 3 + 1, (col - 1) / 3 * 3 + 1));
                counts[usize::from(id)] += 1;
            }
        }
        assert_eq!(counts, [9; 9]);
    }

    #[test]
    fn test_set_cell_does_not_touch_givens() {
        let mut cells = vec![None; CELL_COUNT];
        cells[0] = Some(Digit::D5);
        let mut grid = Grid::new(cells);

        let given_before = grid.is_given(1, 2);
        grid.set_cell(1, 2, Some(Digit::D7));
        assert_eq!(grid.cell_at(1, 2), Some(Digit::D7));
        assert_eq!(grid.is_given(1, 2), given_before);

        // Overwriting a given changes the live cell, not the snapshot.
        grid.set_cell(1, 1, None);
        assert_eq!(grid.cell_at(1, 1), None);
        assert!(grid.is_given(1, 1));
        assert_eq!(grid.givens()[0], Some(Digit::D5));
    }

    #[test]
    fn test_set_cell_clears_with_none() {
        let mut grid = sample_grid();
        grid.set_cell(5, 5, None);
        assert_eq!(grid.cell_at(5, 5), None);
    }

    #[test]
    fn test_play_scenario() {
        let mut cells = vec![None; CELL_COUNT];
        cells[0] = Some(Digit::D5);
        let mut grid = Grid::new(cells);

        assert_eq!(grid.cell_at(1, 1), Some(Digit::D5));
        assert!(grid.is_given(1, 1));
        assert!(!grid.is_given(1, 2));

        grid.set_cell(1, 2, Some(Digit::D7));
        assert_eq!(grid.cell_at(1, 2), Some(Digit::D7));
        assert!(!grid.is_given(1, 2));

        assert_eq!(Grid::block_index(1, 1), 0);
        assert_eq!(Grid::block_index(4, 4), 4);
    }

    #[test]
    fn test_token_round_trip() {
        let grid = sample_grid();
        let token = grid.to_token();
        let restored = Grid::from_token(&token).unwrap();
        assert_eq!(restored, grid);
        assert_eq!(restored.to_string(), token);

        let parsed: Grid = token.parse().unwrap();
        assert_eq!(parsed, grid);
    }

    #[test]
    fn test_from_token_propagates_decode_errors() {
        assert!(Grid::from_token("12").is_err());
        assert!("12".parse::<Grid>().is_err());
    }

    proptest! {
        #[test]
        fn index_to_coordinates_round_trip(index in 0..CELL_COUNT) {
            let (row, col) = Grid::coordinates_of(index);
            prop_assert!((1..=SIZE).contains(&row));
            prop_assert!((1..=SIZE).contains(&col));
            prop_assert_eq!(Grid::index_of(row, col), index);
        }

        #[test]
        fn coordinates_to_index_round_trip(row in 1..=SIZE, col in 1..=SIZE) {
            let index = Grid::index_of(row, col);
            prop_assert!(index < CELL_COUNT);
            prop_assert_eq!(Grid::coordinates_of(index), (row, col));
        }
    }
}
