//! The textual board token: one decimal digit per cell, row-major.
//!
//! The token is the only boundary format of this crate: exactly 81 characters,
//! where `'1'`-`'9'` are cell digits and `'0'` marks an empty cell. Cells
//! appear in row-major order, matching the linear layout of
//! [`Grid`](crate::Grid).
//!
//! Decoding failures are reported as typed [`DecodeError`] values so that a
//! loader or UI can surface them to the end user; they are never panics.

use crate::{digit::Digit, grid::CELL_COUNT};

/// Errors produced when decoding a board token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DecodeError {
    /// The token does not have exactly 81 characters.
    #[display("invalid token length: expected 81 characters, got {len}")]
    InvalidLength {
        /// Number of characters in the rejected token.
        len: usize,
    },
    /// A character in the token is not a decimal digit.
    #[display("invalid character {character:?} at position {index}")]
    InvalidDigit {
        /// The offending character.
        character: char,
        /// Its 0-based position in the token.
        index: usize,
    },
}

/// Encodes a flat cell sequence as an 81-character token.
///
/// Empty cells are written as `'0'`. The inverse of [`decode`].
///
/// # Panics
///
/// Panics if `cells` does not contain exactly 81 elements.
///
/// # Examples
///
/// ```
/// use sudoku_board::{Digit, codec};
///
/// let mut cells = vec![None; 81];
/// cells[0] = Some(Digit::D5);
/// assert_eq!(codec::encode(&cells), format!("5{}", "0".repeat(80)));
/// ```
#[must_use]
pub fn encode(cells: &[Option<Digit>]) -> String {
    assert_eq!(
        cells.len(),
        CELL_COUNT,
        "cell sequence must have {CELL_COUNT} elements"
    );
    cells
        .iter()
        .map(|cell| match cell {
            Some(digit) => char::from(b'0' + digit.value()),
            None => '0',
        })
        .collect()
}

/// Decodes an 81-character token into a flat cell sequence.
///
/// The inverse of [`encode`]: `decode(&encode(&cells))` returns the original
/// cells, and `encode(&decode(token)?)` returns the original token.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidLength`] if the token is not exactly 81
/// characters long, and [`DecodeError::InvalidDigit`] if any character is not
/// a decimal digit.
///
/// # Examples
///
/// ```
/// use sudoku_board::{Digit, codec};
///
/// let token = format!("5{}", "0".repeat(80));
/// let cells = codec::decode(&token)?;
/// assert_eq!(cells[0], Some(Digit::D5));
/// assert_eq!(cells[1], None);
/// # Ok::<(), sudoku_board::DecodeError>(())
/// ```
pub fn decode(token: &str) -> Result<Vec<Option<Digit>>, DecodeError> {
    let len = token.chars().count();
    if len != CELL_COUNT {
        return Err(DecodeError::InvalidLength { len });
    }
    token
        .chars()
        .enumerate()
        .map(|(index, character)| {
            let value = character
                .to_digit(10)
                .ok_or(DecodeError::InvalidDigit { character, index })?;
            // to_digit(10) yields 0-9, which fits in u8.
            #[expect(clippy::cast_possible_truncation)]
            let value = value as u8;
            Ok(Digit::try_from_value(value))
        })
        .collect()
}
