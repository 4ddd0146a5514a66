/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{anyhow, bail, Result};

use super::BOARD_SIZE;

/// Represents a single square on an 8x8 chessboard, addressed by `(row, col)`.
///
/// Row `0` is the eighth rank (Black's back rank) and row `7` is the first rank.
/// Column `0` is the A file and column `7` is the H file.
///
/// Both coordinates are always within `[0, 7]`; out-of-range coordinates can only
/// be expressed as `None` through [`Square::from_coords`] or [`Square::offset`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = BOARD_SIZE * BOARD_SIZE;

    pub const A8: Self = Self::new(0, 0);
    pub const B8: Self = Self::new(0, 1);
    pub const C8: Self = Self::new(0, 2);
    pub const D8: Self = Self::new(0, 3);
    pub const E8: Self = Self::new(0, 4);
    pub const F8: Self = Self::new(0, 5);
    pub const G8: Self = Self::new(0, 6);
    pub const H8: Self = Self::new(0, 7);
    pub const A7: Self = Self::new(1, 0);
    pub const B7: Self = Self::new(1, 1);
    pub const C7: Self = Self::new(1, 2);
    pub const D7: Self = Self::new(1, 3);
    pub const E7: Self = Self::new(1, 4);
    pub const F7: Self = Self::new(1, 5);
    pub const G7: Self = Self::new(1, 6);
    pub const H7: Self = Self::new(1, 7);
    pub const A6: Self = Self::new(2, 0);
    pub const B6: Self = Self::new(2, 1);
    pub const C6: Self = Self::new(2, 2);
    pub const D6: Self = Self::new(2, 3);
    pub const E6: Self = Self::new(2, 4);
    pub const F6: Self = Self::new(2, 5);
    pub const G6: Self = Self::new(2, 6);
    pub const H6: Self = Self::new(2, 7);
    pub const A5: Self = Self::new(3, 0);
    pub const B5: Self = Self::new(3, 1);
    pub const C5: Self = Self::new(3, 2);
    pub const D5: Self = Self::new(3, 3);
    pub const E5: Self = Self::new(3, 4);
    pub const F5: Self = Self::new(3, 5);
    pub const G5: Self = Self::new(3, 6);
    pub const H5: Self = Self::new(3, 7);
    pub const A4: Self = Self::new(4, 0);
    pub const B4: Self = Self::new(4, 1);
    pub const C4: Self = Self::new(4, 2);
    pub const D4: Self = Self::new(4, 3);
    pub const E4: Self = Self::new(4, 4);
    pub const F4: Self = Self::new(4, 5);
    pub const G4: Self = Self::new(4, 6);
    pub const H4: Self = Self::new(4, 7);
    pub const A3: Self = Self::new(5, 0);
    pub const B3: Self = Self::new(5, 1);
    pub const C3: Self = Self::new(5, 2);
    pub const D3: Self = Self::new(5, 3);
    pub const E3: Self = Self::new(5, 4);
    pub const F3: Self = Self::new(5, 5);
    pub const G3: Self = Self::new(5, 6);
    pub const H3: Self = Self::new(5, 7);
    pub const A2: Self = Self::new(6, 0);
    pub const B2: Self = Self::new(6, 1);
    pub const C2: Self = Self::new(6, 2);
    pub const D2: Self = Self::new(6, 3);
    pub const E2: Self = Self::new(6, 4);
    pub const F2: Self = Self::new(6, 5);
    pub const G2: Self = Self::new(6, 6);
    pub const H2: Self = Self::new(6, 7);
    pub const A1: Self = Self::new(7, 0);
    pub const B1: Self = Self::new(7, 1);
    pub const C1: Self = Self::new(7, 2);
    pub const D1: Self = Self::new(7, 3);
    pub const E1: Self = Self::new(7, 4);
    pub const F1: Self = Self::new(7, 5);
    pub const G1: Self = Self::new(7, 6);
    pub const H1: Self = Self::new(7, 7);

    /// Creates a new [`Square`] from a `row` and `col`.
    ///
    /// Both must be within `[0, 7]`. For unchecked input, use [`Square::from_coords`].
    ///
    /// # Example
    /// ```
    /// # use gambit_types::Square;
    /// assert_eq!(Square::new(6, 4), Square::E2);
    /// ```
    #[inline(always)]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Creates a new [`Square`] from signed coordinates, returning `None` if either falls outside the board.
    ///
    /// # Example
    /// ```
    /// # use gambit_types::Square;
    /// assert_eq!(Square::from_coords(0, 0), Some(Square::A8));
    /// assert_eq!(Square::from_coords(8, 0), None);
    /// assert_eq!(Square::from_coords(3, -1), None);
    /// ```
    #[inline(always)]
    pub const fn from_coords(row: i32, col: i32) -> Option<Self> {
        if row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32 {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Creates a new [`Square`] from a row-major index in `[0, 63]`.
    #[inline(always)]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::new(
                (index / BOARD_SIZE) as u8,
                (index % BOARD_SIZE) as u8,
            ))
        } else {
            None
        }
    }

    /// Parses a [`Square`] from algebraic coordinates, such as `"e2"`.
    ///
    /// # Example
    /// ```
    /// # use gambit_types::Square;
    /// assert_eq!(Square::from_uci("e2").unwrap(), Square::E2);
    /// assert_eq!(Square::from_uci("a8").unwrap(), Square::new(0, 0));
    /// assert!(Square::from_uci("i9").is_err());
    /// ```
    pub fn from_uci(uci: &str) -> Result<Self> {
        let mut chars = uci.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            bail!("Invalid square {uci:?}: squares must be a file followed by a rank");
        };

        let file = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            bail!("Invalid square {uci:?}: file must be within [a, h]. Got {file:?}");
        }

        let rank = rank
            .to_digit(10)
            .filter(|rank| (1..=8).contains(rank))
            .ok_or(anyhow!(
                "Invalid square {uci:?}: rank must be within [1, 8]. Got {rank:?}"
            ))?;

        let col = file as u8 - b'a';
        let row = BOARD_SIZE as u8 - rank as u8;
        Ok(Self::new(row, col))
    }

    /// The row of this square, where `0` is the top (Black's side) of the board.
    #[inline(always)]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// The column of this square, where `0` is the A file.
    #[inline(always)]
    pub const fn col(&self) -> u8 {
        self.col
    }

    /// Row-major index of this square, in `[0, 63]`.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Steps `dr` rows and `dc` columns away from this square.
    ///
    /// Returns `None` if the step would leave the board.
    ///
    /// # Example
    /// ```
    /// # use gambit_types::Square;
    /// assert_eq!(Square::E2.offset(-2, 0), Some(Square::E4));
    /// assert_eq!(Square::H1.offset(0, 1), None);
    /// ```
    #[inline(always)]
    pub const fn offset(&self, dr: i8, dc: i8) -> Option<Self> {
        Self::from_coords(self.row as i32 + dr as i32, self.col as i32 + dc as i32)
    }

    /// Returns a copy of this square on the same row, at `col`.
    #[inline(always)]
    pub const fn with_col(&self, col: u8) -> Self {
        Self::new(self.row, col)
    }

    /// An iterator over all 64 squares, in row-major order starting at [`Square::A8`].
    #[inline(always)]
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).filter_map(Self::from_index)
    }

    /// The file letter of this square (`'a'..='h'`).
    #[inline(always)]
    pub const fn file_char(&self) -> char {
        (b'a' + self.col) as char
    }

    /// The rank digit of this square (`'1'..='8'`).
    #[inline(always)]
    pub const fn rank_char(&self) -> char {
        (b'0' + BOARD_SIZE as u8 - self.row) as char
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;
    #[inline(always)]
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_uci(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_squares_match_coordinates() {
        assert_eq!(Square::A8, Square::new(0, 0));
        assert_eq!(Square::H8, Square::new(0, 7));
        assert_eq!(Square::A1, Square::new(7, 0));
        assert_eq!(Square::H1, Square::new(7, 7));
        assert_eq!(Square::E2, Square::new(6, 4));
        assert_eq!(Square::D8, Square::new(0, 3));
    }

    #[test]
    fn from_coords_rejects_out_of_range() {
        for (row, col) in [(-1, 0), (0, -1), (8, 0), (0, 8), (100, 100), (i32::MIN, 3)] {
            assert_eq!(Square::from_coords(row, col), None, "({row}, {col})");
        }
        assert_eq!(Square::from_coords(7, 7), Some(Square::H1));
    }

    #[test]
    fn offsets_stop_at_the_edge() {
        assert_eq!(Square::A8.offset(-1, 0), None);
        assert_eq!(Square::A8.offset(0, -1), None);
        assert_eq!(Square::A8.offset(1, 1), Some(Square::B7));
        assert_eq!(Square::G1.offset(-2, 1), Some(Square::H3));
        assert_eq!(Square::G1.offset(-1, 2), None);
    }

    #[test]
    fn display_is_algebraic() {
        assert_eq!(Square::E2.to_string(), "e2");
        assert_eq!(Square::A8.to_string(), "a8");
        assert_eq!(Square::H1.to_string(), "h1");
        assert_eq!("g7".parse::<Square>().unwrap(), Square::G7);
    }

    #[test]
    fn parsing_rejects_garbage() {
        assert!(Square::from_uci("").is_err());
        assert!(Square::from_uci("e").is_err());
        assert!(Square::from_uci("e22").is_err());
        assert!(Square::from_uci("e0").is_err());
        assert!(Square::from_uci("z4").is_err());
    }

    #[test]
    fn iter_visits_every_square_once() {
        let squares = Square::iter().collect::<Vec<_>>();
        assert_eq!(squares.len(), Square::COUNT);
        assert_eq!(squares.first(), Some(&Square::A8));
        assert_eq!(squares.last(), Some(&Square::H1));
        assert!(squares.windows(2).all(|w| w[0] < w[1]));
    }
}
