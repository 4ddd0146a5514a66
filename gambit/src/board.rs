/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use super::{Color, Piece, PieceKind, Square, BACK_RANK, BOARD_SIZE};

/// Represents all pieces and their locations on a chess board.
///
/// Has no knowledge of whose turn it is, check, or move history. If you need those, see [`crate::Game`].
///
/// Internally an 8x8 mailbox of optional [`Piece`]s. Each cell exclusively owns the piece standing on it,
/// and every stored piece's [`Piece::square`] matches the cell that holds it.
///
/// No cardinality rules are enforced: a board may hold any number of Kings or Pawns per side.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new, empty [`Board`] containing no pieces.
    ///
    /// # Example
    /// ```
    /// # use gambit::Board;
    /// let board = Board::new();
    /// assert_eq!(board.iter().count(), 0);
    /// ```
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a [`Board`] with the standard 32-piece opening layout.
    ///
    /// Black occupies rows `0` and `1`; White occupies rows `6` and `7`.
    ///
    /// # Example
    /// ```
    /// # use gambit::{Board, Color, PieceKind, Square};
    /// let board = Board::standard();
    /// assert_eq!(board.iter().count(), 32);
    /// assert_eq!(board.piece_at(Square::E1).map(|p| p.kind()), Some(PieceKind::King));
    /// assert_eq!(board.piece_at(Square::D8).map(|p| p.color()), Some(Color::Black));
    /// ```
    pub fn standard() -> Self {
        let mut board = Self::new();

        for color in Color::all() {
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                let col = col as u8;
                board.place(Piece::new(kind, color, Square::new(color.home_row(), col)));
                board.place(Piece::new(
                    PieceKind::Pawn,
                    color,
                    Square::new(color.pawn_row(), col),
                ));
            }
        }

        board
    }

    /// Fetches the piece at `(row, col)`, if there is one.
    ///
    /// Coordinates outside the board are not an error; they simply hold no piece.
    ///
    /// # Example
    /// ```
    /// # use gambit::Board;
    /// let board = Board::standard();
    /// assert!(board.get(6, 4).is_some());
    /// assert!(board.get(4, 4).is_none());
    /// assert!(board.get(-1, 4).is_none());
    /// assert!(board.get(3, 8).is_none());
    /// ```
    #[inline(always)]
    pub fn get(&self, row: i32, col: i32) -> Option<&Piece> {
        Square::from_coords(row, col).and_then(|square| self.piece_at(square))
    }

    /// Replaces the contents of `(row, col)` with `piece`, regardless of what was there.
    ///
    /// Out-of-range coordinates are ignored. No legality of any kind is checked.
    #[inline(always)]
    pub fn set(&mut self, row: i32, col: i32, piece: Option<Piece>) {
        if let Some(square) = Square::from_coords(row, col) {
            self.set_at(square, piece);
        }
    }

    /// Fetches the piece at `square`, if there is one.
    #[inline(always)]
    pub const fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.cells[square.row() as usize][square.col() as usize].as_ref()
    }

    /// Returns `true` if there is a piece at the given [`Square`], else `false`.
    ///
    /// # Example
    /// ```
    /// # use gambit::{Board, Square};
    /// let board = Board::default();
    /// assert_eq!(board.has(Square::B1), true);
    /// assert_eq!(board.has(Square::B3), false);
    /// ```
    #[inline(always)]
    pub const fn has(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Fetches the [`Color`] of the piece at `square`, if there is one.
    #[inline(always)]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(Piece::color)
    }

    /// Replaces the contents of `square` with `piece`, returning whatever was there before.
    ///
    /// A stored piece is relocated to `square`, so its location always agrees with its cell.
    #[inline(always)]
    pub fn set_at(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        let piece = piece.map(|mut piece| {
            piece.set_square(square);
            piece
        });

        std::mem::replace(&mut self[square], piece)
    }

    /// Places `piece` on the square it claims to stand on, replacing any occupant.
    ///
    /// # Example
    /// ```
    /// # use gambit::{Board, Color, Piece, PieceKind, Square};
    /// let mut board = Board::new();
    /// board.place(Piece::new(PieceKind::Rook, Color::White, Square::A1));
    /// assert_eq!(board.piece_at(Square::A1).map(|p| p.kind()), Some(PieceKind::Rook));
    /// ```
    #[inline(always)]
    pub fn place(&mut self, piece: Piece) {
        self.set_at(piece.square(), Some(piece));
    }

    /// Removes and returns the piece at `square`, leaving the square empty.
    #[inline(always)]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self[square].take()
    }

    /// Iterates over every piece on the board, in row-major order.
    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flatten().flatten()
    }

    /// Iterates over every piece of the given [`Color`].
    #[inline(always)]
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.iter().filter(move |piece| piece.color() == color)
    }

    /// Finds the King of the given [`Color`] with a linear scan.
    ///
    /// If there are several (a non-standard position), the first found in row-major order is returned.
    #[inline(always)]
    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces(color).find(|piece| piece.is_king())
    }
}

impl Default for Board {
    #[inline(always)]
    fn default() -> Self {
        Self::standard()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;
    #[inline(always)]
    fn index(&self, index: Square) -> &Self::Output {
        &self.cells[index.row() as usize][index.col() as usize]
    }
}

impl IndexMut<Square> for Board {
    #[inline(always)]
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self.cells[index.row() as usize][index.col() as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for cell in cells {
                match cell {
                    Some(piece) => write!(f, " {piece}")?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }

        write!(f, "  ")?;
        for col in 0..BOARD_SIZE as u8 {
            write!(f, " {}", (b'a' + col) as char)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
