/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{bail, Result};

use super::{Piece, Square};

/// A single ply, described only by where a piece left and where it arrived.
///
/// Castling is represented by the King's two-column step; the Rook's relocation is implied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Creates a new [`Move`] from `from` to `to`.
    #[inline(always)]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Parses a [`Move`] from a pair of algebraic squares, such as `"e2e4"`.
    ///
    /// This does not check that the move is legal, or even that a piece stands on the origin.
    ///
    /// # Example
    /// ```
    /// # use gambit::{Move, Square};
    /// let mv = Move::from_uci("e2e4").unwrap();
    /// assert_eq!(mv, Move::new(Square::E2, Square::E4));
    /// assert!(Move::from_uci("e2").is_err());
    /// ```
    pub fn from_uci(uci: &str) -> Result<Self> {
        let uci = uci.trim();
        if uci.len() != 4 || !uci.is_ascii() {
            bail!("Invalid move {uci:?}: moves must be two squares, like \"e2e4\"");
        }

        let from = Square::from_uci(&uci[0..2])?;
        let to = Square::from_uci(&uci[2..4])?;
        Ok(Self::new(from, to))
    }

    #[inline(always)]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline(always)]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// Returns the `(from, to)` parts of this move.
    #[inline(always)]
    pub const fn parts(&self) -> (Square, Square) {
        (self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;
    #[inline(always)]
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_uci(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// The Rook's half of a castling move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CastlingMove {
    /// The Rook as it stood before castling.
    pub rook: Piece,

    /// Where the Rook was placed (the square the King crossed).
    pub to: Square,
}

/// Everything needed to take back a single applied move.
///
/// Records are pushed onto the game history when a move is applied and popped by an undo.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MoveRecord {
    /// The moving piece as it was before the move (before promotion, before being flagged as moved).
    pub piece: Piece,

    /// Origin of the move.
    pub from: Square,

    /// Destination of the move.
    pub to: Square,

    /// Whatever stood on `to` before the move, if anything.
    pub captured: Option<Piece>,

    /// The Rook's relocation, if this move was a castle.
    pub castling: Option<CastlingMove>,
}

impl MoveRecord {
    /// The [`Move`] this record describes.
    #[inline(always)]
    pub const fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }

    /// Returns `true` if this move captured a piece.
    #[inline(always)]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns `true` if this move was a castle.
    #[inline(always)]
    pub const fn is_castle(&self) -> bool {
        self.castling.is_some()
    }
}
