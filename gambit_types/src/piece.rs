/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{bail, Result};

use super::{Square, PROMOTION_KIND};

/// Represents the color of a player, piece, square, etc. within a chess board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Debug)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// Number of color variants.
    pub const COUNT: usize = 2;

    /// An array of both colors, starting with White.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::White, Self::Black]
    }

    /// Returns this [`Color`]'s opposite / inverse / enemy.
    ///
    /// # Example
    /// ```
    /// # use gambit_types::Color;
    /// assert_eq!(Color::White.opponent(), Color::Black);
    /// assert_eq!(Color::Black.opponent(), Color::White);
    /// ```
    #[inline(always)]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// The direction (in rows) that this color's Pawns advance.
    ///
    /// White moves "up" the board, toward row `0`.
    #[inline(always)]
    pub const fn forward(&self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// The row that this color's back rank occupies at the start of a game.
    #[inline(always)]
    pub const fn home_row(&self) -> u8 {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }

    /// The row that this color's Pawns start on, and may double-push from.
    #[inline(always)]
    pub const fn pawn_row(&self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    /// The row on which this color's Pawns promote: the opponent's back rank.
    #[inline(always)]
    pub const fn promotion_row(&self) -> u8 {
        self.opponent().home_row()
    }

    /// Fetch a human-readable name for this color.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// The single-character abbreviation for this color (`'w'` or `'b'`).
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "w" | "W" | "white" | "White" => Ok(Self::White),
            "b" | "B" | "black" | "Black" => Ok(Self::Black),
            _ => bail!("Color must be either 'w' or 'b'. Got {s:?}"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// Represents the kind (or "role") that a chess piece can be.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Creates a new [`PieceKind`] from a character, ignoring case.
    ///
    /// # Example
    /// ```
    /// # use gambit_types::PieceKind;
    /// assert_eq!(PieceKind::from_char('n').unwrap(), PieceKind::Knight);
    /// assert_eq!(PieceKind::from_char('Q').unwrap(), PieceKind::Queen);
    /// assert!(PieceKind::from_char('x').is_err());
    /// ```
    pub fn from_char(kind: char) -> Result<Self> {
        match kind.to_ascii_lowercase() {
            'p' => Ok(Self::Pawn),
            'n' => Ok(Self::Knight),
            'b' => Ok(Self::Bishop),
            'r' => Ok(Self::Rook),
            'q' => Ok(Self::Queen),
            'k' => Ok(Self::King),
            _ => bail!("Invalid char for piece kind: {kind:?}"),
        }
    }

    /// The lowercase character for this kind.
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }

    /// Fetch a human-readable name for this kind.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A chess piece on the board: its kind, color, current location, and whether it has moved yet.
///
/// The location is kept in sync with the board cell that owns the piece.
/// `has_moved` only matters for castling eligibility; Pawns decide their double-push
/// by comparing against [`Color::pawn_row`] instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
    has_moved: bool,
}

impl Piece {
    /// Creates a new, unmoved [`Piece`] at `square`.
    #[inline(always)]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            has_moved: false,
        }
    }

    /// Creates a new [`Piece`] from a character and a location.
    ///
    /// Uppercase is White, lowercase is Black.
    ///
    /// # Example
    /// ```
    /// # use gambit_types::{Color, Piece, PieceKind, Square};
    /// let piece = Piece::from_uci('N', Square::B1).unwrap();
    /// assert_eq!(piece.kind(), PieceKind::Knight);
    /// assert_eq!(piece.color(), Color::White);
    /// ```
    pub fn from_uci(piece: char, square: Square) -> Result<Self> {
        let kind = PieceKind::from_char(piece)?;
        let color = if piece.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        Ok(Self::new(kind, color, square))
    }

    /// Returns a copy of this piece, marked as having already moved.
    #[inline(always)]
    pub const fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }

    #[inline(always)]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline(always)]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline(always)]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline(always)]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[inline(always)]
    pub const fn is_pawn(&self) -> bool {
        matches!(self.kind, PieceKind::Pawn)
    }

    #[inline(always)]
    pub const fn is_rook(&self) -> bool {
        matches!(self.kind, PieceKind::Rook)
    }

    #[inline(always)]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Relocates this piece. Only the board should call this, when it stores the piece in a cell.
    #[inline(always)]
    pub fn set_square(&mut self, square: Square) {
        self.square = square;
    }

    /// Returns `true` if this piece is a Pawn standing on its promotion row.
    #[inline(always)]
    pub const fn should_promote(&self) -> bool {
        self.is_pawn() && self.square.row() == self.color.promotion_row()
    }

    /// Promotes this piece to [`PROMOTION_KIND`], keeping its color, location, and moved flag.
    ///
    /// # Example
    /// ```
    /// # use gambit_types::{Color, Piece, PieceKind, Square};
    /// let pawn = Piece::new(PieceKind::Pawn, Color::White, Square::A8);
    /// assert_eq!(pawn.promoted().kind(), PieceKind::Queen);
    /// ```
    #[inline(always)]
    pub const fn promoted(mut self) -> Self {
        self.kind = PROMOTION_KIND;
        self
    }

    /// The character representing this piece: uppercase for White, lowercase for Black.
    #[inline(always)]
    pub const fn char(&self) -> char {
        let c = self.kind.char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}
