/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{
    square_under_attack, Board, Piece, PieceKind, Square, CASTLING_DISTANCE,
    DIAGONAL_DIRECTIONS, KINGSIDE_ROOK_COL, KING_OFFSETS, KNIGHT_OFFSETS, MAX_DESTINATIONS,
    ORTHOGONAL_DIRECTIONS, QUEENSIDE_ROOK_COL,
};

/// An alias for an [`arrayvec::ArrayVec`] containing at most [`MAX_DESTINATIONS`] destination squares.
pub type MoveList = arrayvec::ArrayVec<Square, MAX_DESTINATIONS>;

/// Whether King move generation should evaluate castling.
///
/// Castling asks the attack oracle whether the King's path is attacked, and the attack oracle
/// generates moves for every enemy piece (including the enemy King).
/// Attack queries must therefore always use [`Castling::Exclude`], or generation would never terminate.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Castling {
    Include,
    #[default]
    Exclude,
}

/// Generator of *pseudo-legal* moves: moves that obey a piece's movement pattern and the board's
/// occupancy, without regard for whether they leave the mover's own King in check.
///
/// Only ever borrows the [`Board`] immutably. Removing self-check moves is the job of
/// [`crate::LegalityFilter`], which is built on top of this and never the other way around.
#[derive(Clone, Copy)]
pub struct MoveGen<'a> {
    board: &'a Board,
}

impl<'a> MoveGen<'a> {
    /// Creates a new [`MoveGen`] over the provided [`Board`].
    #[inline(always)]
    pub const fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Generates the pseudo-legal destinations of whatever piece stands on `square`.
    ///
    /// An empty square yields no moves.
    ///
    /// # Example
    /// ```
    /// # use gambit::{Board, Castling, MoveGen, Square};
    /// let board = Board::standard();
    /// let moves = MoveGen::new(&board).moves_at(Square::E2, Castling::Exclude);
    /// assert_eq!(moves.as_slice(), &[Square::E3, Square::E4]);
    /// ```
    #[inline(always)]
    pub fn moves_at(&self, square: Square, castling: Castling) -> MoveList {
        self.board
            .piece_at(square)
            .map(|piece| self.moves_for(piece, castling))
            .unwrap_or_default()
    }

    /// Generates the pseudo-legal destinations of `piece`, from the square it stands on.
    pub fn moves_for(&self, piece: &Piece, castling: Castling) -> MoveList {
        let mut moves = MoveList::new();

        match piece.kind() {
            PieceKind::Pawn => {
                self.pawn_pushes(piece, &mut moves);
                self.pawn_captures(piece, &mut moves);
            }
            PieceKind::Knight => self.step_moves(piece, &KNIGHT_OFFSETS, &mut moves),
            PieceKind::Bishop => self.ray_moves(piece, &DIAGONAL_DIRECTIONS, &mut moves),
            PieceKind::Rook => self.ray_moves(piece, &ORTHOGONAL_DIRECTIONS, &mut moves),
            PieceKind::Queen => {
                self.ray_moves(piece, &ORTHOGONAL_DIRECTIONS, &mut moves);
                self.ray_moves(piece, &DIAGONAL_DIRECTIONS, &mut moves);
            }
            PieceKind::King => {
                self.step_moves(piece, &KING_OFFSETS, &mut moves);
                if castling == Castling::Include {
                    self.castling_moves(piece, &mut moves);
                }
            }
        }

        moves
    }

    /// Returns `true` if `square` can be entered by a piece of `piece`'s color (empty or enemy-occupied).
    #[inline(always)]
    fn is_enemy_or_empty(&self, piece: &Piece, square: Square) -> bool {
        self.board
            .color_at(square)
            .map_or(true, |color| color != piece.color())
    }

    /// One square forward if it is empty; from the starting row, a second square if both are empty.
    fn pawn_pushes(&self, pawn: &Piece, moves: &mut MoveList) {
        let forward = pawn.color().forward();

        let Some(single) = pawn.square().offset(forward, 0) else {
            return;
        };
        if self.board.has(single) {
            return;
        }
        moves.push(single);

        if pawn.square().row() == pawn.color().pawn_row() {
            if let Some(double) = single.offset(forward, 0).filter(|sq| !self.board.has(*sq)) {
                moves.push(double);
            }
        }
    }

    /// Diagonal steps forward, only onto squares holding an enemy piece. No en passant.
    fn pawn_captures(&self, pawn: &Piece, moves: &mut MoveList) {
        let forward = pawn.color().forward();
        let enemy = pawn.color().opponent();

        for dc in [-1, 1] {
            if let Some(target) = pawn.square().offset(forward, dc) {
                if self.board.color_at(target) == Some(enemy) {
                    moves.push(target);
                }
            }
        }
    }

    /// Single jumps by each of `offsets` that stay on the board and do not land on a friendly piece.
    fn step_moves(&self, piece: &Piece, offsets: &[(i8, i8)], moves: &mut MoveList) {
        let from = piece.square();
        for &(dr, dc) in offsets {
            if let Some(to) = from.offset(dr, dc) {
                if self.is_enemy_or_empty(piece, to) {
                    moves.push(to);
                }
            }
        }
    }

    /// Casts a ray along each of `directions`.
    ///
    /// A ray collects empty squares until it reaches the edge or a piece.
    /// An enemy piece is included (captured) and a friendly piece is not, but both end the ray.
    fn ray_moves(&self, piece: &Piece, directions: &[(i8, i8)], moves: &mut MoveList) {
        for &(dr, dc) in directions {
            let mut current = piece.square();

            while let Some(next) = current.offset(dr, dc) {
                match self.board.color_at(next) {
                    None => moves.push(next),
                    Some(color) => {
                        if color != piece.color() {
                            moves.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
    }

    /// Appends the King's castling destinations, if any.
    ///
    /// The King may not castle out of check, so the (comparatively expensive) attack check on its
    /// own square is done once, before either side is considered.
    fn castling_moves(&self, king: &Piece, moves: &mut MoveList) {
        if king.has_moved() || square_under_attack(self.board, king.square(), king.color()) {
            return;
        }

        for rook_col in [KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL] {
            if let Some(to) = self.castling_destination(king, rook_col) {
                moves.push(to);
            }
        }
    }

    /// Computes the King's destination when castling with the Rook in column `rook_col`, if castling is possible.
    ///
    /// Requires an unmoved Rook of the King's color, an empty stretch between the two,
    /// and that no square the King crosses (including where it lands) is attacked.
    fn castling_destination(&self, king: &Piece, rook_col: u8) -> Option<Square> {
        let from = king.square();
        let color = king.color();

        let rook = self.board.piece_at(from.with_col(rook_col))?;
        if !rook.is_rook() || rook.has_moved() || rook.color() != color {
            return None;
        }

        let (low, high) = (from.col().min(rook_col), from.col().max(rook_col));
        if (low + 1..high).any(|col| self.board.has(from.with_col(col))) {
            return None;
        }

        let step: i8 = if rook_col > from.col() { 1 } else { -1 };
        let to = from.offset(0, step * CASTLING_DISTANCE)?;

        // The King must land short of the Rook
        if self.board.has(to) {
            return None;
        }

        let path_is_safe = (1..=CASTLING_DISTANCE)
            .filter_map(|distance| from.offset(0, step * distance))
            .all(|square| !square_under_attack(self.board, square, color));

        path_is_safe.then_some(to)
    }
}
