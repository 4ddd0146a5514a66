/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::Deref;

use arrayvec::ArrayVec;

use super::{is_in_check, Board, Castling, Color, Move, MoveGen, MoveList, Piece, Square};

/// A move temporarily played on a [`Board`], taken back when this guard is dropped.
///
/// While alive, the guard holds the only (mutable) borrow of the board, so nothing can observe the
/// temporary position except through the guard itself. The revert happens in [`Drop`], and therefore
/// runs on every exit path: early returns, `?`, and unwinding panics alike.
pub struct Simulation<'a> {
    board: &'a mut Board,

    /// The mover exactly as it was before the move.
    mover: Piece,

    /// Whatever stood on the destination.
    captured: Option<Piece>,

    to: Square,
}

impl<'a> Simulation<'a> {
    /// Moves the piece on `from` to `to`, remembering everything needed to undo it.
    ///
    /// Returns `None` (leaving the board untouched) if `from` is empty.
    ///
    /// # Example
    /// ```
    /// # use gambit::{Board, Simulation, Square};
    /// let mut board = Board::standard();
    /// {
    ///     let sim = Simulation::new(&mut board, Square::E2, Square::E4).unwrap();
    ///     assert!(sim.has(Square::E4));
    ///     assert!(!sim.has(Square::E2));
    /// }
    /// assert_eq!(board, Board::standard());
    /// ```
    pub fn new(board: &'a mut Board, from: Square, to: Square) -> Option<Self> {
        let mover = board.take(from)?;
        let captured = board.set_at(to, Some(mover));

        Some(Self {
            board,
            mover,
            captured,
            to,
        })
    }

    /// The piece being moved, as it stood before the simulated move.
    #[inline(always)]
    pub const fn mover(&self) -> &Piece {
        &self.mover
    }

    /// The piece that the simulated move captured, if any.
    #[inline(always)]
    pub const fn captured(&self) -> Option<&Piece> {
        self.captured.as_ref()
    }
}

impl Deref for Simulation<'_> {
    type Target = Board;
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        // Order matters: the destination must be vacated before the mover returns, in case they are the same square.
        self.board.set_at(self.to, self.captured);
        self.board.place(self.mover);
    }
}

/// Filters pseudo-legal moves down to legal ones: moves that do not leave the mover's own King attacked.
///
/// Built on top of [`MoveGen`] and [`is_in_check`]. Because it needs the board mutably (to simulate moves),
/// nothing that only holds a shared `&Board` (such as the attack oracle) can ever call back into it.
pub struct LegalityFilter<'a> {
    board: &'a mut Board,
}

impl<'a> LegalityFilter<'a> {
    /// Creates a new [`LegalityFilter`] over the provided [`Board`].
    #[inline(always)]
    pub fn new(board: &'a mut Board) -> Self {
        Self { board }
    }

    /// Generates the legal destinations of whatever piece stands on `square`.
    ///
    /// Castling is included. An empty square yields no moves.
    ///
    /// # Example
    /// ```
    /// # use gambit::{Board, LegalityFilter, Square};
    /// let mut board = Board::standard();
    /// let moves = LegalityFilter::new(&mut board).legal_moves(Square::G1);
    /// assert_eq!(moves.as_slice(), &[Square::H3, Square::F3]);
    /// ```
    pub fn legal_moves(&mut self, square: Square) -> MoveList {
        let Some(piece) = self.board.piece_at(square).copied() else {
            return MoveList::new();
        };

        let candidates = MoveGen::new(self.board).moves_for(&piece, Castling::Include);

        candidates
            .into_iter()
            .filter(|&to| self.leaves_king_safe(&piece, to))
            .collect()
    }

    /// Returns `true` if moving `piece` to `to` does not leave its own King attacked.
    fn leaves_king_safe(&mut self, piece: &Piece, to: Square) -> bool {
        let Some(simulation) = Simulation::new(self.board, piece.square(), to) else {
            return false;
        };

        !is_in_check(&simulation, piece.color())
    }

    /// Squares of every piece of `color`, in row-major order.
    fn squares_of(&self, color: Color) -> ArrayVec<Square, { Square::COUNT }> {
        self.board.pieces(color).map(Piece::square).collect()
    }

    /// Returns `true` if any piece of `color` has at least one legal move.
    pub fn has_any_legal_move(&mut self, color: Color) -> bool {
        self.squares_of(color)
            .into_iter()
            .any(|square| !self.legal_moves(square).is_empty())
    }

    /// Generates every legal [`Move`] available to `color`, grouped by piece in row-major order.
    pub fn all_legal_moves(&mut self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();

        for from in self.squares_of(color) {
            moves.extend(
                self.legal_moves(from)
                    .into_iter()
                    .map(|to| Move::new(from, to)),
            );
        }

        moves
    }
}
