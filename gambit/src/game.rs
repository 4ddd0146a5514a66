/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use super::{
    is_in_check, Board, CastlingMove, Color, LegalityFilter, Move, MoveList, MoveRecord, Piece,
    Square, CASTLING_DISTANCE, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL,
};

/// Where a [`Game`] stands, as far as the side to move is concerned.
///
/// Stalemate (no legal moves while not in check) is not distinguished from [`GameStatus::Playing`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GameStatus {
    /// The side to move is not in check.
    Playing,

    /// The side to move is in check, but has a way out.
    Check,

    /// The side to move is in check and has no legal moves. Terminal.
    Checkmate,
}

/// High-level abstraction of a game of chess: the board, whose turn it is, and everything needed to
/// select pieces, play moves, and take them back.
///
/// All commands report failure through their return value and leave the game untouched when they fail.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Game {
    /// Every piece on the board.
    board: Board,

    /// The [`Color`] of the current player.
    side_to_move: Color,

    /// Square of the currently selected piece, if any.
    selected: Option<Square>,

    /// Cached legal destinations of the selected piece. Empty when nothing is selected.
    legal_destinations: MoveList,

    /// The most recently executed move, for highlighting.
    last_move: Option<Move>,

    /// Whether the side to move is in check.
    ///
    /// Recomputed after every move; cleared (not recomputed) by an undo.
    check: bool,

    /// Whether the side to move has been checkmated.
    checkmate: bool,

    /// Everything needed to undo each move played so far, oldest first.
    history: Vec<MoveRecord>,
}

impl Game {
    /// Creates a new [`Game`] from the standard opening position, with White to move.
    ///
    /// # Example
    /// ```
    /// # use gambit::{Color, Game, GameStatus};
    /// let game = Game::new();
    /// assert_eq!(game.side_to_move(), Color::White);
    /// assert_eq!(game.status(), GameStatus::Playing);
    /// assert!(game.history().is_empty());
    /// ```
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    /// Creates a new [`Game`] from an arbitrary [`Board`], with `side_to_move` to play.
    ///
    /// The check and checkmate flags are computed for the provided position.
    /// No cardinality rules are enforced on the board.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let mut game = Self {
            board,
            side_to_move,
            selected: None,
            legal_destinations: MoveList::new(),
            last_move: None,
            check: false,
            checkmate: false,
            history: Vec::new(),
        };

        game.recompute_check_state();
        game
    }

    /// Discards everything and starts over from the opening position.
    #[inline(always)]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Fetch the internal [`Board`] of this [`Game`].
    #[inline(always)]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Fetches the piece at `(row, col)`. Out-of-range coordinates hold no piece.
    #[inline(always)]
    pub fn piece_at(&self, row: i32, col: i32) -> Option<&Piece> {
        self.board.get(row, col)
    }

    /// Returns the current player as a [`Color`].
    #[inline(always)]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns `true` if the side-to-move is currently in check.
    #[inline(always)]
    pub const fn is_check(&self) -> bool {
        self.check
    }

    /// Returns `true` if the side-to-move has been checkmated.
    #[inline(always)]
    pub const fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Summarizes the check/checkmate flags as a [`GameStatus`].
    #[inline(always)]
    pub const fn status(&self) -> GameStatus {
        if self.checkmate {
            GameStatus::Checkmate
        } else if self.check {
            GameStatus::Check
        } else {
            GameStatus::Playing
        }
    }

    /// The most recently executed move, if any.
    #[inline(always)]
    pub const fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// The square of the currently selected piece, if any.
    #[inline(always)]
    pub const fn selected_square(&self) -> Option<Square> {
        self.selected
    }

    /// The currently selected piece, if any.
    #[inline(always)]
    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selected.and_then(|square| self.board.piece_at(square))
    }

    /// Legal destinations of the currently selected piece. Empty if nothing is selected.
    #[inline(always)]
    pub fn legal_destinations(&self) -> &[Square] {
        &self.legal_destinations
    }

    /// Records of every move played so far, oldest first.
    #[inline(always)]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Generates the legal destinations for whatever piece stands on `square`, regardless of whose turn it is.
    ///
    /// Needs `&mut self` because legality is decided by briefly playing each candidate on the board;
    /// the board is always restored before this returns.
    #[inline(always)]
    pub fn legal_moves_for(&mut self, square: Square) -> MoveList {
        LegalityFilter::new(&mut self.board).legal_moves(square)
    }

    /// Generate all legal moves for the side to move.
    ///
    /// # Example
    /// ```
    /// # use gambit::Game;
    /// let mut game = Game::new();
    /// assert_eq!(game.get_legal_moves().len(), 20);
    /// ```
    #[inline(always)]
    pub fn get_legal_moves(&mut self) -> Vec<Move> {
        let color = self.side_to_move;
        LegalityFilter::new(&mut self.board).all_legal_moves(color)
    }

    /// Returns `true` if any piece of `color` has a legal move.
    #[inline(always)]
    pub fn has_any_legal_move(&mut self, color: Color) -> bool {
        LegalityFilter::new(&mut self.board).has_any_legal_move(color)
    }

    /// Selects the piece at `(row, col)` and caches its legal destinations.
    ///
    /// Only a piece belonging to the side to move can be selected.
    /// Anything else (an empty square, an enemy piece, coordinates off the board) is ignored and returns `false`.
    ///
    /// # Example
    /// ```
    /// # use gambit::{Game, Square};
    /// let mut game = Game::new();
    /// assert!(game.select_piece(6, 4));
    /// assert_eq!(game.legal_destinations(), &[Square::E3, Square::E4]);
    ///
    /// // Black's pieces cannot be selected on White's turn
    /// assert!(!game.select_piece(1, 4));
    /// assert_eq!(game.selected_square(), Some(Square::E2));
    /// ```
    pub fn select_piece(&mut self, row: i32, col: i32) -> bool {
        let Some(square) = Square::from_coords(row, col) else {
            return false;
        };

        if self.board.color_at(square) != Some(self.side_to_move) {
            return false;
        }

        self.legal_destinations = self.legal_moves_for(square);
        self.selected = Some(square);
        true
    }

    /// Clears the current selection, if any.
    #[inline(always)]
    pub fn deselect(&mut self) {
        self.selected = None;
        self.legal_destinations.clear();
    }

    /// Moves the piece at `(from_row, from_col)` to `(to_row, to_col)`, if that is a legal move.
    ///
    /// See [`Game::make_move`].
    ///
    /// # Example
    /// ```
    /// # use gambit::{Color, Game};
    /// let mut game = Game::new();
    /// assert!(game.apply_move(6, 4, 4, 4)); // e2e4
    /// assert_eq!(game.side_to_move(), Color::Black);
    ///
    /// assert!(!game.apply_move(1, 4, 1, 4)); // A piece cannot stay where it is
    /// assert!(!game.apply_move(1, 4, 8, 4)); // Off the board
    /// ```
    pub fn apply_move(&mut self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> bool {
        let (Some(from), Some(to)) = (
            Square::from_coords(from_row, from_col),
            Square::from_coords(to_row, to_col),
        ) else {
            return false;
        };

        self.make_move(Move::new(from, to))
    }

    /// Applies the provided [`Move`], if it is legal to make.
    ///
    /// A move is legal if a piece stands on its origin, and its destination is among that piece's
    /// legal destinations. Otherwise, nothing changes and `false` is returned.
    ///
    /// The turn is not checked here: either color's piece may be moved, and the turn passes to
    /// the opponent of whoever moved last. Only [`Game::select_piece`] is limited to the side to move.
    ///
    /// On success:
    /// 1. The piece moves (capturing whatever was on the destination) and is flagged as moved.
    ///    A Pawn reaching its last row becomes a Queen; a King stepping two columns brings its Rook along.
    /// 2. The move is recorded for undo and as the last move.
    /// 3. The turn passes, and check/checkmate are recomputed for the new side to move.
    /// 4. The selection is cleared.
    pub fn make_move(&mut self, mv: Move) -> bool {
        let (from, to) = mv.parts();

        let Some(&piece) = self.board.piece_at(from) else {
            return false;
        };

        if !self.legal_moves_for(from).contains(&to) {
            return false;
        }

        let mut record = MoveRecord {
            piece,
            from,
            to,
            captured: self.board.piece_at(to).copied(),
            castling: None,
        };

        // Move the piece, promoting it if it reached the last row
        self.board.take(from);
        let mut moved = piece.moved();
        moved.set_square(to);
        if moved.should_promote() {
            moved = moved.promoted();
        }
        self.board.set_at(to, Some(moved));

        if piece.is_king() && from.col().abs_diff(to.col()) == CASTLING_DISTANCE as u8 {
            record.castling = self.castle_rook(from, to);
        }

        self.last_move = Some(mv);
        self.history.push(record);

        self.side_to_move = self.side_to_move.opponent();
        self.recompute_check_state();
        self.deselect();

        true
    }

    /// Applies each of the provided moves in order, stopping at the first one that is not legal.
    ///
    /// Returns `true` if every move was applied.
    pub fn make_moves(&mut self, moves: impl IntoIterator<Item = Move>) -> bool {
        moves.into_iter().all(|mv| self.make_move(mv))
    }

    /// Moves the Rook that the King on `king_from` castles with, now that the King has landed on `king_to`.
    ///
    /// The Rook lands on the square the King crossed.
    fn castle_rook(&mut self, king_from: Square, king_to: Square) -> Option<CastlingMove> {
        let (rook_col, step) = if king_to.col() > king_from.col() {
            (KINGSIDE_ROOK_COL, 1)
        } else {
            (QUEENSIDE_ROOK_COL, -1)
        };

        let to = king_from.offset(0, step)?;
        let rook = self.board.take(king_from.with_col(rook_col))?;
        self.board.set_at(to, Some(rook.moved()));

        Some(CastlingMove { rook, to })
    }

    /// Takes back the most recent move, returning its record. Does nothing if no moves have been played.
    ///
    /// The board, side to move, and last move are restored exactly; the selection is cleared.
    /// The check and checkmate flags are cleared rather than recomputed, so they may disagree with
    /// the restored position until the next move is applied.
    ///
    /// # Example
    /// ```
    /// # use gambit::{Game, Move, Square};
    /// let mut game = Game::new();
    /// game.make_move(Move::new(Square::E2, Square::E4));
    ///
    /// let record = game.undo_last_move().unwrap();
    /// assert_eq!(record.as_move(), Move::new(Square::E2, Square::E4));
    /// assert_eq!(game, Game::new());
    ///
    /// assert!(game.undo_last_move().is_none());
    /// ```
    pub fn undo_last_move(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;

        if let Some(castling) = record.castling {
            self.board.take(castling.to);
            self.board.place(castling.rook);
        }

        self.board.set_at(record.to, record.captured);
        self.board.place(record.piece);

        self.side_to_move = self.side_to_move.opponent();
        self.last_move = self.history.last().map(MoveRecord::as_move);
        self.check = false;
        self.checkmate = false;
        self.deselect();

        Some(record)
    }

    /// Recomputes the check and checkmate flags for the side to move.
    fn recompute_check_state(&mut self) {
        let color = self.side_to_move;
        self.check = is_in_check(&self.board, color);
        self.checkmate = self.check && !self.has_any_legal_move(color);
    }
}

impl Default for Game {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.side_to_move.name())?;

        match self.status() {
            GameStatus::Playing => Ok(()),
            GameStatus::Check => write!(f, " (check)"),
            GameStatus::Checkmate => write!(f, " (checkmate)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MoveGen, PieceKind};

    fn board_with(pieces: &[(char, Square)]) -> Board {
        let mut board = Board::new();
        for &(c, square) in pieces {
            board.place(Piece::from_uci(c, square).unwrap());
        }
        board
    }

    fn play(game: &mut Game, moves: &str) {
        for mv in moves.split_ascii_whitespace() {
            let mv = Move::from_uci(mv).unwrap();
            assert!(game.make_move(mv), "{mv} was rejected in:\n{game}");
        }
    }

    fn sorted(moves: &[Square]) -> Vec<Square> {
        let mut moves = moves.to_vec();
        moves.sort();
        moves
    }

    #[test]
    fn initial_pawn_destinations() {
        let game = Game::new();
        let pawn = game.piece_at(6, 4).unwrap();
        let moves = MoveGen::new(game.board()).moves_for(pawn, crate::Castling::Exclude);
        assert_eq!(
            sorted(&moves),
            sorted(&[Square::from_coords(5, 4).unwrap(), Square::from_coords(4, 4).unwrap()])
        );
    }

    #[test]
    fn fools_mate() {
        let mut game = Game::new();
        assert!(game.apply_move(6, 5, 5, 5)); // f2f3
        assert!(game.apply_move(1, 4, 3, 4)); // e7e5
        assert!(game.apply_move(6, 6, 4, 6)); // g2g4
        assert!(!game.is_checkmate());
        assert!(game.apply_move(0, 3, 4, 7)); // d8h4

        assert!(game.is_check());
        assert!(game.is_checkmate());
        assert_eq!(game.status(), GameStatus::Checkmate);
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.get_legal_moves().is_empty());

        // White has nothing left to play
        let before = game.clone();
        assert!(!game.apply_move(6, 4, 5, 4));
        assert!(!game.apply_move(7, 4, 6, 5));
        assert_eq!(game, before);

        // Checkmate is not a hard stop: Black's pieces still move, and White stays mated
        assert!(game.apply_move(1, 0, 2, 0));
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.is_checkmate());
    }

    #[test]
    fn check_without_mate() {
        let mut game = Game::new();
        play(&mut game, "e2e4 f7f5 d1h5");

        assert!(game.is_check());
        assert!(!game.is_checkmate());
        assert_eq!(game.status(), GameStatus::Check);

        // The King's only flight square, F7, is covered by the Queen; g7g6 is the only block
        assert_eq!(game.get_legal_moves(), vec![Move::new(Square::G7, Square::G6)]);
    }

    #[test]
    fn pinned_piece_cannot_unblock() {
        let board = board_with(&[
            ('K', Square::E1),
            ('B', Square::E3),
            ('r', Square::E7),
            ('k', Square::A8),
        ]);
        let mut game = Game::from_board(board, Color::White);

        let pseudo = MoveGen::new(game.board()).moves_at(Square::E3, crate::Castling::Exclude);
        assert!(!pseudo.is_empty());
        assert!(game.legal_moves_for(Square::E3).is_empty());

        assert!(game.select_piece(5, 4));
        assert!(game.legal_destinations().is_empty());
        assert!(!game.apply_move(5, 4, 4, 3));
    }

    #[test]
    fn rejected_moves_change_nothing() {
        let mut game = Game::new();
        play(&mut game, "e2e4 e7e5");
        assert!(game.select_piece(7, 6));
        let before = game.clone();

        // Destination equal to origin
        assert!(!game.apply_move(7, 6, 7, 6));
        // Coordinates outside the board
        assert!(!game.apply_move(-1, 0, 5, 0));
        assert!(!game.apply_move(7, 6, 5, 8));
        assert!(!game.apply_move(8, 8, 8, 8));
        // Empty origin
        assert!(!game.apply_move(4, 0, 3, 0));
        // Not a legal destination for the opponent's piece either
        assert!(!game.apply_move(1, 0, 4, 0));
        // Not a legal destination
        assert!(!game.apply_move(7, 6, 4, 6));
        // Capturing a friendly piece
        assert!(!game.apply_move(7, 3, 6, 3));

        assert_eq!(game, before);
    }

    #[test]
    fn moves_are_not_limited_to_the_side_to_move() {
        let mut game = Game::new();

        // Black's a7a6 on White's turn is legal for that Pawn, so it is played
        assert!(!game.select_piece(1, 0));
        assert!(game.apply_move(1, 0, 2, 0));
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.history()[0].piece.color(), Color::Black);

        // The turn simply passes on from there
        assert!(game.select_piece(1, 1));
        assert!(game.apply_move(6, 4, 4, 4));
        assert_eq!(game.side_to_move(), Color::White);

        game.undo_last_move().unwrap();
        game.undo_last_move().unwrap();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn make_moves_stops_at_the_first_rejected_move() {
        let mut game = Game::new();
        let moves = ["e2e4", "e7e5", "e4e5", "d7d5"].map(|mv| Move::from_uci(mv).unwrap());

        assert!(!game.make_moves(moves));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.last_move(), Some(moves[1]));
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn selection() {
        let mut game = Game::new();

        assert!(!game.select_piece(4, 4)); // Empty
        assert!(!game.select_piece(0, 0)); // Black
        assert!(!game.select_piece(-3, 12)); // Off the board
        assert!(game.selected_piece().is_none());
        assert!(game.legal_destinations().is_empty());

        assert!(game.select_piece(7, 1));
        assert_eq!(game.selected_piece().map(Piece::kind), Some(PieceKind::Knight));
        assert_eq!(
            sorted(game.legal_destinations()),
            sorted(&[Square::A3, Square::C3])
        );

        // Selecting another friendly piece replaces the selection
        assert!(game.select_piece(7, 0));
        assert_eq!(game.selected_square(), Some(Square::A1));
        assert!(game.legal_destinations().is_empty());

        game.deselect();
        assert!(game.selected_piece().is_none());

        // Applying a move clears the selection
        assert!(game.select_piece(6, 3));
        assert!(game.apply_move(6, 3, 4, 3));
        assert!(game.selected_piece().is_none());
        assert!(game.legal_destinations().is_empty());
    }

    #[test]
    fn undo_round_trips() {
        let mut game = Game::new();

        for mv in ["e2e4", "d7d5", "e4d5", "d8d5", "b1c3", "d5a2", "a1a2"] {
            let before = game.clone();
            let mv = Move::from_uci(mv).unwrap();

            assert!(game.make_move(mv));
            assert_eq!(game.last_move(), Some(mv));
            assert_ne!(game.board(), before.board());

            game.undo_last_move().unwrap();
            assert_eq!(game.board(), before.board());
            assert_eq!(game.side_to_move(), before.side_to_move());
            assert_eq!(game.last_move(), before.last_move());
            assert_eq!(game.history(), before.history());

            assert!(game.make_move(mv));
        }

        assert_eq!(game.history().len(), 7);
        assert!(game.history()[2].is_capture());
        assert_eq!(
            game.history()[2].captured.map(|p| p.kind()),
            Some(PieceKind::Pawn)
        );
    }

    #[test]
    fn undo_all_the_way_back() {
        let mut game = Game::new();
        play(&mut game, "g1f3 g8f6 g2g3 b7b6 f1g2 c8b7 e1g1");

        while game.undo_last_move().is_some() {}

        assert_eq!(game, Game::new());
    }

    #[test]
    fn undo_clears_flags_without_recomputing() {
        let mut game = Game::new();
        play(&mut game, "f2f3 e7e5 g2g4 d8h4");
        assert!(game.is_checkmate());

        game.undo_last_move().unwrap();
        assert!(!game.is_check());
        assert!(!game.is_checkmate());
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.last_move(), Some(Move::from_uci("g2g4").unwrap()));

        // Undoing the reply to a check leaves the flag cleared, even though Black is in check again
        let mut game = Game::new();
        play(&mut game, "e2e4 f7f5 d1h5 g7g6");
        game.undo_last_move().unwrap();
        assert!(is_in_check(game.board(), Color::Black));
        assert!(!game.is_check());
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn undo_on_a_fresh_game_does_nothing() {
        let mut game = Game::new();
        assert!(game.select_piece(6, 0));
        let before = game.clone();

        assert!(game.undo_last_move().is_none());
        assert_eq!(game, before);
    }

    #[test]
    fn promotion_to_queen() {
        let board = board_with(&[('K', Square::C1), ('P', Square::B7), ('k', Square::H7)]);
        let mut game = Game::from_board(board, Color::White);

        assert!(game.make_move(Move::new(Square::B7, Square::B8)));
        let queen = game.board().piece_at(Square::B8).copied().unwrap();
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(queen.color(), Color::White);
        assert!(queen.has_moved());

        assert!(game.make_move(Move::new(Square::H7, Square::H6)));

        // The new Queen moves like one
        let moves = game.legal_moves_for(Square::B8);
        assert!(moves.contains(&Square::H2));
        assert!(moves.contains(&Square::B1));
        assert!(moves.contains(&Square::H8));
        assert!(moves.contains(&Square::A7));

        // Taking back the promotion restores the Pawn
        game.undo_last_move().unwrap();
        game.undo_last_move().unwrap();
        assert_eq!(game.board(), &board);
    }

    #[test]
    fn black_promotes_on_the_first_row() {
        let board = board_with(&[
            ('K', Square::H8),
            ('p', Square::G2),
            ('R', Square::F1),
            ('k', Square::A8),
        ]);
        let mut game = Game::from_board(board, Color::Black);

        // Capture-promote onto the Rook
        assert!(game.make_move(Move::new(Square::G2, Square::F1)));
        let queen = game.board().piece_at(Square::F1).copied().unwrap();
        assert_eq!(queen.char(), 'q');
        assert_eq!(game.history()[0].captured.map(|p| p.char()), Some('R'));
    }

    #[test]
    fn castling_moves_the_rook() {
        let board = board_with(&[
            ('K', Square::E1),
            ('R', Square::A1),
            ('R', Square::H1),
            ('k', Square::E8),
            ('r', Square::A8),
        ]);
        let mut game = Game::from_board(board, Color::White);

        assert!(game.select_piece(7, 4));
        assert!(game.legal_destinations().contains(&Square::G1));
        assert!(game.legal_destinations().contains(&Square::C1));

        assert!(game.apply_move(7, 4, 7, 6));
        let king = game.board().piece_at(Square::G1).copied().unwrap();
        let rook = game.board().piece_at(Square::F1).copied().unwrap();
        assert!(king.is_king() && king.has_moved());
        assert!(rook.is_rook() && rook.has_moved());
        assert!(!game.board().has(Square::H1));
        assert!(!game.board().has(Square::E1));
        assert!(game.history()[0].is_castle());

        // Black castles long
        assert!(game.make_move(Move::new(Square::E8, Square::C8)));
        assert_eq!(game.board().piece_at(Square::D8).map(Piece::char), Some('r'));
        assert_eq!(game.board().piece_at(Square::C8).map(Piece::char), Some('k'));

        game.undo_last_move().unwrap();
        game.undo_last_move().unwrap();
        assert_eq!(game.board(), &board);
    }

    #[test]
    fn castling_is_lost_once_a_rook_moves() {
        let board = board_with(&[('K', Square::E1), ('R', Square::H1), ('k', Square::A8)]);
        let mut game = Game::from_board(board, Color::White);

        play(&mut game, "h1h2 a8b8 h2h1 b8a8");
        assert!(!game.legal_moves_for(Square::E1).contains(&Square::G1));
    }

    #[test]
    fn from_board_computes_flags() {
        // Back-rank mate
        let board = board_with(&[
            ('k', Square::G8),
            ('p', Square::F7),
            ('p', Square::G7),
            ('p', Square::H7),
            ('R', Square::D8),
            ('K', Square::G1),
        ]);
        let game = Game::from_board(board, Color::Black);
        assert!(game.is_check());
        assert!(game.is_checkmate());

        // Same position, but White's turn: nobody is in check
        let game = Game::from_board(board, Color::White);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn stalemate_is_not_classified() {
        let board = board_with(&[('k', Square::A8), ('Q', Square::B6), ('K', Square::C1)]);
        let mut game = Game::from_board(board, Color::Black);

        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.get_legal_moves().is_empty());
    }

    #[test]
    fn reset_starts_over() {
        let mut game = Game::new();
        play(&mut game, "f2f3 e7e5 g2g4 d8h4");
        game.reset();
        assert_eq!(game, Game::new());
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn display_reports_status() {
        let mut game = Game::new();
        assert!(game.to_string().ends_with("white to move"));

        play(&mut game, "f2f3 e7e5 g2g4 d8h4");
        assert!(game.to_string().ends_with("white to move (checkmate)"));
    }
}
