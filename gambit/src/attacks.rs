/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{Board, Castling, Color, MoveGen, Square};

/// Returns `true` if any piece of `defending`'s opponent attacks `square`.
///
/// Scans the whole board and generates the pseudo-legal moves of every enemy piece, with castling excluded.
/// A square is attacked if it is among them, so a Pawn covers the squares it could push to and
/// only those diagonals that hold a piece of `defending`.
///
/// This must never consult [`crate::LegalityFilter`]:
/// legality is itself decided by asking this function whether the King is attacked.
///
/// # Example
/// ```
/// # use gambit::{square_under_attack, Board, Color, Square};
/// let board = Board::standard();
/// // The Knight on G8 covers F6 and H6
/// assert!(square_under_attack(&board, Square::F6, Color::White));
/// assert!(!square_under_attack(&board, Square::E4, Color::White));
///
/// // The Pawn on E2 can reach E4
/// assert!(square_under_attack(&board, Square::E4, Color::Black));
/// ```
pub fn square_under_attack(board: &Board, square: Square, defending: Color) -> bool {
    let movegen = MoveGen::new(board);

    board
        .pieces(defending.opponent())
        .any(|attacker| {
            movegen
                .moves_for(attacker, Castling::Exclude)
                .contains(&square)
        })
}

/// Returns `true` if `color`'s King is attacked.
///
/// A side without a King is never in check.
///
/// # Example
/// ```
/// # use gambit::{is_in_check, Board, Color};
/// assert!(!is_in_check(&Board::standard(), Color::White));
/// assert!(!is_in_check(&Board::new(), Color::Black));
/// ```
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king(color)
        .is_some_and(|king| square_under_attack(board, king.square(), color))
}
