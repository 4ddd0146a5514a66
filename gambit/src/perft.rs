/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{Game, Move};

/// Counts the leaf nodes of the legal move tree rooted at `game`, `depth` plies deep.
///
/// The search runs on a copy of `game`, so its flags and selection are left alone.
///
/// # Example
/// ```
/// # use gambit::{perft, Game};
/// let game = Game::new();
/// assert_eq!(perft(&game, 2), 400);
/// ```
pub fn perft(game: &Game, depth: usize) -> u64 {
    count(&mut game.clone(), depth)
}

/// Like [`perft`], but reports the node count below each root move separately.
///
/// Root moves are ordered by origin, then destination.
pub fn splitperft(game: &Game, depth: usize) -> Vec<(Move, u64)> {
    let mut game = game.clone();
    let mut moves = game.get_legal_moves();
    moves.sort_by_key(|mv| mv.parts());

    moves
        .into_iter()
        .map(|mv| (mv, count_after(&mut game, mv, depth.saturating_sub(1))))
        .collect()
}

/// Plays and takes back moves on `game` in place.
fn count(game: &mut Game, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.get_legal_moves();

    // Bulk counting
    if depth == 1 {
        return moves.len() as u64;
    }

    moves.into_iter().fold(0, |nodes, mv| {
        nodes + count_after(game, mv, depth - 1)
    })
}

fn count_after(game: &mut Game, mv: Move, depth: usize) -> u64 {
    if !game.make_move(mv) {
        return 0;
    }

    let nodes = count(game, depth);
    game.undo_last_move();
    nodes
}
