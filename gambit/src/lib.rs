/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![doc = include_str!("../README.md")]

pub use gambit_types::*;

/// Queries for whether a square is attacked, and whether a King is in check.
mod attacks;
/// The 8x8 grid of pieces.
mod board;
/// High-level abstraction of the game of chess: turns, selection, move execution, and undo.
mod game;
/// Filtering pseudo-legal moves down to the ones that keep the King safe.
mod legality;
/// All code related to generating pseudo-legal moves for pieces on a board.
mod movegen;
/// Enums and structs for modeling the movement of a piece on a chessboard.
mod moves;
/// Utility functions for performance testing.
mod perft;

pub use attacks::*;
pub use board::*;
pub use game::*;
pub use legality::*;
pub use movegen::*;
pub use moves::*;
pub use perft::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::attacks::*;
    pub use crate::board::*;
    pub use crate::game::*;
    pub use crate::legality::*;
    pub use crate::movegen::*;
    pub use crate::moves::*;
    pub use crate::perft::*;
    pub use gambit_types::*;
}
