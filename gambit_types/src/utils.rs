/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::PieceKind;

/// Number of rows (and columns) on a chessboard.
pub const BOARD_SIZE: usize = 8;

/// Upper bound on the number of destinations a single piece can have.
///
/// A Queen in the center of an empty board reaches 27 squares; a King has at most 8 steps and 2 castles.
pub const MAX_DESTINATIONS: usize = 32;

/// The kind every Pawn turns into upon reaching its last row. Under-promotion is not supported.
pub const PROMOTION_KIND: PieceKind = PieceKind::Queen;

/// Order of the pieces on each back rank at the start of a game, from the A file to the H file.
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column of the Rook that a King castles with on the short (king) side.
pub const KINGSIDE_ROOK_COL: u8 = 7;

/// Column of the Rook that a King castles with on the long (queen) side.
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Number of columns a King travels when castling.
pub const CASTLING_DISTANCE: i8 = 2;

/// `(row, col)` steps along ranks and files; Rook rays.
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// `(row, col)` steps along diagonals; Bishop rays.
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// `(row, col)` jumps available to a Knight.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// `(row, col)` steps available to a King (excluding castling).
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
