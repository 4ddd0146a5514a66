/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use gambit::{Game, GameStatus, Move, Square};

/// Play a game of chess against yourself in the terminal.
///
/// Commands:
///   <move>        play a move, such as `e2e4`
///   select <sq>   select a piece and highlight where it can go
///   undo          take back the last move
///   moves         list every legal move
///   reset         start over
///   quit          leave
#[derive(Debug, Parser)]
#[command(verbatim_doc_comment)]
struct Cli {
    /// Moves to play before handing over control, such as `e2e4 e7e5`.
    #[arg(required = false)]
    moves: Vec<String>,

    /// Disable colored output.
    #[arg(long, default_value = "false")]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let mut game = Game::new();
    for mv_str in &args.moves {
        let mv = Move::from_uci(mv_str).context(format!("Failed to parse {mv_str:?} as a move"))?;
        if !game.make_move(mv) {
            anyhow::bail!("{mv} is not a legal move");
        }
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        render(&game);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let mut words = line.split_ascii_whitespace();

        match (words.next(), words.next()) {
            (None, _) => continue,
            (Some("quit" | "exit"), _) => break,
            (Some("undo"), _) => match game.undo_last_move() {
                Some(record) => println!("Took back {}", record.as_move()),
                None => eprintln!("{}", "Nothing to undo".yellow()),
            },
            (Some("reset"), _) => game.reset(),
            (Some("moves"), _) => {
                let moves = game.get_legal_moves();
                let moves: Vec<String> = moves.iter().map(Move::to_string).collect();
                println!("{} legal moves: {}", moves.len(), moves.join(" "));
            }
            (Some("select"), Some(square)) => match square.parse::<Square>() {
                Ok(square) => {
                    if !game.select_piece(square.row() as i32, square.col() as i32) {
                        eprintln!("{}", format!("Cannot select {square}").yellow());
                    }
                }
                Err(e) => eprintln!("{}", format!("{e:#}").red()),
            },
            (Some(mv), _) => match Move::from_uci(mv) {
                Ok(mv) => {
                    // The engine accepts either color's moves; turns are kept here
                    if game.board().color_at(mv.from()) != Some(game.side_to_move()) {
                        eprintln!("{}", format!("{} is not yours to move", mv.from()).yellow());
                    } else if !game.make_move(mv) {
                        eprintln!("{}", format!("{mv} is not a legal move").yellow());
                    }
                }
                Err(e) => eprintln!("{}", format!("{e:#}").red()),
            },
        }
    }

    Ok(())
}

/// Draws the board, highlighting the last move and the selected piece's destinations.
fn render(game: &Game) {
    let last_move = game.last_move();

    for row in 0..8u8 {
        print!("{} ", 8 - row);
        for col in 0..8u8 {
            let square = Square::new(row, col);
            let cell = game
                .board()
                .piece_at(square)
                .map(|piece| piece.char())
                .unwrap_or('.')
                .to_string();

            let cell = if game.selected_square() == Some(square) {
                cell.on_cyan()
            } else if game.legal_destinations().contains(&square) {
                cell.on_green()
            } else if last_move.is_some_and(|mv| mv.from() == square || mv.to() == square) {
                cell.on_yellow()
            } else {
                cell.normal()
            };

            print!("{cell} ");
        }
        println!();
    }
    println!("  a b c d e f g h");

    let status = match game.status() {
        GameStatus::Playing => String::new(),
        GameStatus::Check => format!(" {}", "(check)".red()),
        GameStatus::Checkmate => format!(" {}", "(checkmate)".red().bold()),
    };
    println!("{} to move{status}", game.side_to_move().name());
}
