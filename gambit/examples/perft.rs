/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::time::Instant;

use anyhow::bail;
use clap::Parser;

use gambit::{perft, splitperft, Game, Move};

/// Compute total number of states reachable from a position, given a depth.
#[derive(Debug, Parser)]
struct Cli {
    /// Depth to run the perft.
    depth: usize,

    /// List of moves (such as `e2e4`) to apply to the opening position before running the perft.
    #[arg(required = false)]
    moves: Vec<String>,

    /// If set, perform a splitperft, displaying the number of nodes reachable after each move available from the root.
    #[arg(short, long, default_value = "false")]
    split: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut game = Game::default();

    // Apply moves, if any were provided
    for mv_str in &args.moves {
        let mv = Move::from_uci(mv_str)?;
        if !game.make_move(mv) {
            bail!("{mv} is not a legal move in the following position:\n{game}");
        }
    }

    println!(
        "Computing PERFT({}) of the following position:\n{game}\n",
        args.depth
    );

    let now = Instant::now();
    let total_nodes = if args.split {
        let split = splitperft(&game, args.depth);
        for (mv, nodes) in &split {
            println!("{mv}: {nodes}");
        }
        println!();
        split.iter().map(|(_, nodes)| nodes).sum()
    } else {
        perft(&game, args.depth)
    };

    let elapsed = now.elapsed();

    // Compute nodes-per-second metrics
    let nps = total_nodes as f32 / elapsed.as_secs_f32();
    let m_nps = nps / 1_000_000.0;

    println!("  Total Nodes:\t{total_nodes}");
    println!(" Elapsed Time:\t{elapsed:.1?}");
    println!("  Nodes / Sec:\t{nps:.0}");
    println!("M Nodes / Sec:\t{m_nps:.1}");

    Ok(())
}
