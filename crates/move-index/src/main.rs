//! Move index tool.
//!
//! Counts perft nodes, lists legal moves in generation order, and converts
//! games between UCI move strings and move indices.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use chess_movegen::{codec, perft, perft_divide, MagicTables, Position};
use config::IndexConfig;

#[derive(Parser)]
#[command(name = "move-index")]
#[command(about = "Legal move generation and move index encoding of chess games")]
struct Cli {
    /// Configuration file (defaults to ./move-index.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Starting position as FEN, overriding the configured one
    #[arg(long, global = true)]
    fen: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count leaf nodes of the legal move tree
    Perft {
        /// Search depth in plies
        depth: Option<u32>,

        /// Print the node count below every root move
        #[arg(short, long)]
        divide: bool,
    },
    /// List legal moves with their indices
    Moves {
        /// Print castling as king-takes-rook
        #[arg(long)]
        chess960: bool,
    },
    /// Convert UCI moves to move indices
    Encode {
        /// Moves in UCI notation, e.g. e2e4 e7e5
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the ideal code length of the game
        #[arg(long)]
        bits: bool,
    },
    /// Convert move indices back to UCI moves
    Decode {
        /// One index per ply
        #[arg(required = true)]
        indices: Vec<u16>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(IndexConfig::config_path);
    let config = IndexConfig::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    tracing::debug!(?config, "Configuration loaded");

    let fen = cli.fen.as_deref().unwrap_or(&config.start_fen);
    let start = Position::from_fen(fen).with_context(|| format!("invalid FEN '{fen}'"))?;
    let tables = MagicTables::global();

    match cli.command {
        Commands::Perft { depth, divide } => {
            let depth = depth.unwrap_or(config.perft_depth);
            let started = Instant::now();
            let nodes = if divide {
                let split = perft_divide(&start, tables, depth);
                for (uci, count) in &split {
                    println!("{uci}: {count}");
                }
                println!();
                split.iter().map(|(_, count)| count).sum()
            } else {
                perft(&start, tables, depth)
            };
            let elapsed = started.elapsed();
            tracing::info!(depth, nodes, ?elapsed, "Perft finished");
            println!("Nodes searched: {nodes}");
        }
        Commands::Moves { chess960 } => {
            let moves = start.legal_moves(tables);
            if moves.is_empty() {
                match start.outcome(tables) {
                    Some(outcome) => println!("No legal moves ({outcome})"),
                    None => println!("No legal moves"),
                }
            }
            for (index, m) in moves.iter().enumerate() {
                let uci = if chess960 {
                    m.to_uci_chess960()
                } else {
                    m.to_uci()
                };
                println!("{index:>3} {uci}");
            }
        }
        Commands::Encode { moves, bits } => {
            let indices = codec::encode_uci_game(&start, tables, moves.as_slice())?;
            println!("{}", join(&indices));

            if bits || config.show_bits {
                let played = codec::decode_game(&start, tables, &indices)?;
                let summary = codec::bits_per_move(&start, tables, &played)?;
                println!(
                    "{} plies, {:.1} bits total, {:.2} bits per ply",
                    summary.plies,
                    summary.total_bits,
                    summary.mean()
                );
            }
        }
        Commands::Decode { indices } => {
            let moves = codec::decode_uci_game(&start, tables, &indices)?;
            println!("{}", moves.join(" "));
        }
    }

    Ok(())
}

fn join(indices: &[u16]) -> String {
    indices
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
