use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chessboard", version, about = "Inspect and convert chess board states")]
pub struct Cli {
    /// YAML config file; overrides CHESS_BOARD_CONFIG_PATH
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the 64-character state string for a FEN position
    Export {
        #[arg(long)]
        fen: Option<String>,
        /// Reject malformed FEN instead of importing what parses
        #[arg(long)]
        strict: bool,
    },
    /// Restore a reduced (digit) state string and print the result
    Import { state: String },
    /// Print which player owns the piece on a square
    Owner {
        #[arg(long)]
        fen: Option<String>,
        square: String,
    },
    /// Convert a notation state string back to a FEN placement field
    Fen { state: String },
}
