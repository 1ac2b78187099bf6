mod cli;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use chess_board::{Board, Square};
use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::{debug, info};

fn main() -> Result<()> {
    // Initialize logger
    let env = Env::default().filter_or("CHESS_BOARD_LOG_LEVEL", "info");
    env_logger::Builder::from_env(env).init();

    let cli = cli::Cli::parse();
    let cfg_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os("CHESS_BOARD_CONFIG_PATH").map(PathBuf::from));
    let cfg = config::Config::load(cfg_path.as_deref())?;
    debug!("using config {:?}", cfg);

    match cli.command {
        Some(cli::Commands::Export { fen, strict }) => {
            let fen = fen.unwrap_or_else(|| cfg.start_fen.clone());
            let board = if strict || cfg.strict {
                Board::from_fen_strict(&fen)?
            } else {
                Board::from_fen(&fen)
            };
            println!("{}", board.state_string());
        }
        Some(cli::Commands::Import { state }) => {
            let mut board = Board::new();
            board.set_state_string(&state);
            info!("restored {} pawns", board.piece_count());
            println!("{}", board.state_string());
            println!("{}", board.board_fen());
        }
        Some(cli::Commands::Owner { fen, square }) => {
            let board = Board::from_fen(fen.as_deref().unwrap_or(&cfg.start_fen));
            let square = Square::parse(&square)?;
            let owner = board.owner_at(square.x() as i32, square.y() as i32);
            println!("{}", owner.map_or("none", |o| o.name()));
        }
        Some(cli::Commands::Fen { state }) => {
            let board = Board::from_notation_state(&state)?;
            println!("{}", board.board_fen());
        }
        None => {
            // If no subcommand, print help
            cli::Cli::command().print_help()?;
        }
    }
    Ok(())
}
