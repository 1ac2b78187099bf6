//! Board state for a two-player chess table: piece encoding, FEN import and
//! the 64-character state strings used for save/restore.

pub mod game;

pub use game::board::{Board, BoardError, Square};
pub use game::piece::{Owner, Piece, PieceKind};
pub use game::session::ChessGame;
