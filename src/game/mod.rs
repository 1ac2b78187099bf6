pub mod board;
pub mod fen;
pub mod mv;
pub mod piece;
pub mod session;
pub mod state;
