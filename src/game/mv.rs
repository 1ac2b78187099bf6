//! Simple move representation and error types.

use crate::game::board::Square;
use crate::game::piece::Owner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    NoPiece(Square),
    #[error("the piece on {square} belongs to {owner}, not the player to move")]
    NotYourPiece { square: Square, owner: Owner },
    #[error("{from} to {to} is not allowed")]
    Rejected { from: Square, to: Square },
}
