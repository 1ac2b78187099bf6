// One game at the table: the board plus whose turn it is.
// Move legality, check and end-of-game detection are not modelled; the
// predicates below answer the turn-ownership question only.

use log::{debug, info};

use crate::game::board::{Board, Square};
use crate::game::fen::STARTING_FEN;
use crate::game::mv::{Move, MoveError};
use crate::game::piece::{Owner, Piece};

pub const PLAYER_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessGame {
    board: Board,
    current: Owner,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// A game with an empty board and White to move.
    pub fn new() -> Self {
        ChessGame {
            board: Board::new(),
            current: Owner::White,
        }
    }

    pub fn set_up_board(&mut self) {
        self.board.load_fen(STARTING_FEN);
        self.current = Owner::White;
        info!("game set up for {} players", PLAYER_COUNT);
    }

    pub fn stop_game(&mut self) {
        self.board.clear();
        info!("game stopped, board cleared");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current_player(&self) -> Owner {
        self.current
    }

    pub fn end_turn(&mut self) {
        self.current = self.current.opponent();
        debug!("{} to move", self.current.name());
    }

    /// A piece may be picked up only by the player who owns it.
    pub fn can_piece_move_from(&self, piece: Piece, _from: Square) -> bool {
        piece.owner == self.current
    }

    pub fn can_piece_move_from_to(&self, _piece: Piece, _from: Square, _to: Square) -> bool {
        true
    }

    /// Clicking an empty square never starts an action.
    pub fn action_for_empty_square(&mut self, _square: Square) -> bool {
        false
    }

    pub fn check_for_winner(&self) -> Option<Owner> {
        None
    }

    pub fn check_for_draw(&self) -> bool {
        false
    }

    /// Move the piece on `mv.from` to `mv.to`, replacing any occupant, and pass
    /// the turn. Returns the piece that was displaced.
    pub fn apply_move(&mut self, mv: Move) -> Result<Option<Piece>, MoveError> {
        let piece = self.board.get(mv.from).ok_or(MoveError::NoPiece(mv.from))?;
        if !self.can_piece_move_from(piece, mv.from) {
            return Err(MoveError::NotYourPiece {
                square: mv.from,
                owner: piece.owner,
            });
        }
        if !self.can_piece_move_from_to(piece, mv.from, mv.to) {
            return Err(MoveError::Rejected {
                from: mv.from,
                to: mv.to,
            });
        }

        self.board.set(mv.from, None);
        let displaced = self.board.set(mv.to, Some(piece));
        debug!("{} {:?} {} -> {}", piece.owner.name(), piece.kind, mv.from, mv.to);
        self.end_turn();
        Ok(displaced)
    }

    pub fn load_fen(&mut self, fen: &str) {
        self.board.load_fen(fen);
    }

    pub fn owner_at(&self, x: i32, y: i32) -> Option<Owner> {
        self.board.owner_at(x, y)
    }

    pub fn initial_state_string(&self) -> String {
        self.state_string()
    }

    pub fn state_string(&self) -> String {
        self.board.state_string()
    }

    pub fn set_state_string(&mut self, s: &str) {
        self.board.set_state_string(s);
    }
}
