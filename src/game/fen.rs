//! Forsyth-Edwards placement field.
//!
//! [`Board::load_fen`] is deliberately forgiving: malformed input still yields
//! a board, built from whatever the left-to-right scan manages to place.
//! [`Board::from_fen_strict`] validates the field first and reports the first
//! problem it finds.

use log::{debug, trace};

use crate::game::board::{Board, Square, BOARD_SIZE};
use crate::game::piece::Piece;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("FEN placement field is empty")]
    Empty,
    #[error("expected 8 ranks, found {found}")]
    RankCount { found: usize },
    #[error("rank {rank} covers {files} files, expected 8")]
    RankWidth { rank: usize, files: usize },
    #[error("rank {rank} has two empty-square counts in a row")]
    ConsecutiveDigits { rank: usize },
    #[error("invalid character {found:?} in rank {rank}")]
    InvalidCharacter { found: char, rank: usize },
}

/// The placement field: everything before the first whitespace character.
fn placement_field(fen: &str) -> &str {
    fen.split(char::is_whitespace).next().unwrap_or_default()
}

/// Scan position of the lenient importer. It may run off the board, but its
/// arithmetic saturates so any field length is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    x: i32,
    y: i32,
}

impl Cursor {
    fn start() -> Self {
        Cursor {
            x: 0,
            y: BOARD_SIZE as i32 - 1,
        }
    }

    fn advance(&mut self, files: i32) {
        self.x = self.x.saturating_add(files);
    }

    fn next_rank(&mut self) {
        self.y = self.y.saturating_sub(1);
        self.x = 0;
    }

    fn square(self) -> Option<Square> {
        if self.x < 0 || self.y < 0 {
            return None;
        }
        Square::new(self.x as usize, self.y as usize).ok()
    }
}

impl Board {
    pub fn starting_position() -> Self {
        Board::from_fen(STARTING_FEN)
    }

    pub fn from_fen(fen: &str) -> Self {
        let mut board = Board::new();
        board.load_fen(fen);
        board
    }

    /// Clear the board, then place the pieces named by the FEN placement field.
    ///
    /// Trailing FEN fields are ignored. Unknown characters and pieces that land
    /// off the board are skipped, but still advance the file cursor.
    pub fn load_fen(&mut self, fen: &str) {
        let field = placement_field(fen);
        debug!("loading FEN placement {:?}", field);
        self.clear();

        let mut cursor = Cursor::start();

        for c in field.chars() {
            match c {
                '/' => cursor.next_rank(),
                '1'..='8' => cursor.advance((c as u8 - b'0') as i32),
                _ => {
                    match (Piece::from_char(c), cursor.square()) {
                        (Some(piece), Some(square)) => {
                            self.set(square, Some(piece));
                        }
                        (Some(_), None) => trace!(
                            "{:?} at ({}, {}) is off the board, skipped",
                            c,
                            cursor.x,
                            cursor.y
                        ),
                        (None, _) => trace!("ignoring unknown FEN character {:?}", c),
                    }
                    cursor.advance(1);
                }
            }
        }
    }

    /// Parse a placement field that must describe exactly 8 ranks of 8 files.
    pub fn from_fen_strict(fen: &str) -> Result<Self, FenError> {
        let field = placement_field(fen);
        if field.is_empty() {
            return Err(FenError::Empty);
        }
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err(FenError::RankCount { found: ranks.len() });
        }

        let mut board = Board::new();
        for (row, text) in ranks.iter().enumerate() {
            let y = BOARD_SIZE - 1 - row;
            let rank = y + 1;
            let mut files = 0;
            let mut after_digit = false;
            for c in text.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    if after_digit {
                        return Err(FenError::ConsecutiveDigits { rank });
                    }
                    after_digit = true;
                    files += run as usize;
                } else if let Some(piece) = Piece::from_char(c) {
                    after_digit = false;
                    let square = Square::new(files, y)
                        .map_err(|_| FenError::RankWidth { rank, files: files + 1 })?;
                    board.set(square, Some(piece));
                    files += 1;
                } else {
                    return Err(FenError::InvalidCharacter { found: c, rank });
                }
                if files > BOARD_SIZE {
                    return Err(FenError::RankWidth { rank, files });
                }
            }
            if files != BOARD_SIZE {
                return Err(FenError::RankWidth { rank, files });
            }
        }
        Ok(board)
    }

    /// Placement field for the current board, rank 8 first, empty runs as digits.
    pub fn board_fen(&self) -> String {
        let mut fen = String::with_capacity(71);
        for y in (0..BOARD_SIZE).rev() {
            let mut empty = 0;
            for x in 0..BOARD_SIZE {
                match self.piece_at(x, y) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if y > 0 {
                fen.push('/');
            }
        }
        fen
    }
}
