// An 8x8 grid of optional pieces, stored `[y][x]`.
// x is the file (a..h -> 0..7), y the rank (1..8 -> 0..7).

use std::fmt;

use crate::game::piece::{Owner, Piece};

pub const BOARD_SIZE: usize = 8;
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("square ({x}, {y}) is off the board")]
    OutOfBounds { x: usize, y: usize },
    #[error("invalid square name: {0:?}")]
    InvalidSquareName(String),
}

/// A coordinate that is known to be on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    x: usize,
    y: usize,
}

impl Square {
    pub fn new(x: usize, y: usize) -> Result<Self, BoardError> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Ok(Square { x, y })
        } else {
            Err(BoardError::OutOfBounds { x, y })
        }
    }

    /// Parse algebraic notation such as `"e4"`.
    pub fn parse(name: &str) -> Result<Self, BoardError> {
        let invalid = || BoardError::InvalidSquareName(name.to_string());
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Square {
            x: (file - b'a') as usize,
            y: (rank - b'1') as usize,
        })
    }

    pub fn x(self) -> usize {
        self.x
    }

    pub fn y(self) -> usize {
        self.y
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.x as u8) as char, self.y + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

/// Coordinates in rank-major order: y from 7 down to 0, x from 0 to 7.
///
/// Both the FEN importer and the state codec map string positions to squares
/// through this order.
pub fn rank_major() -> impl Iterator<Item = (usize, usize)> {
    (0..BOARD_SIZE)
        .rev()
        .flat_map(|y| (0..BOARD_SIZE).map(move |x| (x, y)))
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Board::default()
    }

    /// Return the piece at a given file/rank (0-indexed). Returns None if empty
    /// or off the board.
    pub fn piece_at(&self, x: usize, y: usize) -> Option<Piece> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            self.squares[y][x]
        } else {
            None
        }
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.y][square.x]
    }

    /// Replace the occupant of a square, handing back whatever was there.
    pub fn set_piece(
        &mut self,
        x: usize,
        y: usize,
        piece: Option<Piece>,
    ) -> Result<Option<Piece>, BoardError> {
        let square = Square::new(x, y)?;
        Ok(self.set(square, piece))
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[square.y][square.x], piece)
    }

    pub fn remove_piece(&mut self, x: usize, y: usize) -> Result<Option<Piece>, BoardError> {
        self.set_piece(x, y, None)
    }

    pub fn clear(&mut self) {
        self.for_each_square_mut(|slot, _, _| *slot = None);
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().filter(|p| p.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.piece_count() == 0
    }

    /// All 64 squares in rank-major order.
    pub fn squares(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        rank_major().map(move |(x, y)| (Square { x, y }, self.squares[y][x]))
    }

    pub fn for_each_square<F>(&self, mut visit: F)
    where
        F: FnMut(Option<Piece>, usize, usize),
    {
        for (x, y) in rank_major() {
            visit(self.squares[y][x], x, y);
        }
    }

    pub fn for_each_square_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut Option<Piece>, usize, usize),
    {
        for (x, y) in rank_major() {
            visit(&mut self.squares[y][x], x, y);
        }
    }

    /// Owner of the piece on (x, y). Off-board coordinates and empty squares
    /// have no owner.
    pub fn owner_at(&self, x: i32, y: i32) -> Option<Owner> {
        let size = BOARD_SIZE as i32;
        if x < 0 || x >= size || y < 0 || y >= size {
            return None;
        }
        self.squares[y as usize][x as usize].map(|p| p.owner)
    }
}
