//! 64-character save/restore strings.
//!
//! Two formats exist and they are not inverses of each other:
//!
//! * the notation state, written by [`Board::state_string`]: one piece letter
//!   (or `'0'`) per square in rank-major order, rank 8 first;
//! * the reduced state, read by [`Board::set_state_string`]: one decimal digit
//!   per square where `d > 0` is a pawn for player `d - 1`. Only pawns survive
//!   it, and its positions are indexed `y * 8 + x`, so rank 1 comes first.
//!
//! [`Board::from_notation_state`] is the exact inverse of `state_string`.

use log::debug;

use crate::game::board::{Board, BOARD_SIZE, SQUARE_COUNT};
use crate::game::piece::{notation, Owner, Piece, PieceKind, EMPTY_NOTATION};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("state string has {found} squares, expected 64")]
    Length { found: usize },
    #[error("invalid character {found:?} at position {index}")]
    InvalidCharacter { found: char, index: usize },
}

/// Pawn described by one reduced-format character, if any.
///
/// Non-digits and digits naming a player other than 0 or 1 read as empty.
fn reduced_pawn(c: Option<u8>) -> Option<Piece> {
    let digit = c.filter(u8::is_ascii_digit)? - b'0';
    let player = (digit as usize).checked_sub(1)?;
    Owner::from_index(player).map(|owner| Piece::new(PieceKind::Pawn, owner))
}

impl Board {
    /// Notation state: `'0'` for empty squares, FEN letters otherwise.
    pub fn state_string(&self) -> String {
        let mut s = String::with_capacity(SQUARE_COUNT);
        self.for_each_square(|piece, _, _| s.push(notation(piece)));
        s
    }

    /// Overwrite every square from a reduced state string.
    ///
    /// Short strings leave their missing positions empty.
    pub fn set_state_string(&mut self, s: &str) {
        debug!("restoring reduced state {:?}", s);
        let bytes = s.as_bytes();
        self.for_each_square_mut(|slot, x, y| {
            let index = y * BOARD_SIZE + x;
            *slot = reduced_pawn(bytes.get(index).copied());
        });
    }

    /// Parse a notation state string as written by [`Board::state_string`].
    pub fn from_notation_state(s: &str) -> Result<Self, StateError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != SQUARE_COUNT {
            return Err(StateError::Length { found: chars.len() });
        }

        let pieces = chars
            .into_iter()
            .enumerate()
            .map(|(index, c)| match c {
                EMPTY_NOTATION => Ok(None),
                _ => Piece::from_char(c)
                    .map(Some)
                    .ok_or(StateError::InvalidCharacter { found: c, index }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut board = Board::new();
        let mut pieces = pieces.into_iter();
        board.for_each_square_mut(|slot, _, _| *slot = pieces.next().flatten());
        Ok(board)
    }
}
