// Pieces are plain values: a kind and the player that owns it.
// The packed tag (`kind + owner * 128`) only exists at the storage boundary.

use std::fmt;

/// Bit set in a tag when the piece belongs to the second player.
pub const OWNER_BIT: u8 = 128;

/// Character emitted for a square with no piece.
pub const EMPTY_NOTATION: char = '0';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Ordinal in `1..=6`. Zero is reserved for "no piece".
    pub fn ordinal(self) -> u8 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Uppercase FEN letter.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Case-insensitive lookup of a FEN letter.
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// One of the two players. White moves first and writes uppercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    White,
    Black,
}

impl Owner {
    /// Player index as used by the game framework.
    pub fn index(self) -> usize {
        match self {
            Owner::White => 0,
            Owner::Black => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Owner::White),
            1 => Some(Owner::Black),
            _ => None,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Owner::White => Owner::Black,
            Owner::Black => Owner::White,
        }
    }

    /// The owner's contribution to a piece tag: 0 or 128.
    pub fn tag_bit(self) -> u8 {
        match self {
            Owner::White => 0,
            Owner::Black => OWNER_BIT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Owner::White => "white",
            Owner::Black => "black",
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Owner,
}

impl Piece {
    pub fn new(kind: PieceKind, owner: Owner) -> Self {
        Piece { kind, owner }
    }

    /// Packed tag: `ordinal + owner * 128`. White tags are `1..=6`, black `129..=134`.
    pub fn encode(self) -> u8 {
        self.kind.ordinal() + self.owner.tag_bit()
    }

    /// Inverse of [`Piece::encode`]. Tags whose kind part falls outside `1..=6`
    /// decode to no piece.
    pub fn decode(tag: u8) -> Option<Self> {
        let owner = if tag >= OWNER_BIT { Owner::Black } else { Owner::White };
        let kind = PieceKind::from_ordinal(tag - owner.tag_bit())?;
        Some(Piece { kind, owner })
    }

    /// Uppercase for white, lowercase for black.
    pub fn to_char(self) -> char {
        let c = self.kind.letter();
        match self.owner {
            Owner::White => c,
            Owner::Black => c.to_ascii_lowercase(),
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let kind = PieceKind::from_letter(c)?;
        let owner = if c.is_ascii_uppercase() { Owner::White } else { Owner::Black };
        Some(Piece { kind, owner })
    }
}

/// Single-character notation for an optional occupant.
pub fn notation(piece: Option<Piece>) -> char {
    piece.map_or(EMPTY_NOTATION, Piece::to_char)
}

/// Notation for a raw tag; invalid tags read as an empty square.
pub fn tag_notation(tag: u8) -> char {
    notation(Piece::decode(tag))
}
