use chess_board::game::fen::{FenError, STARTING_FEN};
use chess_board::{Board, Owner, Piece, PieceKind};

const START_STATE: &str = "rnbqkbnrpppppppp00000000000000000000000000000000PPPPPPPPRNBQKBNR";

#[test]
fn test_starting_position_state() {
    let board = Board::from_fen(STARTING_FEN);
    assert_eq!(board.state_string(), START_STATE);
}

#[test]
fn test_trailing_fields_ignored() {
    let board = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert_eq!(board.state_string(), START_STATE);
}

#[test]
fn test_empty_fen() {
    let board = Board::from_fen("8/8/8/8/8/8/8/8");
    assert_eq!(board.state_string(), "0".repeat(64));
}

#[test]
fn test_load_clears_previous_position() {
    let mut board = Board::starting_position();
    board.load_fen("8/8/8/8/8/8/8/8");
    assert!(board.is_empty());

    board.load_fen("4k3/8/8/8/8/8/8/4K3");
    assert_eq!(board.piece_count(), 2);
    assert_eq!(board.piece_at(4, 0), Some(Piece::new(PieceKind::King, Owner::White)));
}

#[test]
fn test_unknown_characters_advance_cursor() {
    let board = Board::from_fen("xP6");
    assert_eq!(board.piece_at(0, 7), None);
    assert_eq!(board.piece_at(1, 7), Some(Piece::new(PieceKind::Pawn, Owner::White)));

    // '9' and '0' are not empty-run digits
    let board = Board::from_fen("9p/0P");
    assert_eq!(board.piece_at(1, 7), Some(Piece::new(PieceKind::Pawn, Owner::Black)));
    assert_eq!(board.piece_at(1, 6), Some(Piece::new(PieceKind::Pawn, Owner::White)));
    assert_eq!(board.piece_count(), 2);
}

#[test]
fn test_off_board_pieces_skipped() {
    let board = Board::from_fen("ppppppppppp/8/8/8/8/8/8/8/PPPP");
    assert_eq!(board.piece_count(), 8);
    assert!((0..8).all(|x| board.owner_at(x, 7) == Some(Owner::Black)));

    let board = Board::from_fen("7/8P");
    assert_eq!(board.piece_count(), 0);
}

#[test]
fn test_short_fen_is_partial() {
    let board = Board::from_fen("rnbqkbnr");
    assert_eq!(board.piece_count(), 8);
    assert_eq!(&board.state_string()[..8], "rnbqkbnr");
    assert_eq!(&board.state_string()[8..], "0".repeat(56));
}

#[test]
fn test_leading_whitespace_gives_empty_board() {
    let board = Board::from_fen(" rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
    assert!(board.is_empty());
}

#[test]
fn test_board_fen_round_trip() {
    for fen in [
        STARTING_FEN,
        "8/8/8/8/8/8/8/8",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
    ] {
        assert_eq!(Board::from_fen(fen).board_fen(), fen);
    }
}

#[test]
fn test_strict_accepts_valid() {
    let board = Board::from_fen_strict("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1").unwrap();
    assert_eq!(board, Board::starting_position());
}

#[test]
fn test_strict_rejects_malformed() {
    assert_eq!(Board::from_fen_strict(""), Err(FenError::Empty));
    assert_eq!(Board::from_fen_strict("8/8/8"), Err(FenError::RankCount { found: 3 }));
    assert_eq!(
        Board::from_fen_strict("ppppppppp/8/8/8/8/8/8/8"),
        Err(FenError::RankWidth { rank: 8, files: 9 })
    );
    assert_eq!(
        Board::from_fen_strict("8/7/8/8/8/8/8/8"),
        Err(FenError::RankWidth { rank: 7, files: 7 })
    );
    assert_eq!(
        Board::from_fen_strict("8/8/8/8/8/8/8/7x"),
        Err(FenError::InvalidCharacter { found: 'x', rank: 1 })
    );
    assert_eq!(
        Board::from_fen_strict("8/8/8/8/8/8/8/44P"),
        Err(FenError::ConsecutiveDigits { rank: 1 })
    );
}

#[test]
fn test_strict_rejects_adjacent_digit_runs() {
    assert_eq!(
        Board::from_fen_strict("8/44/8/8/8/8/8/8"),
        Err(FenError::ConsecutiveDigits { rank: 7 })
    );
    assert_eq!(
        Board::from_fen_strict("8/8/8/8/8/8/8/P52"),
        Err(FenError::ConsecutiveDigits { rank: 1 })
    );
    // digits separated by a piece are fine
    assert!(Board::from_fen_strict("8/8/8/8/8/8/8/3K4").is_ok());
    // the lenient importer still reads adjacent runs
    let board = Board::from_fen("44/8/8/8/8/8/8/K7");
    assert_eq!(board.owner_at(0, 0), Some(Owner::White));
}

#[test]
fn test_very_long_fields_still_load() {
    let board = Board::from_fen(&("8".repeat(1_000_000) + "P/" + "p7"));
    assert_eq!(board.piece_count(), 1);
    assert_eq!(board.piece_at(0, 6), Some(Piece::new(PieceKind::Pawn, Owner::Black)));

    let board = Board::from_fen(&"/".repeat(1_000_000));
    assert!(board.is_empty());

    let board = Board::from_fen(&("/".repeat(1_000_000) + "8K"));
    assert!(board.is_empty());
}
