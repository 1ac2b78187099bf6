//! Property-based tests for the piece encoding and board queries

use chess_board::game::fen::STARTING_FEN;
use chess_board::{Board, Owner, Piece, PieceKind};
use proptest::prelude::*;

fn any_piece() -> impl Strategy<Value = Piece> {
    (
        prop::sample::select(PieceKind::ALL.to_vec()),
        prop::sample::select(vec![Owner::White, Owner::Black]),
    )
        .prop_map(|(kind, owner)| Piece::new(kind, owner))
}

fn any_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(prop::option::of(any_piece()), 64).prop_map(|squares| {
        let mut board = Board::new();
        let mut squares = squares.into_iter();
        board.for_each_square_mut(|slot, _, _| *slot = squares.next().flatten());
        board
    })
}

proptest! {
    #[test]
    fn test_tag_round_trip(piece in any_piece()) {
        prop_assert_eq!(Piece::decode(piece.encode()), Some(piece));
    }

    #[test]
    fn test_decode_is_consistent(tag in any::<u8>()) {
        if let Some(piece) = Piece::decode(tag) {
            prop_assert_eq!(piece.encode(), tag);
        }
    }

    #[test]
    fn test_owner_outside_board_is_none(
        board in any_board(),
        x in prop_oneof![i32::MIN..0, 8..i32::MAX],
        y in any::<i32>(),
    ) {
        prop_assert_eq!(board.owner_at(x, y), None);
        prop_assert_eq!(board.owner_at(y, x), None);
    }

    #[test]
    fn test_notation_state_inverts_export(board in any_board()) {
        let state = board.state_string();
        prop_assert_eq!(state.len(), 64);
        prop_assert_eq!(Board::from_notation_state(&state).unwrap(), board);
    }

    #[test]
    fn test_board_fen_reimports(board in any_board()) {
        prop_assert_eq!(Board::from_fen(&board.board_fen()), board.clone());
        prop_assert_eq!(Board::from_fen_strict(&board.board_fen()).unwrap(), board);
    }

    #[test]
    fn test_load_fen_never_merges(fen in "[pnbrqkPNBRQK1-8/x ]{0,80}") {
        let mut board = Board::from_fen(STARTING_FEN);
        board.load_fen(&fen);
        prop_assert_eq!(board, Board::from_fen(&fen));
    }
}
