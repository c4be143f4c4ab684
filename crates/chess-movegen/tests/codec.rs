//! Encoding whole games as move indices and decoding them back.

use chess_core::Color;
use chess_movegen::codec::{self, CodecError};
use chess_movegen::{MagicTables, Outcome, Position, RayTables};

// Morphy vs. Duke of Brunswick and Count Isouard, Paris 1858
const OPERA_GAME: [&str; 33] = [
    "e2e4", "e7e5", "g1f3", "d7d6", "d2d4", "c8g4", "d4e5", "g4f3", "d1f3", "d6e5", "f1c4",
    "g8f6", "f3b3", "d8e7", "b1c3", "c7c6", "c1g5", "b7b5", "c3b5", "c6b5", "c4b5", "b8d7",
    "e1c1", "a8d8", "d1d7", "d8d7", "h1d1", "e7e6", "b5d7", "f6d7", "b3b8", "d7b8", "d1d8",
];

fn tables() -> &'static MagicTables {
    MagicTables::global()
}

#[test]
fn opera_game_round_trip() {
    let start = Position::new();
    let indices = codec::encode_uci_game(&start, tables(), &OPERA_GAME).unwrap();
    assert_eq!(indices.len(), OPERA_GAME.len());

    let decoded = codec::decode_uci_game(&start, tables(), &indices).unwrap();
    assert_eq!(decoded, OPERA_GAME);

    let moves = codec::decode_game(&start, tables(), &indices).unwrap();
    assert_eq!(codec::encode_game(&start, tables(), &moves).unwrap(), indices);

    let mut end = start.clone();
    for m in &moves {
        end.play(*m);
    }
    assert_eq!(
        end.outcome(tables()),
        Some(Outcome::Checkmate {
            winner: Color::White
        })
    );
}

#[test]
fn indices_do_not_depend_on_table_implementation() {
    let start = Position::new();
    assert_eq!(
        codec::encode_uci_game(&start, tables(), &OPERA_GAME).unwrap(),
        codec::encode_uci_game(&start, &RayTables, &OPERA_GAME).unwrap()
    );
}

#[test]
fn decoding_past_mate_fails() {
    let start = Position::new();
    let mut indices = codec::encode_uci_game(&start, tables(), &OPERA_GAME).unwrap();
    indices.push(0);
    assert_eq!(
        codec::decode_game(&start, tables(), &indices),
        Err(CodecError::GameOver { ply: 33 })
    );
}

#[test]
fn out_of_range_index_reports_list_length() {
    assert_eq!(
        codec::decode_game(&Position::new(), tables(), &[12, 999]),
        Err(CodecError::IndexOutOfRange {
            ply: 1,
            index: 999,
            len: 20
        })
    );
}

#[test]
fn every_index_of_a_position_round_trips() {
    let start = Position::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    let moves = start.legal_moves(tables());
    for (index, m) in moves.iter().enumerate() {
        assert_eq!(codec::move_to_index(&start, tables(), m), Ok(index));
        assert_eq!(codec::index_to_move(&start, tables(), index), Ok(*m));
    }
}

#[test]
fn ideal_bits_of_opera_game() {
    let start = Position::new();
    let indices = codec::encode_uci_game(&start, tables(), &OPERA_GAME).unwrap();
    let moves = codec::decode_game(&start, tables(), &indices).unwrap();
    let summary = codec::bits_per_move(&start, tables(), &moves).unwrap();
    assert_eq!(summary.plies, 33);
    // between 2 and 256 legal moves per ply on average
    assert!(summary.mean() >= 1.0 && summary.mean() <= 8.0);
}
