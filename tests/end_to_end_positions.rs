//! End-to-end positional scenarios from the core's testable properties:
//! the opening, nifu, discovered check, one-ply mate, pawn-drop-mate,
//! and the entering-king declaration.

use shogi_core::{generate_legal, is_legal, try_checkmate_1ply, win_if_declare};
use shogi_core::{EffectState, Move, Player, Ptype, Square};

fn drop(player: Player, to: Square, ptype: Ptype) -> Move {
    Move::drop_move(player, to, ptype)
}

fn board_move(player: Player, from: Square, to: Square, ptype_after: Ptype, captured: Ptype, promotes: bool) -> Move {
    Move::board_move(player, from, to, ptype_after, captured, promotes)
}

#[test]
fn opening_pawn_push_stays_out_of_check_and_keeps_thirty_legal_moves() {
    let mut state = EffectState::new_hirate();
    assert!(!state.in_check());
    assert_eq!(generate_legal(&state).len(), 30);

    let mv = board_move(
        Player::Black,
        Square::from_xy(7, 7),
        Square::from_xy(7, 6),
        Ptype::Pawn,
        Ptype::Empty,
        false,
    );
    assert!(is_legal(&state, mv));
    state.make_move(mv);
    assert!(!state.in_check());
    assert_eq!(state.piece_at(Square::from_xy(7, 6)).ptype(), Ptype::Pawn);
}

#[test]
fn nifu_forbids_a_pawn_drop_in_an_occupied_file() {
    // Black already has an unpromoted pawn on column 7 (7-6); mark the
    // file bit directly and confirm no P*7x drop is ever generated,
    // regardless of what else is in hand.
    let pieces = [
        (Player::Black, Square::from_xy(5, 9), Ptype::King),
        (Player::White, Square::from_xy(5, 1), Ptype::King),
        (Player::Black, Square::from_xy(7, 6), Ptype::Pawn),
        (Player::Black, Square::STAND, Ptype::Pawn),
    ];
    let state = EffectState::new_from_pieces(&pieces, Player::Black).unwrap();
    assert!(state.pawn_in_file(Player::Black, 7));
    let has_column_seven_drop = generate_legal(&state).into_iter().any(|mv| {
        matches!(mv, Move::Normal(n) if n.is_drop() && n.ptype_after == Ptype::Pawn && n.to.x() == 7)
    });
    assert!(!has_column_seven_drop);
}

#[test]
fn moving_a_pinned_silver_off_its_file_is_illegal() {
    // Black king 5-9, Black silver 5-8, White rook 5-1: the silver is
    // pinned along the file and cannot step diagonally without
    // exposing the king to the rook, even though the diagonal step is
    // an ordinary silver move.
    let pieces = [
        (Player::Black, Square::from_xy(5, 9), Ptype::King),
        (Player::Black, Square::from_xy(5, 8), Ptype::Silver),
        (Player::White, Square::from_xy(5, 1), Ptype::Rook),
        (Player::White, Square::from_xy(1, 1), Ptype::King),
    ];
    let state = EffectState::new_from_pieces(&pieces, Player::Black).unwrap();
    assert!(!state.in_check());
    assert!(state.pin_or_open(Player::Black).test(
        state.piece_id_at(Square::from_xy(5, 8)).unwrap()
    ));

    let off_file = board_move(
        Player::Black,
        Square::from_xy(5, 8),
        Square::from_xy(4, 7),
        Ptype::Silver,
        Ptype::Empty,
        false,
    );
    assert!(!is_legal(&state, off_file));
    assert!(!generate_legal(&state).contains(&off_file));

    // staying on the file (pushing straight up) is still legal.
    let on_file = board_move(
        Player::Black,
        Square::from_xy(5, 8),
        Square::from_xy(5, 7),
        Ptype::Silver,
        Ptype::Empty,
        false,
    );
    assert!(is_legal(&state, on_file));
}

#[test]
fn one_ply_gold_drop_mate_in_the_corner() {
    let pieces = [
        (Player::White, Square::from_xy(1, 1), Ptype::King),
        (Player::Black, Square::from_xy(9, 9), Ptype::King),
        (Player::Black, Square::from_xy(3, 3), Ptype::Knight),
        (Player::Black, Square::from_xy(2, 3), Ptype::Silver),
        (Player::Black, Square::STAND, Ptype::Gold),
    ];
    let state = EffectState::new_from_pieces(&pieces, Player::Black).unwrap();
    assert!(!state.in_check());
    let mate = try_checkmate_1ply(&state).expect("mate exists");
    assert_eq!(mate, drop(Player::Black, Square::from_xy(2, 1), Ptype::Gold));
}

#[test]
fn pawn_drop_mate_is_prohibited_but_a_defended_square_stays_pawn_droppable_elsewhere() {
    let pieces = [
        (Player::White, Square::from_xy(1, 1), Ptype::King),
        (Player::Black, Square::from_xy(9, 9), Ptype::King),
        (Player::Black, Square::from_xy(3, 3), Ptype::Knight),
        (Player::Black, Square::from_xy(2, 3), Ptype::Silver),
        (Player::Black, Square::STAND, Ptype::Pawn),
    ];
    let state = EffectState::new_from_pieces(&pieces, Player::Black).unwrap();
    assert!(!state.in_check());

    let forbidden = drop(Player::Black, Square::from_xy(1, 2), Ptype::Pawn);
    assert!(!is_legal(&state, forbidden));
    assert!(!generate_legal(&state).contains(&forbidden));
    assert_ne!(try_checkmate_1ply(&state), Some(forbidden));

    // an unrelated pawn drop elsewhere on the board remains legal.
    let elsewhere = drop(Player::Black, Square::from_xy(9, 5), Ptype::Pawn);
    assert!(is_legal(&state, elsewhere));
}

#[test]
fn entering_king_declaration_needs_both_the_zone_count_and_the_point_bar() {
    let mut pieces = vec![
        (Player::Black, Square::from_xy(5, 1), Ptype::King),
        (Player::White, Square::from_xy(5, 9), Ptype::King),
        (Player::Black, Square::from_xy(1, 1), Ptype::Rook),
    ];
    for &(x, y) in &[(2, 1), (3, 1), (4, 1), (6, 1)] {
        pieces.push((Player::Black, Square::from_xy(x, y), Ptype::Gold));
    }
    for &(x, y) in &[(7, 1), (8, 1), (9, 1), (2, 2)] {
        pieces.push((Player::Black, Square::from_xy(x, y), Ptype::Silver));
    }
    pieces.push((Player::Black, Square::from_xy(3, 2), Ptype::Lance));
    // board total: 9 minors + 1 major(5) = 14 points, 10 zone pieces.

    let mut full = pieces.clone();
    for _ in 0..14 {
        full.push((Player::Black, Square::STAND, Ptype::Pawn));
    }
    let winning = EffectState::new_from_pieces(&full, Player::Black).unwrap();
    assert!(win_if_declare(&winning));

    let mut short = pieces;
    for _ in 0..13 {
        short.push((Player::Black, Square::STAND, Ptype::Pawn));
    }
    let not_winning = EffectState::new_from_pieces(&short, Player::Black).unwrap();
    assert!(!win_if_declare(&not_winning));
}
