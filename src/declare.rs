//! The 27-point entering-king rule (§6 `win_if_declare`): a player
//! whose king has fought its way into the opponent's promotion zone,
//! with enough material advanced alongside it and not presently in
//! check, may declare the game won outright instead of playing on.

use crate::primitives::piece::NUM_PIECES;
use crate::primitives::player::Player;
use crate::primitives::ptype::Ptype;
use crate::state::EffectState;
use crate::tables::zone::in_promotion_zone;

/// Point value used by the declaration threshold: major pieces (rook,
/// bishop, and their promotions) count 5; every other non-king piece
/// counts 1.
fn piece_points(basic: Ptype) -> u32 {
    if basic.is_major() {
        5
    } else {
        1
    }
}

/// Whether `state.turn()` may declare a win under the 27-point rule:
/// the mover's king sits in the opponent's promotion zone, is not in
/// check, has at least ten other pieces of its own in that zone, and
/// the point total of those zone pieces plus everything held in hand
/// reaches 28 for Black or 27 for White — the asymmetric threshold
/// reflecting Black's first-move initiative, preserved as the
/// original states it rather than guessed at.
pub fn win_if_declare(state: &EffectState) -> bool {
    let player = state.turn();
    if state.in_check() {
        return false;
    }
    let king_sq = state.king_square(player);
    if king_sq.is_stand() || !in_promotion_zone(player, king_sq) {
        return false;
    }

    let mut zone_piece_count = 0u32;
    let mut points = 0u32;
    for id in 0..NUM_PIECES as u8 {
        let piece = state.piece_of(id);
        if piece.owner != player || matches!(piece.ptype, Ptype::King) {
            continue;
        }
        let basic = piece.ptype.unpromote();
        if piece.square.is_stand() {
            points += piece_points(basic);
        } else if in_promotion_zone(player, piece.square) {
            zone_piece_count += 1;
            points += piece_points(basic);
        }
    }

    if zone_piece_count < 10 {
        return false;
    }
    let threshold = match player {
        Player::Black => 28,
        Player::White => 27,
    };
    points >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::square::Square;

    /// Black king in its own... no, in the opponent's zone (ranks
    /// 1-3), with ten minor pieces also advanced into those ranks —
    /// nine minors (1 point each) plus one major (5) gives 14 points
    /// from the board; the rest comes from hand to clear Black's
    /// 28-point bar.
    fn base_pieces() -> Vec<(Player, Square, Ptype)> {
        let mut pieces = vec![
            (Player::Black, Square::from_xy(5, 1), Ptype::King),
            (Player::White, Square::from_xy(5, 9), Ptype::King),
            (Player::Black, Square::from_xy(1, 1), Ptype::Rook), // major, 5 pts, in zone
        ];
        // nine minors in the zone (1 pt each) = 9 + 5 = 14 on board.
        // Spread across ptypes since each only has 4 ids (gold, silver)
        // or fewer (lance) to draw from.
        let golds = [(2, 1), (3, 1), (4, 1), (6, 1)];
        let silvers = [(7, 1), (8, 1), (9, 1), (2, 2)];
        let lances = [(3, 2)];
        for &(x, y) in &golds {
            pieces.push((Player::Black, Square::from_xy(x, y), Ptype::Gold));
        }
        for &(x, y) in &silvers {
            pieces.push((Player::Black, Square::from_xy(x, y), Ptype::Silver));
        }
        for &(x, y) in &lances {
            pieces.push((Player::Black, Square::from_xy(x, y), Ptype::Lance));
        }
        pieces
    }

    #[test]
    fn enough_points_and_zone_pieces_allows_declaration() {
        let mut pieces = base_pieces();
        // 14 on board, need >= 28 total: 14 more from hand via 14 pawns.
        for _ in 0..14 {
            pieces.push((Player::Black, Square::STAND, Ptype::Pawn));
        }
        let state = EffectState::new_from_pieces(&pieces, Player::Black).unwrap();
        assert!(win_if_declare(&state));
    }

    #[test]
    fn one_point_short_of_the_bar_fails() {
        let mut pieces = base_pieces();
        for _ in 0..13 {
            pieces.push((Player::Black, Square::STAND, Ptype::Pawn));
        }
        let state = EffectState::new_from_pieces(&pieces, Player::Black).unwrap();
        assert!(!win_if_declare(&state));
    }

    #[test]
    fn being_in_check_blocks_declaration_regardless_of_points() {
        let mut pieces = base_pieces();
        for _ in 0..14 {
            pieces.push((Player::Black, Square::STAND, Ptype::Pawn));
        }
        pieces.push((Player::White, Square::from_xy(5, 2), Ptype::Rook));
        let state = EffectState::new_from_pieces(&pieces, Player::Black).unwrap();
        assert!(state.in_check());
        assert!(!win_if_declare(&state));
    }
}
