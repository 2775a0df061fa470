//! One-ply checkmate search (§4.10): given a position not already in
//! check, find a move after which the opponent has no legal reply.

use crate::primitives::mv::Move;
use crate::state::EffectState;

use super::generate::{generate_check, has_legal_reply};

/// Finds a mating move for the side to move, if one exists.
///
/// Precondition: `state` is not in check (mate-in-one is asymmetric —
/// this only ever searches for the mover delivering mate, never
/// escaping one). Walks every check-giving legal move — already
/// screened by `generate_legal` for self-check and the pawn-drop-mate
/// prohibition — and returns the first whose opponent has no legal
/// reply.
///
/// The original precomputes `King8Info`-keyed tables
/// (`dropPtypeMasks`/`blockingMasks`/`noEffectMasks`, per
/// `checkmate.h`) so a candidate's mate-ness can be read off a lookup
/// instead of generated-and-tested. §9 licenses any equivalent
/// representation internally as long as the *answer* — and the two
/// prohibitions, no pin-created mates and no pawn-drop-mate — match;
/// this reaches it by reusing the same check-giving generator and
/// legal-reply probe the rest of this crate already trusts, rather
/// than duplicating their logic in table form.
pub fn try_checkmate_1ply(state: &EffectState) -> Option<Move> {
    debug_assert!(!state.in_check(), "checkmate search assumes mover is not in check");
    for mv in generate_check(state) {
        let Move::Normal(n) = mv else { continue };
        let mut clone = state.clone();
        clone.make_move(Move::Normal(n));
        if !has_legal_reply(&clone) {
            return Some(mv);
        }
    }
    None
}

/// Whether the side to move has no legal move at all while in check.
pub fn in_checkmate(state: &EffectState) -> bool {
    state.in_check() && !has_legal_reply(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::player::Player;
    use crate::primitives::ptype::Ptype;
    use crate::primitives::square::Square;
    use crate::state::EffectState;

    /// White king cornered at 1-1, its three flight squares (2-1),
    /// (1-2), (2-2) all covered by a Black knight (3-3, jumps to 2-1
    /// and 4-1) and a Black silver (2-3, steps to 2-2 and 1-2). A
    /// dropped gold at 2-1 both occupies the one empty flight square
    /// and gives check along its R step — and since the knight also
    /// covers 2-1, the king cannot safely recapture it.
    #[test]
    fn gold_drop_delivers_one_ply_mate_in_the_corner() {
        let pieces = [
            (Player::White, Square::from_xy(1, 1), Ptype::King),
            (Player::Black, Square::from_xy(9, 9), Ptype::King),
            (Player::Black, Square::from_xy(3, 3), Ptype::Knight),
            (Player::Black, Square::from_xy(2, 3), Ptype::Silver),
            (Player::Black, Square::STAND, Ptype::Gold),
        ];
        let state = EffectState::new_from_pieces(&pieces, Player::Black).unwrap();
        assert!(!state.in_check());
        let mate = try_checkmate_1ply(&state).expect("a mating gold drop exists");
        let Move::Normal(n) = mate else {
            panic!("expected a normal move")
        };
        assert!(n.is_drop());
        assert_eq!(n.to, Square::from_xy(2, 1));
        assert_eq!(n.ptype_after, Ptype::Gold);
    }

    /// Same corner geometry, but the only square that would complete
    /// the mate (1-2) is reachable solely by a PAWN drop (a pawn only
    /// ever attacks the square directly ahead) — and it is also
    /// defended by the same silver, so the king cannot safely
    /// recapture. This is exactly uchifuzume: the drop would be a
    /// one-ply mate if it were legal, so it must never be generated or
    /// returned.
    #[test]
    fn pawn_drop_mate_is_never_returned() {
        let pieces = [
            (Player::White, Square::from_xy(1, 1), Ptype::King),
            (Player::Black, Square::from_xy(9, 9), Ptype::King),
            (Player::Black, Square::from_xy(3, 3), Ptype::Knight),
            (Player::Black, Square::from_xy(2, 3), Ptype::Silver),
            (Player::Black, Square::STAND, Ptype::Pawn),
        ];
        let state = EffectState::new_from_pieces(&pieces, Player::Black).unwrap();
        assert!(!state.in_check());
        if let Some(mate) = try_checkmate_1ply(&state) {
            let Move::Normal(n) = mate else {
                panic!("expected a normal move")
            };
            assert!(
                !(n.is_drop() && n.ptype_after == Ptype::Pawn),
                "pawn-drop-mate must never be returned as a mating move"
            );
        }
    }
}
