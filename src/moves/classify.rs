//! Move-safety and check classifiers (§4.8, §4.9): is a candidate move
//! safe for the mover, does it give check — directly or by discovery —
//! and would a pawn drop deliver a forbidden checkmate.
//!
//! Each of these answers "what would be true after this move" by
//! cloning `state` and applying it rather than maintaining the pin/
//! king-visibility deltas the original computes purely from rays.
//! `EffectState` is cheap enough to clone that this is simpler to keep
//! correct than a from-first-principles ray classifier, and it
//! reaches the identical answer `in_check_of` would if you maintained
//! those deltas (`generate`'s module doc makes the same tradeoff for
//! the same reason).

use crate::primitives::mv::{Move, NormalMove};
use crate::primitives::ptype::Ptype;
use crate::state::EffectState;

use super::generate::has_legal_reply;

/// True iff applying `n` to `state` does not leave the mover in check —
/// the self-pin / walking-into-check screen every generated move must
/// pass.
pub fn is_safe_move(state: &EffectState, n: NormalMove) -> bool {
    let mut clone = state.clone();
    clone.make_move(Move::Normal(n));
    !clone.in_check_of(n.player)
}

/// True iff applying `n` puts the opponent in check.
pub fn gives_check(state: &EffectState, n: NormalMove) -> bool {
    let mut clone = state.clone();
    clone.make_move(Move::Normal(n));
    clone.in_check_of(n.player.alt())
}

/// True iff `n` gives check by the moved piece's own effect landing on
/// the enemy king's square, as opposed to unmasking another piece's
/// ray.
pub fn is_direct_check(state: &EffectState, n: NormalMove) -> bool {
    let mut clone = state.clone();
    clone.make_move(Move::Normal(n));
    let king_sq = clone.king_square(n.player.alt());
    let Some(mover_id) = clone.piece_id_at(n.to) else {
        return false;
    };
    clone.has_effect_by_piece(mover_id, king_sq)
}

/// True iff `n` gives check but not directly — the checking ray
/// belongs to a different piece than the one that moved, unmasked by
/// the move leaving its blocking square.
pub fn is_open_check(state: &EffectState, n: NormalMove) -> bool {
    gives_check(state, n) && !is_direct_check(state, n)
}

/// §4.9: a PAWN drop at `n.to` is a forbidden pawn-drop-mate iff it
/// gives check and leaves the defender with no legal reply. A pawn's
/// only effect is one step forward, so any check it gives is already
/// exactly the "K sits at T + one-step-forward" geometry the spec
/// states explicitly — that precondition falls out of `gives_check`
/// rather than needing a separate rank test.
pub fn is_pawn_drop_mate(state: &EffectState, n: NormalMove) -> bool {
    if !n.is_drop() || !matches!(n.ptype_after, Ptype::Pawn) {
        return false;
    }
    let mut clone = state.clone();
    clone.make_move(Move::Normal(n));
    clone.in_check_of(n.player.alt()) && !has_legal_reply(&clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::player::Player;
    use crate::primitives::square::Square;
    use crate::state::EffectState;

    #[test]
    fn opening_pawn_push_is_safe_and_gives_no_check() {
        let state = EffectState::new_hirate();
        let n = NormalMove {
            player: Player::Black,
            from: Square::from_xy(7, 7),
            to: Square::from_xy(7, 6),
            ptype_after: Ptype::Pawn,
            captured: Ptype::Empty,
            is_promotion: false,
        };
        assert!(is_safe_move(&state, n));
        assert!(!gives_check(&state, n));
    }

    #[test]
    fn moving_a_blocker_off_its_pin_ray_is_unsafe() {
        let pieces = [
            (Player::Black, Square::from_xy(5, 9), Ptype::King),
            (Player::Black, Square::from_xy(5, 8), Ptype::Pawn),
            (Player::White, Square::from_xy(5, 1), Ptype::Rook),
            (Player::White, Square::from_xy(1, 1), Ptype::King),
        ];
        let state = EffectState::new_from_pieces(&pieces, Player::Black).unwrap();
        let move_off_file = NormalMove {
            player: Player::Black,
            from: Square::from_xy(5, 8),
            to: Square::from_xy(4, 8),
            ptype_after: Ptype::Pawn,
            captured: Ptype::Empty,
            is_promotion: false,
        };
        // moving the blocking pawn off the file exposes Black's own
        // king, so it must be unsafe for Black, not a check Black gives.
        assert!(!is_safe_move(&state, move_off_file));
    }
}
