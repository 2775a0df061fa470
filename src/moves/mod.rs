//! Move classification, legal-move generation, and one-ply checkmate
//! search (§4.7-§4.10): the algorithms layered on top of
//! `EffectState`'s incrementally maintained attack tables.

pub mod checkmate;
pub mod classify;
pub mod generate;

pub use checkmate::{in_checkmate, try_checkmate_1ply};
pub use generate::{generate_check, generate_legal, generate_with_full_unpromotions};

use crate::primitives::mv::Move;
use crate::state::EffectState;

/// Whether `mv` is legal in `state`. Does not mutate — callers
/// validate with this before `EffectState::make_move`, which assumes
/// legality and has undefined behavior on an illegal move (§7).
pub fn is_legal(state: &EffectState, mv: Move) -> bool {
    match mv {
        Move::Pass | Move::Resign => true,
        Move::DeclareWin => crate::declare::win_if_declare(state),
        Move::Normal(_) => generate_legal(state).contains(&mv),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::mv::NormalMove;
    use crate::primitives::player::Player;
    use crate::primitives::ptype::Ptype;
    use crate::primitives::square::Square;

    #[test]
    fn legal_opening_move_passes_is_legal() {
        let state = EffectState::new_hirate();
        let mv = Move::board_move(
            Player::Black,
            Square::from_xy(7, 7),
            Square::from_xy(7, 6),
            Ptype::Pawn,
            Ptype::Empty,
            false,
        );
        assert!(is_legal(&state, mv));
    }

    #[test]
    fn move_from_an_empty_square_is_not_legal() {
        let state = EffectState::new_hirate();
        let mv = Move::Normal(NormalMove {
            player: Player::Black,
            from: Square::from_xy(5, 5),
            to: Square::from_xy(5, 4),
            ptype_after: Ptype::Pawn,
            captured: Ptype::Empty,
            is_promotion: false,
        });
        assert!(!is_legal(&state, mv));
    }
}
