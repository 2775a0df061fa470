//! For each basic or promoted ptype, the set of [`Direction`]s it can
//! step or slide in from Black's point of view (`state.h`'s
//! `ptype_move_direction` table, minus the Edge/Empty rows).

use crate::primitives::direction::Direction::{
    self, LongD, LongDL, LongDR, LongL, LongR, LongU, LongUL, LongUR, D, DL, DR, L, R, U, UL, UR,
    UUL, UUR,
};
use crate::primitives::ptype::Ptype;

const GOLD_DIRS: &[Direction] = &[UL, U, UR, L, R, D];
const SILVER_DIRS: &[Direction] = &[UL, U, UR, DL, DR];
const KING_DIRS: &[Direction] = &[UL, U, UR, L, R, DL, D, DR];
const PAWN_DIRS: &[Direction] = &[U];
const KNIGHT_DIRS: &[Direction] = &[UUL, UUR];
const LANCE_DIRS: &[Direction] = &[LongU];
const BISHOP_DIRS: &[Direction] = &[LongUL, LongUR, LongDL, LongDR];
const ROOK_DIRS: &[Direction] = &[LongU, LongD, LongL, LongR];
/// Promoted bishop (horse): bishop's diagonals plus the four
/// orthogonal king steps it gains.
const PBISHOP_DIRS: &[Direction] = &[LongUL, LongUR, LongDL, LongDR, U, D, L, R];
/// Promoted rook (dragon): rook's files/ranks plus the four diagonal
/// king steps it gains.
const PROOK_DIRS: &[Direction] = &[LongU, LongD, LongL, LongR, UL, UR, DL, DR];

/// Directions `ptype` can step/slide in, Black's view. Empty for
/// EMPTY/EDGE.
pub fn ptype_move_direction(ptype: Ptype) -> &'static [Direction] {
    match ptype {
        Ptype::Pawn => PAWN_DIRS,
        Ptype::Lance => LANCE_DIRS,
        Ptype::Knight => KNIGHT_DIRS,
        Ptype::Silver => SILVER_DIRS,
        Ptype::Gold
        | Ptype::PPawn
        | Ptype::PLance
        | Ptype::PKnight
        | Ptype::PSilver => GOLD_DIRS,
        Ptype::King => KING_DIRS,
        Ptype::Bishop => BISHOP_DIRS,
        Ptype::Rook => ROOK_DIRS,
        Ptype::PBishop => PBISHOP_DIRS,
        Ptype::PRook => PROOK_DIRS,
        Ptype::Empty | Ptype::Edge => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promoted_minor_pieces_move_like_gold() {
        assert_eq!(ptype_move_direction(Ptype::PPawn), GOLD_DIRS);
        assert_eq!(ptype_move_direction(Ptype::PSilver), GOLD_DIRS);
    }

    #[test]
    fn dragon_gains_diagonal_steps_over_rook() {
        let dragon = ptype_move_direction(Ptype::PRook);
        for d in [UL, UR, DL, DR] {
            assert!(dragon.contains(&d));
        }
        for d in [LongU, LongD, LongL, LongR] {
            assert!(dragon.contains(&d));
        }
    }

    #[test]
    fn horse_gains_orthogonal_steps_over_bishop() {
        let horse = ptype_move_direction(Ptype::PBishop);
        for d in [U, D, L, R] {
            assert!(horse.contains(&d));
        }
    }

    #[test]
    fn empty_and_edge_have_no_directions() {
        assert!(ptype_move_direction(Ptype::Empty).is_empty());
        assert!(ptype_move_direction(Ptype::Edge).is_empty());
    }
}
