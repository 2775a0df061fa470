//! A single piece instance: owner, kind, permanent id, and current
//! square (or `Square::STAND` while held).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::ptype::Ptype;
use super::ptypeo::PtypeO;
use super::square::Square;

/// Exclusive id ranges per basic ptype (`state.h`'s `ptype_piece_id`).
/// Ids 32..40 are exactly the long pieces (lance/bishop/rook and their
/// promotions), matching `EffectPieceMask`'s long-attacker bit layout.
pub const PAWN_ID_RANGE: (u8, u8) = (0, 18);
pub const KNIGHT_ID_RANGE: (u8, u8) = (18, 22);
pub const SILVER_ID_RANGE: (u8, u8) = (22, 26);
pub const GOLD_ID_RANGE: (u8, u8) = (26, 30);
pub const KING_ID_RANGE: (u8, u8) = (30, 32);
pub const LANCE_ID_RANGE: (u8, u8) = (32, 36);
pub const BISHOP_ID_RANGE: (u8, u8) = (36, 38);
pub const ROOK_ID_RANGE: (u8, u8) = (38, 40);

pub const NUM_PIECES: usize = 40;
pub const FIRST_LONG_ID: u8 = 32;

/// The fixed id range holding pieces of `basic_ptype` (promoted or
/// not — both forms of the same basic ptype occupy one range).
#[inline]
pub const fn ptype_id_range(basic_ptype: Ptype) -> (u8, u8) {
    match basic_ptype {
        Ptype::Pawn | Ptype::PPawn => PAWN_ID_RANGE,
        Ptype::Knight | Ptype::PKnight => KNIGHT_ID_RANGE,
        Ptype::Silver | Ptype::PSilver => SILVER_ID_RANGE,
        Ptype::Gold => GOLD_ID_RANGE,
        Ptype::King => KING_ID_RANGE,
        Ptype::Lance | Ptype::PLance => LANCE_ID_RANGE,
        Ptype::Bishop | Ptype::PBishop => BISHOP_ID_RANGE,
        Ptype::Rook | Ptype::PRook => ROOK_ID_RANGE,
        _ => (0, 0),
    }
}

#[inline(always)]
pub const fn is_long_piece_id(id: u8) -> bool {
    id >= FIRST_LONG_ID && id < NUM_PIECES as u8
}

#[inline(always)]
pub const fn king_piece_id(player: Player) -> u8 {
    KING_ID_RANGE.0 + player.index() as u8
}

/// A piece instance: who owns it, what it is, its permanent id, and
/// where it currently sits (board square, or `Square::STAND`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub owner: Player,
    pub ptype: Ptype,
    pub id: u8,
    pub square: Square,
}

impl Piece {
    #[inline]
    pub const fn new(owner: Player, ptype: Ptype, id: u8, square: Square) -> Piece {
        Piece { owner, ptype, id, square }
    }

    #[inline(always)]
    pub const fn ptypeo(&self) -> PtypeO {
        PtypeO::new(self.owner, self.ptype)
    }

    #[inline(always)]
    pub const fn is_on_board(&self) -> bool {
        !self.square.is_stand()
    }

    #[inline(always)]
    pub const fn is_long(&self) -> bool {
        is_long_piece_id(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_ranges_partition_40_ids() {
        let ranges = [
            PAWN_ID_RANGE,
            KNIGHT_ID_RANGE,
            SILVER_ID_RANGE,
            GOLD_ID_RANGE,
            KING_ID_RANGE,
            LANCE_ID_RANGE,
            BISHOP_ID_RANGE,
            ROOK_ID_RANGE,
        ];
        let mut covered = [false; NUM_PIECES];
        for (lo, hi) in ranges {
            for id in lo..hi {
                assert!(!covered[id as usize], "id {id} covered twice");
                covered[id as usize] = true;
            }
        }
        assert!(covered.iter().all(|&c| c));
    }

    #[test]
    fn king_ids_are_30_and_31() {
        assert_eq!(king_piece_id(Player::Black), 30);
        assert_eq!(king_piece_id(Player::White), 31);
    }

    #[test]
    fn long_ids_are_32_through_39() {
        for id in 0..NUM_PIECES as u8 {
            assert_eq!(is_long_piece_id(id), (32..40).contains(&id));
        }
    }
}
