//! `Ptype` combined with an owning `Player` in one signed field.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::ptype::Ptype;

/// Ptype + owner packed into a signed byte. Black pieces keep the
/// Ptype code as-is (0..=15); White pieces are the same code minus 16
/// (-16..=-1), so `owner` is recoverable from the sign bit alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PtypeO(i8);

pub const PTYPEO_EMPTY: PtypeO = PtypeO(Ptype::Empty.code() as i8);
pub const PTYPEO_EDGE: PtypeO = PtypeO(Ptype::Edge.code() as i8 - 16);

pub const PTYPEO_MIN: i32 = -16;
pub const PTYPEO_MAX: i32 = 15;
pub const PTYPEO_SIZE: usize = (PTYPEO_MAX - PTYPEO_MIN + 1) as usize;

impl PtypeO {
    #[inline(always)]
    pub const fn new(owner: Player, ptype: Ptype) -> PtypeO {
        let offset = match owner {
            Player::Black => 0,
            Player::White => 16,
        };
        PtypeO(ptype.code() as i8 - offset)
    }

    #[inline(always)]
    pub const fn raw(self) -> i8 {
        self.0
    }

    /// Dense 0..32 index for table lookups.
    #[inline(always)]
    pub const fn index(self) -> usize {
        (self.0 as i32 - PTYPEO_MIN) as usize
    }

    #[inline(always)]
    pub const fn ptype(self) -> Ptype {
        Ptype::from_code((self.0 & 15) as u8)
    }

    #[inline(always)]
    pub const fn owner(self) -> Player {
        if self.0 < 0 { Player::White } else { Player::Black }
    }

    #[inline(always)]
    pub const fn is_piece(self) -> bool {
        self.ptype().is_piece()
    }

    #[inline(always)]
    pub const fn can_promote(self) -> bool {
        self.ptype().can_promote()
    }

    #[inline(always)]
    pub const fn is_promoted(self) -> bool {
        self.ptype().is_promoted()
    }

    #[inline(always)]
    pub const fn promote(self) -> PtypeO {
        PtypeO::new(self.owner(), self.ptype().promote())
    }

    #[inline(always)]
    pub const fn unpromote(self) -> PtypeO {
        PtypeO::new(self.owner(), self.ptype().unpromote())
    }

    /// Flip the owner in place (ptype unchanged).
    #[inline(always)]
    pub const fn alt(self) -> PtypeO {
        PtypeO::new(self.owner().alt(), self.ptype())
    }

    /// Unpromote *and* flip owner — what happens to a piece on capture.
    #[inline(always)]
    pub const fn captured(self) -> PtypeO {
        if !self.is_piece() {
            self
        } else {
            PtypeO::new(self.owner().alt(), self.ptype().unpromote())
        }
    }
}
