//! A single ply: a drop or an on-board move, or one of the three
//! pseudo-moves (pass, resign, declare-win).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::ptype::Ptype;
use super::square::Square;

/// An ordinary drop or on-board move.
///
/// `from == Square::STAND` marks a drop; a drop always has
/// `captured == Ptype::Empty`. `ptype_after` is already the promoted
/// ptype when `is_promotion` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NormalMove {
    pub player: Player,
    pub from: Square,
    pub to: Square,
    pub ptype_after: Ptype,
    pub captured: Ptype,
    pub is_promotion: bool,
}

impl NormalMove {
    #[inline]
    pub const fn is_drop(&self) -> bool {
        self.from.is_stand()
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        !matches!(self.captured, Ptype::Empty)
    }

    /// The ptype the moving piece had before this move (unpromoted
    /// form of `ptype_after` when promoting).
    #[inline]
    pub const fn old_ptype(&self) -> Ptype {
        if self.is_promotion {
            self.ptype_after.unpromote()
        } else {
            self.ptype_after
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    Normal(NormalMove),
    Pass,
    Resign,
    DeclareWin,
}

impl Move {
    #[inline]
    pub fn drop_move(player: Player, to: Square, ptype: Ptype) -> Move {
        Move::Normal(NormalMove {
            player,
            from: Square::STAND,
            to,
            ptype_after: ptype,
            captured: Ptype::Empty,
            is_promotion: false,
        })
    }

    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn board_move(
        player: Player,
        from: Square,
        to: Square,
        ptype_after: Ptype,
        captured: Ptype,
        is_promotion: bool,
    ) -> Move {
        Move::Normal(NormalMove {
            player,
            from,
            to,
            ptype_after,
            captured,
            is_promotion,
        })
    }

    #[inline]
    pub const fn as_normal(&self) -> Option<&NormalMove> {
        match self {
            Move::Normal(m) => Some(m),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pass => write!(f, "PASS"),
            Move::Resign => write!(f, "RESIGN"),
            Move::DeclareWin => write!(f, "WIN"),
            Move::Normal(m) => {
                if m.is_drop() {
                    write!(f, "{}*{}", m.ptype_after.csa_name(), m.to)
                } else {
                    write!(
                        f,
                        "{}{}{}{}",
                        m.from,
                        m.to,
                        m.ptype_after.csa_name(),
                        if m.is_promotion { "+" } else { "" }
                    )
                }
            }
        }
    }
}
