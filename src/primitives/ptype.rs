//! Piece kinds, packed into a 4-bit code so that unpromote/promote are
//! cheap bit ops (grounded on `state.h`'s `enum class Ptype`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 16-value piece kind. Numeric layout matters: promoted codes are < 8,
/// basic codes are >= 8, and `unpromote = code | 8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Ptype {
    Empty = 0,
    Edge = 1,
    PPawn = 2,
    PLance = 3,
    PKnight = 4,
    PSilver = 5,
    PBishop = 6,
    PRook = 7,
    King = 8,
    Gold = 9,
    Pawn = 10,
    Lance = 11,
    Knight = 12,
    Silver = 13,
    Bishop = 14,
    Rook = 15,
}

impl Ptype {
    pub const ALL: [Ptype; 16] = [
        Ptype::Empty,
        Ptype::Edge,
        Ptype::PPawn,
        Ptype::PLance,
        Ptype::PKnight,
        Ptype::PSilver,
        Ptype::PBishop,
        Ptype::PRook,
        Ptype::King,
        Ptype::Gold,
        Ptype::Pawn,
        Ptype::Lance,
        Ptype::Knight,
        Ptype::Silver,
        Ptype::Bishop,
        Ptype::Rook,
    ];

    pub const BASIC: [Ptype; 8] = [
        Ptype::King,
        Ptype::Gold,
        Ptype::Pawn,
        Ptype::Lance,
        Ptype::Knight,
        Ptype::Silver,
        Ptype::Bishop,
        Ptype::Rook,
    ];

    pub const PROMOTABLE: [Ptype; 6] = [
        Ptype::Pawn,
        Ptype::Lance,
        Ptype::Knight,
        Ptype::Silver,
        Ptype::Bishop,
        Ptype::Rook,
    ];

    #[inline(always)]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline(always)]
    pub const fn from_code(code: u8) -> Ptype {
        match code {
            0 => Ptype::Empty,
            1 => Ptype::Edge,
            2 => Ptype::PPawn,
            3 => Ptype::PLance,
            4 => Ptype::PKnight,
            5 => Ptype::PSilver,
            6 => Ptype::PBishop,
            7 => Ptype::PRook,
            8 => Ptype::King,
            9 => Ptype::Gold,
            10 => Ptype::Pawn,
            11 => Ptype::Lance,
            12 => Ptype::Knight,
            13 => Ptype::Silver,
            14 => Ptype::Bishop,
            15 => Ptype::Rook,
            _ => panic!("invalid Ptype code"),
        }
    }

    /// Neither EMPTY nor EDGE.
    #[inline(always)]
    pub const fn is_piece(self) -> bool {
        self.code() >= 2
    }

    /// Not promoted (includes EMPTY/EDGE, matching the source's `is_basic`).
    #[inline(always)]
    pub const fn is_basic(self) -> bool {
        self.code() > Ptype::PRook.code()
    }

    #[inline(always)]
    pub const fn is_promoted(self) -> bool {
        self.code() < Ptype::King.code()
    }

    /// True for PAWN, LANCE, KNIGHT, SILVER, BISHOP, ROOK.
    #[inline(always)]
    pub const fn can_promote(self) -> bool {
        self.code() > Ptype::Gold.code()
    }

    #[inline(always)]
    pub const fn unpromote(self) -> Ptype {
        if !self.is_piece() {
            self
        } else {
            Ptype::from_code(self.code() | 8)
        }
    }

    #[inline(always)]
    pub const fn promote(self) -> Ptype {
        if self.can_promote() {
            Ptype::from_code(self.code() & !8)
        } else {
            self
        }
    }

    #[inline(always)]
    pub const fn is_long(self) -> bool {
        matches!(
            self,
            Ptype::Lance | Ptype::Bishop | Ptype::Rook | Ptype::PLance | Ptype::PBishop | Ptype::PRook
        )
    }

    #[inline(always)]
    pub const fn is_major(self) -> bool {
        (self.code() | 8) >= Ptype::Bishop.code()
    }

    pub fn csa_name(self) -> &'static str {
        match self {
            Ptype::Empty => "..",
            Ptype::Edge => "XX",
            Ptype::PPawn => "TO",
            Ptype::PLance => "NY",
            Ptype::PKnight => "NK",
            Ptype::PSilver => "NG",
            Ptype::PBishop => "UM",
            Ptype::PRook => "RY",
            Ptype::King => "OU",
            Ptype::Gold => "KI",
            Ptype::Pawn => "FU",
            Ptype::Lance => "KY",
            Ptype::Knight => "KE",
            Ptype::Silver => "GI",
            Ptype::Bishop => "KA",
            Ptype::Rook => "HI",
        }
    }
}
