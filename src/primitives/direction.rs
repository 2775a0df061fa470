//! The 18 directions a piece can move in: 8 king steps, 2 knight
//! jumps, and 8 long (ray) directions. All offsets are given in
//! Black's view; `to_offset` mirrors them for White.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::square::Offset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Direction {
    UL = 0,
    U = 1,
    UR = 2,
    L = 3,
    R = 4,
    DL = 5,
    D = 6,
    DR = 7,
    UUL = 8,
    UUR = 9,
    LongUL = 10,
    LongU = 11,
    LongUR = 12,
    LongL = 13,
    LongR = 14,
    LongDL = 15,
    LongD = 16,
    LongDR = 17,
}

use Direction::*;

pub const BASE8_DIRECTIONS: [Direction; 8] = [UL, U, UR, L, R, DL, D, DR];
pub const KNIGHT_DIRECTIONS: [Direction; 2] = [UUL, UUR];
pub const LONG_DIRECTIONS: [Direction; 8] = [
    LongUL, LongU, LongUR, LongL, LongR, LongDL, LongD, LongDR,
];
pub const ALL_DIRECTIONS: [Direction; 18] = [
    UL, U, UR, L, R, DL, D, DR, UUL, UUR, LongUL, LongU, LongUR, LongL, LongR, LongDL, LongD,
    LongDR,
];

impl Direction {
    #[inline(always)]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline(always)]
    pub const fn from_code(code: u8) -> Direction {
        match code {
            0 => UL,
            1 => U,
            2 => UR,
            3 => L,
            4 => R,
            5 => DL,
            6 => D,
            7 => DR,
            8 => UUL,
            9 => UUR,
            10 => LongUL,
            11 => LongU,
            12 => LongUR,
            13 => LongL,
            14 => LongR,
            15 => LongDL,
            16 => LongD,
            17 => LongDR,
            _ => panic!("invalid Direction code"),
        }
    }

    #[inline(always)]
    pub const fn is_base8(self) -> bool {
        self.code() <= 7
    }

    #[inline(always)]
    pub const fn is_knight(self) -> bool {
        matches!(self, UUL | UUR)
    }

    #[inline(always)]
    pub const fn is_long(self) -> bool {
        self.code() >= 10
    }

    /// Base8 index (0..8), valid for both short and long variants.
    #[inline(always)]
    pub const fn base8_index(self) -> usize {
        if self.is_long() {
            (self.code() - LongUL.code()) as usize
        } else {
            self.code() as usize
        }
    }

    #[inline(always)]
    pub const fn to_long(self) -> Direction {
        if self.is_base8() {
            Direction::from_code(self.code() + LongUL.code())
        } else {
            self
        }
    }

    #[inline(always)]
    pub const fn to_short(self) -> Direction {
        if self.is_long() {
            Direction::from_code(self.base8_index() as u8)
        } else {
            self
        }
    }

    /// Inverse direction (e.g. U <-> D). Knight jumps have no inverse
    /// and map to themselves.
    #[inline(always)]
    pub const fn inverse(self) -> Direction {
        if self.is_base8() {
            Direction::from_code(7 - self.code())
        } else if self.is_long() {
            Direction::from_code(27 - self.code())
        } else {
            self
        }
    }

    /// Folds any direction to the canonical representative of its line:
    /// one of {UL, U, UR, L} (or the matching long direction).
    #[inline(always)]
    pub const fn primary(self) -> Direction {
        let c = self.code();
        if c < 4 || (self.is_long() && c < LongL.code() + 1) {
            self
        } else {
            self.inverse()
        }
    }

    /// View-dependent direction: Black's view is identity, White's is
    /// mirrored (a "forward" step for White is `inverse` of Black's).
    #[inline(always)]
    pub const fn change_view(self, player: Player) -> Direction {
        match player {
            Player::Black => self,
            Player::White => self.inverse(),
        }
    }

    #[inline(always)]
    pub const fn is_forward(self) -> bool {
        matches!(self, UL | U | UR | UUL | UUR | LongUL | LongU | LongUR)
    }
}

/// (dx, dy) in Black's view for each direction; long variants share
/// the (dx, dy) of their base8 counterpart since they only differ in
/// how far the ray can travel.
const DIRECTION_TRAIT: [(i32, i32); 18] = [
    (1, -1),
    (0, -1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (1, -2),
    (-1, -2),
    (1, -1),
    (0, -1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

impl Direction {
    #[inline(always)]
    pub const fn black_dxdy(self) -> (i32, i32) {
        DIRECTION_TRAIT[self.code() as usize]
    }

    #[inline(always)]
    pub const fn black_offset(self) -> Offset {
        let (dx, dy) = self.black_dxdy();
        Offset::from_dxdy(dx, dy)
    }

    /// Offset to advance one step along this direction, from `player`'s
    /// point of view.
    #[inline(always)]
    pub const fn to_offset(self, player: Player) -> Offset {
        self.black_offset().scaled(player.sign())
    }
}
