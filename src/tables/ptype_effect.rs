//! `ptype_effect[ptypeO][offset]`: what kind of effect (none, a single
//! adjacent square, or the first step of a ray) a piece casts onto a
//! nearby square. Long-range continuation past the first step is a
//! ray walk done by the caller (`EffectSummary`), not stored here —
//! this table only answers "does `ptypeO` reach this *nearby* square,
//! and if so is it a ray".
//!
//! Built once behind [`once_cell::sync::Lazy`], mirroring the
//! lazily-initialized static tables used elsewhere in this crate.

use once_cell::sync::Lazy;

use super::move_direction::ptype_move_direction;
use crate::primitives::direction::Direction;
use crate::primitives::player::Player;
use crate::primitives::ptypeo::{PtypeO, PTYPEO_SIZE};
use crate::primitives::square::{Offset, STRIDE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    None,
    Short,
    Long(Direction),
}

/// Offsets this table indexes range over dx, dy in -2..=2 (enough for
/// every king/gold/silver step and the two knight jumps); anything
/// wider is never queried directly, since long pieces' reach beyond
/// the first ray step comes from walking squares, not a table lookup.
const RADIUS: i32 = 2;
const SIDE: usize = (2 * RADIUS + 1) as usize;
const CELLS: usize = SIDE * SIDE;

fn cell_index(dx: i32, dy: i32) -> Option<usize> {
    if dx.abs() > RADIUS || dy.abs() > RADIUS {
        return None;
    }
    Some(((dx + RADIUS) as usize) * SIDE + (dy + RADIUS) as usize)
}

/// Recover (dx, dy) from a packed offset, valid whenever |dy| < STRIDE/2,
/// true of every offset this table is ever queried with.
fn decompose(offset: Offset) -> (i32, i32) {
    let raw = offset.raw();
    let mut dy = raw % STRIDE;
    if dy > STRIDE / 2 {
        dy -= STRIDE;
    } else if dy < -STRIDE / 2 {
        dy += STRIDE;
    }
    let dx = (raw - dy) / STRIDE;
    (dx, dy)
}

type Row = [EffectKind; CELLS];

static TABLE: Lazy<[Row; PTYPEO_SIZE]> = Lazy::new(build_table);

fn build_table() -> [Row; PTYPEO_SIZE] {
    let mut table = [[EffectKind::None; CELLS]; PTYPEO_SIZE];
    for &owner in &Player::ALL {
        for &ptype in &crate::primitives::ptype::Ptype::ALL {
            if !ptype.is_piece() {
                continue;
            }
            let po = PtypeO::new(owner, ptype);
            let row = &mut table[po.index()];
            for &dir in ptype_move_direction(ptype) {
                let viewed = dir.change_view(owner);
                let (dx, dy) = decompose(dir.to_offset(owner));
                let Some(idx) = cell_index(dx, dy) else {
                    continue;
                };
                row[idx] = if dir.is_long() {
                    EffectKind::Long(viewed)
                } else {
                    EffectKind::Short
                };
            }
        }
    }
    table
}

/// Effect kind a piece of `ptypeo` casts onto the square `offset` away
/// from it (offset measured in the board's absolute frame, i.e.
/// already Black/White oriented).
pub fn ptype_effect(ptypeo: PtypeO, offset: Offset) -> EffectKind {
    if !ptypeo.is_piece() {
        return EffectKind::None;
    }
    let (dx, dy) = decompose(offset);
    match cell_index(dx, dy) {
        Some(idx) => TABLE[ptypeo.index()][idx],
        None => EffectKind::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::ptype::Ptype;

    #[test]
    fn black_pawn_has_short_effect_one_step_up() {
        let po = PtypeO::new(Player::Black, Ptype::Pawn);
        let up = Offset::from_dxdy(0, -1);
        assert_eq!(ptype_effect(po, up), EffectKind::Short);
    }

    #[test]
    fn white_pawn_effect_is_mirrored() {
        let po = PtypeO::new(Player::White, Ptype::Pawn);
        let down = Offset::from_dxdy(0, 1);
        assert_eq!(ptype_effect(po, down), EffectKind::Short);
        let up = Offset::from_dxdy(0, -1);
        assert_eq!(ptype_effect(po, up), EffectKind::None);
    }

    #[test]
    fn rook_casts_a_long_effect_along_files_and_ranks() {
        let po = PtypeO::new(Player::Black, Ptype::Rook);
        let up = Offset::from_dxdy(0, -1);
        assert!(matches!(ptype_effect(po, up), EffectKind::Long(_)));
        let diag = Offset::from_dxdy(1, -1);
        assert_eq!(ptype_effect(po, diag), EffectKind::None);
    }

    #[test]
    fn knight_jump_is_short_not_long() {
        let po = PtypeO::new(Player::Black, Ptype::Knight);
        let jump = Offset::from_dxdy(1, -2);
        assert_eq!(ptype_effect(po, jump), EffectKind::Short);
    }

    #[test]
    fn empty_ptypeo_never_casts_effect() {
        let empty = PtypeO::new(Player::Black, Ptype::Empty);
        assert_eq!(
            ptype_effect(empty, Offset::from_dxdy(0, -1)),
            EffectKind::None
        );
    }
}
