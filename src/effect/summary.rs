//! Incrementally maintained attacker bookkeeping: for every square, the
//! set of piece ids that attack it; for every long piece, how far its
//! ray currently reaches in each direction; and, for every piece that
//! blocks a ray, which long piece's ray it blocks.

use crate::primitives::direction::{Direction, BASE8_DIRECTIONS, LONG_DIRECTIONS};
use crate::primitives::piece::{is_long_piece_id, NUM_PIECES};
use crate::primitives::player::Player;
use crate::primitives::ptypeo::PtypeO;
use crate::primitives::square::{Square, ARRAY_SIZE};
use crate::tables::move_direction::ptype_move_direction;

use super::effect_piece_mask::EffectPieceMask;

/// Sentinel meaning "no long piece is blocked here in this direction".
pub const NO_ID: u8 = 255;

#[derive(Debug, Clone)]
pub struct EffectSummary {
    effect_at: Vec<EffectPieceMask>,
    /// `long_piece_reach[id][d]`: furthest square id `id` currently
    /// sees along base8 direction `d`, or `Square::STAND` if `id` is
    /// off-board or cannot move in that direction.
    long_piece_reach: [[Square; 8]; NUM_PIECES],
    /// `pp_long_state[blocker_id][d]`: the long piece id whose ray,
    /// walking direction `d`, first stops at `blocker_id`'s square —
    /// or [`NO_ID`] if nothing does.
    pp_long_state: [[u8; 8]; NUM_PIECES],
}

impl Default for EffectSummary {
    fn default() -> Self {
        EffectSummary {
            effect_at: vec![EffectPieceMask::EMPTY; ARRAY_SIZE],
            long_piece_reach: [[Square::STAND; 8]; NUM_PIECES],
            pp_long_state: [[NO_ID; 8]; NUM_PIECES],
        }
    }
}

/// Anything this summary needs to ask about the board while walking
/// rays. Implemented by `BaseState`; kept as a trait so this module
/// never depends on `state`, only the reverse.
pub trait BoardView {
    fn piece_at(&self, square: Square) -> PtypeO;
    fn piece_id_at(&self, square: Square) -> Option<u8>;
    /// Current square of piece id `id` (`Square::STAND` if off-board).
    fn square_of(&self, id: u8) -> Square;
}

impl EffectSummary {
    pub fn new() -> EffectSummary {
        EffectSummary::default()
    }

    #[inline]
    pub fn effect_at(&self, square: Square) -> EffectPieceMask {
        self.effect_at[square.array_index()]
    }

    #[inline]
    pub fn long_piece_reach(&self, id: u8, dir: Direction) -> Square {
        self.long_piece_reach[id as usize][dir.base8_index()]
    }

    #[inline]
    pub fn pp_long_state(&self, blocker_id: u8, dir: Direction) -> Option<u8> {
        let v = self.pp_long_state[blocker_id as usize][dir.base8_index()];
        if v == NO_ID {
            None
        } else {
            Some(v)
        }
    }

    /// Clears every row this piece id owns as a long attacker. Called
    /// by `make_move` right after subtracting the mover's old effect,
    /// before the board mutates further.
    pub fn clear_pp_long_row(&mut self, id: u8) {
        if is_long_piece_id(id) {
            self.long_piece_reach[id as usize] = [Square::STAND; 8];
        }
    }

    /// Moves blocker-row bookkeeping from one piece id to another.
    /// When a capture leaves a different piece occupying the captured
    /// piece's square, any ray that used to stop there is still
    /// stopped there — just by a different id now — so the row has to
    /// move rather than simply vanish.
    pub fn transfer_blocker_row(&mut self, from_id: u8, to_id: u8) {
        self.pp_long_state[to_id as usize] = self.pp_long_state[from_id as usize];
        self.pp_long_state[from_id as usize] = [NO_ID; 8];
    }

    /// Radiates the effect of the piece `id` (owner/ptype `ptypeo`,
    /// sitting at `square`) onto the board, updating `effect_at`,
    /// `long_piece_reach`, and `pp_long_state`.
    pub fn do_effect_add(&mut self, board: &impl BoardView, ptypeo: PtypeO, square: Square, id: u8) {
        self.do_effect(board, ptypeo, square, id, true);
    }

    /// Inverse of [`EffectSummary::do_effect_add`] — removes the same
    /// contribution, walking identically since the board has not
    /// changed shape between the matching add/sub pair.
    pub fn do_effect_sub(&mut self, board: &impl BoardView, ptypeo: PtypeO, square: Square, id: u8) {
        self.do_effect(board, ptypeo, square, id, false);
    }

    fn do_effect(
        &mut self,
        board: &impl BoardView,
        ptypeo: PtypeO,
        square: Square,
        id: u8,
        adding: bool,
    ) {
        let owner = ptypeo.owner();
        for &dir in ptype_move_direction(ptypeo.ptype()) {
            let step = dir.to_offset(owner);
            if dir.is_long() {
                let base8 = dir.to_short();
                let mut cur = square + step;
                let mut stop = Square::STAND;
                while cur.is_onboard() {
                    let delta = EffectPieceMask::attacker_delta(owner, id, Some(base8.base8_index()));
                    if adding {
                        self.bump(cur, delta, true);
                    } else {
                        self.bump(cur, delta, false);
                    }
                    if board.piece_at(cur).is_piece() {
                        stop = cur;
                        break;
                    }
                    cur = cur + step;
                }
                self.long_piece_reach[id as usize][base8.base8_index()] = stop;
                if !stop.is_stand() {
                    if let Some(blocker_id) = board.piece_id_at(stop) {
                        self.pp_long_state[blocker_id as usize][base8.base8_index()] =
                            if adding { id } else { NO_ID };
                    }
                }
            } else {
                let target = square + step;
                if target.is_onboard() {
                    let delta = EffectPieceMask::attacker_delta(owner, id, None);
                    self.bump(target, delta, adding);
                }
            }
        }
    }

    #[inline]
    fn bump(&mut self, square: Square, delta: EffectPieceMask, adding: bool) {
        let idx = square.array_index();
        if adding {
            self.effect_at[idx].add(delta);
        } else {
            self.effect_at[idx].sub(delta);
        }
    }

    /// `square` has just become occupied by `new_id`: any other long
    /// piece whose ray used to pass through `square` now stops there.
    pub fn do_block_at_sub(&mut self, board: &impl BoardView, square: Square, new_id: u8) {
        for l in 0..NUM_PIECES as u8 {
            if l == new_id || !is_long_piece_id(l) {
                continue;
            }
            let origin = board.square_of(l);
            if origin.is_stand() {
                continue;
            }
            for &dir in &LONG_DIRECTIONS {
                let base8 = dir.base8_index();
                let old_reach = self.long_piece_reach[l as usize][base8];
                if old_reach.is_stand() {
                    continue;
                }
                let Some(step_dir) = crate::tables::base8::base8_dir(origin, square) else {
                    continue;
                };
                if step_dir.to_short() != dir.to_short() {
                    continue;
                }
                if !crate::primitives::square::is_between(square, origin, old_reach) {
                    continue;
                }
                let owner = board.piece_at(origin).owner();
                let step = dir.to_offset(owner);
                let mut cur = square + step;
                while cur != old_reach {
                    let delta = EffectPieceMask::attacker_delta(owner, l, Some(base8));
                    self.bump(cur, delta, false);
                    cur = cur + step;
                }
                if !old_reach.is_stand() {
                    let delta = EffectPieceMask::attacker_delta(owner, l, Some(base8));
                    self.bump(old_reach, delta, false);
                    if let Some(old_blocker) = board.piece_id_at(old_reach) {
                        self.pp_long_state[old_blocker as usize][base8] = NO_ID;
                    }
                }
                self.long_piece_reach[l as usize][base8] = square;
                self.pp_long_state[new_id as usize][base8] = l;
            }
        }
    }

    /// `square` has just become empty (the piece that was there, not
    /// `freed_id` itself, moved away): any long piece whose ray
    /// stopped exactly at `square` now extends further.
    pub fn do_block_at_add(&mut self, board: &impl BoardView, square: Square, freed_id: u8) {
        for l in 0..NUM_PIECES as u8 {
            if l == freed_id || !is_long_piece_id(l) {
                continue;
            }
            let origin = board.square_of(l);
            if origin.is_stand() {
                continue;
            }
            for &dir in &LONG_DIRECTIONS {
                let base8 = dir.base8_index();
                if self.long_piece_reach[l as usize][base8] != square {
                    continue;
                }
                let owner = board.piece_at(origin).owner();
                let step = dir.to_offset(owner);
                let mut cur = square + step;
                let mut stop = Square::STAND;
                while cur.is_onboard() {
                    let delta = EffectPieceMask::attacker_delta(owner, l, Some(base8));
                    self.bump(cur, delta, true);
                    if board.piece_at(cur).is_piece() {
                        stop = cur;
                        break;
                    }
                    cur = cur + step;
                }
                self.long_piece_reach[l as usize][base8] = stop;
                if !stop.is_stand() {
                    if let Some(blocker_id) = board.piece_id_at(stop) {
                        self.pp_long_state[blocker_id as usize][base8] = l;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::ptype::Ptype;

    struct FakeBoard {
        cells: std::collections::HashMap<Square, PtypeO>,
    }

    impl BoardView for FakeBoard {
        fn piece_at(&self, square: Square) -> PtypeO {
            *self
                .cells
                .get(&square)
                .unwrap_or(&crate::primitives::ptypeo::PTYPEO_EMPTY)
        }
        fn piece_id_at(&self, _square: Square) -> Option<u8> {
            None
        }
        fn square_of(&self, _id: u8) -> Square {
            Square::STAND
        }
    }

    #[test]
    fn rook_radiates_effect_along_empty_file() {
        let mut board = FakeBoard {
            cells: std::collections::HashMap::new(),
        };
        let origin = Square::from_xy(5, 5);
        let po = PtypeO::new(Player::Black, Ptype::Rook);
        board.cells.insert(origin, po);
        let mut summary = EffectSummary::new();
        summary.do_effect_add(&board, po, origin, 38);
        let above = Square::from_xy(5, 1);
        assert!(summary.effect_at(above).test(38));
        assert_eq!(
            summary.long_piece_reach(38, Direction::U),
            Square::STAND
        );
    }

    #[test]
    fn add_then_sub_clears_effect() {
        let board = FakeBoard {
            cells: std::collections::HashMap::new(),
        };
        let origin = Square::from_xy(5, 5);
        let po = PtypeO::new(Player::Black, Ptype::Gold);
        let mut summary = EffectSummary::new();
        summary.do_effect_add(&board, po, origin, 26);
        let target = origin + Direction::U.to_offset(Player::Black);
        assert!(summary.effect_at(target).test(26));
        summary.do_effect_sub(&board, po, origin, 26);
        assert!(!summary.effect_at(target).test(26));
    }
}
