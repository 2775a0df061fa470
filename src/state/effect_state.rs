//! `BaseState` plus the incrementally maintained attack tables: pin
//! masks, king-visibility rays, and King8 summaries, and the single
//! `make_move` entry point that keeps all of it in step.

use tracing::trace;

use crate::effect::summary::EffectSummary;
use crate::primitives::direction::{Direction, BASE8_DIRECTIONS};
use crate::primitives::mv::{Move, NormalMove};
use crate::primitives::piece::{is_long_piece_id, king_piece_id, Piece, NUM_PIECES};
use crate::primitives::piece_mask::PieceMask;
use crate::primitives::player::Player;
use crate::primitives::ptype::Ptype;
use crate::primitives::ptypeo::PtypeO;
use crate::primitives::square::Square;

use super::base_state::{BaseState, StateError};
use super::king8::{DirFields, King8Info};

#[derive(Debug, Clone)]
pub struct EffectState {
    base: BaseState,
    effect: EffectSummary,
    promoted: PieceMask,
    pin_or_open: [PieceMask; 2],
    king_visibility: [[Square; 8]; 2],
}

impl EffectState {
    pub fn new_empty() -> EffectState {
        let base = BaseState::new_empty();
        let mut s = EffectState {
            effect: EffectSummary::new(),
            promoted: PieceMask::EMPTY,
            pin_or_open: [PieceMask::EMPTY; 2],
            king_visibility: [[Square::STAND; 8]; 2],
            base,
        };
        s.rebuild_effects();
        s
    }

    pub fn new_hirate() -> EffectState {
        let base = BaseState::new_hirate();
        let mut s = EffectState {
            effect: EffectSummary::new(),
            promoted: PieceMask::EMPTY,
            pin_or_open: [PieceMask::EMPTY; 2],
            king_visibility: [[Square::STAND; 8]; 2],
            base,
        };
        s.rebuild_effects();
        s
    }

    /// Builds a state from an explicit piece list, validating
    /// placement rules before returning.
    pub fn new_from_pieces(
        pieces: &[(Player, Square, Ptype)],
        turn: Player,
    ) -> Result<EffectState, StateError> {
        let mut base = BaseState::new_empty();
        let mut seen_kings = [false; 2];
        for &(owner, square, ptype) in pieces {
            if matches!(ptype, Ptype::King) {
                if seen_kings[owner.index()] {
                    return Err(StateError::DuplicateKing(owner));
                }
                seen_kings[owner.index()] = true;
            }
            base.set_piece(owner, square, ptype)?;
        }
        base.set_turn(turn);
        if !base.is_consistent() {
            return Err(StateError::Inconsistent("placement violates base invariants"));
        }
        let mut s = EffectState {
            effect: EffectSummary::new(),
            promoted: PieceMask::EMPTY,
            pin_or_open: [PieceMask::EMPTY; 2],
            king_visibility: [[Square::STAND; 8]; 2],
            base,
        };
        s.rebuild_effects();
        Ok(s)
    }

    /// Full from-scratch rebuild of every derived table. Used at
    /// construction and by the tests that check round-trip equality
    /// against an incrementally-updated state.
    fn rebuild_effects(&mut self) {
        self.effect = EffectSummary::new();
        self.promoted = PieceMask::EMPTY;
        for id in 0..NUM_PIECES as u8 {
            let piece = self.base.piece_of(id);
            if piece.ptype == Ptype::Empty || piece.square.is_stand() {
                continue;
            }
            if piece.ptype.is_promoted() {
                self.promoted.set(id);
            }
            self.effect
                .do_effect_add(&self.base, piece.ptypeo(), piece.square, id);
        }
        self.recompute_pins_and_visibility(Player::Black);
        self.recompute_pins_and_visibility(Player::White);
    }

    #[inline]
    pub fn turn(&self) -> Player {
        self.base.turn()
    }

    #[inline]
    pub fn king_square(&self, player: Player) -> Square {
        self.base.king_square(player)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> PtypeO {
        self.base.piece_at(square)
    }

    #[inline]
    pub fn piece_of(&self, id: u8) -> Piece {
        self.base.piece_of(id)
    }

    #[inline]
    pub fn piece_id_at(&self, square: Square) -> Option<u8> {
        self.base.piece_id_at(square)
    }

    #[inline]
    pub fn count_hand(&self, player: Player, basic_ptype: Ptype) -> u32 {
        self.base.count_on_stand(player, basic_ptype)
    }

    #[inline]
    pub fn pawn_in_file(&self, player: Player, x: i32) -> bool {
        self.base.pawn_in_file(player, x)
    }

    #[inline]
    pub fn promoted_pieces(&self) -> PieceMask {
        self.promoted
    }

    #[inline]
    pub fn pin_or_open(&self, player: Player) -> PieceMask {
        self.pin_or_open[player.index()]
    }

    #[inline]
    pub fn king_visibility(&self, player: Player, dir: Direction) -> Square {
        self.king_visibility[player.index()][dir.base8_index()]
    }

    #[inline]
    pub fn count_effect(&self, attacker: Player, square: Square) -> u32 {
        self.effect.effect_at(square).count(attacker)
    }

    #[inline]
    pub fn pieces_covering(&self, attacker: Player, square: Square) -> PieceMask {
        self.effect.effect_at(square).piece_mask() & self.base.owned_mask(attacker)
    }

    #[inline]
    pub fn has_effect_by_piece(&self, piece_id: u8, square: Square) -> bool {
        self.effect.effect_at(square).test(piece_id)
    }

    pub fn in_check_of(&self, defender: Player) -> bool {
        self.count_effect(defender.alt(), self.king_square(defender)) > 0
    }

    #[inline]
    pub fn in_check(&self) -> bool {
        self.in_check_of(self.turn())
    }

    pub(crate) fn base(&self) -> &BaseState {
        &self.base
    }

    pub(crate) fn effect(&self) -> &EffectSummary {
        &self.effect
    }

    /// Recomputes `king_visibility` and `pin_or_open` for `defender`
    /// from scratch. The incremental algorithm in the original design
    /// only rebuilds rays crossing the two squares a move touched;
    /// this crate rebuilds all eight every time for simplicity — the
    /// result is identical, just not maximally incremental.
    fn recompute_pins_and_visibility(&mut self, defender: Player) {
        let (pin_or_open, king_visibility) = self.compute_pins_and_visibility(defender);
        self.pin_or_open[defender.index()] = pin_or_open;
        self.king_visibility[defender.index()] = king_visibility;
    }

    /// Pure version of [`EffectState::recompute_pins_and_visibility`]:
    /// derives `pin_or_open`/`king_visibility` for `defender` from the
    /// current board and `pp_long_state` without mutating `self`. Used
    /// both to install the incrementally maintained fields and, from
    /// `is_consistent`, to audit that they still match what a fresh
    /// ray-walk would produce.
    fn compute_pins_and_visibility(&self, defender: Player) -> (PieceMask, [Square; 8]) {
        let king_sq = self.base.king_square(defender);
        let mut pin_or_open = PieceMask::EMPTY;
        if king_sq.is_stand() {
            return (pin_or_open, [Square::STAND; 8]);
        }
        let mut king_visibility = [Square::STAND; 8];
        for (i, &d) in BASE8_DIRECTIONS.iter().enumerate() {
            let step = d.black_offset();
            let mut cur = king_sq + step;
            let mut blocker = Square::STAND;
            while cur.is_onboard() {
                if self.base.piece_at(cur).is_piece() {
                    blocker = cur;
                    break;
                }
                cur = cur + step;
            }
            king_visibility[i] = blocker;
            if blocker.is_stand() {
                continue;
            }
            let Some(blocker_id) = self.base.piece_id_at(blocker) else {
                continue;
            };
            if let Some(attacker_id) = self.effect.pp_long_state(blocker_id, d.inverse()) {
                if self.base.piece_of(attacker_id).owner == defender.alt() {
                    pin_or_open.set(blocker_id);
                }
            }
        }
        (pin_or_open, king_visibility)
    }

    /// Builds the King8Info summary for `defender`'s king from the
    /// current effect tables. Computed on demand rather than cached —
    /// a pure function of the rest of the state, and simpler to keep
    /// correct than an incrementally-patched cache.
    pub fn king8_info(&self, defender: Player) -> King8Info {
        let attacker = defender.alt();
        let king_sq = self.king_square(defender);
        let attacker_king_id = king_piece_id(attacker);
        let defender_king_id = king_piece_id(defender);
        let defender_mask = self.base.owned_mask(defender);
        let attacker_mask = self.base.owned_mask(attacker);
        let mut fields = [DirFields::default(); 8];
        for (i, &d) in BASE8_DIRECTIONS.iter().enumerate() {
            let target = king_sq + d.black_offset();
            if !target.is_onboard() {
                continue;
            }
            let occ = self.piece_at(target);
            let empty = !occ.is_piece();
            let is_enemy_to_attacker = occ.is_piece() && occ.owner() == defender;
            let here = self.effect.effect_at(target);
            let attacker_effect = here.count(attacker) > 0;
            let defending_ids = here.piece_mask() & defender_mask;
            let defended_by_other_than_king =
                defending_ids.popcount() > 1 || (defending_ids.popcount() == 1 && !defending_ids.test(defender_king_id));
            let attacking_ids = here.piece_mask() & attacker_mask;
            let attacked_by_other_than_king =
                attacking_ids.popcount() > 1 || (attacking_ids.popcount() == 1 && !attacking_ids.test(attacker_king_id));

            fields[i] = DirFields {
                drop_candidate: empty && attacker_effect && !defended_by_other_than_king,
                liberty: (empty || is_enemy_to_attacker) && !attacker_effect,
                liberty_candidate: empty || (occ.is_piece() && occ.owner() == defender),
                move_candidate2: attacker_effect && (empty || is_enemy_to_attacker),
                space: empty,
                moves: attacked_by_other_than_king,
            };
        }
        King8Info::build(fields)
    }

    pub fn make_move_pass(&mut self) {
        self.base.set_turn(self.turn().alt());
    }

    /// Applies `mv`, which must already be legal in the current
    /// position (see `moves::classify`/`moves::generate` — this
    /// function does not re-validate).
    pub fn make_move(&mut self, mv: Move) {
        let _span = debug_span_make_move();
        match mv {
            Move::Pass => self.make_move_pass(),
            Move::Resign | Move::DeclareWin => self.base.set_turn(self.turn().alt()),
            Move::Normal(n) => self.make_normal_move(n),
        }
    }

    fn make_normal_move(&mut self, n: NormalMove) {
        trace!(?n, "make_move");
        if n.is_drop() {
            self.make_drop(n);
        } else if n.is_capture() {
            self.make_capturing_move(n);
        } else {
            self.make_simple_move(n);
        }
        self.recompute_pins_and_visibility(Player::Black);
        self.recompute_pins_and_visibility(Player::White);
        self.base.set_turn(n.player.alt());
    }

    fn make_drop(&mut self, n: NormalMove) {
        let basic = n.ptype_after.unpromote();
        let id = self
            .base
            .hand_candidate(n.player, basic)
            .expect("drop requires a held piece of this ptype");
        self.base.hand_clear(id);
        self.base.set_location(id, n.player, n.ptype_after, n.to);
        let ptypeo = PtypeO::new(n.player, n.ptype_after);
        self.base.write_cell(n.to, ptypeo, id);
        self.effect.do_block_at_sub(&self.base, n.to, id);
        self.effect.do_effect_add(&self.base, ptypeo, n.to, id);
        if matches!(n.ptype_after, Ptype::Pawn) {
            self.base.set_pawn_file_bit(n.player, n.to.x());
        }
    }

    fn make_simple_move(&mut self, n: NormalMove) {
        let id = self
            .base
            .piece_id_at(n.from)
            .expect("move requires a piece at its origin");
        let old_ptypeo = self.base.piece_at(n.from);
        self.effect.do_effect_sub(&self.base, old_ptypeo, n.from, id);
        self.effect.clear_pp_long_row(id);

        let new_ptypeo = PtypeO::new(n.player, n.ptype_after);
        self.base.write_cell(n.to, new_ptypeo, id);
        self.effect.do_block_at_sub(&self.base, n.to, id);
        self.base.clear_cell(n.from);
        self.effect.do_block_at_add(&self.base, n.from, id);
        self.effect.do_effect_add(&self.base, new_ptypeo, n.to, id);

        self.base.set_location(id, n.player, n.ptype_after, n.to);
        if n.is_promotion {
            self.promoted.set(id);
        }
        if matches!(n.old_ptype(), Ptype::Pawn) {
            self.base.clear_pawn_file_bit(n.player, n.from.x());
            if matches!(n.ptype_after, Ptype::Pawn) {
                self.base.set_pawn_file_bit(n.player, n.to.x());
            }
        }
    }

    fn make_capturing_move(&mut self, n: NormalMove) {
        let mover_id = self
            .base
            .piece_id_at(n.from)
            .expect("capturing move requires a piece at its origin");
        let captured_id = self
            .base
            .piece_id_at(n.to)
            .expect("capturing move requires a target piece");
        let captured_ptypeo = self.base.piece_at(n.to);
        let mover_old_ptypeo = self.base.piece_at(n.from);

        self.effect.do_effect_sub(&self.base, captured_ptypeo, n.to, captured_id);
        self.effect.do_effect_sub(&self.base, mover_old_ptypeo, n.from, mover_id);
        self.effect.clear_pp_long_row(mover_id);
        self.base.clear_cell(n.from);
        self.effect.do_block_at_add(&self.base, n.from, mover_id);

        // any ray that used to stop at `to` because of the captured
        // piece still stops there — the mover just took its place.
        self.effect.transfer_blocker_row(captured_id, mover_id);

        let new_ptypeo = PtypeO::new(n.player, n.ptype_after);
        self.base.write_cell(n.to, new_ptypeo, mover_id);
        self.effect.do_effect_add(&self.base, new_ptypeo, n.to, mover_id);

        let captured_basic = n.captured.unpromote();
        self.base.set_location(captured_id, n.player, captured_basic, Square::STAND);
        self.base.hand_set(captured_id);
        self.promoted.clear(captured_id);

        self.base.set_location(mover_id, n.player, n.ptype_after, n.to);
        if n.is_promotion {
            self.promoted.set(mover_id);
        }

        if matches!(n.captured.unpromote(), Ptype::Pawn) {
            self.base.clear_pawn_file_bit(n.player.alt(), n.to.x());
        }
        if matches!(n.old_ptype(), Ptype::Pawn) {
            self.base.clear_pawn_file_bit(n.player, n.from.x());
            if matches!(n.ptype_after, Ptype::Pawn) {
                self.base.set_pawn_file_bit(n.player, n.to.x());
            }
        }
    }

    /// Debug-only invariant audit; production callers assume these
    /// hold and never call this on a hot path. Checks the base board
    /// invariants plus every `EffectSummary`/pin/visibility invariant
    /// from §8: `countEffect` against the attacker piece mask, the
    /// `longPieceReach`/`ppLongState` agreement for every on-board long
    /// piece, and `pinOrOpen`/king-visibility against a from-scratch
    /// ray walk.
    pub fn is_consistent(&self) -> bool {
        if !self.base.is_consistent() {
            return false;
        }
        for sq in Square::iter_board() {
            let at = self.effect.effect_at(sq);
            let black_count = (at.piece_mask() & self.base.owned_mask(Player::Black)).popcount();
            let white_count = (at.piece_mask() & self.base.owned_mask(Player::White)).popcount();
            if at.count(Player::Black) != black_count as u32 {
                return false;
            }
            if at.count(Player::White) != white_count as u32 {
                return false;
            }
        }
        for id in 0..NUM_PIECES as u8 {
            if !is_long_piece_id(id) {
                continue;
            }
            let piece = self.base.piece_of(id);
            if piece.square.is_stand() {
                continue;
            }
            let owner = piece.owner;
            for &dir in &BASE8_DIRECTIONS {
                let long_dir = dir.to_long();
                if !crate::tables::move_direction::ptype_move_direction(piece.ptype).contains(&long_dir) {
                    if self.effect.long_piece_reach(id, dir) != Square::STAND {
                        return false;
                    }
                    continue;
                }
                let step = dir.to_offset(owner);
                let mut cur = piece.square + step;
                let mut stop = Square::STAND;
                while cur.is_onboard() {
                    if self.base.piece_at(cur).is_piece() {
                        stop = cur;
                        break;
                    }
                    cur = cur + step;
                }
                if self.effect.long_piece_reach(id, dir) != stop {
                    return false;
                }
                if !stop.is_stand() {
                    let Some(blocker_id) = self.base.piece_id_at(stop) else {
                        return false;
                    };
                    if self.effect.pp_long_state(blocker_id, dir) != Some(id) {
                        return false;
                    }
                }
            }
        }
        for &defender in &[Player::Black, Player::White] {
            let (pin_or_open, king_visibility) = self.compute_pins_and_visibility(defender);
            if pin_or_open != self.pin_or_open[defender.index()] {
                return false;
            }
            if king_visibility != self.king_visibility[defender.index()] {
                return false;
            }
        }
        true
    }
}

fn debug_span_make_move() -> tracing::span::EnteredSpan {
    tracing::debug_span!("make_move").entered()
}
