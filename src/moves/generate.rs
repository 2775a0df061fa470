//! Legal move generation. Rather than special-casing "in check" vs.
//! "not in check" (§4.7's king-move/capture-the-checker/interpose
//! split), every on-board move and drop is generated as a pseudo move
//! and then screened by simulating it on a cloned position and asking
//! whether the mover is still in check afterward. This reaches the
//! same legal set through the safe-move classifier's own underlying
//! question — "does this leave my king attacked?" — without porting
//! the original's separate checker-interposition bookkeeping; `EffectState`
//! is cheap enough to clone that re-deriving the answer per candidate
//! is simpler to get right than maintaining it incrementally.

use crate::primitives::mv::{Move, NormalMove};
use crate::primitives::piece::{Piece, NUM_PIECES};
use crate::primitives::player::Player;
use crate::primitives::ptype::Ptype;
use crate::primitives::square::Square;
use crate::state::EffectState;
use crate::tables::move_direction::ptype_move_direction;
use crate::tables::zone::in_promotion_zone;

use super::classify;

fn strongly_prefers_promotion(ptype: Ptype) -> bool {
    matches!(ptype, Ptype::Rook | Ptype::Bishop)
}

fn forced_promote(ptype: Ptype, player: Player, to: Square) -> bool {
    if !ptype.can_promote() {
        return false;
    }
    let last = match player {
        Player::Black => 1,
        Player::White => 9,
    };
    let second_last = match player {
        Player::Black => 2,
        Player::White => 8,
    };
    match ptype {
        Ptype::Pawn | Ptype::Lance => to.y() == last,
        Ptype::Knight => to.y() == last || to.y() == second_last,
        _ => false,
    }
}

fn emit_moves_to(piece: Piece, to: Square, captured: Option<Ptype>, out: &mut Vec<NormalMove>) {
    let player = piece.owner;
    let captured_ptype = captured.unwrap_or(Ptype::Empty);
    let base = NormalMove {
        player,
        from: piece.square,
        to,
        ptype_after: piece.ptype,
        captured: captured_ptype,
        is_promotion: false,
    };

    if forced_promote(piece.ptype, player, to) {
        out.push(NormalMove {
            ptype_after: piece.ptype.promote(),
            is_promotion: true,
            ..base
        });
        return;
    }

    let can_promote_here =
        piece.ptype.can_promote() && (in_promotion_zone(player, piece.square) || in_promotion_zone(player, to));
    if can_promote_here {
        out.push(NormalMove {
            ptype_after: piece.ptype.promote(),
            is_promotion: true,
            ..base
        });
        if !strongly_prefers_promotion(piece.ptype) {
            out.push(base);
        }
    } else {
        out.push(base);
    }
}

fn piece_pseudo_moves(state: &EffectState, piece: Piece, out: &mut Vec<NormalMove>) {
    for &dir in ptype_move_direction(piece.ptype) {
        let step = dir.to_offset(piece.owner);
        if dir.is_long() {
            let mut cur = piece.square + step;
            while cur.is_onboard() {
                let occ = state.piece_at(cur);
                if occ.is_piece() {
                    if occ.owner() != piece.owner {
                        emit_moves_to(piece, cur, Some(occ.ptype()), out);
                    }
                    break;
                }
                emit_moves_to(piece, cur, None, out);
                cur = cur + step;
            }
        } else {
            let target = piece.square + step;
            if !target.is_onboard() {
                continue;
            }
            let occ = state.piece_at(target);
            if occ.is_piece() && occ.owner() == piece.owner {
                continue;
            }
            let captured = if occ.is_piece() { Some(occ.ptype()) } else { None };
            emit_moves_to(piece, target, captured, out);
        }
    }
}

fn on_board_pseudo_moves(state: &EffectState, out: &mut Vec<NormalMove>) {
    let player = state.turn();
    for id in 0..NUM_PIECES as u8 {
        let piece = state.piece_of(id);
        if piece.ptype == Ptype::Empty || piece.square.is_stand() || piece.owner != player {
            continue;
        }
        piece_pseudo_moves(state, piece, out);
    }
}

fn drop_pseudo_moves(state: &EffectState, out: &mut Vec<NormalMove>) {
    let player = state.turn();
    for &basic in &Ptype::BASIC {
        if matches!(basic, Ptype::King) || state.count_hand(player, basic) == 0 {
            continue;
        }
        for square in Square::iter_board() {
            if state.piece_at(square).is_piece() {
                continue;
            }
            if !crate::tables::drop_rank::legal_drop_at(player, basic, square) {
                continue;
            }
            if matches!(basic, Ptype::Pawn) && state.pawn_in_file(player, square.x()) {
                continue;
            }
            out.push(NormalMove {
                player,
                from: Square::STAND,
                to: square,
                ptype_after: basic,
                captured: Ptype::Empty,
                is_promotion: false,
            });
        }
    }
}

fn pseudo_moves(state: &EffectState) -> Vec<NormalMove> {
    let mut out = Vec::new();
    on_board_pseudo_moves(state, &mut out);
    drop_pseudo_moves(state, &mut out);
    out
}

/// Whether the side to move in `state` has at least one move after
/// which it is not in check. Used by the pawn-drop-mate filter and the
/// one-ply checkmate finder to ask "is this position checkmate?"
/// without re-deriving the full legal list (and, for the pawn-drop-mate
/// case, without recursing back into `generate_legal`).
pub(crate) fn has_legal_reply(state: &EffectState) -> bool {
    let mover = state.turn();
    for n in pseudo_moves(state) {
        let mut clone = state.clone();
        clone.make_move(Move::Normal(n));
        if !clone.in_check_of(mover) {
            return true;
        }
    }
    false
}

/// Every fully legal move from `state`: on-board moves and drops,
/// screened for self-check and (for pawn drops) pawn-drop-mate.
pub fn generate_legal(state: &EffectState) -> Vec<Move> {
    let mut legal = Vec::new();
    for n in pseudo_moves(state) {
        if !classify::is_safe_move(state, n) {
            continue;
        }
        if classify::is_pawn_drop_mate(state, n) {
            continue;
        }
        legal.push(Move::Normal(n));
    }
    legal
}

/// `generate_legal` plus the unpromoted form of every move where
/// promotion was available but suppressed because the piece strongly
/// prefers promoting (rooks, bishops).
pub fn generate_with_full_unpromotions(state: &EffectState) -> Vec<Move> {
    let mover = state.turn();
    let legal = generate_legal(state);
    let mut extra = Vec::new();
    for mv in &legal {
        let Move::Normal(n) = mv else { continue };
        if !n.is_promotion || !strongly_prefers_promotion(n.old_ptype()) {
            continue;
        }
        if forced_promote(n.old_ptype(), n.player, n.to) {
            continue;
        }
        let unpromoted = NormalMove {
            ptype_after: n.old_ptype(),
            is_promotion: false,
            ..*n
        };
        let mut clone = state.clone();
        clone.make_move(Move::Normal(unpromoted));
        if !clone.in_check_of(mover) {
            extra.push(Move::Normal(unpromoted));
        }
    }
    let mut all = legal;
    all.extend(extra);
    all
}

/// The subset of `generate_legal` that gives check.
pub fn generate_check(state: &EffectState) -> Vec<Move> {
    generate_legal(state)
        .into_iter()
        .filter(|mv| {
            let Move::Normal(n) = mv else { return false };
            classify::gives_check(state, *n)
        })
        .collect()
}
