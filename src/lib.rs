//! Incrementally-maintained Shogi position core.
//!
//! Packed primitives (player, ptype, square, move, piece), the static
//! tables derived from them, a board representation (`BaseState`) with
//! an incrementally updated attacker summary layered on top
//! (`EffectState`), legal move generation, and one-ply checkmate
//! search.
//!
//! This crate is single-threaded and synchronous and owns no I/O: text
//! parsing/formatting (CSA/USI/KIF), record pack/unpack, opening
//! books, evaluation, and search all live outside it and talk to this
//! core only through the query/mutation/generation surface re-exported
//! here.

pub mod declare;
pub mod effect;
pub mod logging;
pub mod moves;
pub mod primitives;
pub mod state;
pub mod tables;

pub use declare::win_if_declare;
pub use moves::{
    generate_check, generate_legal, generate_with_full_unpromotions, in_checkmate, is_legal,
    try_checkmate_1ply,
};
pub use primitives::{Direction, Move, NormalMove, Offset, Piece, PieceMask, Player, Ptype, PtypeO, Square};
pub use state::{BaseState, EffectState, King8Info, StateError};
