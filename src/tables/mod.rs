//! Static lookup tables derived from the primitive types: per-ptype
//! move directions, per-ptypeO adjacency effects, piece-id groupings,
//! and drop-rank legality. Everything here is pure and precomputed
//! once, so the rest of the crate treats it as free to call.

pub mod base8;
pub mod drop_rank;
pub mod move_direction;
pub mod piece_id;
pub mod ptype_effect;
pub mod zone;

pub use base8::{base8_dir, direction_from_unit_step};
pub use drop_rank::legal_drop_at;
pub use move_direction::ptype_move_direction;
pub use piece_id::piece_id_set;
pub use ptype_effect::{ptype_effect, EffectKind};
pub use zone::in_promotion_zone;
