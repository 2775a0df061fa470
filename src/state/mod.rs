//! Position state: the raw board (`BaseState`), the incrementally
//! maintained attack tables layered on top of it (`EffectState`), and
//! the packed per-king summary used by the mate-related classifiers.

pub mod base_state;
pub mod effect_state;
pub mod king8;

pub use base_state::{BaseState, StateError};
pub use effect_state::EffectState;
pub use king8::{DirFields, King8Info};
