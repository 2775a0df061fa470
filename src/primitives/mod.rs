//! Tiny value types shared by every other module: player, piece kind,
//! direction, coordinates, moves, and the two bitset flavors used to
//! group pieces.

pub mod direction;
pub mod mv;
pub mod piece;
pub mod piece_mask;
pub mod player;
pub mod ptype;
pub mod ptypeo;
pub mod square;

pub use direction::Direction;
pub use mv::{Move, NormalMove};
pub use piece::Piece;
pub use piece_mask::PieceMask;
pub use player::Player;
pub use ptype::Ptype;
pub use ptypeo::PtypeO;
pub use square::{Offset, Square};
