//! The playing surface.
//!
//! - `Property`: a purchasable space with a flat rent
//! - `SpecialSquare`: GO, jail, card and tax squares
//! - `Board`: the fixed ring of spaces, with colour-group lookup

pub mod layout;
pub mod property;
pub mod space;

pub use layout::Board;
pub use property::{ColorGroup, Property, PropertyKind};
pub use space::{Space, SpecialSquare};
