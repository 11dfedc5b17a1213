// Game engine modules

pub mod arena;
pub mod bag;
pub mod column;
pub mod grid;
pub mod submission;
pub mod tile;

pub use arena::{Arena, PressOutcome};
pub use bag::LetterBag;
pub use column::Column;
pub use grid::Grid;
pub use submission::Submission;
pub use tile::{Tile, TileId, TileState};
