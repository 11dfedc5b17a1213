pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod utils;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use game::{Arena, Column, Grid, LetterBag, PressOutcome, Submission, Tile, TileId, TileState};
