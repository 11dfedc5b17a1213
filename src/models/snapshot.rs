use serde::{Deserialize, Serialize};

use crate::game::{Column, Grid, LetterBag, Submission, Tile, TileId, TileState};

/// Number of upcoming letters shown in the queue preview
pub const UPCOMING_PREVIEW_LEN: usize = 7;

/// Read-only view of a whole session, for rendering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSnapshot {
    pub columns: Vec<ColumnSnapshot>,
    pub submission: SubmissionSnapshot,
    pub upcoming: Vec<char>,
    pub remaining: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnSnapshot {
    pub index: usize,
    pub capacity: usize,
    pub tall: bool,
    /// Bottom to top
    pub tiles: Vec<TileSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TileSnapshot {
    pub state: TileState,
    pub letter: Option<char>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionSnapshot {
    pub word: String,
    pub tiles: Vec<TileId>,
    pub max_length: usize,
}

impl GameSnapshot {
    pub fn capture(grid: &Grid, bag: &LetterBag, submission: &Submission) -> Self {
        Self {
            columns: grid
                .columns()
                .iter()
                .map(|column| ColumnSnapshot::capture(column, grid.is_tall(column.index())))
                .collect(),
            submission: SubmissionSnapshot::from(submission),
            upcoming: bag.upcoming(UPCOMING_PREVIEW_LEN),
            remaining: bag.remaining(),
        }
    }
}

impl ColumnSnapshot {
    fn capture(column: &Column, tall: bool) -> Self {
        Self {
            index: column.index(),
            capacity: column.capacity(),
            tall,
            tiles: column.tiles().iter().map(TileSnapshot::from).collect(),
        }
    }
}

impl From<&Tile> for TileSnapshot {
    fn from(tile: &Tile) -> Self {
        Self {
            state: tile.state(),
            letter: tile.letter(),
        }
    }
}

impl From<&Submission> for SubmissionSnapshot {
    fn from(submission: &Submission) -> Self {
        Self {
            word: submission.word().to_string(),
            tiles: submission.tiles().to_vec(),
            max_length: submission.max_length(),
        }
    }
}
