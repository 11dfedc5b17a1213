use serde::{Deserialize, Serialize};

/// Location of a tile: its column and its index counted from the column floor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct TileId {
    pub column: usize,
    pub index: usize,
}

impl TileId {
    pub fn new(column: usize, index: usize) -> Self {
        Self { column, index }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TileState {
    /// Above the pending slot; cannot receive a letter yet
    Disabled,
    /// Lowest empty slot of its column
    Pending,
    /// Holds a letter and can be selected
    Active,
    /// Holds a letter and is part of the current submission
    Submitted,
}

impl TileState {
    /// Active and Submitted tiles are the only ones carrying a letter
    pub fn has_letter(self) -> bool {
        matches!(self, TileState::Active | TileState::Submitted)
    }
}

/// A single cell of the field.
///
/// State changes come from [`Column`](super::Column) and
/// [`Submission`](super::Submission) only; the setters are crate-private.
#[derive(Debug, Clone)]
pub struct Tile {
    id: TileId,
    letter: Option<char>,
    state: TileState,
}

impl Tile {
    pub(crate) fn new(id: TileId, state: TileState) -> Self {
        Self {
            id,
            letter: None,
            state,
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn column(&self) -> usize {
        self.id.column
    }

    pub fn index(&self) -> usize {
        self.id.index
    }

    pub fn state(&self) -> TileState {
        self.state
    }

    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    pub(crate) fn set_state(&mut self, state: TileState) {
        self.state = state;
    }

    /// Letters are permanent once dropped
    pub(crate) fn set_letter(&mut self, letter: char) {
        debug_assert!(self.letter.is_none(), "tile {:?} already has a letter", self.id);
        self.letter = Some(letter);
    }
}
