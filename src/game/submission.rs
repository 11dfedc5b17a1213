use crate::{
    error::{GameError, Result},
    game::{
        grid::Grid,
        tile::{TileId, TileState},
    },
};

/// The word being built: an adjacency-connected chain of selected tiles.
///
/// `word` is always the letters of `tiles` in order, and every tile in the
/// chain is `Submitted` on the grid.
#[derive(Debug, Clone)]
pub struct Submission {
    tiles: Vec<TileId>,
    word: String,
    max_length: usize,
}

impl Submission {
    pub fn new(max_length: usize) -> Self {
        Self {
            tiles: Vec::new(),
            word: String::new(),
            max_length,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tiles.len() >= self.max_length
    }

    pub fn contains(&self, tile: TileId) -> bool {
        self.tiles.contains(&tile)
    }

    pub fn last_tile(&self) -> Option<TileId> {
        self.tiles.last().copied()
    }

    /// Whether `tile` may extend the chain: it must be active, the chain must
    /// have room, and it must touch the current last tile.
    pub fn can_add(&self, tile: TileId, grid: &Grid) -> Result<bool> {
        let active = grid
            .tile(tile)
            .is_some_and(|t| t.state() == TileState::Active);
        if !active || self.is_full() {
            return Ok(false);
        }

        match self.last_tile() {
            Some(last) => grid.are_adjacent(tile, last),
            None => Ok(true),
        }
    }

    /// Append `tile` to the chain and mark it submitted.
    ///
    /// Adjacency is the caller's business (see [`Submission::can_add`]).
    pub fn add_tile(&mut self, tile: TileId, grid: &mut Grid) -> Result<()> {
        if self.is_full() {
            return Err(GameError::InvalidState(format!(
                "submission is full ({} letters)",
                self.max_length
            )));
        }

        let target = grid
            .tile_mut(tile)
            .ok_or_else(|| GameError::InvalidState(format!("no tile at {:?}", tile)))?;
        let letter = match (target.state(), target.letter()) {
            (TileState::Active, Some(letter)) => letter,
            (state, _) => {
                return Err(GameError::InvalidState(format!(
                    "tile {:?} is {:?}, expected Active",
                    tile, state
                )));
            }
        };

        target.set_state(TileState::Submitted);
        self.tiles.push(tile);
        self.word.push(letter);

        tracing::debug!("Added {:?} to submission, word is now {}", tile, self.word);
        Ok(())
    }

    /// Remove `tile` and everything selected after it.
    ///
    /// The removed tiles go back to `Active` and are returned in chain order.
    pub fn remove_from(&mut self, tile: TileId, grid: &mut Grid) -> Result<Vec<TileId>> {
        if self.is_empty() {
            return Err(GameError::InvalidState(
                "submission is empty".to_string(),
            ));
        }
        let position = self
            .tiles
            .iter()
            .position(|t| *t == tile)
            .ok_or_else(|| {
                GameError::InvalidState(format!("tile {:?} is not in the submission", tile))
            })?;

        Ok(self.truncate(position, grid))
    }

    /// Remove only the most recently added tile
    pub fn remove_last(&mut self, grid: &mut Grid) -> Result<TileId> {
        let last = self
            .last_tile()
            .ok_or_else(|| GameError::InvalidState("submission is empty".to_string()))?;
        self.truncate(self.tiles.len() - 1, grid);
        Ok(last)
    }

    /// Empty the chain, returning every tile to `Active`
    pub fn clear(&mut self, grid: &mut Grid) -> Vec<TileId> {
        self.truncate(0, grid)
    }

    fn truncate(&mut self, position: usize, grid: &mut Grid) -> Vec<TileId> {
        let removed = self.tiles.split_off(position);
        // One ASCII letter per tile, so byte offsets line up with positions
        self.word.truncate(position);

        for id in &removed {
            if let Some(t) = grid.tile_mut(*id) {
                t.set_state(TileState::Active);
            }
        }

        if !removed.is_empty() {
            tracing::debug!(
                "Removed {} tile(s) from submission, word is now {}",
                removed.len(),
                self.word
            );
        }
        removed
    }
}
