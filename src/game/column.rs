use crate::{
    error::{GameError, Result},
    game::tile::{Tile, TileId, TileState},
};

/// A fixed-capacity stack of tiles, filled from the bottom.
///
/// Tiles below `active_count` hold letters, the tile at `active_count` (if
/// any) is pending and everything above it is disabled.
#[derive(Debug, Clone)]
pub struct Column {
    index: usize,
    tiles: Vec<Tile>,
    active_count: usize,
}

impl Column {
    pub fn new(capacity: usize, index: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(GameError::InvalidConfig(format!(
                "column {} must have a positive capacity",
                index
            )));
        }

        let mut tiles = Vec::new();
        tiles.try_reserve_exact(capacity).map_err(|_| {
            GameError::InvalidConfig(format!(
                "column {} cannot hold {} tiles",
                index, capacity
            ))
        })?;
        tiles.extend((0..capacity).map(|tt| {
            let state = if tt == 0 {
                TileState::Pending
            } else {
                TileState::Disabled
            };
            Tile::new(TileId::new(index, tt), state)
        }));

        Ok(Self {
            index,
            tiles,
            active_count: 0,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn capacity(&self) -> usize {
        self.tiles.len()
    }

    /// Number of tiles that have received a letter
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    pub fn is_full(&self) -> bool {
        self.active_count >= self.capacity()
    }

    /// Tiles from the floor up
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub(crate) fn tile_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    pub fn pending_tile(&self) -> Option<&Tile> {
        if self.is_full() {
            None
        } else {
            self.tiles.get(self.active_count)
        }
    }

    /// Place a letter on the pending tile and promote the next slot.
    pub fn drop_letter(&mut self, letter: char) -> Result<&Tile> {
        if self.is_full() {
            return Err(GameError::ColumnFull { column: self.index });
        }

        let tt = self.active_count;
        let tile = &mut self.tiles[tt];
        tile.set_letter(letter);
        tile.set_state(TileState::Active);
        self.active_count += 1;

        if let Some(next) = self.tiles.get_mut(self.active_count) {
            next.set_state(TileState::Pending);
        }

        tracing::debug!("Dropped '{}' into column {} at {}", letter, self.index, tt);

        Ok(&self.tiles[tt])
    }
}
