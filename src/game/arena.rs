use crate::{
    config::GameConfig,
    error::{GameError, Result},
    game::{
        bag::LetterBag,
        grid::Grid,
        submission::Submission,
        tile::{TileId, TileState},
    },
    models::GameSnapshot,
};

/// What a tile press ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// A letter from the bag landed on this tile
    Dropped { tile: TileId, letter: char },
    /// The tile joined the submission
    Selected,
    /// The tile could not join the submission (not adjacent or word full)
    Rejected,
    /// The tile and `removed - 1` later tiles left the submission
    Deselected { removed: usize },
    /// Disabled tiles ignore presses
    Ignored,
}

/// One game session: the field, the letter bag and the word in progress.
#[derive(Debug, Clone)]
pub struct Arena {
    config: GameConfig,
    grid: Grid,
    bag: LetterBag,
    submission: Submission,
}

impl Arena {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let grid = Grid::new(config.num_columns, config.num_rows)?;
        let bag = LetterBag::new(&config.distribution, seed)?;
        let submission = Submission::new(config.max_submission_length);

        tracing::info!(
            "Started game: {} columns, {} rows, {} letters in bag (seed {})",
            grid.num_columns(),
            grid.num_rows(),
            bag.remaining(),
            seed
        );

        Ok(Self {
            config,
            grid,
            bag,
            submission,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn bag(&self) -> &LetterBag {
        &self.bag
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    /// Draw the next letter and drop it into `column`.
    ///
    /// The column is checked before drawing so a failed drop never costs a
    /// letter.
    pub fn drop_next(&mut self, column: usize) -> Result<TileId> {
        let target = self.grid.column(column).ok_or(GameError::InvalidColumn {
            column,
            num_columns: self.grid.num_columns(),
        })?;
        if target.is_full() {
            return Err(GameError::ColumnFull { column });
        }

        let letter = self.bag.pop_next()?;
        let tile = self.grid.drop_letter(column, letter)?;
        Ok(tile.id())
    }

    /// Add `tile` to the word if it is allowed to extend the chain
    pub fn select(&mut self, tile: TileId) -> Result<bool> {
        if !self.submission.can_add(tile, &self.grid)? {
            return Ok(false);
        }
        self.submission.add_tile(tile, &mut self.grid)?;
        Ok(true)
    }

    /// Drop `tile` and everything chosen after it from the word
    pub fn deselect(&mut self, tile: TileId) -> Result<Vec<TileId>> {
        self.submission.remove_from(tile, &mut self.grid)
    }

    /// Take back the most recently selected tile
    pub fn undo(&mut self) -> Result<TileId> {
        self.submission.remove_last(&mut self.grid)
    }

    /// Handle a press on `tile` according to its state.
    pub fn press(&mut self, tile: TileId) -> Result<PressOutcome> {
        let state = self
            .grid
            .tile(tile)
            .map(|t| t.state())
            .ok_or_else(|| GameError::InvalidState(format!("no tile at {:?}", tile)))?;

        match state {
            TileState::Pending => {
                let dropped = self.drop_next(tile.column)?;
                let letter = self
                    .grid
                    .tile(dropped)
                    .and_then(|t| t.letter())
                    .ok_or_else(|| {
                        GameError::InvalidState(format!("tile {:?} has no letter", dropped))
                    })?;
                Ok(PressOutcome::Dropped {
                    tile: dropped,
                    letter,
                })
            }
            TileState::Active => {
                if self.select(tile)? {
                    Ok(PressOutcome::Selected)
                } else {
                    Ok(PressOutcome::Rejected)
                }
            }
            TileState::Submitted => {
                let removed = self.deselect(tile)?;
                Ok(PressOutcome::Deselected {
                    removed: removed.len(),
                })
            }
            TileState::Disabled => Ok(PressOutcome::Ignored),
        }
    }

    /// The letter a pending tile would receive, for hover previews
    pub fn pending_preview(&self, tile: TileId) -> Option<char> {
        match self.grid.tile(tile) {
            Some(t) if t.state() == TileState::Pending => self.bag.peek_next(),
            _ => None,
        }
    }

    /// Accept the current word and release its tiles.
    ///
    /// The word is handed back as-is; judging it is up to the caller.
    pub fn confirm(&mut self) -> Result<String> {
        if self.submission.is_empty() {
            return Err(GameError::InvalidState(
                "nothing to confirm".to_string(),
            ));
        }

        let word = self.submission.word().to_string();
        self.submission.clear(&mut self.grid);
        tracing::info!("Confirmed word {}", word);
        Ok(word)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.grid, &self.bag, &self.submission)
    }
}
