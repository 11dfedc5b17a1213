use crate::{
    error::{GameError, Result},
    game::{
        column::Column,
        tile::{Tile, TileId},
    },
    utils::letters::is_valid_letter,
};

/// The playing field: a row of columns laid out like a brick wall.
///
/// Even columns are tall (`rows + 1` tiles) and sit half a tile lower than
/// the odd, short columns (`rows` tiles), so every short tile touches two
/// tall tiles on each side.
#[derive(Debug, Clone)]
pub struct Grid {
    columns: Vec<Column>,
    num_rows: usize,
}

impl Grid {
    pub fn new(num_columns: usize, num_rows: usize) -> Result<Self> {
        if num_columns == 0 {
            return Err(GameError::InvalidConfig(
                "field needs at least one column".to_string(),
            ));
        }
        if num_rows == 0 {
            return Err(GameError::InvalidConfig(
                "field needs at least one row".to_string(),
            ));
        }

        let tall = num_rows.checked_add(1).ok_or_else(|| {
            GameError::InvalidConfig(format!("{} rows is too many", num_rows))
        })?;

        let mut capacities = Vec::new();
        capacities.try_reserve_exact(num_columns).map_err(|_| {
            GameError::InvalidConfig(format!("{} columns is too many", num_columns))
        })?;
        capacities.extend((0..num_columns).map(|cc| if cc % 2 == 0 { tall } else { num_rows }));
        Self::with_capacities(capacities)
    }

    /// Build a field from explicit column capacities.
    ///
    /// Neighboring columns are expected to differ by exactly one tile;
    /// [`Grid::are_adjacent`] reports `InvalidConfig` when they don't.
    pub fn with_capacities(capacities: Vec<usize>) -> Result<Self> {
        if capacities.is_empty() {
            return Err(GameError::InvalidConfig(
                "field needs at least one column".to_string(),
            ));
        }

        let mut columns = Vec::new();
        columns.try_reserve_exact(capacities.len()).map_err(|_| {
            GameError::InvalidConfig(format!("{} columns is too many", capacities.len()))
        })?;
        for (cc, capacity) in capacities.iter().enumerate() {
            columns.push(Column::new(*capacity, cc)?);
        }
        let num_rows = capacities.iter().copied().min().unwrap_or_default();

        Ok(Self { columns, num_rows })
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Capacity of the short columns
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, column: usize) -> Option<&Column> {
        self.columns.get(column)
    }

    /// Tall columns hold one tile more than the short ones
    pub fn is_tall(&self, column: usize) -> bool {
        self.column(column)
            .is_some_and(|c| c.capacity() > self.num_rows)
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.column(id.column).and_then(|c| c.tile(id.index))
    }

    pub(crate) fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.columns
            .get_mut(id.column)
            .and_then(|c| c.tile_mut(id.index))
    }

    /// Every column is full
    pub fn is_full(&self) -> bool {
        self.columns.iter().all(Column::is_full)
    }

    pub fn drop_letter(&mut self, column: usize, letter: char) -> Result<&Tile> {
        if !is_valid_letter(letter) {
            return Err(GameError::InvalidLetter(letter));
        }
        let num_columns = self.num_columns();
        self.columns
            .get_mut(column)
            .ok_or(GameError::InvalidColumn {
                column,
                num_columns,
            })?
            .drop_letter(letter)
    }

    /// Whether two tiles touch.
    ///
    /// Unknown tiles and a tile paired with itself are never adjacent. Within
    /// a column, tiles touch when their indices differ by one. Across
    /// neighboring columns, short tile `t` touches long tiles `t` and `t + 1`.
    pub fn are_adjacent(&self, a: TileId, b: TileId) -> Result<bool> {
        if a == b || self.tile(a).is_none() || self.tile(b).is_none() {
            return Ok(false);
        }

        if a.column == b.column {
            return Ok(a.index.abs_diff(b.index) == 1);
        }

        if a.column.abs_diff(b.column) != 1 {
            return Ok(false);
        }

        let cap_a = self.columns[a.column].capacity();
        let cap_b = self.columns[b.column].capacity();
        let (long, short) = match cap_a.cmp(&cap_b) {
            std::cmp::Ordering::Greater => (a, b),
            std::cmp::Ordering::Less => (b, a),
            std::cmp::Ordering::Equal => {
                return Err(GameError::InvalidConfig(format!(
                    "neighboring columns {} and {} have the same capacity {}",
                    a.column, b.column, cap_a
                )));
            }
        };

        Ok(long.index == short.index || long.index == short.index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tile::TileState;

    fn id(column: usize, index: usize) -> TileId {
        TileId::new(column, index)
    }

    fn adjacent(grid: &Grid, a: TileId, b: TileId) -> bool {
        let forward = grid.are_adjacent(a, b).unwrap();
        let backward = grid.are_adjacent(b, a).unwrap();
        assert_eq!(forward, backward, "adjacency of {:?} and {:?} is not symmetric", a, b);
        forward
    }

    #[test]
    fn test_grid_generation() {
        let grid = Grid::new(5, 3).unwrap();
        assert_eq!(grid.num_columns(), 5);
        assert_eq!(grid.num_rows(), 3);

        let capacities: Vec<_> = grid.columns().iter().map(Column::capacity).collect();
        assert_eq!(capacities, vec![4, 3, 4, 3, 4]);
        assert!(grid.is_tall(0));
        assert!(!grid.is_tall(1));
        assert!(!grid.is_tall(9));

        for column in grid.columns() {
            assert_eq!(column.tile(0).unwrap().state(), TileState::Pending);
        }
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(Grid::new(0, 3), Err(GameError::InvalidConfig(_))));
        assert!(matches!(Grid::new(3, 0), Err(GameError::InvalidConfig(_))));
        assert!(matches!(
            Grid::with_capacities(vec![3, 0, 3]),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert!(matches!(
            Grid::new(1, usize::MAX),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(matches!(
            Grid::new(1, usize::MAX - 1),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(matches!(
            Grid::new(usize::MAX, 1),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_drop_letter_validates_column_and_letter() {
        let mut grid = Grid::new(3, 2).unwrap();

        let tile = grid.drop_letter(1, 'K').unwrap();
        assert_eq!(tile.id(), id(1, 0));
        assert_eq!(tile.letter(), Some('K'));

        assert_eq!(
            grid.drop_letter(3, 'K').unwrap_err(),
            GameError::InvalidColumn {
                column: 3,
                num_columns: 3
            }
        );
        assert_eq!(
            grid.drop_letter(0, 'k').unwrap_err(),
            GameError::InvalidLetter('k')
        );
    }

    #[test]
    fn test_drop_until_full() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.drop_letter(0, 'A').unwrap();
        grid.drop_letter(0, 'B').unwrap();
        grid.drop_letter(1, 'C').unwrap();
        assert!(grid.is_full());
        assert_eq!(
            grid.drop_letter(1, 'D').unwrap_err(),
            GameError::ColumnFull { column: 1 }
        );
    }

    #[test]
    fn test_adjacent_same_column() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(adjacent(&grid, id(0, 1), id(0, 2)));
        assert!(!adjacent(&grid, id(0, 0), id(0, 2)));
        assert!(!adjacent(&grid, id(0, 1), id(0, 1)));
    }

    #[test]
    fn test_adjacent_neighbor_columns() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(adjacent(&grid, id(0, 1), id(1, 0)));
        assert!(adjacent(&grid, id(0, 1), id(1, 1)));
        assert!(!adjacent(&grid, id(0, 0), id(1, 2)));
        assert!(!adjacent(&grid, id(0, 3), id(1, 1)));

        // Top and bottom of a tall column each touch one short tile
        assert!(adjacent(&grid, id(0, 0), id(1, 0)));
        assert!(adjacent(&grid, id(0, 3), id(1, 2)));
        assert!(adjacent(&grid, id(2, 3), id(1, 2)));
    }

    #[test]
    fn test_not_adjacent_distant_columns() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(!adjacent(&grid, id(0, 1), id(2, 1)));
        assert!(!adjacent(&grid, id(0, 0), id(2, 0)));
    }

    #[test]
    fn test_unknown_tiles_are_not_adjacent() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(!adjacent(&grid, id(1, 3), id(1, 2)));
        assert!(!adjacent(&grid, id(7, 0), id(6, 0)));
    }

    #[test]
    fn test_equal_neighbor_capacities_rejected() {
        let grid = Grid::with_capacities(vec![3, 3]).unwrap();
        assert!(matches!(
            grid.are_adjacent(id(0, 0), id(1, 0)),
            Err(GameError::InvalidConfig(_))
        ));
        // Same-column checks never look at the neighbor
        assert_eq!(grid.are_adjacent(id(0, 0), id(0, 1)), Ok(true));
    }
}
