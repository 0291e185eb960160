use itertools::Itertools;
use tracing::debug;

use crate::{
    error::{GridError, Result},
    pos::Position,
};

/// A fixed-size rectangular grid of cells, stored row-major in a single buffer.
///
/// The dimensions are set once at construction and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid of the given size with every cell dead.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let capacity = rows
            .checked_mul(cols)
            .filter(|_| rows > 0 && cols > 0)
            .ok_or(GridError::InvalidDimensions { rows, cols })?;

        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::default(); capacity],
        })
    }

    /// Creates a grid where exactly the listed cells are alive.
    ///
    /// Listing a cell more than once has no extra effect.
    pub fn from_live_cells<I, P>(rows: usize, cols: usize, live: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        let mut grid = Self::new(rows, cols)?;

        for pos in live {
            grid.set_cell(pos, CellState::Alive)?;
        }

        debug!(rows, cols, live = grid.live_count(), "seeded grid from live cells");
        Ok(grid)
    }

    /// Creates a grid with `alive_cells` distinct cells chosen at random.
    pub fn new_random(rows: usize, cols: usize, alive_cells: usize) -> Result<Self> {
        let mut grid = Self::new(rows, cols)?;

        let capacity = rows * cols;
        if alive_cells > capacity {
            return Err(GridError::TooManyAliveCells {
                requested: alive_cells,
                capacity,
            });
        }

        let mut available_positions = (0..rows)
            .cartesian_product(0..cols)
            .map(Position::from)
            .collect_vec();

        for _ in 0..alive_cells {
            let chosen_index = rand::random_range(0..available_positions.len());
            let chosen_position = available_positions.swap_remove(chosen_index);
            grid.set_cell(chosen_position, CellState::Alive)?;
        }

        debug!(rows, cols, alive_cells, "seeded random grid");
        Ok(grid)
    }

    pub(crate) fn with_cells(rows: usize, cols: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `(row, col)` lies on this grid.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        is_in_field(self.rows, self.cols, row, col)
    }

    pub fn cell<P>(&self, pos: P) -> Result<CellState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        Ok(self.cells[index])
    }

    pub fn is_alive<P>(&self, pos: P) -> Result<bool>
    where
        P: Into<Position>,
    {
        self.cell(pos).map(CellState::is_alive)
    }

    pub fn set_cell<P>(&mut self, pos: P, state: CellState) -> Result<()>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells[index] = state;
        Ok(())
    }

    /// Flips a single cell and returns its new state.
    pub fn toggle<P>(&mut self, pos: P) -> Result<CellState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        let tile = &mut self.cells[index];
        *tile = tile.toggled();
        Ok(*tile)
    }

    /// Kills every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), *cell))
    }

    /// Coordinates of every live cell, in row-major order.
    pub fn live_cells(&self) -> Vec<Position> {
        self.enumerate_cells()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub(crate) fn cells(&self) -> &[CellState] {
        &self.cells
    }

    fn pos_to_index<P>(&self, pos: P) -> Result<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        Ok(col + row * self.cols)
    }

    fn index_to_pos(&self, index: usize) -> Position {
        Position {
            row: index / self.cols,
            col: index % self.cols,
        }
    }
}

/// Whether `(row, col)` lies inside a `rows` x `cols` field.
///
/// Coordinates are signed so that neighbors past the top or left edge can be asked about.
pub fn is_in_field(rows: usize, cols: usize, row: isize, col: isize) -> bool {
    row >= 0 && col >= 0 && (row as usize) < rows && (col as usize) < cols
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    Alive,

    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl From<CellState> for bool {
    fn from(state: CellState) -> Self {
        state.is_alive()
    }
}
