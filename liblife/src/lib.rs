//! A fixed-size, non-wrapping Game of Life engine.
//!
//! Everything here is a pure function of a [`Grid`] value: advancing a generation borrows the
//! current grid and returns a freshly allocated one, so every cell of the new generation is
//! computed from the untouched previous generation.

use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};
use tracing::trace;

pub use error::{GridError, Result};
pub use grid::{CellState, Grid, is_in_field};
pub use pos::Position;
pub use rule::next_cell_state;

pub mod error;
pub mod grid;
pub mod pos;
pub mod rule;

const NEIGHBOR_RELATIVE_POSITIONS: [[isize; 2]; 8] = [
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// Counts the live cells in the Moore neighborhood of `(row, col)`.
///
/// Neighbors past the edge of the grid count as dead. The result is always in `0..=8`.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> usize {
    let cells = grid.cells();

    NEIGHBOR_RELATIVE_POSITIONS
        .iter()
        .filter(|&&[row_offset, col_offset]| {
            let (Some(neighbor_row), Some(neighbor_col)) = (
                row.checked_add_signed(row_offset),
                col.checked_add_signed(col_offset),
            ) else {
                return false;
            };

            neighbor_row < grid.rows()
                && neighbor_col < grid.cols()
                && cells[neighbor_row * grid.cols() + neighbor_col].is_alive()
        })
        .count()
}

/// Computes the next generation of `grid`.
///
/// The input is only read; all writes go to a new grid of the same dimensions.
pub fn advance_generation(grid: &Grid) -> Grid {
    let next_cells = grid
        .enumerate_cells()
        .map(|(pos, cell)| next_cell(grid, pos, cell))
        .collect();

    let next = Grid::with_cells(grid.rows(), grid.cols(), next_cells);
    trace!(
        rows = next.rows(),
        cols = next.cols(),
        live = next.live_count(),
        "advanced generation"
    );
    next
}

/// Same as [`advance_generation`], with the rows of the new generation computed in parallel.
pub fn advance_generation_par(grid: &Grid) -> Grid {
    let cols = grid.cols();
    let mut next_cells = vec![CellState::Dead; grid.rows() * cols];

    next_cells
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(row, next_row)| {
            for (col, next_state) in next_row.iter_mut().enumerate() {
                let pos = Position { row, col };
                let cell = grid.cells()[row * cols + col];
                *next_state = next_cell(grid, pos, cell);
            }
        });

    let next = Grid::with_cells(grid.rows(), cols, next_cells);
    trace!(
        rows = next.rows(),
        cols = next.cols(),
        live = next.live_count(),
        "advanced generation in parallel"
    );
    next
}

fn next_cell(grid: &Grid, pos: Position, cell: CellState) -> CellState {
    let live_neighbors = count_live_neighbors(grid, pos.row, pos.col);
    next_cell_state(cell.is_alive(), live_neighbors).into()
}
