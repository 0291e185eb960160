//! The B3/S23 rule of Conway's Game of Life.

/// Neighbor count at which a dead cell comes alive.
pub const BIRTH: usize = 3;

/// Neighbor counts at which a live cell stays alive.
pub const SURVIVE: [usize; 2] = [2, 3];

/// Next state of a single cell given its current state and live neighbor count.
///
/// Total over every input: counts above eight fall through to death/staying dead.
pub fn next_cell_state(alive: bool, live_neighbors: usize) -> bool {
    if alive {
        SURVIVE.contains(&live_neighbors)
    } else {
        live_neighbors == BIRTH
    }
}
