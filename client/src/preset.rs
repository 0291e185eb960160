use liblife::Grid;

/// A named set of initially alive cells.
#[derive(Debug)]
pub struct Preset {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Preset {
    pub fn grid(&self, rows: usize, cols: usize) -> liblife::Result<Grid> {
        Grid::from_live_cells(rows, cols, self.cells.iter().copied())
    }
}

// Coordinates assume the default 35x50 board.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Empty",
        cells: &[],
    },
    Preset {
        name: "Blinker",
        cells: &[(17, 24), (17, 25), (17, 26)],
    },
    Preset {
        name: "Glider",
        cells: &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)],
    },
    Preset {
        name: "Toad",
        cells: &[(17, 25), (17, 26), (17, 27), (18, 24), (18, 25), (18, 26)],
    },
    Preset {
        name: "Beacon",
        cells: &[(10, 10), (10, 11), (11, 10), (11, 11), (12, 12), (12, 13), (13, 12), (13, 13)],
    },
    Preset {
        name: "R-pentomino",
        cells: &[(16, 25), (16, 26), (17, 24), (17, 25), (18, 25)],
    },
];

pub fn get(id: usize) -> Option<&'static Preset> {
    PRESETS.get(id)
}
