use colored::Colorize;
use liblife::Grid;

use crate::{preset, session::Session};

const ALIVE: &str = "█";
const DEAD: &str = "·";

pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1));

    for (pos, cell) in grid.enumerate_cells() {
        if pos.col == 0 && pos.row > 0 {
            out.push('\n');
        }

        let glyph = if cell.is_alive() {
            ALIVE.bright_white()
        } else {
            DEAD.bright_black()
        };
        out.push_str(&glyph.to_string());
    }

    out
}

pub fn render_status(session: &Session) -> String {
    let preset_name = preset::get(session.preset_id()).map_or("?", |preset| preset.name);

    format!(
        "Number of cells alive: {}\n\
         Number of generations: {}\n\
         Current speed: {}\n\
         Game is currently paused: {}\n\
         Board preset ID: {} ({})",
        session.live_count(),
        session.generation(),
        session.speed(),
        session.paused(),
        session.preset_id(),
        preset_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn grid_has_one_line_per_row() {
        let grid = Grid::from_live_cells(3, 4, [(0, 0), (2, 3)]).unwrap();
        let rendered = render_grid(&grid);

        assert_eq!(rendered.lines().count(), 3);
        assert_eq!(rendered.matches(ALIVE).count(), 2);
        assert_eq!(rendered.matches(DEAD).count(), 10);
    }

    #[test]
    fn status_reports_session_state() {
        let mut session = Session::new(&Config {
            preset: 1,
            ..Config::default()
        })
        .unwrap();
        session.step(2);

        let status = render_status(&session);
        assert!(status.contains("Number of cells alive: 3"));
        assert!(status.contains("Number of generations: 2"));
        assert!(status.contains("Current speed: 1"));
        assert!(status.contains("Game is currently paused: true"));
        assert!(status.contains("Board preset ID: 1 (Blinker)"));
    }
}
