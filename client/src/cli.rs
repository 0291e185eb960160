use std::{io, ops::ControlFlow};

use anyhow::{Context, bail};
use liblife::Position;
use tracing::warn;

use crate::{
    render,
    session::{self, SharedSession},
};

pub fn run_cli(state_arc: SharedSession) -> anyhow::Result<()> {
    for line_res in io::stdin().lines() {
        let line = line_res.context("Couldn't read from stdin")?;
        let args = line.split_whitespace();

        match handle_cmd(&state_arc, args) {
            Ok(ControlFlow::Continue(())) => {}
            Ok(ControlFlow::Break(())) => break,
            Err(e) => eprintln!("! {e:#}"),
        }
    }

    Ok(())
}

fn handle_cmd<'a, I>(state_arc: &SharedSession, mut args: I) -> anyhow::Result<ControlFlow<()>>
where
    I: Iterator<Item = &'a str>,
{
    match args.next().context("No command")? {
        "step" => {
            let times = args.next().unwrap_or("1").parse::<usize>()?;

            let taken = session::write(state_arc)?.step(times);
            if taken < times {
                println!("Board emptied after {taken} generation(s)");
            }
        }

        "run" => {
            let mut state = session::write(state_arc)?;
            state.set_paused(false);

            if state.tick_interval().is_none() {
                warn!("speed is 0, the board won't advance until sped up");
            }
        }

        "pause" => {
            session::write(state_arc)?.set_paused(true);
        }

        "p" => {
            let paused = session::write(state_arc)?.toggle_pause();
            println!("Paused: {paused}");
        }

        "toggle" => {
            let row = args.next().context("missing row")?.parse::<usize>()?;
            let col = args.next().context("missing col")?.parse::<usize>()?;

            let new_state = session::write(state_arc)?.toggle_cell(Position { row, col })?;
            println!("({row}, {col}) is now {new_state:?}");
        }

        "preset" => {
            let mut state = session::write(state_arc)?;

            match args.next() {
                Some(id) => state.select_preset(id.parse::<usize>()?)?,
                None => {
                    state.next_preset()?;
                }
            }
        }

        "faster" => {
            let speed = session::write(state_arc)?.speed_up();
            println!("Speed: {speed} gen/s");
        }

        "slower" => {
            let speed = session::write(state_arc)?.speed_down();
            println!("Speed: {speed} gen/s");
        }

        "clear" => {
            session::write(state_arc)?.clear();
        }

        "reset" => {
            session::write(state_arc)?.reset();
        }

        "random" => {
            let alive_count = args
                .next()
                .context("missing alive count")?
                .parse::<usize>()?;

            session::write(state_arc)?.randomize(alive_count)?;
        }

        "show" => {
            let state = session::read(state_arc)?;
            println!("{}", render::render_grid(state.grid()));
        }

        "cells" => {
            let live_cells = session::read(state_arc)?.live_cells();
            for Position { row, col } in &live_cells {
                println!("{row} {col}");
            }
            println!("{} alive", live_cells.len());
        }

        "status" => {
            let state = session::read(state_arc)?;
            println!("{}", render::render_status(&state));
        }

        "exit" => {
            return Ok(ControlFlow::Break(()));
        }

        _ => bail!("Unknown command"),
    }

    println!("OK");
    Ok(ControlFlow::Continue(()))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, RwLock};

    use super::*;
    use crate::{config::Config, session::Session};

    fn shared_session() -> SharedSession {
        Arc::new(RwLock::new(Session::new(&Config::default()).unwrap()))
    }

    fn run(state_arc: &SharedSession, line: &str) -> anyhow::Result<ControlFlow<()>> {
        handle_cmd(state_arc, line.split_whitespace())
    }

    #[test]
    fn edit_then_step() {
        let state_arc = shared_session();

        for cell in ["toggle 5 4", "toggle 5 5", "toggle 5 6"] {
            run(&state_arc, cell).unwrap();
        }
        run(&state_arc, "step 1").unwrap();

        let state = session::read(&state_arc).unwrap();
        assert_eq!(state.generation(), 1);
        assert_eq!(
            state.live_cells(),
            vec![Position::new(4, 5), Position::new(5, 5), Position::new(6, 5)]
        );
    }

    #[test]
    fn preset_without_id_cycles() {
        let state_arc = shared_session();
        run(&state_arc, "preset").unwrap();
        assert_eq!(session::read(&state_arc).unwrap().preset_id(), 1);

        run(&state_arc, "preset 0").unwrap();
        assert_eq!(session::read(&state_arc).unwrap().preset_id(), 0);
    }

    #[test]
    fn run_and_pause_flip_the_flag() {
        let state_arc = shared_session();
        run(&state_arc, "run").unwrap();
        assert!(!session::read(&state_arc).unwrap().paused());

        assert!(run(&state_arc, "toggle 0 0").is_err());

        run(&state_arc, "pause").unwrap();
        assert!(session::read(&state_arc).unwrap().paused());

        run(&state_arc, "p").unwrap();
        assert!(!session::read(&state_arc).unwrap().paused());
    }

    #[test]
    fn bad_input_is_an_error() {
        let state_arc = shared_session();
        assert!(run(&state_arc, "").is_err());
        assert!(run(&state_arc, "dance").is_err());
        assert!(run(&state_arc, "toggle 1").is_err());
        assert!(run(&state_arc, "toggle -1 0").is_err());
        assert!(run(&state_arc, "toggle 35 0").is_err());
        assert!(run(&state_arc, "step many").is_err());
        assert!(run(&state_arc, "preset 99").is_err());
    }

    #[test]
    fn exit_breaks() {
        let state_arc = shared_session();
        assert_eq!(run(&state_arc, "exit").unwrap(), ControlFlow::Break(()));
        assert_eq!(run(&state_arc, "status").unwrap(), ControlFlow::Continue(()));
    }
}
