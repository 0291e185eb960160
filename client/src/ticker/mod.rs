use std::{
    sync::mpsc::{self, RecvTimeoutError, Sender},
    thread::{self, JoinHandle},
    time::Duration,
};

use tracing::{error, info, warn};

use crate::session::{self, SharedSession};

/// How often a session at speed zero is polled for a speed change.
const IDLE_INTERVAL: Duration = Duration::from_millis(100);

/// Drives a shared session from a background thread at the session's own speed.
pub struct TickerHost {
    stop_sender: Sender<()>,
    handle: JoinHandle<()>,
}

impl TickerHost {
    pub fn start(state_arc: SharedSession) -> Self {
        let (stop_sender, stop_receiver) = mpsc::channel();

        let handle = thread::spawn(move || {
            info!("ticker started");

            loop {
                let interval = match session::write(&state_arc) {
                    Ok(mut state) => {
                        state.tick();
                        state.tick_interval().unwrap_or(IDLE_INTERVAL)
                    }
                    Err(e) => {
                        error!("{e:#}");
                        break;
                    }
                };

                match stop_receiver.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }

            info!("ticker stopped");
        });

        Self {
            stop_sender,
            handle,
        }
    }

    pub fn stop(self) {
        let _ = self.stop_sender.send(());

        if self.handle.join().is_err() {
            warn!("ticker thread panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, RwLock},
        time::Instant,
    };

    use super::*;
    use crate::{config::Config, session::Session};

    const DEADLINE: Duration = Duration::from_secs(10);

    fn blinker(paused: bool) -> SharedSession {
        let mut session = Session::new(&Config {
            preset: 1,
            speed_tier: 7,
            ..Config::default()
        })
        .unwrap();
        session.set_paused(paused);

        Arc::new(RwLock::new(session))
    }

    /// Polls until the session reaches `generation` or the deadline passes.
    fn wait_for_generation(state_arc: &SharedSession, generation: u64) -> u64 {
        let start = Instant::now();
        loop {
            let current = session::read(state_arc).unwrap().generation();
            if current >= generation || start.elapsed() > DEADLINE {
                return current;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn ticker_advances_running_session_until_stopped() {
        let state_arc = blinker(false);
        let ticker = TickerHost::start(state_arc.clone());

        let generation = wait_for_generation(&state_arc, 2);
        ticker.stop();
        assert!(generation >= 2, "generation = {generation}");

        // The thread is joined, nothing can tick anymore.
        let stopped_at = session::read(&state_arc).unwrap().generation();
        thread::sleep(Duration::from_millis(50));
        assert_eq!(session::read(&state_arc).unwrap().generation(), stopped_at);
    }

    #[test]
    fn ticker_waits_while_paused() {
        let state_arc = blinker(true);
        let ticker = TickerHost::start(state_arc.clone());

        thread::sleep(Duration::from_millis(50));
        assert_eq!(session::read(&state_arc).unwrap().generation(), 0);

        session::write(&state_arc).unwrap().set_paused(false);
        let generation = wait_for_generation(&state_arc, 1);
        ticker.stop();

        assert!(generation >= 1, "generation = {generation}");
    }
}
