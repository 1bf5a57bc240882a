//! Race coordinator.
//!
//! Owns both participants for a session and drives their progress loops from a
//! single race session task. Pausing and resetting abort that task and join it
//! before returning, so no tick can land after the call completes.

use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::participant::RaceParticipant;

/// Coordinator run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RaceState {
    /// Not running (initial state, paused, or finished)
    #[default]
    Idle,
    /// Both participant loops are active
    Running,
}

impl RaceState {
    fn from_running(running: bool) -> Self {
        if running {
            RaceState::Running
        } else {
            RaceState::Idle
        }
    }
}

/// Drives a pair of participants through start, pause and reset.
pub struct RaceCoordinator {
    /// Runtime the session task is spawned on
    runtime: Handle,
    /// First participant
    player_one: RaceParticipant,
    /// Second participant
    player_two: RaceParticipant,
    /// Observable running flag, shared with the session task
    running: Arc<watch::Sender<bool>>,
    /// Active (or last) race session
    session: Option<JoinHandle<()>>,
}

impl RaceCoordinator {
    /// Create a coordinator that spawns its session on `runtime`.
    pub fn new(runtime: Handle, player_one: RaceParticipant, player_two: RaceParticipant) -> Self {
        let (running, _) = watch::channel(false);

        Self {
            runtime,
            player_one,
            player_two,
            running: Arc::new(running),
            session: None,
        }
    }

    /// First participant.
    pub fn player_one(&self) -> &RaceParticipant {
        &self.player_one
    }

    /// Second participant.
    pub fn player_two(&self) -> &RaceParticipant {
        &self.player_two
    }

    /// Both participants, in order.
    pub fn participants(&self) -> [&RaceParticipant; 2] {
        [&self.player_one, &self.player_two]
    }

    /// Whether a race session is running.
    pub fn is_running(&self) -> bool {
        *self.running.borrow()
    }

    /// Current run state.
    pub fn state(&self) -> RaceState {
        RaceState::from_running(self.is_running())
    }

    /// Subscribe to changes of the running flag.
    pub fn subscribe_running(&self) -> watch::Receiver<bool> {
        self.running.subscribe()
    }

    /// Start (`true`) or pause (`false`) the race.
    ///
    /// Starting while running and pausing while idle are no-ops. Pausing
    /// cancels both loops and waits for the session to wind down; progress is
    /// kept so a later start resumes from it.
    pub async fn toggle_run(&mut self, running: bool) {
        match (self.state(), running) {
            (RaceState::Idle, true) => self.start(),
            (RaceState::Running, false) => {
                self.cancel_session().await;
                self.running.send_replace(false);
                tracing::info!(
                    "Race paused at {} / {}",
                    self.player_one.current_progress(),
                    self.player_two.current_progress()
                );
            }
            _ => {}
        }
    }

    /// Cancel any running session, zero both participants and go idle.
    pub async fn reset(&mut self) {
        self.cancel_session().await;
        self.player_one.reset();
        self.player_two.reset();
        self.running.send_replace(false);
        tracing::info!("Race reset");
    }

    /// Spawn the race session.
    fn start(&mut self) {
        // Any previous session has finished on its own or been joined already.
        self.session.take();
        self.running.send_replace(true);

        let player_one = self.player_one.clone();
        let player_two = self.player_two.clone();
        let running = self.running.clone();

        tracing::info!("Race started: {} vs {}", player_one.name(), player_two.name());

        self.session = Some(self.runtime.spawn(drive_session(
            async move {
                tokio::join!(player_one.run(), player_two.run());
            },
            running,
        )));
    }

    /// Abort the session task and wait for it to stop.
    async fn cancel_session(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };

        session.abort();
        match session.await {
            Ok(()) => {}
            Err(e) if e.is_cancelled() => tracing::debug!("Race session cancelled"),
            Err(e) => tracing::error!("Race session failed: {}", e),
        }
    }
}

/// Run a race session body, then return to Idle.
///
/// A panic in either participant loop is logged and still ends in Idle. An
/// aborted session never reaches the end; the canceller clears the flag.
async fn drive_session<F>(race: F, running: Arc<watch::Sender<bool>>)
where
    F: Future<Output = ()>,
{
    match AssertUnwindSafe(race).catch_unwind().await {
        Ok(()) => tracing::info!("Race finished"),
        Err(_) => tracing::error!("Race session failed, returning to idle"),
    }
    running.send_replace(false);
}

impl Drop for RaceCoordinator {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            session.abort();
        }
    }
}
