//! Race participant state holder.
//!
//! A participant owns a single progress counter that is advanced one tick at a
//! time by [`RaceParticipant::run`]. The counter lives in a `watch` cell so the
//! UI can observe every tick without polling.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use super::RaceError;

/// Default upper bound on progress.
pub const DEFAULT_MAX_PROGRESS: i32 = 100;

/// Default delay between ticks.
pub const DEFAULT_PROGRESS_DELAY: Duration = Duration::from_millis(500);

/// Default amount added per tick.
pub const DEFAULT_PROGRESS_INCREMENT: i32 = 1;

/// Construction parameters for a [`RaceParticipant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipantConfig {
    /// Upper bound on progress (must be > 0)
    pub max_progress: i32,
    /// Delay between ticks
    pub progress_delay: Duration,
    /// Amount added per tick (must be > 0)
    pub progress_increment: i32,
    /// Starting progress value
    pub initial_progress: i32,
}

impl Default for ParticipantConfig {
    fn default() -> Self {
        Self {
            max_progress: DEFAULT_MAX_PROGRESS,
            progress_delay: DEFAULT_PROGRESS_DELAY,
            progress_increment: DEFAULT_PROGRESS_INCREMENT,
            initial_progress: 0,
        }
    }
}

impl ParticipantConfig {
    /// Set the progress increment.
    pub fn with_increment(mut self, progress_increment: i32) -> Self {
        self.progress_increment = progress_increment;
        self
    }

    /// Set the maximum progress.
    pub fn with_max_progress(mut self, max_progress: i32) -> Self {
        self.max_progress = max_progress;
        self
    }

    /// Set the delay between ticks.
    pub fn with_delay(mut self, progress_delay: Duration) -> Self {
        self.progress_delay = progress_delay;
        self
    }

    /// Set the starting progress.
    pub fn with_initial_progress(mut self, initial_progress: i32) -> Self {
        self.initial_progress = initial_progress;
        self
    }

    /// Check the invariants required by [`RaceParticipant::new`].
    pub fn validate(&self) -> Result<(), RaceError> {
        if self.max_progress <= 0 {
            return Err(RaceError::InvalidConfiguration(format!(
                "max_progress={}; must be > 0",
                self.max_progress
            )));
        }
        if self.progress_increment <= 0 {
            return Err(RaceError::InvalidConfiguration(format!(
                "progress_increment={}; must be > 0",
                self.progress_increment
            )));
        }
        Ok(())
    }
}

/// A simulated race participant.
///
/// Cloning yields another handle to the same participant: the session task
/// and the UI share one progress cell.
#[derive(Debug, Clone)]
pub struct RaceParticipant {
    name: Arc<str>,
    max_progress: i32,
    progress_delay: Duration,
    progress_increment: i32,
    progress: Arc<watch::Sender<i32>>,
}

impl RaceParticipant {
    /// Create a new participant.
    ///
    /// Fails with [`RaceError::InvalidConfiguration`] if `max_progress` or
    /// `progress_increment` is not positive. `initial_progress` is taken as-is.
    pub fn new(name: impl Into<String>, config: ParticipantConfig) -> Result<Self, RaceError> {
        config.validate()?;

        let (progress, _) = watch::channel(config.initial_progress);
        let name: String = name.into();

        Ok(Self {
            name: name.into(),
            max_progress: config.max_progress,
            progress_delay: config.progress_delay,
            progress_increment: config.progress_increment,
            progress: Arc::new(progress),
        })
    }

    /// Participant name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Upper bound on progress.
    pub fn max_progress(&self) -> i32 {
        self.max_progress
    }

    /// Delay between ticks.
    pub fn progress_delay(&self) -> Duration {
        self.progress_delay
    }

    /// Amount added per tick.
    pub fn progress_increment(&self) -> i32 {
        self.progress_increment
    }

    /// Current progress value.
    pub fn current_progress(&self) -> i32 {
        *self.progress.borrow()
    }

    /// Progress as a ratio of `max_progress`.
    pub fn progress_factor(&self) -> f32 {
        self.current_progress() as f32 / self.max_progress as f32
    }

    /// Whether progress has reached `max_progress`.
    pub fn is_finished(&self) -> bool {
        self.current_progress() >= self.max_progress
    }

    /// Subscribe to progress changes. Every tick and reset is published.
    pub fn subscribe(&self) -> watch::Receiver<i32> {
        self.progress.subscribe()
    }

    /// Advance progress until it reaches `max_progress`.
    ///
    /// Waits `progress_delay` before each increment. The increment is not
    /// clamped to `max_progress`, so the last tick can overshoot it when the
    /// remaining distance is not a multiple of `progress_increment`. Only the
    /// integer limit caps a tick: progress saturates at `i32::MAX`.
    ///
    /// Cancel by dropping the future (or aborting the task running it). The
    /// only await point is the delay, so a cancelled loop never applies a
    /// partial tick.
    pub async fn run(&self) {
        let mut cancel_log = CancelLog {
            participant: self,
            finished: false,
        };

        while self.current_progress() < self.max_progress {
            tokio::time::sleep(self.progress_delay).await;
            self.progress
                .send_modify(|progress| *progress = progress.saturating_add(self.progress_increment));
            tracing::trace!(
                participant = %self.name,
                progress = self.current_progress(),
                "tick"
            );
        }

        cancel_log.finished = true;
        tracing::debug!("{} finished at {}", self.name, self.current_progress());
    }

    /// Reset progress to 0, regardless of `initial_progress`.
    ///
    /// Does not stop a running loop; the caller cancels it first.
    pub fn reset(&self) {
        self.progress.send_replace(0);
    }
}

/// Logs when a [`RaceParticipant::run`] loop is dropped before finishing.
struct CancelLog<'a> {
    participant: &'a RaceParticipant,
    finished: bool,
}

impl Drop for CancelLog<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!(
                participant = %self.participant.name,
                progress = self.participant.current_progress(),
                "Participant loop cancelled"
            );
        }
    }
}
