//! Repaint scheduling.
//!
//! One scheduler per mounted instance. It owns nothing but its own state, so
//! shutting it down deterministically cancels the pending deadline; a tick
//! that was due at shutdown time never fires.

use std::time::Duration;

/// Frame interval for the continuous cadence, in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 33;

/// How often a strategy wants to be repainted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Repaint every frame interval.
    Continuous,
    /// Repaint once immediately, then on every wall-clock second boundary.
    SecondAligned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scheduled { deadline_ms: u64 },
    Stopped,
}

/// Scheduling state machine for one mounted renderer.
///
/// A new scheduler is immediately due, so the first frame paints without
/// waiting. After each render, [`Scheduler::mark_rendered`] arms the next
/// deadline for its cadence. [`Scheduler::shutdown`] is terminal.
#[derive(Debug)]
pub struct Scheduler {
    cadence: Cadence,
    state: State,
}

impl Scheduler {
    pub fn new(cadence: Cadence) -> Self {
        Self {
            cadence,
            state: State::Scheduled { deadline_ms: 0 },
        }
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    /// Whether a repaint should happen now.
    pub fn is_due(&self, now_ms: u64) -> bool {
        match self.state {
            State::Scheduled { deadline_ms } => now_ms >= deadline_ms,
            State::Stopped => false,
        }
    }

    /// Time remaining until the pending deadline; the event-poll timeout.
    pub fn time_until_due(&self, now_ms: u64) -> Duration {
        match self.state {
            State::Scheduled { deadline_ms } => {
                Duration::from_millis(deadline_ms.saturating_sub(now_ms))
            }
            State::Stopped => Duration::MAX,
        }
    }

    /// Arm the next deadline after a completed render.
    ///
    /// The second-aligned cadence always targets the next wall-second
    /// boundary, so the displayed seconds digit cannot drift even when a
    /// render lands a few milliseconds late.
    pub fn mark_rendered(&mut self, now_ms: u64) {
        if let State::Scheduled { deadline_ms } = &mut self.state {
            *deadline_ms = match self.cadence {
                Cadence::Continuous => now_ms + FRAME_INTERVAL_MS,
                Cadence::SecondAligned => now_ms + (1000 - now_ms % 1000),
            };
        }
    }

    /// Request one out-of-band repaint (resize) without changing cadence.
    pub fn request_immediate(&mut self, now_ms: u64) {
        if let State::Scheduled { deadline_ms } = &mut self.state {
            *deadline_ms = now_ms;
        }
    }

    /// Tear down. No deadline fires after this, pending or not.
    pub fn shutdown(&mut self) {
        self.state = State::Stopped;
    }

    pub fn is_stopped(&self) -> bool {
        self.state == State::Stopped
    }
}
