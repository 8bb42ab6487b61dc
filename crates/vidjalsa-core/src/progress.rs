//! Synthetic progress shown while the backend builds the blog.
//!
//! The backend gives no progress feedback, so the loading page ramps a
//! percentage on a fixed cadence up to a hold point and waits there until the
//! processing request resolves. A failed request never resolves the ticker,
//! leaving the percentage parked at the hold point.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Loading page timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoadingConfig {
    /// Interval between progress ticks, in milliseconds.
    pub tick_interval_ms: u32,
    /// Number of ticks needed to ramp from zero to the hold point.
    pub ramp_ticks: u32,
    /// Percentage at which the ramp stops until the backend answers.
    pub hold_percent: f64,
    /// Delay between reaching 100% and leaving the page, in milliseconds.
    pub grace_period_ms: u32,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            ramp_ticks: 110,
            hold_percent: 90.0,
            grace_period_ms: 2000,
        }
    }
}

impl LoadingConfig {
    /// Percentage added by every tick while ramping.
    #[must_use]
    pub fn increment(&self) -> f64 {
        self.hold_percent / f64::from(self.ramp_ticks.max(1))
    }
}

/// Where the loading page currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    /// Below the hold point, advancing every tick.
    Ramping,
    /// At or past the hold point, waiting for the backend.
    Holding,
    /// Backend answered; progress is 100%.
    Complete,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Progress moved to the contained value.
    Advanced(f64),
    /// Progress is parked at the contained value.
    Holding(f64),
    /// Progress is 100% and the timer should be stopped.
    Completed,
    /// The ticker already completed; nothing changed.
    Stopped,
}

impl TickOutcome {
    /// Whether the driving timer should be cleared after this tick.
    #[must_use]
    pub const fn stops_timer(&self) -> bool {
        matches!(self, Self::Completed | Self::Stopped)
    }
}

/// Progress state machine driven by a periodic timer and the backend reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTicker {
    percent: f64,
    increment: f64,
    hold_percent: f64,
    deployment_url: Option<String>,
    stopped: bool,
}

impl Default for ProgressTicker {
    fn default() -> Self {
        Self::new(&LoadingConfig::default())
    }
}

impl ProgressTicker {
    /// Create a ticker at 0%.
    #[must_use]
    pub fn new(config: &LoadingConfig) -> Self {
        Self {
            percent: 0.0,
            increment: config.increment(),
            hold_percent: config.hold_percent,
            deployment_url: None,
            stopped: false,
        }
    }

    /// Advance by one timer period.
    pub fn tick(&mut self) -> TickOutcome {
        if self.stopped {
            return TickOutcome::Stopped;
        }

        if self.percent < self.hold_percent {
            self.percent = (self.percent + self.increment).min(100.0);
            return TickOutcome::Advanced(self.percent);
        }

        if self.deployment_url.is_some() {
            self.percent = 100.0;
            self.stopped = true;
            debug!("Progress complete, stopping timer");
            return TickOutcome::Completed;
        }

        TickOutcome::Holding(self.percent)
    }

    /// Record the backend's answer and jump to 100%.
    pub fn complete(&mut self, deployment_url: impl Into<String>) {
        let deployment_url = deployment_url.into();
        info!(
            "Processing finished at {:.1}%, deployment: {}",
            self.percent, deployment_url
        );
        self.deployment_url = Some(deployment_url);
        self.percent = 100.0;
    }

    /// Current percentage in `[0, 100]`.
    #[must_use]
    pub const fn percent(&self) -> f64 {
        self.percent
    }

    /// Deployment URL returned by the backend, once known.
    #[must_use]
    pub fn deployment_url(&self) -> Option<&str> {
        self.deployment_url.as_deref()
    }

    /// Whether the backend answered and progress reached 100%.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.deployment_url.is_some() && self.percent >= 100.0
    }

    /// Whether the timer has been told to stop.
    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> LoadingPhase {
        if self.is_complete() {
            LoadingPhase::Complete
        } else if self.percent < self.hold_percent {
            LoadingPhase::Ramping
        } else {
            LoadingPhase::Holding
        }
    }
}
