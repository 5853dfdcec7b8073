use std::time::Duration;

use rand::Rng;

use crate::error::ConfigError;

/// Timing of the phase cycle.
///
/// Each phase lasts a random whole number of milliseconds drawn uniformly
/// from `min_phase_ms..=max_phase_ms`. The cycle thread checks for an expired
/// phase (and for a stop request) every `poll_interval`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleConfig {
  pub min_phase_ms: u64,
  pub max_phase_ms: u64,
  pub poll_interval: Duration,
  /// Draw a new duration after every toggle instead of once per cycle thread.
  pub redraw_each_phase: bool,
}

impl CycleConfig {
  pub fn set_phase_range(mut self, min_phase_ms: u64, max_phase_ms: u64) -> Self {
    self.min_phase_ms = min_phase_ms;
    self.max_phase_ms = max_phase_ms;
    self
  }

  pub fn set_poll_interval(mut self, poll_interval: Duration) -> Self {
    self.poll_interval = poll_interval;
    self
  }

  pub fn set_redraw_each_phase(mut self, redraw_each_phase: bool) -> Self {
    self.redraw_each_phase = redraw_each_phase;
    self
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.min_phase_ms > self.max_phase_ms {
      return Err(ConfigError::InvalidRange {
        min: self.min_phase_ms,
        max: self.max_phase_ms,
      });
    }
    if self.poll_interval.is_zero() {
      return Err(ConfigError::ZeroPollInterval);
    }
    Ok(())
  }

  pub(crate) fn draw_phase_duration(&self, rng: &mut impl Rng) -> Duration {
    Duration::from_millis(rng.random_range(self.min_phase_ms..=self.max_phase_ms))
  }
}

impl Default for CycleConfig {
  fn default() -> Self {
    Self {
      min_phase_ms: 4000,
      max_phase_ms: 6000,
      poll_interval: Duration::from_millis(1),
      redraw_each_phase: true,
    }
  }
}
