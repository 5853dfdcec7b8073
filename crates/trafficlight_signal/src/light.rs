use std::{
  sync::atomic::{AtomicBool, Ordering},
  thread::{self, JoinHandle},
  time::{Duration, Instant},
};

#[cfg(feature = "debug")]
use log::trace;
use log::{debug, error, warn};
use trafficlight_utils::thread::{MessageQueue, Mutator, Signal};

use crate::{config::CycleConfig, error::ConfigError, phase::Phase};

const CYCLE_THREAD_NAME: &str = "traffic-light-cycle";

/// A single traffic light toggling between red and green on a randomized timer.
///
/// The light starts red. [`TrafficLight::simulate`] spawns the one background
/// thread that flips the phase and announces every new phase on an internal
/// [`MessageQueue`]. [`TrafficLight::wait_for_green`] consumes those
/// announcements, so each published green releases exactly one waiter.
///
/// The phase lock and the queue lock are never held at the same time.
pub struct TrafficLight {
  config: CycleConfig,
  pub(crate) phase: Mutator<Phase>,
  pub(crate) queue: MessageQueue<Phase>,
  stop_signal: Signal,
  started: AtomicBool,
  pub(crate) cycle_thread: Mutator<Option<JoinHandle<()>>>,
}

impl TrafficLight {
  pub fn new() -> Self {
    Self::from_valid_config(CycleConfig::default())
  }

  pub fn with_config(config: CycleConfig) -> Result<Self, ConfigError> {
    config.validate()?;
    Ok(Self::from_valid_config(config))
  }

  fn from_valid_config(config: CycleConfig) -> Self {
    Self {
      config,
      phase: Mutator::new(Phase::Red),
      queue: MessageQueue::new(),
      stop_signal: Signal::new(),
      started: AtomicBool::new(false),
      cycle_thread: Mutator::new(None),
    }
  }

  pub fn config(&self) -> &CycleConfig {
    &self.config
  }

  /// Starts the phase cycle on a background thread.
  ///
  /// Only the first call has an effect. Repeated calls, and calls after
  /// [`TrafficLight::stop`], are ignored.
  pub fn simulate(&self) {
    if self.stop_signal.is_signaled() {
      debug!("Traffic light is stopped, not starting cycle");
      return;
    }

    if self
      .started
      .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
      .is_err()
    {
      warn!("Traffic light cycle is already running");
      return;
    }

    // held until the handle is stored so a concurrent stop() joins it
    let mut cycle_thread = self.cycle_thread.get();
    if self.stop_signal.is_signaled() {
      debug!("Traffic light was stopped while starting, not starting cycle");
      return;
    }

    let phase = Mutator::inner_clone(&self.phase);
    let queue = self.queue.clone();
    let stop_signal = self.stop_signal.clone();
    let config = self.config.clone();

    let spawned = thread::Builder::new()
      .name(CYCLE_THREAD_NAME.into())
      .spawn(move || cycle_through_phases(config, phase, queue, stop_signal));

    match spawned {
      Ok(handle) => {
        debug!("Traffic light cycle started");
        *cycle_thread = Some(handle);
      }
      Err(err) => {
        error!("Failed to spawn traffic light cycle: {}", err);
        self.started.store(false, Ordering::Release);
      }
    }
  }

  /// Stops the cycle thread and waits for it to exit. The light keeps its
  /// last phase and cannot be restarted.
  pub fn stop(&self) {
    self.stop_signal.signal();

    let handle = self.cycle_thread.get().take();
    if let Some(handle) = handle {
      if handle.join().is_err() {
        error!("Traffic light cycle panicked");
      } else {
        debug!("Traffic light cycle stopped");
      }
    }
  }

  pub fn is_running(&self) -> bool {
    !self.stop_signal.is_signaled()
      && self
        .cycle_thread
        .get()
        .as_ref()
        .is_some_and(|handle| !handle.is_finished())
  }

  pub fn get_current_phase(&self) -> Phase {
    self.phase.load()
  }

  /// Blocks until a green phase is announced.
  ///
  /// Red announcements received meanwhile are discarded. A green announced
  /// before this call that no other waiter consumed still counts, so this may
  /// return right away. Never returns if the cycle is not running and no
  /// green is queued.
  pub fn wait_for_green(&self) {
    loop {
      if self.queue.receive().is_green() {
        return;
      }

      #[cfg(feature = "debug")]
      trace!("Discarding red while waiting for green");
    }
  }

  /// Like [`TrafficLight::wait_for_green`] but gives up after `timeout`.
  /// Returns whether green was observed.
  pub fn wait_for_green_timeout(&self, timeout: Duration) -> bool {
    let start = Instant::now();

    loop {
      let remaining = timeout.saturating_sub(start.elapsed());
      match self.queue.receive_timeout(remaining) {
        Some(phase) if phase.is_green() => return true,
        Some(_) => {}
        None => return false,
      }
    }
  }
}

impl Default for TrafficLight {
  fn default() -> Self {
    Self::new()
  }
}

impl Drop for TrafficLight {
  fn drop(&mut self) {
    self.stop();
  }
}

fn cycle_through_phases(
  config: CycleConfig,
  phase: Mutator<Phase>,
  queue: MessageQueue<Phase>,
  stop_signal: Signal,
) {
  let mut rng = rand::rng();
  let mut phase_duration = config.draw_phase_duration(&mut rng);
  let mut last_toggle = Instant::now();

  debug!("First phase lasts {:?}", phase_duration);

  while !stop_signal.wait_timeout(config.poll_interval) {
    if last_toggle.elapsed() < phase_duration {
      continue;
    }

    let next = phase.update(|current| {
      *current = current.toggled();
      *current
    });
    queue.send(next);
    last_toggle = Instant::now();

    if config.redraw_each_phase {
      phase_duration = config.draw_phase_duration(&mut rng);
    }

    debug!("Traffic light switched to {} for {:?}", next, phase_duration);
  }
}
