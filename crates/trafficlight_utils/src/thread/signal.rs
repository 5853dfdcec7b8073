use std::{
  sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError},
  time::Duration,
};

/// One-shot flag that threads can block on until it is raised.
///
/// Once signaled it stays signaled. Clones share the same flag.
#[derive(Clone, Default)]
pub struct Signal {
  value: Arc<(Mutex<bool>, Condvar)>,
}

impl Signal {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn signal(&self) {
    let (_, cvar) = &*self.value;
    let mut signaled = self.lock();
    *signaled = true;
    cvar.notify_all();
  }

  /// Blocks for at most `timeout`. Returns whether the signal was raised.
  pub fn wait_timeout(&self, timeout: Duration) -> bool {
    let (_, cvar) = &*self.value;
    let signaled = self.lock();
    let (signaled, _) = cvar
      .wait_timeout_while(signaled, timeout, |signaled| !*signaled)
      .unwrap_or_else(PoisonError::into_inner);
    *signaled
  }

  pub fn is_signaled(&self) -> bool {
    *self.lock()
  }

  fn lock(&self) -> MutexGuard<'_, bool> {
    let (lock, _) = &*self.value;
    lock.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

#[cfg(test)]
mod test {
  use std::{
    thread,
    time::{Duration, Instant},
  };

  use super::Signal;

  #[test]
  fn wait_timeout_returns_after_signal() {
    let signal = Signal::new();
    let thread_signal = signal.clone();

    let handle = thread::spawn(move || thread_signal.wait_timeout(Duration::from_secs(10)));

    thread::sleep(Duration::from_millis(20));
    signal.signal();

    assert!(handle.join().unwrap());
    assert!(signal.is_signaled());
  }

  #[test]
  fn wait_timeout_expires() {
    let signal = Signal::new();

    let start = Instant::now();
    assert!(!signal.wait_timeout(Duration::from_millis(20)));
    assert!(start.elapsed() >= Duration::from_millis(20));
    assert!(!signal.is_signaled());
  }

  #[test]
  fn stays_signaled() {
    let signal = Signal::new();
    signal.signal();

    assert!(signal.wait_timeout(Duration::ZERO));
    assert!(signal.wait_timeout(Duration::from_secs(10)));
  }
}
