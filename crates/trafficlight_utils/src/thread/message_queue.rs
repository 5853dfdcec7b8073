use std::{
  collections::VecDeque,
  sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError},
  time::Duration,
};

#[cfg(feature = "debug")]
use log::trace;

/// Unbounded FIFO queue handing values from sending to receiving threads.
///
/// Clones are handles to the same queue. `send` never blocks, `receive` blocks
/// until a value is available. Every sent value is received exactly once.
/// There is no backpressure: a queue nobody receives from grows without bound.
pub struct MessageQueue<T> {
  inner: Arc<(Mutex<VecDeque<T>>, Condvar)>,
}

impl<T> MessageQueue<T> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends `message` and wakes at most one blocked receiver.
  pub fn send(&self, message: T) {
    let (_, cvar) = &*self.inner;
    let _queued = {
      let mut queue = self.lock();
      queue.push_back(message);
      queue.len()
    };
    #[cfg(feature = "debug")]
    trace!("Message sent, {} queued", _queued);
    cvar.notify_one();
  }

  /// Removes and returns the oldest message, blocking until one is sent.
  pub fn receive(&self) -> T {
    let (_, cvar) = &*self.inner;
    let queue = self.lock();
    let mut queue = cvar
      .wait_while(queue, |queue| queue.is_empty())
      .unwrap_or_else(PoisonError::into_inner);
    match queue.pop_front() {
      Some(message) => message,
      None => unreachable!("woke on an empty queue"),
    }
  }

  /// Like [`MessageQueue::receive`] but gives up after `timeout`.
  pub fn receive_timeout(&self, timeout: Duration) -> Option<T> {
    let (_, cvar) = &*self.inner;
    let queue = self.lock();
    let (mut queue, _) = cvar
      .wait_timeout_while(queue, timeout, |queue| queue.is_empty())
      .unwrap_or_else(PoisonError::into_inner);
    queue.pop_front()
  }

  pub fn try_receive(&self) -> Option<T> {
    self.lock().pop_front()
  }

  pub fn len(&self) -> usize {
    self.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.lock().is_empty()
  }

  fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
    let (lock, _) = &*self.inner;
    lock.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl<T> Clone for MessageQueue<T> {
  fn clone(&self) -> Self {
    Self {
      inner: Arc::clone(&self.inner),
    }
  }
}

impl<T> Default for MessageQueue<T> {
  fn default() -> Self {
    Self {
      inner: Arc::new((Mutex::new(VecDeque::new()), Condvar::new())),
    }
  }
}
