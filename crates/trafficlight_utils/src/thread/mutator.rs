use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to a value guarded by its own mutex.
#[derive(Debug)]
pub struct Mutator<T> {
  data: Arc<Mutex<T>>,
}

impl<T> Mutator<T> {
  pub fn new(data: T) -> Self {
    Mutator {
      data: Arc::new(Mutex::new(data)),
    }
  }

  pub fn set(&self, data: T) {
    *self.get() = data;
  }

  pub fn get(&'_ self) -> MutexGuard<'_, T> {
    self.data.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Runs `f` on the value while holding the lock and returns its result.
  pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
    f(&mut self.get())
  }

  pub fn inner_clone(mutator: &Mutator<T>) -> Mutator<T> {
    Mutator {
      data: Arc::clone(&mutator.data),
    }
  }
}

impl<T: Copy> Mutator<T> {
  pub fn load(&self) -> T {
    *self.get()
  }
}

impl<T> Clone for Mutator<T> {
  fn clone(&self) -> Self {
    Mutator::inner_clone(self)
  }
}

impl<T: Default> Default for Mutator<T> {
  fn default() -> Self {
    Mutator::new(T::default())
  }
}
