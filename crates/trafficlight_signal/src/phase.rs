use std::fmt;

/// Phase of a traffic light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
  #[default]
  Red,
  Green,
}

impl Phase {
  pub fn toggled(self) -> Self {
    match self {
      Phase::Red => Phase::Green,
      Phase::Green => Phase::Red,
    }
  }

  #[inline]
  pub fn is_green(self) -> bool {
    self == Phase::Green
  }
}

impl fmt::Display for Phase {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Phase::Red => f.write_str("red"),
      Phase::Green => f.write_str("green"),
    }
  }
}
