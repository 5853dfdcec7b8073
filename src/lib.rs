pub use log;
pub use trafficlight_signal::{ConfigError, CycleConfig, Phase, TrafficLight};
pub use trafficlight_utils as utils;

pub mod signal {
  pub use trafficlight_signal::{config, error, light, phase};
}

/// Installs the `env_logger` backend, filtered through `RUST_LOG`.
/// Later calls are no-ops.
pub fn init_logger() {
  #[cfg(feature = "debug")]
  let _ = env_logger::try_init();
}
