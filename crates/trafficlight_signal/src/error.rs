use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
  #[error("Minimum phase duration {min}ms is greater than maximum {max}ms")]
  InvalidRange { min: u64, max: u64 },
  #[error("Poll interval must not be zero")]
  ZeroPollInterval,
}
