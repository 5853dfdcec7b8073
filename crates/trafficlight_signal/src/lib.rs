pub use config::CycleConfig;
pub use error::ConfigError;
pub use light::TrafficLight;
pub use phase::Phase;

pub mod config;
pub mod error;
pub mod light;
pub mod phase;
