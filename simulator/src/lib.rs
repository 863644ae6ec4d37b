pub mod config;
pub mod interface;
pub mod registry;
pub mod results;
pub mod scenarios;

pub use config::{Config, ConfigError};
pub use results::SweepOutcome;
