pub mod types;
pub mod stochastic;
pub mod network;
pub mod protocols;
pub mod sweep;
pub mod utils;

pub use network::{Network, NetworkConfig};
pub use protocols::Protocol;
pub use sweep::{run_sweep, run_sweep_parallel, SweepResults};
