//! Network entities and the slot loop.
//!
//! A `Network` owns the node population and the shared channels, drives the
//! per-slot lifecycle (harvest, message generation, sending) and runs full
//! trials for a single input rate. Allocation decisions are delegated to a
//! [`Protocol`](crate::protocols::Protocol) each slot.

use thiserror::Error;

use crate::stochastic::DistributionError;

pub mod channel;
pub mod network;
pub mod node;

pub use channel::Channel;
pub use network::{Network, NetworkConfig};
pub use node::Node;


#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Population must be at least 1")]
    EmptyPopulation,
    #[error("Trial length must be at least 1 slot")]
    EmptyTrial,
    #[error("Input rate must be finite and non-negative, got {0}")]
    InvalidRate(f64),
    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),
}
