//! Allocation protocols.
//!
//! A protocol maps one slot's state (the contending nodes and the channel
//! set) to a transmission schedule and carries out the scheduled sends. Four
//! strategies are provided: uncoordinated random access, one-to-one and
//! capacitated one-to-many deferred acceptance, and a virtual-valuation
//! auction that re-prices nodes round by round.

use rand::RngCore;
use thiserror::Error;

use crate::network::{Channel, Node};

pub mod one_to_many;
pub mod one_to_one;
pub mod optimal;
pub mod preferences;
pub mod random_access;

pub use one_to_many::OneToManyMatching;
pub use one_to_one::OneToOneMatching;
pub use optimal::OptimalMechanism;
pub use random_access::RandomAccess;

#[cfg(test)]
mod tests;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Receiver capacity must be at least 1")]
    ZeroCapacity,
}

/// One slot's allocation strategy.
///
/// `execute` receives the contenders for the slot (only message-holders by
/// default, the whole population under match-before), decides who may
/// transmit on which channel, attempts those transmissions through
/// [`Node::send_data`] and returns the number of successes. A node without a
/// pending message contributes zero to any attempt.
pub trait Protocol: Send + Sync {
    /// Allocates channels to the slot's contenders and attempts the
    /// scheduled transmissions
    fn execute(&self, nodes: Vec<&mut Node>, channels: &[Channel], rng: &mut dyn RngCore) -> usize;

    /// Short label for results and logs
    fn name(&self) -> &'static str;
}
