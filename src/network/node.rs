//! A single energy-harvesting node.
//!
//! Nodes hold the per-slot mutable state (current energy, pending-message
//! flag) and own the transmission-success primitive. Protocols never rederive
//! the success draw; `send_data` is the only place an outcome is decided.

use rand::Rng;

use crate::stochastic::StochasticSource;
use crate::types::NodeId;

// ------------------------------------------------------------------------------------------------
// Data Structures
// ------------------------------------------------------------------------------------------------

/// Per-node mutable state for one simulation trial
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier within the population
    pub id: NodeId,
    /// Energy harvested for the current slot
    pub energy: f64,
    /// Whether the node holds an undelivered message
    pub has_message: bool,
    /// The distribution fresh energy is drawn from each slot
    pub energy_source: StochasticSource,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Node {
    /// Creates a node with no energy and no pending message
    pub fn new(id: NodeId, energy_source: StochasticSource) -> Self {
        Self {
            id,
            energy: 0.0,
            has_message: false,
            energy_source,
        }
    }

    /// Redraws the node's energy for the current slot, overwriting the previous value
    pub fn harvest_energy<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.energy = self.energy_source.sample(rng);
    }

    /// Probability that a transmission over a channel with the given gain succeeds,
    /// `min(1, energy * e^(-gain))`, clamped into [0, 1] for alternate distributions
    /// whose support dips below zero
    pub fn success_probability(&self, gain: f64) -> f64 {
        (self.energy * (-gain).exp()).clamp(0.0, 1.0)
    }

    /// Attempts one transmission over a channel with the given gain.
    ///
    /// Returns false immediately when no message is pending (a no-op, not a
    /// failure). Otherwise the attempt succeeds with `success_probability`;
    /// success clears the pending flag, failure leaves it set.
    pub fn send_data<R: Rng + ?Sized>(&mut self, gain: f64, rng: &mut R) -> bool {
        if !self.has_message {
            return false;
        }
        let success = rng.gen_bool(self.success_probability(gain));
        if success {
            self.has_message = false;
        }
        success
    }
}
