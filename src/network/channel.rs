//! A shared transmission channel.
//!
//! Each channel holds one gain value per node for the current slot, indexed
//! by node id. The whole table is regenerated every slot, either with an
//! independent draw per node or with a single draw shared by all nodes.

use rand::Rng;

use crate::stochastic::StochasticSource;
use crate::types::{ChannelId, NodeId};

// ------------------------------------------------------------------------------------------------
// Data Structures
// ------------------------------------------------------------------------------------------------

/// Per-channel state for one simulation trial
#[derive(Debug, Clone)]
pub struct Channel {
    /// Unique identifier among the shared channels
    pub id: ChannelId,
    /// Current-slot gain per node, indexed by node id
    pub gains: Vec<f64>,
    /// The distribution fresh gains are drawn from each slot
    pub gain_source: StochasticSource,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Channel {
    /// Creates a channel with a zeroed gain table sized for the population
    pub fn new(id: ChannelId, population: usize, gain_source: StochasticSource) -> Self {
        Self {
            id,
            gains: vec![0.0; population],
            gain_source,
        }
    }

    /// Creates a channel with a fixed gain table, for hand-built slot states
    pub fn from_gains(id: ChannelId, gains: Vec<f64>) -> Self {
        Self {
            id,
            gains,
            gain_source: StochasticSource::unit_exponential(),
        }
    }

    /// Replaces the whole gain table with fresh draws. Per-user mode draws
    /// independently per node; shared mode applies one draw to every node.
    pub fn regenerate_gains<R: Rng + ?Sized>(&mut self, rng: &mut R, per_user: bool) {
        if per_user {
            for gain in self.gains.iter_mut() {
                *gain = self.gain_source.sample(rng);
            }
        } else {
            let shared = self.gain_source.sample(rng);
            for gain in self.gains.iter_mut() {
                *gain = shared;
            }
        }
    }

    /// The current-slot gain this channel presents to the given node
    pub fn gain_for(&self, node_id: NodeId) -> f64 {
        self.gains[node_id.0]
    }
}
