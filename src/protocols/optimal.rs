//! Sequential virtual-valuation auction.
//!
//! Each round, every waiting node's private value (its energy, or its best
//! success probability over the currently free channels) is marked up into a
//! Myerson virtual value `v - (1 - F(v)) / f(v)`. The node with the maximum
//! virtual value wins the round, provided that maximum is non-negative, with
//! ties broken uniformly at random among the maximizers. The winner takes its
//! lowest-gain free channel and both pools shrink, so the order-statistic
//! forms in probability mode are re-evaluated against a smaller `n` each
//! round. The auction stops when nodes or channels run out or no non-negative
//! virtual value remains; unserved nodes stay unserved for the slot.

use rand::{Rng, RngCore};

use crate::network::{Channel, Node};
use crate::protocols::Protocol;
use crate::types::ValueMode;

/// The mechanism-design protocol, pricing nodes by energy or by achievable
/// success probability
#[derive(Debug, Clone, Copy)]
pub struct OptimalMechanism {
    /// What a node's private value is
    pub value: ValueMode,
}

impl OptimalMechanism {
    pub fn new(value: ValueMode) -> Self {
        Self { value }
    }

    /// A node's private value this round, given the currently free channels
    pub fn node_value(&self, node: &Node, channels: &[Channel], free: &[usize]) -> f64 {
        match self.value {
            ValueMode::Energy => node.energy,
            ValueMode::Probability => free
                .iter()
                .map(|&c| node.success_probability(channels[c].gain_for(node.id)))
                .fold(0.0, f64::max),
        }
    }

    /// Myerson virtual value `v - (1 - F(v)) / f(v)` for one node against the
    /// current free-channel pool. Rounds where the density vanishes can never
    /// win, so those collapse to negative infinity.
    pub fn virtual_value(&self, node: &Node, channels: &[Channel], free: &[usize]) -> f64 {
        let v = self.node_value(node, channels, free);
        let density = self.pdf(v, node, free.len());
        if density <= 0.0 {
            return f64::NEG_INFINITY;
        }
        v - (1.0 - self.cdf(v, node, free.len())) / density
    }

    /// Value-distribution cdf. Energy mode evaluates the node's own energy
    /// source; probability mode uses the closed order-statistic form over the
    /// `n` free channels, degenerating to the plain uniform treatment at
    /// `n = 1` where that form is undefined.
    fn cdf(&self, value: f64, node: &Node, n: usize) -> f64 {
        match self.value {
            ValueMode::Energy => node.energy_source.cdf(value),
            ValueMode::Probability => {
                if n <= 1 {
                    value
                } else {
                    (1.0 - value.powi(n as i32 - 1)) * n as f64 / (n as f64 - 1.0)
                }
            }
        }
    }

    /// Value-distribution pdf, with the same `n = 1` fallback as the cdf
    fn pdf(&self, value: f64, node: &Node, n: usize) -> f64 {
        match self.value {
            ValueMode::Energy => node.energy_source.pdf(value),
            ValueMode::Probability => {
                if n <= 1 {
                    1.0
                } else {
                    (n as f64 * value - value.powi(n as i32)) / (n as f64 - 1.0)
                }
            }
        }
    }

    /// Runs the round-by-round auction over one slot's state. Returns the
    /// assigned (contender position, channel index) pairs in assignment
    /// order.
    pub fn allocate(
        &self,
        nodes: &[&mut Node],
        channels: &[Channel],
        rng: &mut dyn RngCore,
    ) -> Vec<(usize, usize)> {
        let mut waiting: Vec<usize> = (0..nodes.len()).collect();
        let mut free: Vec<usize> = (0..channels.len()).collect();
        let mut assignments = Vec::new();

        while !waiting.is_empty() && !free.is_empty() {
            let virtual_values: Vec<f64> = waiting
                .iter()
                .map(|&p| self.virtual_value(&*nodes[p], channels, &free))
                .collect();
            let max_value = virtual_values
                .iter()
                .copied()
                .max_by(f64::total_cmp)
                .expect("waiting pool is non-empty");
            if max_value < 0.0 {
                break;
            }

            let maximizers: Vec<usize> = (0..waiting.len())
                .filter(|&slot| virtual_values[slot] == max_value)
                .collect();
            let winner_slot = maximizers[rng.gen_range(0..maximizers.len())];
            let winner = waiting.swap_remove(winner_slot);

            let winner_id = nodes[winner].id;
            let best_slot = free
                .iter()
                .enumerate()
                .min_by(|&(_, &a), &(_, &b)| {
                    channels[a]
                        .gain_for(winner_id)
                        .total_cmp(&channels[b].gain_for(winner_id))
                })
                .map(|(slot, _)| slot)
                .expect("free channel pool is non-empty");
            let channel_idx = free.remove(best_slot);

            assignments.push((winner, channel_idx));
        }

        assignments
    }
}

impl Default for OptimalMechanism {
    fn default() -> Self {
        Self {
            value: ValueMode::Energy,
        }
    }
}

impl Protocol for OptimalMechanism {
    fn execute(&self, mut nodes: Vec<&mut Node>, channels: &[Channel], rng: &mut dyn RngCore) -> usize {
        let pairs = self.allocate(&nodes, channels, &mut *rng);
        let mut successes = 0;
        for (node_pos, channel_idx) in pairs {
            let gain = channels[channel_idx].gain_for(nodes[node_pos].id);
            if nodes[node_pos].send_data(gain, &mut *rng) {
                successes += 1;
            }
        }
        successes
    }

    fn name(&self) -> &'static str {
        "optimal"
    }
}
