//! Capacitated one-to-many deferred acceptance.
//!
//! Nodes propose down their ascending-gain channel lists; a channel absorbs
//! up to `capacity` nodes. A full channel compares each new proposer against
//! its worst-ranked current partner (ranks are distinct, so the worst partner
//! is unique) and swaps only for a strictly better rank, freeing the
//! displaced partner. Proposers that run out of channels to try stay
//! permanently unmatched, so the algorithm terminates even when the
//! contenders outnumber the total channel capacity.

use std::collections::VecDeque;

use rand::RngCore;

use crate::network::{Channel, Node};
use crate::protocols::{preferences, Protocol, ProtocolError};
use crate::types::constants::DEFAULT_RECEIVER_CAPACITY;

/// One-to-many stable matching with a per-channel partner bound
#[derive(Debug, Clone, Copy)]
pub struct OneToManyMatching {
    /// Upper bound on simultaneous partners per channel
    pub capacity: usize,
}

impl OneToManyMatching {
    pub fn new(capacity: usize) -> Result<Self, ProtocolError> {
        if capacity == 0 {
            return Err(ProtocolError::ZeroCapacity);
        }
        Ok(Self { capacity })
    }

    /// Runs capacitated deferred acceptance over one slot's state. Returns
    /// the matched (contender position, channel index) pairs in contender
    /// order.
    pub fn stable_matching(&self, nodes: &[&mut Node], channels: &[Channel]) -> Vec<(usize, usize)> {
        if nodes.is_empty() || channels.is_empty() {
            return Vec::new();
        }
        let prefs = preferences::node_preferences(nodes, channels);
        let ranks = preferences::energy_ranks(nodes);

        let mut partners: Vec<Vec<usize>> = vec![Vec::new(); channels.len()];
        let mut matched: Vec<Option<usize>> = vec![None; nodes.len()];
        let mut next_choice = vec![0usize; nodes.len()];
        let mut free: VecDeque<usize> = (0..nodes.len()).collect();

        while let Some(p) = free.pop_front() {
            if next_choice[p] >= prefs[p].len() {
                // rejected everywhere, permanently unmatched
                continue;
            }
            let c = prefs[p][next_choice[p]];
            next_choice[p] += 1;

            if partners[c].len() < self.capacity {
                partners[c].push(p);
                matched[p] = Some(c);
                continue;
            }

            let (worst_slot, worst) = partners[c]
                .iter()
                .copied()
                .enumerate()
                .max_by_key(|&(_, partner)| ranks[partner])
                .expect("full channel holds at least one partner");
            if ranks[p] < ranks[worst] {
                partners[c][worst_slot] = p;
                matched[p] = Some(c);
                matched[worst] = None;
                free.push_back(worst);
            } else {
                free.push_back(p);
            }
        }

        matched
            .iter()
            .enumerate()
            .filter_map(|(node_pos, channel_idx)| channel_idx.map(|c| (node_pos, c)))
            .collect()
    }
}

impl Default for OneToManyMatching {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_RECEIVER_CAPACITY,
        }
    }
}

impl Protocol for OneToManyMatching {
    fn execute(&self, mut nodes: Vec<&mut Node>, channels: &[Channel], rng: &mut dyn RngCore) -> usize {
        let pairs = self.stable_matching(&nodes, channels);
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
        "one_to_many"
    }
}
