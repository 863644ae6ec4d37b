//! One-to-one deferred acceptance.
//!
//! Gale-Shapley matching with one channel per node and one node per channel.
//! Either side can propose: nodes walk their ascending-gain channel lists, or
//! channels walk the shared descending-energy node ordering. A matched
//! receiver trades up only for a strictly better-ranked proposer, so
//! rejections are permanent and each proposer's walk never revisits a
//! receiver. Proposers that exhaust their list stay permanently unmatched,
//! which leaves exactly `max(0, proposers - receivers)` of them free at
//! termination.

use std::collections::VecDeque;

use rand::RngCore;

use crate::network::{Channel, Node};
use crate::protocols::{preferences, Protocol};
use crate::types::ProposerMode;

/// One-to-one stable matching with a configurable proposer side
#[derive(Debug, Clone, Copy)]
pub struct OneToOneMatching {
    /// Which side proposes in the deferred-acceptance rounds
    pub proposer: ProposerMode,
}

impl OneToOneMatching {
    pub fn new(proposer: ProposerMode) -> Self {
        Self { proposer }
    }

    /// Runs deferred acceptance over one slot's state. Returns the matched
    /// (contender position, channel index) pairs in contender order,
    /// regardless of which side proposed.
    pub fn stable_matching(&self, nodes: &[&mut Node], channels: &[Channel]) -> Vec<(usize, usize)> {
        if nodes.is_empty() || channels.is_empty() {
            return Vec::new();
        }
        match self.proposer {
            ProposerMode::Node => nodes_propose(nodes, channels),
            ProposerMode::Channel => channels_propose(nodes, channels),
        }
    }
}

impl Protocol for OneToOneMatching {
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
        "one_to_one"
    }
}

/// Nodes propose down their ascending-gain lists; channels hold at most one
/// node and trade up by the shared energy ranking
fn nodes_propose(nodes: &[&mut Node], channels: &[Channel]) -> Vec<(usize, usize)> {
    let prefs = preferences::node_preferences(nodes, channels);
    let ranks = preferences::energy_ranks(nodes);

    // engaged: channel -> contender position, matched: the reverse view
    let mut engaged: Vec<Option<usize>> = vec![None; channels.len()];
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

        match engaged[c] {
            None => {
                engaged[c] = Some(p);
                matched[p] = Some(c);
            }
            Some(current) => {
                if ranks[p] < ranks[current] {
                    engaged[c] = Some(p);
                    matched[p] = Some(c);
                    matched[current] = None;
                    free.push_back(current);
                } else {
                    free.push_back(p);
                }
            }
        }
    }

    matched
        .iter()
        .enumerate()
        .filter_map(|(node_pos, channel_idx)| channel_idx.map(|c| (node_pos, c)))
        .collect()
}

/// Channels propose down the shared descending-energy ordering; nodes hold at
/// most one channel and trade up by their own ascending-gain ranking
fn channels_propose(nodes: &[&mut Node], channels: &[Channel]) -> Vec<(usize, usize)> {
    let order = preferences::energy_order(nodes);
    let ranks = preferences::gain_ranks(nodes, channels);

    // engaged: contender position -> channel, matched: the reverse view
    let mut engaged: Vec<Option<usize>> = vec![None; nodes.len()];
    let mut matched: Vec<Option<usize>> = vec![None; channels.len()];
    let mut next_choice = vec![0usize; channels.len()];
    let mut free: VecDeque<usize> = (0..channels.len()).collect();

    while let Some(c) = free.pop_front() {
        if next_choice[c] >= order.len() {
            continue;
        }
        let p = order[next_choice[c]];
        next_choice[c] += 1;

        match engaged[p] {
            None => {
                engaged[p] = Some(c);
                matched[c] = Some(p);
            }
            Some(current) => {
                if ranks[p][c] < ranks[p][current] {
                    engaged[p] = Some(c);
                    matched[c] = Some(p);
                    matched[current] = None;
                    free.push_back(current);
                } else {
                    free.push_back(c);
                }
            }
        }
    }

    engaged
        .iter()
        .enumerate()
        .filter_map(|(node_pos, channel_idx)| channel_idx.map(|c| (node_pos, c)))
        .collect()
}
