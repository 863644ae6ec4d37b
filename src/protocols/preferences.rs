//! Preference tables shared by the matching protocols.
//!
//! Nodes rank channels by ascending gain (a lower gain means a better
//! success probability); channels rank nodes by descending energy, so every
//! channel shares one ordering. Rankings are index tables over the slot's
//! contender sequence and channel slice, built fresh per slot. Stable sorts
//! keep the contender/channel order on ties, which makes every rank distinct.

use crate::network::{Channel, Node};

/// For each contender (by position), the channel indices ordered by
/// ascending gain for that node
pub fn node_preferences(nodes: &[&mut Node], channels: &[Channel]) -> Vec<Vec<usize>> {
    nodes
        .iter()
        .map(|node| {
            let mut order: Vec<usize> = (0..channels.len()).collect();
            order.sort_by(|&a, &b| {
                channels[a]
                    .gain_for(node.id)
                    .total_cmp(&channels[b].gain_for(node.id))
            });
            order
        })
        .collect()
}

/// Per-contender rank of every channel in that contender's ascending-gain
/// ordering (lower rank = more preferred)
pub fn gain_ranks(nodes: &[&mut Node], channels: &[Channel]) -> Vec<Vec<usize>> {
    node_preferences(nodes, channels)
        .into_iter()
        .map(|order| {
            let mut ranks = vec![0; order.len()];
            for (rank, &channel_idx) in order.iter().enumerate() {
                ranks[channel_idx] = rank;
            }
            ranks
        })
        .collect()
}

/// Contender positions ordered by descending energy, the one ranking every
/// channel shares
pub fn energy_order(nodes: &[&mut Node]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..nodes.len()).collect();
    order.sort_by(|&a, &b| nodes[b].energy.total_cmp(&nodes[a].energy));
    order
}

/// Rank of every contender position in the shared descending-energy ordering
/// (lower rank = more preferred)
pub fn energy_ranks(nodes: &[&mut Node]) -> Vec<usize> {
    let order = energy_order(nodes);
    let mut ranks = vec![0; nodes.len()];
    for (rank, &position) in order.iter().enumerate() {
        ranks[position] = rank;
    }
    ranks
}
