use crate::network::{Channel, Node};
use crate::stochastic::StochasticSource;
use crate::types::{ChannelId, NodeId};

/// Builds message-holding nodes with the given fixed energies
pub fn setup_nodes(energies: &[f64]) -> Vec<Node> {
    energies
        .iter()
        .enumerate()
        .map(|(i, &energy)| {
            let mut node = Node::new(NodeId(i), StochasticSource::unit_uniform());
            node.energy = energy;
            node.has_message = true;
            node
        })
        .collect()
}

/// Builds channels from explicit per-node gain tables
pub fn setup_channels(gain_tables: &[&[f64]]) -> Vec<Channel> {
    gain_tables
        .iter()
        .enumerate()
        .map(|(i, gains)| Channel::from_gains(ChannelId(i), gains.to_vec()))
        .collect()
}

/// The mutable contender view protocols receive from the network
pub fn contenders(nodes: &mut [Node]) -> Vec<&mut Node> {
    nodes.iter_mut().collect()
}
