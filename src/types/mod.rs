use serde::{Deserialize, Serialize};
use std::fmt;

pub mod constants;

/// A unique identifier for a node in the network population
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// A unique identifier for a shared channel
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChannelId(pub usize);

/// Which side proposes in the one-to-one deferred-acceptance matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposerMode {
    /// Nodes propose to channels
    Node,
    /// Channels propose to nodes
    Channel,
}

/// How the optimal selling mechanism prices a node's private value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueMode {
    /// The node's harvested energy is its value
    Energy,
    /// The node's best achievable success probability over the free channels is its value
    Probability,
}

impl Default for ProposerMode {
    fn default() -> Self {
        ProposerMode::Node
    }
}

impl Default for ValueMode {
    fn default() -> Self {
        ValueMode::Energy
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "channel-{}", self.0)
    }
}

impl fmt::Display for ProposerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProposerMode::Node => write!(f, "node"),
            ProposerMode::Channel => write!(f, "channel"),
        }
    }
}

impl fmt::Display for ValueMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueMode::Energy => write!(f, "energy"),
            ValueMode::Probability => write!(f, "probability"),
        }
    }
}
