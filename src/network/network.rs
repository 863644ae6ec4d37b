//! The network orchestrator and slot loop.
//!
//! Owns the node population and the channel set, applies the fixed per-slot
//! order (harvest, message generation, sending) and aggregates per-trial
//! throughput for a single input rate. Configuration flags are immutable for
//! the network's lifetime; `reset` rebuilds entities without touching them.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::network::{Channel, NetworkError, Node};
use crate::protocols::Protocol;
use crate::stochastic::StochasticSource;
use crate::types::constants::DEFAULT_POPULATION;
use crate::types::{ChannelId, NodeId};

// ------------------------------------------------------------------------------------------------
// Configuration
// ------------------------------------------------------------------------------------------------

/// Immutable configuration for one network instance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Number of nodes competing for the channels
    pub population: usize,
    /// Number of shared channels
    pub num_channels: usize,
    /// Independent gain draw per node (true) or one shared draw per channel (false)
    pub per_user_gains: bool,
    /// Whether protocols see the full population each slot instead of only
    /// the nodes holding a message
    pub match_before: bool,
    /// Whether an undelivered message survives slots without a fresh arrival;
    /// when false, each slot's arrival draw overwrites the pending flag
    pub keep_alive: bool,
    /// Distribution of per-slot harvested energy
    pub energy_source: StochasticSource,
    /// Distribution of per-slot channel gains
    pub gain_source: StochasticSource,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            population: DEFAULT_POPULATION,
            num_channels: DEFAULT_POPULATION,
            per_user_gains: true,
            match_before: false,
            keep_alive: true,
            energy_source: StochasticSource::unit_uniform(),
            gain_source: StochasticSource::unit_exponential(),
        }
    }
}

impl NetworkConfig {
    /// Checks the configuration before a network is built from it.
    /// A zero channel count is a legal degenerate setup (every slot yields
    /// zero successes); a zero population is not.
    pub fn validate(&self) -> Result<(), NetworkError> {
        if self.population == 0 {
            return Err(NetworkError::EmptyPopulation);
        }
        self.energy_source.validate()?;
        self.gain_source.validate()?;
        Ok(())
    }
}

// ------------------------------------------------------------------------------------------------
// Data Structures
// ------------------------------------------------------------------------------------------------

/// Owns the node and channel populations and drives the slot lifecycle
pub struct Network {
    config: NetworkConfig,
    nodes: Vec<Node>,
    channels: Vec<Channel>,
    rng: Box<dyn RngCore + Send>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Network {
    /// Creates a network with entropy-seeded randomness
    pub fn new(config: NetworkConfig) -> Result<Self, NetworkError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a network that draws from the given generator, for reproducible trials
    pub fn with_rng<R: RngCore + Send + 'static>(
        config: NetworkConfig,
        rng: R,
    ) -> Result<Self, NetworkError> {
        config.validate()?;
        let mut network = Self {
            config,
            nodes: Vec::new(),
            channels: Vec::new(),
            rng: Box::new(rng),
        };
        network.reset();
        Ok(network)
    }

    /// Rebuilds all nodes and channels from the configuration, discarding
    /// every per-slot state. Flags and distributions are untouched.
    pub fn reset(&mut self) {
        self.nodes = (0..self.config.population)
            .map(|i| Node::new(NodeId(i), self.config.energy_source))
            .collect();
        self.channels = (0..self.config.num_channels)
            .map(|i| Channel::new(ChannelId(i), self.config.population, self.config.gain_source))
            .collect();
    }

    /// Slot step 1: every channel regenerates its gain table and every node
    /// redraws its energy
    pub fn harvest_slot(&mut self) {
        for channel in self.channels.iter_mut() {
            channel.regenerate_gains(&mut self.rng, self.config.per_user_gains);
        }
        for node in self.nodes.iter_mut() {
            node.harvest_energy(&mut self.rng);
        }
    }

    /// Slot step 2: per-node Bernoulli arrival with probability
    /// `rate / population`, combined with the pending flag according to the
    /// keep-alive setting
    pub fn generate_messages(&mut self, rate: f64) {
        let probability = (rate / self.config.population as f64).clamp(0.0, 1.0);
        for node in self.nodes.iter_mut() {
            let generated = self.rng.gen_bool(probability);
            node.has_message = if self.config.keep_alive {
                node.has_message || generated
            } else {
                generated
            };
        }
    }

    /// Slot step 3: hands the slot's contenders and the channel set to the
    /// protocol and returns the number of successful transmissions
    pub fn send_slot(&mut self, protocol: &dyn Protocol) -> usize {
        let match_before = self.config.match_before;
        let contenders: Vec<&mut Node> = self
            .nodes
            .iter_mut()
            .filter(|node| match_before || node.has_message)
            .collect();
        protocol.execute(contenders, &self.channels, &mut *self.rng)
    }

    /// Runs one full slot in the fixed order: harvest, generate, send
    pub fn run_slot(&mut self, protocol: &dyn Protocol, rate: f64) -> usize {
        self.harvest_slot();
        self.generate_messages(rate);
        self.send_slot(protocol)
    }

    /// Runs a full trial for one input rate: resets the network, runs
    /// `trial_length` slots and returns the mean successes per slot
    pub fn simulate_rate(
        &mut self,
        protocol: &dyn Protocol,
        rate: f64,
        trial_length: usize,
    ) -> Result<f64, NetworkError> {
        if trial_length == 0 {
            return Err(NetworkError::EmptyTrial);
        }
        if !rate.is_finite() || rate < 0.0 {
            return Err(NetworkError::InvalidRate(rate));
        }
        self.reset();
        let mut total_successes = 0;
        for _ in 0..trial_length {
            total_successes += self.run_slot(protocol, rate);
        }
        Ok(total_successes as f64 / trial_length as f64)
    }

    /// The immutable configuration this network was built from
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// The current node population
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The current channel set
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }
}
