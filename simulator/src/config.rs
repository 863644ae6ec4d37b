//! Configuration loader and validator for the HarvestMAC simulator.
//! Handles parsing, validation, and access to sweep configuration files.

use std::fs;

use harvestmac::network::NetworkConfig;
use harvestmac::protocols::{
    OneToManyMatching, OneToOneMatching, OptimalMechanism, Protocol, RandomAccess,
};
use harvestmac::stochastic::StochasticSource;
use harvestmac::types::constants::{DEFAULT_RECEIVER_CAPACITY, DEFAULT_TRIAL_LENGTH};
use harvestmac::types::{ProposerMode, ValueMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ------------------------------------------------------------------------------------------------
// Main Configuration Structs
// ------------------------------------------------------------------------------------------------

/// Main configuration struct for a single-protocol rate sweep.
///
/// This struct contains everything needed to run one sweep scenario: the
/// network shape and its stochastic sources, the rate grid and trial length,
/// and the protocol under test with its knobs.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Network settings including population, channels, and slot-mode flags
    pub network: NetworkSettings,
    /// Sweep settings including the rate grid, trial length, and seeding
    pub sweep: SweepSettings,
    /// The protocol under test
    pub protocol: ProtocolSettings,
}

/// Configuration for the comparison scenario, which runs every protocol over
/// one shared rate grid.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CompareConfig {
    /// Network settings shared by every protocol
    pub network: NetworkSettings,
    /// Sweep settings shared by every protocol
    pub sweep: SweepSettings,
    /// Per-protocol knobs for the compared lineup
    #[serde(default)]
    pub compare: CompareSettings,
}

/// Configuration for the simulated network.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NetworkSettings {
    /// Number of nodes in the population
    pub population: usize,
    /// Number of shared channels; defaults to the population size
    pub num_channels: Option<usize>,
    /// Whether each node gets an independent gain draw per channel, or one
    /// shared draw applies to the whole channel
    #[serde(default = "default_true")]
    pub per_user_gains: bool,
    /// Whether protocols see the full population instead of only the nodes
    /// holding a message
    #[serde(default)]
    pub match_before: bool,
    /// Whether an undelivered message survives the next arrival draw
    #[serde(default = "default_true")]
    pub keep_alive: bool,
    /// Distribution harvested energy is drawn from each slot
    #[serde(default)]
    pub energy_source: StochasticSource,
    /// Distribution channel gains are drawn from each slot
    #[serde(default = "default_gain_source")]
    pub gain_source: StochasticSource,
}

/// Configuration for the rate grid and trial execution.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SweepSettings {
    /// First input rate of the grid
    pub rate_start: f64,
    /// Increment between consecutive rates
    pub rate_step: f64,
    /// Number of rates to evaluate
    pub num_rates: usize,
    /// Slots per trial
    #[serde(default = "default_trial_length")]
    pub trial_length: usize,
    /// Whether rate trials run concurrently on blocking workers
    #[serde(default = "default_true")]
    pub parallel: bool,
    /// Optional seed for reproducible sweeps; per-rate seeds are derived
    #[serde(default)]
    pub seed: Option<u64>,
}

/// The protocol under test, with its per-protocol knobs.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProtocolSettings {
    RandomAccess,
    OneToOne {
        #[serde(default)]
        proposer: ProposerMode,
    },
    OneToMany {
        #[serde(default = "default_capacity")]
        capacity: usize,
    },
    Optimal {
        #[serde(default)]
        value: ValueMode,
    },
}

/// Knobs for the protocols in the comparison lineup.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct CompareSettings {
    /// Proposer side for the one-to-one matching
    pub proposer: ProposerMode,
    /// Per-channel partner bound for the one-to-many matching
    pub capacity: usize,
    /// Value mode for the optimal mechanism
    pub value: ValueMode,
}

fn default_true() -> bool {
    true
}

fn default_gain_source() -> StochasticSource {
    StochasticSource::unit_exponential()
}

fn default_trial_length() -> usize {
    DEFAULT_TRIAL_LENGTH
}

fn default_capacity() -> usize {
    DEFAULT_RECEIVER_CAPACITY
}

impl Default for CompareSettings {
    fn default() -> Self {
        Self {
            proposer: ProposerMode::default(),
            capacity: DEFAULT_RECEIVER_CAPACITY,
            value: ValueMode::default(),
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Error Types and Validation
// ------------------------------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Validation shared by the single-protocol and comparison configurations
fn validate_common_fields(
    network: &NetworkSettings,
    sweep: &SweepSettings,
) -> Result<(), ConfigError> {
    if network.population == 0 {
        return Err(ConfigError::ValidationError("Population must be positive".into()));
    }
    network
        .energy_source
        .validate()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    network
        .gain_source
        .validate()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    if sweep.num_rates == 0 {
        return Err(ConfigError::ValidationError("Sweep needs at least one rate".into()));
    }
    if sweep.trial_length == 0 {
        return Err(ConfigError::ValidationError("Trial length must be positive".into()));
    }
    if !sweep.rate_start.is_finite() || sweep.rate_start < 0.0 {
        return Err(ConfigError::ValidationError("Rate start must be finite and non-negative".into()));
    }
    if !sweep.rate_step.is_finite() || sweep.rate_step < 0.0 {
        return Err(ConfigError::ValidationError("Rate step must be finite and non-negative".into()));
    }
    Ok(())
}

// ------------------------------------------------------------------------------------------------
// Configuration Implementation Methods
// ------------------------------------------------------------------------------------------------

impl Config {
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_common_fields(&self.network, &self.sweep)?;
        if let ProtocolSettings::OneToMany { capacity } = self.protocol {
            if capacity == 0 {
                return Err(ConfigError::ValidationError("Receiver capacity must be positive".into()));
            }
        }
        Ok(())
    }
}

impl CompareConfig {
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        let config: CompareConfig = toml::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_common_fields(&self.network, &self.sweep)?;
        if self.compare.capacity == 0 {
            return Err(ConfigError::ValidationError("Receiver capacity must be positive".into()));
        }
        Ok(())
    }
}

impl NetworkSettings {
    /// The number of channels, defaulting to one per node
    pub fn channels(&self) -> usize {
        self.num_channels.unwrap_or(self.population)
    }

    pub fn to_network_config(&self) -> NetworkConfig {
        NetworkConfig {
            population: self.population,
            num_channels: self.channels(),
            per_user_gains: self.per_user_gains,
            match_before: self.match_before,
            keep_alive: self.keep_alive,
            energy_source: self.energy_source,
            gain_source: self.gain_source,
        }
    }
}

impl SweepSettings {
    /// The evaluated rate grid, ascending from `rate_start` in `rate_step`
    /// increments
    pub fn rates(&self) -> Vec<f64> {
        (0..self.num_rates)
            .map(|i| self.rate_start + self.rate_step * i as f64)
            .collect()
    }
}

impl ProtocolSettings {
    /// Builds the configured protocol instance
    pub fn build(&self) -> Result<Box<dyn Protocol>, ConfigError> {
        match *self {
            ProtocolSettings::RandomAccess => Ok(Box::new(RandomAccess)),
            ProtocolSettings::OneToOne { proposer } => Ok(Box::new(OneToOneMatching::new(proposer))),
            ProtocolSettings::OneToMany { capacity } => OneToManyMatching::new(capacity)
                .map(|protocol| Box::new(protocol) as Box<dyn Protocol>)
                .map_err(|e| ConfigError::ValidationError(e.to_string())),
            ProtocolSettings::Optimal { value } => Ok(Box::new(OptimalMechanism::new(value))),
        }
    }
}

impl CompareSettings {
    /// Builds every protocol in the comparison lineup
    pub fn build_all(&self) -> Result<Vec<Box<dyn Protocol>>, ConfigError> {
        let one_to_many = OneToManyMatching::new(self.capacity)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        Ok(vec![
            Box::new(RandomAccess),
            Box::new(OneToOneMatching::new(self.proposer)),
            Box::new(one_to_many),
            Box::new(OptimalMechanism::new(self.value)),
        ])
    }
}
