//! Stochastic sources for per-slot draws.
//!
//! Harvested energy and channel gains are redrawn every slot from a named
//! distribution with closed-form cdf/pdf. Parameters are validated when a
//! source is built from configuration, before any network is constructed.

use rand::distributions::Distribution;
use rand::Rng;
use rand_distr::Exp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

// ------------------------------------------------------------------------------------------------
// Error Types
// ------------------------------------------------------------------------------------------------

/// Errors from malformed distribution parameters
#[derive(Debug, Error)]
pub enum DistributionError {
    #[error("Invalid uniform support: low={low}, high={high}")]
    InvalidSupport { low: f64, high: f64 },
    #[error("Invalid exponential rate: {0}")]
    InvalidRate(f64),
}

// ------------------------------------------------------------------------------------------------
// Data Structures
// ------------------------------------------------------------------------------------------------

/// A distribution that network state is drawn from each slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StochasticSource {
    /// Uniform draw over [low, high)
    Uniform { low: f64, high: f64 },
    /// Exponential draw with the given rate (mean 1/rate)
    Exponential { rate: f64 },
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl StochasticSource {
    /// Creates a uniform source over [low, high)
    pub fn uniform(low: f64, high: f64) -> Result<Self, DistributionError> {
        let source = StochasticSource::Uniform { low, high };
        source.validate()?;
        Ok(source)
    }

    /// Creates an exponential source with the given rate
    pub fn exponential(rate: f64) -> Result<Self, DistributionError> {
        let source = StochasticSource::Exponential { rate };
        source.validate()?;
        Ok(source)
    }

    /// The standard uniform source over [0, 1)
    pub fn unit_uniform() -> Self {
        StochasticSource::Uniform { low: 0.0, high: 1.0 }
    }

    /// The standard exponential source with rate 1
    pub fn unit_exponential() -> Self {
        StochasticSource::Exponential { rate: 1.0 }
    }

    /// Checks that the distribution parameters are well-formed
    pub fn validate(&self) -> Result<(), DistributionError> {
        match *self {
            StochasticSource::Uniform { low, high } => {
                if !low.is_finite() || !high.is_finite() || low >= high {
                    return Err(DistributionError::InvalidSupport { low, high });
                }
            }
            StochasticSource::Exponential { rate } => {
                if !rate.is_finite() || rate <= 0.0 {
                    return Err(DistributionError::InvalidRate(rate));
                }
            }
        }
        Ok(())
    }

    /// Draws a single sample
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            StochasticSource::Uniform { low, high } => rng.gen_range(low..high),
            StochasticSource::Exponential { rate } => {
                let exp = Exp::new(rate).expect("Exponential rate validated at construction");
                exp.sample(rng)
            }
        }
    }

    /// Draws `n` independent samples
    pub fn sample_many<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.sample(rng)).collect()
    }

    /// Cumulative distribution function, clamped to [0, 1] at the support edges
    pub fn cdf(&self, x: f64) -> f64 {
        match *self {
            StochasticSource::Uniform { low, high } => {
                if x <= low {
                    0.0
                } else if x >= high {
                    1.0
                } else {
                    (x - low) / (high - low)
                }
            }
            StochasticSource::Exponential { rate } => {
                if x <= 0.0 {
                    0.0
                } else {
                    1.0 - (-rate * x).exp()
                }
            }
        }
    }

    /// Probability density function, zero outside the support
    pub fn pdf(&self, x: f64) -> f64 {
        match *self {
            StochasticSource::Uniform { low, high } => {
                if x < low || x > high {
                    0.0
                } else {
                    1.0 / (high - low)
                }
            }
            StochasticSource::Exponential { rate } => {
                if x < 0.0 {
                    0.0
                } else {
                    rate * (-rate * x).exp()
                }
            }
        }
    }
}

impl Default for StochasticSource {
    fn default() -> Self {
        StochasticSource::unit_uniform()
    }
}
