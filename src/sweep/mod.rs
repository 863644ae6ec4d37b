//! Rate-sweep orchestration.
//!
//! Runs an independent fixed-length trial per input rate and collects the
//! mean per-slot throughput into a curve. Rates never share network state:
//! the sequential driver resets a single network between rates, the parallel
//! driver gives every rate its own freshly built network on a blocking
//! worker. An optional seed makes either driver reproducible; the parallel
//! driver derives one seed per rate from it.

use std::sync::Arc;

use futures::future::join_all;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use thiserror::Error;

use crate::network::{Network, NetworkConfig, NetworkError};
use crate::protocols::Protocol;


// ------------------------------------------------------------------------------------------------
// Error Types
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
    #[error("Sweep worker for rate {0} failed: {1}")]
    Worker(f64, String),
}

// ------------------------------------------------------------------------------------------------
// Data Structures
// ------------------------------------------------------------------------------------------------

/// One evaluated point of a throughput curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatePoint {
    /// Input message rate the trial ran at
    pub rate: f64,
    /// Mean successful transmissions per slot
    pub throughput: f64,
}

/// A throughput-vs-rate curve, in the order the rates were requested
#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepResults {
    pub points: Vec<RatePoint>,
}

impl SweepResults {
    /// Throughput at an exact requested rate, if the sweep evaluated it
    pub fn throughput_at(&self, rate: f64) -> Option<f64> {
        self.points
            .iter()
            .find(|point| point.rate == rate)
            .map(|point| point.throughput)
    }

    /// The evaluated rates, in request order
    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.rate).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ------------------------------------------------------------------------------------------------
// Sweep Drivers
// ------------------------------------------------------------------------------------------------

/// Runs one trial per rate on a single network, rate by rate. A seed makes
/// the whole sweep reproducible.
pub fn run_sweep(
    protocol: &dyn Protocol,
    config: &NetworkConfig,
    rates: &[f64],
    trial_length: usize,
    seed: Option<u64>,
) -> Result<SweepResults, SweepError> {
    let mut network = match seed {
        Some(seed) => Network::with_rng(config.clone(), StdRng::seed_from_u64(seed))?,
        None => Network::new(config.clone())?,
    };
    let mut points = Vec::with_capacity(rates.len());
    for &rate in rates {
        let throughput = network.simulate_rate(protocol, rate, trial_length)?;
        tracing::debug!(
            "Sweep trial finished: protocol={} rate={} throughput={:.4}",
            protocol.name(),
            rate,
            throughput
        );
        points.push(RatePoint { rate, throughput });
    }
    Ok(SweepResults { points })
}

/// Runs the rate trials concurrently, one blocking worker and one private
/// network per rate. Results come back in request order regardless of
/// completion order. A seed is stretched into one derived seed per rate.
pub async fn run_sweep_parallel(
    protocol: Arc<dyn Protocol>,
    config: &NetworkConfig,
    rates: &[f64],
    trial_length: usize,
    seed: Option<u64>,
) -> Result<SweepResults, SweepError> {
    let mut handles = Vec::with_capacity(rates.len());
    for (index, &rate) in rates.iter().enumerate() {
        let protocol = Arc::clone(&protocol);
        let config = config.clone();
        let rate_seed = seed.map(|seed| seed.wrapping_add(index as u64));
        handles.push(tokio::task::spawn_blocking(
            move || -> Result<RatePoint, SweepError> {
                let mut network = match rate_seed {
                    Some(seed) => Network::with_rng(config, StdRng::seed_from_u64(seed))?,
                    None => Network::new(config)?,
                };
                let throughput = network.simulate_rate(protocol.as_ref(), rate, trial_length)?;
                Ok(RatePoint { rate, throughput })
            },
        ));
    }

    let mut points = Vec::with_capacity(rates.len());
    for (joined, &rate) in join_all(handles).await.into_iter().zip(rates) {
        match joined {
            Ok(result) => points.push(result?),
            Err(join_error) => return Err(SweepError::Worker(rate, join_error.to_string())),
        }
    }
    tracing::debug!("Parallel sweep finished: {} rates", points.len());
    Ok(SweepResults { points })
}
