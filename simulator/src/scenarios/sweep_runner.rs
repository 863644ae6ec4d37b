use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use harvestmac::sweep::{run_sweep, run_sweep_parallel, SweepError, SweepResults};
use harvestmac::utils::logging;
use harvestmac::Protocol;

use crate::config::{Config, ConfigError};
use crate::results::SweepOutcome;
use crate::scenarios::utils;

/// Generic sweep runner that eliminates duplication across sweep scenarios.
/// Each scenario is one protocol over one rate grid; the scenario only
/// supplies its name, results directory, and configuration file.
pub struct SweepRunner {
    sweep_name: String,
    results_dir: String,
    config_path: String,
}

impl SweepRunner {
    pub fn new(sweep_name: &str, results_dir: &str, config_path: &str) -> Self {
        Self {
            sweep_name: sweep_name.to_string(),
            results_dir: results_dir.to_string(),
            config_path: config_path.to_string(),
        }
    }

    /// Runs the complete sweep: load configuration, evaluate the rate grid,
    /// save the curve
    pub async fn run(&self) -> Result<(), ConfigError> {
        // Create results directory if it doesn't exist
        utils::create_results_directories(&self.results_dir);

        // Setup logging
        utils::setup_logging();

        // Load sweep configuration
        let config = Config::load_from(&self.config_path)?;
        let protocol = config.protocol.build()?;
        let protocol_name = protocol.name();
        let network_config = config.network.to_network_config();
        let rates = config.sweep.rates();

        // Log sweep start
        self.log_sweep_start(&config, protocol_name);

        // Display sweep name before progress bar
        println!("Running Sweep: {}", self.sweep_name);

        let progress_bar = utils::create_progress_bar(rates.len());
        let start_time = Instant::now();

        let results = if config.sweep.parallel {
            // One blocking worker per rate; the bar jumps when they all join
            let shared: Arc<dyn Protocol> = Arc::from(protocol);
            let results = run_sweep_parallel(
                shared,
                &network_config,
                &rates,
                config.sweep.trial_length,
                config.sweep.seed,
            )
            .await
            .map_err(|e| self.error_context(&e))?;
            progress_bar.inc(rates.len() as u64);
            results
        } else {
            // Rate by rate, ticking the bar per finished trial. Per-rate
            // seeds are derived the same way the parallel driver derives
            // them, so both modes replay identically under one seed
            let mut results = SweepResults::default();
            for (index, &rate) in rates.iter().enumerate() {
                logging::log(
                    "SIMULATOR",
                    &format!("Running trial {}/{} at rate {}", index + 1, rates.len(), rate),
                );
                let rate_seed = config.sweep.seed.map(|seed| seed.wrapping_add(index as u64));
                let point = run_sweep(
                    protocol.as_ref(),
                    &network_config,
                    &[rate],
                    config.sweep.trial_length,
                    rate_seed,
                )
                .map_err(|e| self.error_context(&e))?;
                results.points.extend(point.points);

                progress_bar.inc(1);
                progress_bar.set_message(format!(
                    "Trial {}/{} at rate {}",
                    index + 1,
                    rates.len(),
                    rate
                ));
            }
            results
        };

        progress_bar.finish_with_message(format!("{} rates evaluated", rates.len()));
        println!("Sweep simulation complete");

        // Save results
        let outcome = SweepOutcome {
            protocol: protocol_name.to_string(),
            config,
            results,
            start_time,
        };
        outcome
            .save(&self.results_dir)
            .await
            .map_err(ConfigError::ValidationError)?;

        logging::log("SIMULATOR", "=== Sweep Simulation Complete ===");
        logging::log(
            "SIMULATOR",
            &format!("Rates evaluated: {}", outcome.results.len()),
        );

        Ok(())
    }

    /// Logs the start of the sweep
    fn log_sweep_start(&self, config: &Config, protocol_name: &str) {
        let start_time = Local::now();
        logging::log("SIMULATOR", &format!("=== Sweep {} Simulation ===", self.sweep_name));
        logging::log("SIMULATOR", &format!("Start Time: {}", start_time.format("%Y-%m-%d %H:%M:%S")));
        logging::log("SIMULATOR", &format!("Protocol: {}", protocol_name));
        logging::log("SIMULATOR", &format!("Population: {}", config.network.population));
        logging::log("SIMULATOR", &format!("Channels: {}", config.network.channels()));
        logging::log("SIMULATOR", &format!("Trial Length: {} slots", config.sweep.trial_length));
        logging::log("SIMULATOR", &format!(
            "Rates: {} from {} step {}",
            config.sweep.num_rates, config.sweep.rate_start, config.sweep.rate_step
        ));
        logging::log("SIMULATOR", &format!("Parallel: {}", config.sweep.parallel));
        if let Some(seed) = config.sweep.seed {
            logging::log("SIMULATOR", &format!("Seed: {}", seed));
        }
        logging::log("SIMULATOR", "================================");
    }

    fn error_context(&self, error: &SweepError) -> ConfigError {
        ConfigError::ValidationError(format!("Sweep '{}' failed: {}", self.sweep_name, error))
    }
}
