//! Protocol comparison sweep.
//!
//! Runs all four allocation protocols over one shared network and rate grid
//! and saves the resulting throughput curves side by side, so the coordinated
//! protocols can be read directly against the random access baseline.

use std::fs;
use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use harvestmac::protocols::Protocol;
use harvestmac::sweep::{run_sweep, run_sweep_parallel, SweepResults};
use harvestmac::utils::logging;

use crate::config::{CompareConfig, ConfigError};
use crate::scenarios::utils;

const CONFIG_PATH: &str = "simulator/src/scenarios/config_compare.toml";
const RESULTS_DIR: &str = "sim_compare";

/// Runs every protocol in the lineup over the shared rate grid.
pub async fn run_compare_sweep() -> Result<(), ConfigError> {
    utils::create_results_directories(RESULTS_DIR);
    utils::setup_logging();

    let config = CompareConfig::load_from(CONFIG_PATH)?;
    let protocols = config.compare.build_all()?;
    let network_config = config.network.to_network_config();
    let rates = config.sweep.rates();

    // Log comparison start
    logging::log("SIMULATOR", "=== Starting Protocol Comparison ===");
    logging::log(
        "SIMULATOR",
        &format!("Start Time: {}", Local::now().format("%Y-%m-%d %H:%M:%S")),
    );
    logging::log(
        "SIMULATOR",
        &format!(
            "Network: {} nodes, {} channels",
            config.network.population,
            config.network.channels()
        ),
    );
    logging::log(
        "SIMULATOR",
        &format!(
            "Rates: {} points from {} in steps of {}",
            config.sweep.num_rates, config.sweep.rate_start, config.sweep.rate_step
        ),
    );
    logging::log(
        "SIMULATOR",
        &format!("Trial Length: {} slots per rate", config.sweep.trial_length),
    );
    logging::log("SIMULATOR", "====================================");

    println!("Running Protocol Comparison...");
    let progress_bar = utils::create_progress_bar(protocols.len());
    let start_time = Instant::now();

    // Sweep the protocols one after another so their curves share the grid;
    // within each sweep the rates still run on parallel workers when enabled
    let mut curves: Vec<(String, SweepResults)> = Vec::new();
    for protocol in protocols {
        let name = protocol.name();
        progress_bar.set_message(format!("Sweeping {}", name));
        let results = if config.sweep.parallel {
            let shared: Arc<dyn Protocol> = Arc::from(protocol);
            run_sweep_parallel(
                shared,
                &network_config,
                &rates,
                config.sweep.trial_length,
                config.sweep.seed,
            )
            .await
        } else {
            run_sweep(
                protocol.as_ref(),
                &network_config,
                &rates,
                config.sweep.trial_length,
                config.sweep.seed,
            )
        }
        .map_err(|e| ConfigError::ValidationError(format!("Sweep failed for {}: {}", name, e)))?;
        curves.push((name.to_string(), results));
        progress_bar.inc(1);
    }
    progress_bar.finish_with_message("Comparison complete");

    // Print final statistics
    logging::log("SIMULATOR", "\n=== Comparison Statistics ===");
    for (name, results) in &curves {
        let peak = results
            .points
            .iter()
            .map(|point| point.throughput)
            .fold(0.0, f64::max);
        logging::log(
            "SIMULATOR",
            &format!("{}: peak throughput {:.4} per slot", name, peak),
        );
    }
    logging::log("SIMULATOR", &format!("Elapsed: {:.2?}", start_time.elapsed()));
    logging::log("SIMULATOR", "=============================");

    save_comparison(&config, &rates, &curves)
        .await
        .map_err(ConfigError::ValidationError)?;

    logging::log(
        "SIMULATOR",
        &format!(
            "Protocol comparison finished at {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ),
    );

    Ok(())
}

/// Saves every compared curve into one JSON file keyed by protocol name
async fn save_comparison(
    config: &CompareConfig,
    rates: &[f64],
    curves: &[(String, SweepResults)],
) -> Result<(), String> {
    let throughput: serde_json::Map<String, serde_json::Value> = curves
        .iter()
        .map(|(name, results)| {
            let curve = results
                .points
                .iter()
                .map(|point| point.throughput)
                .collect::<Vec<_>>();
            (name.clone(), serde_json::json!(curve))
        })
        .collect();

    let stats = serde_json::json!({
        "parameters": {
            "network": config.network,
            "sweep": config.sweep,
            "compare": config.compare,
        },
        "results": {
            "rates": rates,
            "throughput": throughput,
        }
    });

    fs::create_dir_all(format!("simulator/results/{}/data", RESULTS_DIR))
        .expect("Failed to create results directory");

    let stats_file = format!("simulator/results/{}/data/sweep_results.json", RESULTS_DIR);
    fs::write(
        &stats_file,
        serde_json::to_string_pretty(&stats).expect("Failed to serialize stats"),
    )
    .map_err(|e| e.to_string())?;
    logging::log(
        "SIMULATOR",
        &format!("Saved comparison results to {}", stats_file),
    );

    Ok(())
}
