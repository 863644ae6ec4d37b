use std::fs;
use std::time::Instant;

use harvestmac::sweep::SweepResults;
use harvestmac::utils::logging;

use crate::config::Config;

/// The outcome of one protocol sweep, paired with the configuration that
/// produced it.
#[derive(Debug)]
pub struct SweepOutcome {
    /// Label of the protocol that ran, as reported by the protocol itself
    pub protocol: String,
    /// The configuration the sweep ran under
    pub config: Config,
    /// The evaluated throughput curve
    pub results: SweepResults,
    /// When the sweep started, for elapsed-time reporting
    pub start_time: Instant,
}

impl SweepOutcome {
    /// Saves the sweep outcome under `simulator/results/<results_dir>/data/`
    pub async fn save(&self, results_dir: &str) -> Result<(), String> {
        // Print final statistics
        let peak = self
            .results
            .points
            .iter()
            .map(|point| point.throughput)
            .fold(0.0, f64::max);
        logging::log("SIMULATOR", "\n=== Sweep Statistics ===");
        logging::log("SIMULATOR", &format!("Protocol: {}", self.protocol));
        logging::log("SIMULATOR", &format!("Rates Evaluated: {}", self.results.len()));
        logging::log("SIMULATOR", &format!("Peak Throughput: {:.4} per slot", peak));
        logging::log(
            "SIMULATOR",
            &format!("Elapsed: {:.2?}", self.start_time.elapsed()),
        );
        logging::log("SIMULATOR", "===========================");

        // Save the curve and its parameters to a JSON file
        let stats = serde_json::json!({
            "parameters": {
                "protocol": self.config.protocol,
                "network": self.config.network,
                "sweep": self.config.sweep,
            },
            "results": {
                "protocol": self.protocol,
                "rates": self.results.rates(),
                "throughput": self.results.points.iter().map(|point| point.throughput).collect::<Vec<_>>(),
            }
        });

        fs::create_dir_all(format!("simulator/results/{}/data", results_dir))
            .expect("Failed to create results directory");

        let stats_file = format!("simulator/results/{}/data/sweep_results.json", results_dir);
        fs::write(
            &stats_file,
            serde_json::to_string_pretty(&stats).expect("Failed to serialize stats"),
        )
        .map_err(|e| e.to_string())?;
        logging::log("SIMULATOR", &format!("Saved sweep results to {}", stats_file));

        Ok(())
    }
}
