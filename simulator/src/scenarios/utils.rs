use std::env;
use std::fs;

use harvestmac::utils::logging;
use indicatif::{ProgressBar, ProgressStyle};

/// Creates the results directories for a scenario
pub fn create_results_directories(results_dir: &str) {
    fs::create_dir_all(format!("simulator/results/{}", results_dir))
        .expect("Failed to create results directory");
    fs::create_dir_all(format!("simulator/results/{}/data", results_dir))
        .expect("Failed to create data directory");
}

/// Sets up logging if the ENABLE_LOGS environment variable is set
pub fn setup_logging() {
    if env::var("ENABLE_LOGS").is_ok() {
        env::set_var("HARVESTMAC_LOGGING", "true");
        logging::init_logging();
    }
}

/// Creates the progress bar used by the sweep scenarios
pub fn create_progress_bar(length: usize) -> ProgressBar {
    let progress_bar = ProgressBar::new(length as u64);
    progress_bar.set_style(ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {msg}")
        .unwrap()
        .progress_chars("+>-"));
    progress_bar
}
