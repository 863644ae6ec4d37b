//! Runs every sweep scenario back to back.
//!
//! Useful for regenerating the full set of result files after a change to
//! the protocols or the slot loop.

use std::time::Instant;

use harvestmac::utils::logging;

use crate::config::ConfigError;
use crate::scenarios::sim_compare::run_compare_sweep;
use crate::scenarios::sim_one_to_many::run_one_to_many_sweep;
use crate::scenarios::sim_one_to_one::run_one_to_one_sweep;
use crate::scenarios::sim_optimal::run_optimal_sweep;
use crate::scenarios::sim_random_access::run_random_access_sweep;

/// Runs the four protocol sweeps and the comparison, one after another
pub async fn run_all_sweeps() -> Result<(), ConfigError> {
    let start_time = Instant::now();
    println!("Running all sweeps...\n");

    run_random_access_sweep().await?;
    run_one_to_one_sweep().await?;
    run_one_to_many_sweep().await?;
    run_optimal_sweep().await?;
    run_compare_sweep().await?;

    logging::log(
        "SIMULATOR",
        &format!("All sweeps completed in {:.2?}", start_time.elapsed()),
    );
    println!("\nAll sweeps completed in {:.2?}", start_time.elapsed());
    Ok(())
}
