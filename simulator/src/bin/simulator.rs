use std::fs;

use simulator::interface::SimulatorInterface;

// ------------------------------------------------------------------------------------------------
// Main
// ------------------------------------------------------------------------------------------------

/// Entry point that hands control to the interactive scenario menu
#[tokio::main]
async fn main() -> Result<(), String> {
    // Create results directory if it doesn't exist
    fs::create_dir_all("simulator/results").expect("Failed to create results directory");

    SimulatorInterface::new().run().await
}
