// Runs the optimal mechanism rate sweep
//
// Myerson-style allocation: each round the node with the highest non-negative
// virtual value wins the cheapest remaining channel, and the auction stops as
// soon as the best virtual value goes negative. The virtual value source
// (energy or success probability) is set in the scenario configuration.
sweep_simulation!(
    run_optimal_sweep,                                  // Generated async entry point
    "Optimal Mechanism",                                // Human-readable name for logging and progress
    "sim_optimal",                                      // Directory under simulator/results
    "simulator/src/scenarios/config_optimal.toml"       // Scenario configuration file
);
