// Runs the one-to-one matching rate sweep
//
// Contending nodes and channels are matched through deferred acceptance with
// at most one node per channel, so throughput saturates at the channel count.
// The proposer side is set in the scenario configuration.
sweep_simulation!(
    run_one_to_one_sweep,                               // Generated async entry point
    "One-To-One Matching",                              // Human-readable name for logging and progress
    "sim_one_to_one",                                   // Directory under simulator/results
    "simulator/src/scenarios/config_one_to_one.toml"    // Scenario configuration file
);
