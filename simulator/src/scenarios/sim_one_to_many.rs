// Runs the one-to-many matching rate sweep
//
// Same deferred acceptance as one-to-one, but each channel accepts up to a
// fixed quota of nodes per slot. The quota comes from the scenario
// configuration and lifts the saturation point to channels * capacity.
sweep_simulation!(
    run_one_to_many_sweep,                              // Generated async entry point
    "One-To-Many Matching",                             // Human-readable name for logging and progress
    "sim_one_to_many",                                  // Directory under simulator/results
    "simulator/src/scenarios/config_one_to_many.toml"   // Scenario configuration file
);
