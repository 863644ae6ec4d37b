// Runs the random access rate sweep
//
// The baseline with no allocation intelligence: every contending node picks
// a channel uniformly at random and transmits, with collisions carrying no
// penalty beyond the energy/gain success draw itself. The resulting curve is
// the reference the coordinated protocols are compared against.
sweep_simulation!(
    run_random_access_sweep,                              // Generated async entry point
    "Random Access",                                      // Human-readable name for logging and progress
    "sim_random_access",                                  // Directory under simulator/results
    "simulator/src/scenarios/config_random_access.toml"   // Scenario configuration file
);
