/// Default number of nodes in the network population
pub const DEFAULT_POPULATION: usize = 10;

/// Default number of slots simulated per trial
pub const DEFAULT_TRIAL_LENGTH: usize = 200;

/// Default number of nodes a single receiver can serve in the one-to-many protocol
pub const DEFAULT_RECEIVER_CAPACITY: usize = 3;
