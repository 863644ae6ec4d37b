//! Central registry for all sweep scenarios in the HarvestMAC simulator.
//! Maps simulation types to their name and execution logic for easy lookup.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::interface::SimulationType;
use crate::scenarios::{
    run_all::run_all_sweeps,
    sim_compare::run_compare_sweep,
    sim_one_to_many::run_one_to_many_sweep,
    sim_one_to_one::run_one_to_one_sweep,
    sim_optimal::run_optimal_sweep,
    sim_random_access::run_random_access_sweep,
};

/// Configuration for a sweep scenario
pub struct SimulationConfig {
    pub name: &'static str,
    pub run_fn: Box<dyn Fn() -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<(), String>>>> + Send + Sync>,
}

/// Registry that holds all sweep scenarios
pub struct SimulationRegistry {
    simulations: HashMap<SimulationType, SimulationConfig>,
}

impl SimulationRegistry {
    pub fn new() -> Self {
        let mut simulations = HashMap::new();

        simulations.insert(SimulationType::RandomAccess, SimulationConfig {
            name: "Random Access Sweep",
            run_fn: Box::new(|| Box::pin(async {
                run_random_access_sweep().await
                    .map_err(|e| format!("Random access sweep failed: {}", e))
            })),
        });

        simulations.insert(SimulationType::OneToOne, SimulationConfig {
            name: "One-To-One Matching Sweep",
            run_fn: Box::new(|| Box::pin(async {
                run_one_to_one_sweep().await
                    .map_err(|e| format!("One-to-one matching sweep failed: {}", e))
            })),
        });

        simulations.insert(SimulationType::OneToMany, SimulationConfig {
            name: "One-To-Many Matching Sweep",
            run_fn: Box::new(|| Box::pin(async {
                run_one_to_many_sweep().await
                    .map_err(|e| format!("One-to-many matching sweep failed: {}", e))
            })),
        });

        simulations.insert(SimulationType::Optimal, SimulationConfig {
            name: "Optimal Mechanism Sweep",
            run_fn: Box::new(|| Box::pin(async {
                run_optimal_sweep().await
                    .map_err(|e| format!("Optimal mechanism sweep failed: {}", e))
            })),
        });

        simulations.insert(SimulationType::Compare, SimulationConfig {
            name: "Protocol Comparison Sweep",
            run_fn: Box::new(|| Box::pin(async {
                run_compare_sweep().await
                    .map_err(|e| format!("Protocol comparison sweep failed: {}", e))
            })),
        });

        simulations.insert(SimulationType::RunAll, SimulationConfig {
            name: "All Sweeps",
            run_fn: Box::new(|| Box::pin(async {
                run_all_sweeps().await
                    .map_err(|e| format!("All sweeps failed: {}", e))
            })),
        });

        Self { simulations }
    }

    pub fn get(&self, simulation_type: &SimulationType) -> Option<&SimulationConfig> {
        self.simulations.get(simulation_type)
    }
}

// Global registry instance
lazy_static::lazy_static! {
    static ref REGISTRY: Arc<Mutex<SimulationRegistry>> = Arc::new(Mutex::new(SimulationRegistry::new()));
}

/// Get a reference to the global registry
pub async fn get_registry() -> Arc<Mutex<SimulationRegistry>> {
    REGISTRY.clone()
}
