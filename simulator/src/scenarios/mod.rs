#[macro_use]
pub mod sweep_macro;

pub mod sim_random_access;
pub mod sim_one_to_one;
pub mod sim_one_to_many;
pub mod sim_optimal;
pub mod sim_compare;
pub mod run_all;
pub mod sweep_runner;
pub mod utils;
