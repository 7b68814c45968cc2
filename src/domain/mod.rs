pub mod historical_pool;
pub mod simulation_results;
pub mod throughput;
