// simulation_engine/mod.rs
pub mod config;
pub mod scenario;

pub use config::{ArrivalConfig, Arrivals, LightConfig, SimulationConfig};
pub use scenario::{run_simulation, Scenario};
