pub mod communication;
pub mod control_system;
pub mod error;
pub mod global_variables;
pub mod models;
pub mod monitoring;
pub mod simulation_engine;

pub use communication::messages::LightEvent;
pub use control_system::intersection::{Intersection, LightId};
pub use control_system::traffic_light::TrafficLight;
pub use models::light::LightColour;
pub use models::time::Time;
