// control_system/mod.rs
pub mod intersection;
pub mod traffic_light;
