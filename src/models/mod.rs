// models/mod.rs
pub mod light;
pub mod time;
