// monitoring/mod.rs
pub mod narrator;
