// communication/mod.rs
pub mod messages;
