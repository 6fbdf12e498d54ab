//! Simulation driver: seeds a shop, advances it day by day and prints it.

pub mod config;
pub mod fixture;
pub mod render;

pub use config::{OutputFormat, SimulationConfig};
