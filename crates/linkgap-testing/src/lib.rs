//! Testing infrastructure for linkgap tests.
//!
//! - `fixtures`: synthetic log lines at chosen offsets
//! - `world`: isolated temp directories with log and config files for CLI runs

pub mod fixtures;
pub mod world;

pub use fixtures::LogBuilder;
pub use world::TestWorld;
