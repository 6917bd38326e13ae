mod args;
mod commands;
pub mod config;
mod logging;
pub mod report;

pub use args::{Cli, LogLevel, OutputFormat};
pub use commands::run;
