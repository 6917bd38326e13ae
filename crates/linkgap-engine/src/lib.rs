// Engine - parsing, gap detection and classification
// Sits between the raw line source and the CLI presentation layer

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod detector;
pub mod error;
pub mod parser;
pub mod source;

pub use analysis::{AnalysisReport, ScanStats, analyze, analyze_records};
pub use classifier::{Classifier, classify};
pub use config::AnalysisConfig;
pub use detector::{GapDetector, detect};
pub use error::{Error, Result};
pub use parser::{LineParser, TIMESTAMP_LAYOUT, parse_line};
pub use source::{FileSource, LineSource, MemorySource, ReaderSource};
