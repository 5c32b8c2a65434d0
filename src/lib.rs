pub mod detector;
pub mod features;
pub mod judgement;
pub mod patterns;
pub mod reader;

// Re-export main types for convenient access
pub use detector::{CantoneseDetector, DetectorConfig, QUOTE_PLACEHOLDER};
pub use judgement::{JudgeStats, Judgement};

// Re-export the CLI input collaborator
pub use reader::{LineReader, ReadStats, ReaderConfig};
