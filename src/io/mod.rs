//! Command line, configuration, export and error handling

/// Command-line parsing and run orchestration
pub mod cli;
/// Defaults, bounds and input sanitizing
pub mod configuration;
/// Error types
pub mod error;
/// PNG worksheet export
pub mod image;
/// Multi-page progress display
pub mod progress;
/// Plain-text worksheet export
pub mod text;
