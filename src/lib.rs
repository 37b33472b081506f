//! Vertical arithmetic-fact worksheet generation
//!
//! Operands are spread evenly over a configured range, shuffled, paired with
//! randomly drawn operators and repaired so that the same operand and
//! operator do not recur within a short window. The finished sequence is
//! rendered into a grid of vertical problems and exported as text or PNG.

#![forbid(unsafe_code)]

/// Problem-set generation: distribution, shuffling, operator assignment and repetition repair
pub mod algorithm;
/// Operand frequency diagnostics
pub mod analysis;
/// Command line, configuration, export and error handling
pub mod io;
/// Orientation of problems and grid layout for display
pub mod presentation;

pub use algorithm::executor::{GenerationConfig, Worksheet, generate_worksheet};
pub use io::error::{Result, WorksheetError};
