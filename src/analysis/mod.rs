//! Diagnostics over generated problem sequences

/// Operand frequency counting
pub mod statistics;
