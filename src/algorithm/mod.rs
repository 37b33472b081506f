/// Even allocation of operand values across a range
pub mod distribution;
/// Generation pipeline and worksheet results
pub mod executor;
/// Operators, problems and random operator assignment
pub mod operators;
/// Trailing-window repeat repair
pub mod repetition;
/// Fisher–Yates shuffling
pub mod shuffle;
