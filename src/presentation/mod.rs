//! Turning generated problems into printable cells

/// Grid arrangement of rendered cells
pub mod layout;
/// Per-operator placement of constant and operand
pub mod orientation;

pub use orientation::{DisplayPair, Presenter};
