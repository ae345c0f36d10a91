//! Interaction systems
//!
//! - [`input`] - pick handling: piece selection, destination activation, visual sync

pub mod input;

pub use input::SelectionController;
