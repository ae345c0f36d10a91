//! Interaction resources
//!
//! - [`SelectionState`] - currently selected piece and its highlighted destinations

pub mod selection;

pub use selection::SelectionState;
