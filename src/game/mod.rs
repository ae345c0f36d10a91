//! Game interaction module
//!
//! Sits between a picking layer and the rules engine.
//!
//! # Module Organization
//!
//! - `events` - inbound [`Pickable`] hits and [`InteractionOutcome`] results
//! - `resources` - [`SelectionState`]
//! - `systems` - the [`SelectionController`]
//! - `session` - [`Session`], owning one game and its controller
//!
//! # Event Ordering
//!
//! 1. Pick event arrives
//! 2. Engine query or move application
//! 3. Visual commands, only for confirmed state
//! 4. Highlight reset after every destination activation

pub mod events;
pub mod resources;
pub mod session;
pub mod systems;

pub use events::{IgnoreReason, InteractionOutcome, Pickable};
pub use resources::SelectionState;
pub use session::Session;
pub use systems::SelectionController;
