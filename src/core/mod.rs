//! Core module - viewer configuration and shared error types
//!
//! - [`ViewerSettings`] - user preferences (rule toggles, capture pile, camera, hints)
//! - [`settings_persistence`] - JSON load/save in the platform config directory
//! - [`CoreError`] - settings failures

pub mod error;
pub mod settings;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use settings::{CameraSettings, ViewerSettings};
pub use settings_persistence::{load_settings, read_settings, save_settings, settings_path};
