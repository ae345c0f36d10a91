//! Viewer settings
//!
//! User preferences persisted as JSON. Every field has a default and missing
//! fields fall back to it, so older settings files keep loading.

use crate::core::error::{CoreError, CoreResult};
use crate::rendering::layout::CapturePileLayout;
use chess_rules::{Color, RuleSet};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Camera orientation per side to move
///
/// Azimuth is the rotation around the board's vertical axis, polar the angle
/// down from straight overhead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub white_azimuth: f32,
    pub black_azimuth: f32,
    pub polar: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            white_azimuth: 0.0,
            black_azimuth: PI,
            polar: FRAC_PI_4,
        }
    }
}

impl CameraSettings {
    pub fn azimuth_for(&self, color: Color) -> f32 {
        match color {
            Color::White => self.white_azimuth,
            Color::Black => self.black_azimuth,
        }
    }
}

/// Persisted viewer preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Optional rule extensions (en passant, promotion)
    pub rules: RuleSet,

    /// Where captured pieces are stacked beside the board
    pub capture_pile: CapturePileLayout,

    /// Camera orientation after each turn change
    pub camera: CameraSettings,

    /// Whether to show legal destination markers
    pub show_hints: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            rules: RuleSet::default(),
            capture_pile: CapturePileLayout::default(),
            camera: CameraSettings::default(),
            show_hints: true,
        }
    }
}

impl ViewerSettings {
    /// Reject values that parse but cannot be used
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidSetting`] naming the offending field.
    pub fn validate(&self) -> CoreResult<()> {
        let pile = &self.capture_pile;
        if !(pile.spacing.is_finite() && pile.spacing > 0.0) {
            return Err(invalid(format!(
                "capture_pile.spacing must be a positive number, got {}",
                pile.spacing
            )));
        }
        if !(pile.side_offset.is_finite() && pile.base.is_finite()) {
            return Err(invalid("capture_pile offsets must be finite".to_string()));
        }

        let camera = &self.camera;
        if !(camera.polar > 0.0 && camera.polar <= FRAC_PI_2) {
            return Err(invalid(format!(
                "camera.polar must be in (0, π/2], got {}",
                camera.polar
            )));
        }
        if !(camera.white_azimuth.is_finite() && camera.black_azimuth.is_finite()) {
            return Err(invalid("camera azimuths must be finite".to_string()));
        }
        Ok(())
    }
}

fn invalid(message: String) -> CoreError {
    CoreError::InvalidSetting { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ViewerSettings::default();
        assert!(settings.show_hints);
        assert_eq!(settings.rules, RuleSet::default());
        assert_eq!(settings.camera.azimuth_for(Color::White), 0.0);
        assert_eq!(settings.camera.azimuth_for(Color::Black), PI);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        //! Partial files only override what they name
        let settings: ViewerSettings =
            serde_json::from_str(r#"{ "show_hints": false, "rules": { "en_passant": false } }"#)
                .unwrap();
        assert!(!settings.show_hints);
        assert!(!settings.rules.en_passant);
        assert!(settings.rules.promotion);
        assert_eq!(settings.camera, CameraSettings::default());
    }

    #[test]
    fn test_validate_rejects_bad_spacing() {
        let mut settings = ViewerSettings::default();
        settings.capture_pile.spacing = 0.0;
        assert!(matches!(
            settings.validate(),
            Err(CoreError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_flat_camera() {
        let mut settings = ViewerSettings::default();
        settings.camera.polar = 2.0;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("camera.polar"));
    }
}
