use std::path::Path;

use catalog::DEFAULT_MAX_DISTANCE_KM;
use foundation::math::MeridianConvention;
use serde::{Deserialize, Serialize};

use crate::tooltip::TooltipPlacement;

/// Tunables for one globe view.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Manhattan distance from the press position, in NDC units, at which a
    /// press becomes a drag.
    pub tap_threshold: f64,
    /// Radians of rotation per NDC unit of pointer travel.
    pub drag_sensitivity: f64,
    /// Auto-rotation speed in radians per second.
    pub auto_rotate_speed: f64,
    /// Seconds a tooltip stays up before rotation resumes.
    pub tap_dismiss_delay_s: f64,
    /// Seconds after a drag (or a tap that matched nothing) before rotation resumes.
    pub idle_resume_delay_s: f64,
    /// Longest tick, in seconds, that auto-rotation will integrate at once.
    pub max_tick_s: f64,
    /// Taps farther than this from every catalog entry match nothing.
    pub max_distance_km: f64,
    /// Radius of the rendered sphere, in the host's world units.
    pub globe_radius: f64,
    pub meridian: MeridianConvention,
    pub tooltip: TooltipPlacement,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            tap_threshold: 0.01,
            drag_sensitivity: 2.5,
            auto_rotate_speed: 0.1,
            tap_dismiss_delay_s: 8.0,
            idle_resume_delay_s: 5.0,
            max_tick_s: 0.1,
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            globe_radius: 100.0,
            meridian: MeridianConvention::default(),
            tooltip: TooltipPlacement::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Invalid { field: &'static str, reason: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "config read failed: {msg}"),
            ConfigError::Parse(msg) => write!(f, "config is not valid JSON: {msg}"),
            ConfigError::Invalid { field, reason } => write!(f, "config field `{field}` {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl InteractionConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_json(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded interaction config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("tap_threshold", self.tap_threshold)?;
        positive("drag_sensitivity", self.drag_sensitivity)?;
        non_negative("auto_rotate_speed", self.auto_rotate_speed)?;
        non_negative("tap_dismiss_delay_s", self.tap_dismiss_delay_s)?;
        non_negative("idle_resume_delay_s", self.idle_resume_delay_s)?;
        positive("max_tick_s", self.max_tick_s)?;
        positive("max_distance_km", self.max_distance_km)?;
        positive("globe_radius", self.globe_radius)?;
        if !self.meridian.offset_deg.is_finite() {
            return Err(invalid("meridian.offset_deg", "must be finite"));
        }
        self.tooltip.validate()
    }
}

pub(crate) fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be finite and positive"))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be finite and non-negative"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = InteractionConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.tap_dismiss_delay_s, 8.0);
        assert_eq!(config.idle_resume_delay_s, 5.0);
        assert_eq!(config.max_distance_km, 3000.0);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = InteractionConfig::from_json_str(
            r#"{ "auto_rotate_speed": 0.25, "meridian": { "offset_deg": 90.0 }, "tooltip": { "viewport_width": 800 } }"#,
        )
        .unwrap();
        assert_eq!(config.auto_rotate_speed, 0.25);
        assert_eq!(config.meridian, MeridianConvention::LEGACY_PLUS_270);
        assert_eq!(config.tooltip.viewport_width, 800.0);
        assert_eq!(config.tooltip.tooltip_width, 170.0);
        assert_eq!(config.drag_sensitivity, 2.5);
    }

    #[test]
    fn rejects_bad_values() {
        let err = InteractionConfig::from_json_str(r#"{ "tap_threshold": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "tap_threshold", .. }));

        let err = InteractionConfig::from_json_str(r#"{ "idle_resume_delay_s": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "idle_resume_delay_s", .. }));

        let err = InteractionConfig::from_json_str(r#"{ "tooltip": { "max_y_fraction": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "tooltip.max_y_fraction", .. }));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = InteractionConfig::from_json_str("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_distance_km": 1500 }}"#).unwrap();
        let config = InteractionConfig::load_json(file.path()).unwrap();
        assert_eq!(config.max_distance_km, 1500.0);

        let missing = file.path().with_extension("missing");
        assert!(matches!(InteractionConfig::load_json(&missing), Err(ConfigError::Io(_))));
    }
}
