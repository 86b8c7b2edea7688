use catalog::Location;
use clock::LocalTime;
use serde::{Deserialize, Serialize};

use crate::config::{invalid, positive, ConfigError};

/// Viewport and tooltip box sizes used to keep the tooltip on screen.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipPlacement {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub tooltip_width: f64,
    pub tooltip_height: f64,
    /// Tooltips stay within this top fraction of the viewport.
    pub max_y_fraction: f64,
}

impl Default for TooltipPlacement {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            tooltip_width: 170.0,
            tooltip_height: 150.0,
            max_y_fraction: 0.6,
        }
    }
}

impl TooltipPlacement {
    /// Clamp a tap position (pixels) to where the tooltip box fits.
    ///
    /// Without a usable position the tooltip anchors at the horizontal center,
    /// one third down.
    pub fn place(&self, screen_px: Option<[f64; 2]>) -> [f64; 2] {
        let [x, y] = screen_px
            .filter(|p| p[0].is_finite() && p[1].is_finite())
            .unwrap_or([self.viewport_width / 2.0, self.viewport_height / 3.0]);
        let max_x = self.viewport_width - self.tooltip_width;
        let max_y = self.viewport_height * self.max_y_fraction - self.tooltip_height;
        [x.min(max_x).max(0.0), y.min(max_y).max(0.0)]
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        positive("tooltip.viewport_width", self.viewport_width)?;
        positive("tooltip.viewport_height", self.viewport_height)?;
        positive("tooltip.tooltip_width", self.tooltip_width)?;
        positive("tooltip.tooltip_height", self.tooltip_height)?;
        if !(self.max_y_fraction.is_finite() && self.max_y_fraction > 0.0 && self.max_y_fraction <= 1.0) {
            return Err(invalid("tooltip.max_y_fraction", "must be in (0, 1]"));
        }
        Ok(())
    }
}

/// What a successful tap shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipResult {
    pub location: Location,
    pub distance_km: f64,
    pub local_time: LocalTime,
    pub display_x: f64,
    pub display_y: f64,
}

impl TooltipResult {
    /// `HH:MM:SS` in the location's zone at lookup time.
    pub fn current_local_time(&self) -> &str {
        &self.local_time.time
    }
}

#[cfg(test)]
mod tests {
    use super::TooltipPlacement;
    use pretty_assertions::assert_eq;

    #[test]
    fn position_inside_bounds_is_kept() {
        let p = TooltipPlacement::default();
        assert_eq!(p.place(Some([300.0, 120.0])), [300.0, 120.0]);
    }

    #[test]
    fn clamps_to_right_edge_and_upper_band() {
        let p = TooltipPlacement::default();
        // 1280 - 170 = 1110, 720 * 0.6 - 150 = 282
        assert_eq!(p.place(Some([1270.0, 700.0])), [1110.0, 282.0]);
        assert_eq!(p.place(Some([-40.0, -5.0])), [0.0, 0.0]);
    }

    #[test]
    fn missing_position_anchors_center_third() {
        let p = TooltipPlacement::default();
        assert_eq!(p.place(None), [640.0, 240.0]);
        assert_eq!(p.place(Some([f64::NAN, 10.0])), [640.0, 240.0]);
    }

    #[test]
    fn tiny_viewport_pins_to_origin() {
        let p = TooltipPlacement {
            viewport_width: 100.0,
            viewport_height: 100.0,
            ..TooltipPlacement::default()
        };
        assert_eq!(p.place(Some([50.0, 50.0])), [0.0, 0.0]);
    }
}
