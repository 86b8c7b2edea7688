use foundation::math::{Vec2, Vec3};

/// Pointer position in normalized device coordinates: both axes in `[-1, 1]`,
/// `+y` up. Hosts convert from pixels before calling the controller.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert a pixel position (origin top-left, `+y` down) to NDC.
    pub fn from_pixels(px: f64, py: f64, viewport_width: f64, viewport_height: f64) -> Self {
        let w = viewport_width.max(1.0);
        let h = viewport_height.max(1.0);
        Self::new(2.0 * px / w - 1.0, 1.0 - 2.0 * py / h)
    }

    pub fn is_finite(self) -> bool {
        self.as_vec().is_finite()
    }

    pub(crate) fn as_vec(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Where the pointer ray met the globe, in whichever form the renderer has.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GlobeHit {
    /// Intersection already expressed in the globe's unrotated frame.
    Local(Vec3),
    /// Intersection in world space; the controller undoes the displayed rotation.
    World(Vec3),
    /// Texture coordinate under the pointer.
    Uv { u: f64, v: f64 },
}

/// Pointer release with whatever the host could pick.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PointerUp {
    /// Final pointer position, folded into drag tracking when present.
    pub sample: Option<PointerSample>,
    /// Globe intersection under the pointer; `None` when the ray missed.
    pub hit: Option<GlobeHit>,
    /// Screen position in pixels used to anchor the tooltip.
    pub screen_px: Option<[f64; 2]>,
}

impl PointerUp {
    pub fn at(sample: PointerSample) -> Self {
        Self {
            sample: Some(sample),
            ..Self::default()
        }
    }

    pub fn with_hit(mut self, hit: GlobeHit) -> Self {
        self.hit = Some(hit);
        self
    }

    pub fn with_screen(mut self, x: f64, y: f64) -> Self {
        self.screen_px = Some([x, y]);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::PointerSample;

    #[test]
    fn pixels_to_ndc() {
        assert_eq!(PointerSample::from_pixels(500.0, 250.0, 1000.0, 500.0), PointerSample::new(0.0, 0.0));
        assert_eq!(PointerSample::from_pixels(0.0, 0.0, 1000.0, 500.0), PointerSample::new(-1.0, 1.0));
        assert_eq!(PointerSample::from_pixels(1000.0, 500.0, 1000.0, 500.0), PointerSample::new(1.0, -1.0));
    }

    #[test]
    fn five_pixels_is_one_hundredth_on_a_thousand_pixel_viewport() {
        let a = PointerSample::from_pixels(500.0, 300.0, 1000.0, 600.0);
        let b = PointerSample::from_pixels(505.0, 300.0, 1000.0, 600.0);
        assert!(((b.x - a.x) - 0.01).abs() < 1e-12);
    }
}
