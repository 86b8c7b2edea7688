use foundation::math::{clamp_half_pi, wrap_radians_tau, LatLng, MeridianConvention, Vec2, Vec3};

/// Latitude/longitude the globe faces when no host location is known.
pub const FALLBACK_FACING: LatLng = LatLng { lat: 20.0, lng: 0.0 };

/// Globe orientation as Euler angles, applied yaw first (about +Y) then
/// pitch (about +X).
///
/// Invariants: `pitch` stays within `[-π/2, π/2]` and `yaw` within `[0, 2π)`.
/// Both are finite; updates carrying NaN or infinity are rejected whole.
#[derive(Debug, Copy, Clone, PartialEq, Default, serde::Serialize)]
pub struct RotationState {
    pitch: f64,
    yaw: f64,
}

/// A rotation update was dropped because it was not finite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NonFiniteRotation;

impl std::fmt::Display for NonFiniteRotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "non-finite rotation update")
    }
}

impl std::error::Error for NonFiniteRotation {}

impl RotationState {
    /// Build a state, clamping pitch and wrapping yaw.
    pub fn new(pitch: f64, yaw: f64) -> Result<Self, NonFiniteRotation> {
        if !pitch.is_finite() || !yaw.is_finite() {
            return Err(NonFiniteRotation);
        }
        Ok(Self {
            pitch: clamp_half_pi(pitch),
            yaw: wrap_radians_tau(yaw),
        })
    }

    /// Orientation that brings `target` to the front of the globe, facing a
    /// camera on the +Z axis. Invalid targets use [`FALLBACK_FACING`].
    pub fn facing(target: LatLng, convention: MeridianConvention) -> Self {
        let target = if target.is_valid() { target } else { FALLBACK_FACING };
        let yaw = (convention.offset_deg - target.lng).to_radians();
        Self::new(target.lat.to_radians(), yaw).unwrap_or_default()
    }

    pub fn pitch(self) -> f64 {
        self.pitch
    }

    pub fn yaw(self) -> f64 {
        self.yaw
    }

    /// Rotate by a pointer delta in NDC units.
    ///
    /// Horizontal motion spins about +Y; vertical motion tips the front of
    /// the globe along with the pointer.
    pub fn apply_drag(&mut self, delta: Vec2, sensitivity: f64) -> Result<(), NonFiniteRotation> {
        let next = Self::new(
            self.pitch - delta.y * sensitivity,
            self.yaw + delta.x * sensitivity,
        )?;
        *self = next;
        Ok(())
    }

    /// Spin about +Y by `radians`.
    pub fn advance_yaw(&mut self, radians: f64) -> Result<(), NonFiniteRotation> {
        *self = Self::new(self.pitch, self.yaw + radians)?;
        Ok(())
    }

    /// Globe-local point to world space.
    pub fn to_world(self, local: Vec3) -> Vec3 {
        local.rotate_y(self.yaw).rotate_x(self.pitch)
    }

    /// World-space point back into the globe's unrotated frame.
    pub fn to_local(self, world: Vec3) -> Vec3 {
        world.rotate_x(-self.pitch).rotate_y(-self.yaw)
    }
}
