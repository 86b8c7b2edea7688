//! Spherical geodesy for the picking globe.
//!
//! Two hit shapes are supported because hosts report either a 3D intersection
//! on the globe mesh or the texture coordinate under the pointer:
//!
//! - Cartesian `(x, y, z)` on a sphere of radius `R` in the globe's local frame
//!   (+Y through the north pole):
//!   `lat = 90 − acos(y / R)` and `lng = wrap180(atan2(x, z) + offset)`.
//! - Texture `(u, v)` in `[0, 1]²` on an equirectangular map:
//!   `lng = u·360 − 180` and `lat = v·180 − 90` (v = 1 at the north pole).
//!
//! For a sphere mesh generated with `x = −R·cos φ·sin θ`, `z = R·sin φ·sin θ`
//! and `φ = u·2π`, the texture column `u` sits at `atan2(x, z) = φ − 90°`, which
//! is `lng + 90°`. The matching offset is therefore `−90°`
//! ([`MeridianConvention::EQUIRECTANGULAR`]); with it, both shapes place
//! `u = 0.5` on the prime meridian.

use super::{Vec3, wrap_degrees_180};

/// Mean Earth radius used for great-circle distances (kilometers).
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

/// Geographic coordinate in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Finite, latitude in `[-90, 90]` and longitude in `[-180, 180]`.
    pub fn is_valid(self) -> bool {
        self.is_finite() && (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lng)
    }
}

/// Haversine great-circle distance in kilometers.
pub fn haversine_km(a: LatLng, b: LatLng) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_MEAN_RADIUS_KM * c
}

/// Longitude offset applied to `atan2(x, z)` when converting a Cartesian hit.
///
/// Different mesh/texture orientations put the prime meridian at different
/// azimuths, so the offset is a host setting rather than a constant.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeridianConvention {
    pub offset_deg: f64,
}

impl MeridianConvention {
    /// Standard sphere mesh with an equirectangular texture whose center
    /// column is longitude 0.
    pub const EQUIRECTANGULAR: Self = Self { offset_deg: -90.0 };

    /// `((270 + atan2(x, z)) mod 360) − 180`, i.e. an offset of `+90°`.
    /// Correct only for meshes turned 180° about +Y.
    pub const LEGACY_PLUS_270: Self = Self { offset_deg: 90.0 };
}

impl Default for MeridianConvention {
    fn default() -> Self {
        Self::EQUIRECTANGULAR
    }
}

/// A hit on the globe as reported by the renderer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SpherePoint {
    /// Point in the globe's local frame on a sphere of `radius`.
    Cartesian { point: Vec3, radius: f64 },
    /// Equirectangular texture coordinate.
    Uv { u: f64, v: f64 },
}

/// Convert a globe hit into latitude/longitude.
///
/// Returns `None` for non-finite input, a non-positive radius, a degenerate
/// point at the sphere center, or texture coordinates outside `[0, 1]`.
pub fn point_to_lat_lng(point: SpherePoint, convention: MeridianConvention) -> Option<LatLng> {
    match point {
        SpherePoint::Cartesian { point, radius } => cartesian_to_lat_lng(point, radius, convention),
        SpherePoint::Uv { u, v } => uv_to_lat_lng(u, v),
    }
}

pub fn cartesian_to_lat_lng(point: Vec3, radius: f64, convention: MeridianConvention) -> Option<LatLng> {
    if !point.is_finite() || !radius.is_finite() || radius <= 0.0 || !convention.offset_deg.is_finite() {
        return None;
    }
    if point.length() <= radius * 1e-9 {
        return None;
    }

    // Raycast hits land on mesh triangles slightly inside the true sphere.
    let ratio = (point.y / radius).clamp(-1.0, 1.0);
    let lat = 90.0 - ratio.acos().to_degrees();
    let lng = wrap_degrees_180(point.x.atan2(point.z).to_degrees() + convention.offset_deg);
    Some(LatLng::new(lat, lng))
}

pub fn uv_to_lat_lng(u: f64, v: f64) -> Option<LatLng> {
    if !u.is_finite() || !v.is_finite() {
        return None;
    }
    if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
        return None;
    }
    Some(LatLng::new(v * 180.0 - 90.0, u * 360.0 - 180.0))
}

/// Inverse of [`cartesian_to_lat_lng`] for the same convention.
pub fn lat_lng_to_point(ll: LatLng, radius: f64, convention: MeridianConvention) -> Vec3 {
    let polar = (90.0 - ll.lat).to_radians();
    let azimuth = (ll.lng - convention.offset_deg).to_radians();
    let ring = radius * polar.sin();
    Vec3::new(ring * azimuth.sin(), radius * polar.cos(), ring * azimuth.cos())
}

/// Inverse of [`uv_to_lat_lng`].
pub fn lat_lng_to_uv(ll: LatLng) -> (f64, f64) {
    ((ll.lng + 180.0) / 360.0, (ll.lat + 90.0) / 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    /// Vertex position of a standard UV sphere mesh at texture coordinate (u, v).
    fn mesh_vertex(u: f64, v: f64, radius: f64) -> Vec3 {
        let phi = u * std::f64::consts::TAU;
        let theta = (1.0 - v) * std::f64::consts::PI;
        Vec3::new(
            -radius * phi.cos() * theta.sin(),
            radius * theta.cos(),
            radius * phi.sin() * theta.sin(),
        )
    }

    #[test]
    fn haversine_zero_for_same_point() {
        let p = LatLng::new(48.8566, 2.3522);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn haversine_london_paris() {
        let london = LatLng::new(51.5074, -0.1278);
        let paris = LatLng::new(48.8566, 2.3522);
        assert_close(haversine_km(london, paris), 343.5, 1.0);
    }

    #[test]
    fn haversine_quarter_meridian() {
        let d = haversine_km(LatLng::new(0.0, 0.0), LatLng::new(90.0, 0.0));
        assert_close(d, EARTH_MEAN_RADIUS_KM * std::f64::consts::FRAC_PI_2, 1e-6);
    }

    #[test]
    fn uv_center_is_null_island() {
        let ll = uv_to_lat_lng(0.5, 0.5).unwrap();
        assert_eq!(ll, LatLng::new(0.0, 0.0));
    }

    #[test]
    fn uv_rejects_out_of_range() {
        assert!(uv_to_lat_lng(1.2, 0.5).is_none());
        assert!(uv_to_lat_lng(0.5, -0.1).is_none());
        assert!(uv_to_lat_lng(f64::NAN, 0.5).is_none());
    }

    #[test]
    fn cartesian_and_uv_agree_on_mesh_vertices() {
        let convention = MeridianConvention::EQUIRECTANGULAR;
        for &(u, v) in &[(0.5, 0.5), (0.75, 0.5), (0.25, 0.7), (0.6, 0.2), (0.1, 0.9)] {
            let from_uv = uv_to_lat_lng(u, v).unwrap();
            let from_mesh = cartesian_to_lat_lng(mesh_vertex(u, v, 100.0), 100.0, convention).unwrap();
            assert_close(from_mesh.lat, from_uv.lat, 1e-9);
            assert_close(from_mesh.lng, from_uv.lng, 1e-9);
        }
    }

    #[test]
    fn legacy_convention_is_half_a_turn_away() {
        let vertex = mesh_vertex(0.5, 0.5, 100.0);
        let legacy = cartesian_to_lat_lng(vertex, 100.0, MeridianConvention::LEGACY_PLUS_270).unwrap();
        assert_close(legacy.lng.abs(), 180.0, 1e-9);
    }

    #[test]
    fn cartesian_rejects_degenerate_input() {
        let c = MeridianConvention::default();
        assert!(cartesian_to_lat_lng(Vec3::new(0.0, 0.0, 0.0), 100.0, c).is_none());
        assert!(cartesian_to_lat_lng(Vec3::new(1.0, f64::INFINITY, 0.0), 100.0, c).is_none());
        assert!(cartesian_to_lat_lng(Vec3::new(1.0, 0.0, 0.0), 0.0, c).is_none());
    }

    #[test]
    fn cartesian_clamps_points_slightly_outside_sphere() {
        let ll = cartesian_to_lat_lng(Vec3::new(0.0, 100.0001, 0.0), 100.0, MeridianConvention::default()).unwrap();
        assert_close(ll.lat, 90.0, 1e-9);
    }

    #[test]
    fn point_round_trip_both_conventions() {
        for convention in [MeridianConvention::EQUIRECTANGULAR, MeridianConvention::LEGACY_PLUS_270] {
            for &(lat, lng) in &[(40.7128, -74.006), (-33.8688, 151.2093), (0.0, 0.0), (85.0, 0.0), (-18.14, 178.44)] {
                let ll = LatLng::new(lat, lng);
                let p = lat_lng_to_point(ll, 100.0, convention);
                let back = point_to_lat_lng(SpherePoint::Cartesian { point: p, radius: 100.0 }, convention).unwrap();
                assert_close(back.lat, lat, 1e-9);
                assert_close(back.lng, lng, 1e-9);
            }
        }
    }

    #[test]
    fn uv_round_trip() {
        let ll = LatLng::new(35.6762, 139.6503);
        let (u, v) = lat_lng_to_uv(ll);
        let back = point_to_lat_lng(SpherePoint::Uv { u, v }, MeridianConvention::default()).unwrap();
        assert_close(back.lat, ll.lat, 1e-9);
        assert_close(back.lng, ll.lng, 1e-9);
    }

    #[test]
    fn validity_ranges() {
        assert!(LatLng::new(90.0, -180.0).is_valid());
        assert!(!LatLng::new(90.5, 0.0).is_valid());
        assert!(!LatLng::new(0.0, 181.0).is_valid());
        assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
    }
}
