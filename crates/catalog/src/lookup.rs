use foundation::math::{LatLng, StableF64, haversine_km, stable_total_cmp_f64};

use crate::location::Location;

/// Default cutoff for [`nearest_location`].
///
/// The built-in catalog has roughly one entry per 1000–2000 km over land plus
/// one anchor per ocean, so 3000 km leaves almost no inhabited gaps while
/// still refusing taps in the emptiest stretches of sea and ice.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 3000.0;

/// A catalog entry together with its distance from the query point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LocationMatch<'a> {
    pub location: &'a Location,
    pub distance_km: f64,
}

/// Nearest catalog entry strictly closer than `max_distance_km`.
///
/// Ordering contract:
/// - The smallest Haversine distance wins.
/// - Equal distances resolve to the earliest entry in `catalog`.
///
/// Non-finite coordinates never match.
pub fn nearest_location(
    lat: f64,
    lng: f64,
    catalog: &[Location],
    max_distance_km: f64,
) -> Option<LocationMatch<'_>> {
    let query = LatLng::new(lat, lng);
    if !query.is_finite() {
        return None;
    }

    let mut best: Option<LocationMatch<'_>> = None;
    for location in catalog {
        let distance_km = haversine_km(query, location.position());
        let closer = match best {
            None => true,
            Some(b) => stable_total_cmp_f64(distance_km, b.distance_km).is_lt(),
        };
        if closer {
            best = Some(LocationMatch {
                location,
                distance_km,
            });
        }
    }

    let best = best?;
    if best.distance_km < max_distance_km {
        tracing::trace!(
            city = %best.location.city,
            distance_km = best.distance_km,
            "nearest location within range"
        );
        Some(best)
    } else {
        tracing::trace!(
            %query,
            nearest_km = best.distance_km,
            max_distance_km,
            "no location within range"
        );
        None
    }
}

/// Up to `count` catalog entries, closest first, ties in catalog order.
pub fn nearby_locations(lat: f64, lng: f64, catalog: &[Location], count: usize) -> Vec<LocationMatch<'_>> {
    let query = LatLng::new(lat, lng);
    if !query.is_finite() || count == 0 {
        return Vec::new();
    }

    let mut matches: Vec<LocationMatch<'_>> = catalog
        .iter()
        .map(|location| LocationMatch {
            location,
            distance_km: haversine_km(query, location.position()),
        })
        .collect();
    // Stable sort keeps catalog order among equal distances.
    matches.sort_by_key(|m| StableF64(m.distance_km));
    matches.truncate(count);
    matches
}

/// Up to `count` distinct zone identifiers around a point, closest first.
pub fn nearby_zones(lat: f64, lng: f64, catalog: &[Location], count: usize) -> Vec<String> {
    let mut zones: Vec<String> = Vec::with_capacity(count);
    for m in nearby_locations(lat, lng, catalog, catalog.len()) {
        if zones.len() >= count {
            break;
        }
        if !zones.iter().any(|z| *z == m.location.name) {
            zones.push(m.location.name.clone());
        }
    }
    zones
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::builtin_catalog;
    use pretty_assertions::assert_eq;

    fn loc(zone: &str, city: &str, lat: f64, lng: f64) -> Location {
        Location::new(zone, city, "Testland", lat, lng)
    }

    #[test]
    fn every_builtin_entry_finds_itself() {
        let catalog = builtin_catalog().entries();
        for (i, entry) in catalog.iter().enumerate() {
            let m = nearest_location(entry.lat, entry.lng, catalog, DEFAULT_MAX_DISTANCE_KM)
                .unwrap_or_else(|| panic!("no match for {}", entry.city));
            assert!(std::ptr::eq(m.location, &catalog[i]), "{} resolved to {}", entry.city, m.location.city);
            assert_eq!(m.distance_km, 0.0);
        }
    }

    #[test]
    fn shared_zone_returns_specific_city() {
        let catalog = builtin_catalog().entries();
        let m = nearest_location(12.9, 77.6, catalog, DEFAULT_MAX_DISTANCE_KM).unwrap();
        assert_eq!(m.location.city, "Bangalore");
        assert_eq!(m.location.name, "Asia/Kolkata");
    }

    #[test]
    fn nothing_within_threshold_is_no_match() {
        let catalog = vec![loc("Europe/Paris", "Paris", 48.8566, 2.3522)];
        assert!(nearest_location(-40.0, 120.0, &catalog, 3000.0).is_none());
    }

    #[test]
    fn threshold_is_strict() {
        let catalog = vec![loc("Etc/GMT", "Origin", 0.0, 0.0)];
        let m = nearest_location(0.0, 10.0, &catalog, 5000.0).unwrap();
        let exact = m.distance_km;
        assert!(nearest_location(0.0, 10.0, &catalog, exact).is_none());
        assert!(nearest_location(0.0, 10.0, &catalog, exact + 1e-6).is_some());
    }

    #[test]
    fn ties_resolve_to_first_entry() {
        let catalog = vec![
            loc("Etc/GMT-1", "East", 0.0, 10.0),
            loc("Etc/GMT+1", "West", 0.0, -10.0),
        ];
        let m = nearest_location(0.0, 0.0, &catalog, 5000.0).unwrap();
        assert_eq!(m.location.city, "East");

        let swapped = vec![catalog[1].clone(), catalog[0].clone()];
        let m = nearest_location(0.0, 0.0, &swapped, 5000.0).unwrap();
        assert_eq!(m.location.city, "West");
    }

    #[test]
    fn non_finite_query_is_no_match() {
        let catalog = builtin_catalog().entries();
        assert!(nearest_location(f64::NAN, 0.0, catalog, DEFAULT_MAX_DISTANCE_KM).is_none());
        assert!(nearest_location(0.0, f64::INFINITY, catalog, DEFAULT_MAX_DISTANCE_KM).is_none());
        assert!(nearby_locations(f64::NAN, 0.0, catalog, 4).is_empty());
    }

    #[test]
    fn empty_catalog_is_no_match() {
        assert!(nearest_location(0.0, 0.0, &[], DEFAULT_MAX_DISTANCE_KM).is_none());
    }

    #[test]
    fn nearby_locations_sorted_by_distance() {
        let catalog = builtin_catalog().entries();
        let near_paris: Vec<_> = nearby_locations(48.8566, 2.3522, catalog, 4)
            .into_iter()
            .map(|m| m.location.city.as_str())
            .collect();
        assert_eq!(near_paris, vec!["Paris", "London", "Amsterdam", "Berlin"]);
    }

    #[test]
    fn nearby_zones_deduplicates() {
        let catalog = builtin_catalog().entries();
        let zones = nearby_zones(19.0760, 72.8777, catalog, 3);
        assert_eq!(zones.len(), 3);
        assert_eq!(zones[0], "Asia/Kolkata");
        assert!(zones[1..].iter().all(|z| z != "Asia/Kolkata"));
    }
}
