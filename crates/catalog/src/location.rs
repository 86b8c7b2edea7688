use std::path::Path;

use foundation::math::LatLng;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A named place with the IANA zone it keeps time in.
///
/// Several locations may share one zone; each keeps its own city identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// IANA timezone identifier, e.g. `Asia/Kolkata`.
    pub name: String,
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        lat: f64,
        lng: f64,
    ) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            country: country.into(),
            lat,
            lng,
        }
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    fn check(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("empty timezone name".to_string());
        }
        if self.city.trim().is_empty() {
            return Err("empty city".to_string());
        }
        if !self.position().is_valid() {
            return Err(format!("coordinates out of range: {}", self.position()));
        }
        Ok(())
    }
}

/// Ordered, immutable sequence of locations.
///
/// Only constructed through [`Catalog::new`], so every catalog in hand has
/// passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<Location>,
}

impl Catalog {
    /// Build a catalog, rejecting empty input and out-of-range entries.
    pub fn new(entries: Vec<Location>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, entry) in entries.iter().enumerate() {
            if let Err(reason) = entry.check() {
                tracing::warn!(index, city = %entry.city, %reason, "rejecting catalog entry");
                return Err(CatalogError::InvalidEntry { index, reason });
            }
        }
        Ok(Self { entries })
    }

    /// Wrap a compile-time table without re-validating it.
    pub(crate) fn from_table(entries: Vec<Location>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array of locations.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<Location> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(entries)
    }

    pub fn load_json(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Io(format!("{}: {e}", path.display())))?;
        let catalog = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), entries = catalog.len(), "loaded location catalog");
        Ok(catalog)
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
