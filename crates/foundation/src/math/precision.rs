//! Deterministic float ordering.
//!
//! Distance sorts and nearest-neighbor ties must not depend on NaN payloads or
//! the sign of zero, so every float comparison that decides an ordering goes
//! through [`stable_total_cmp_f64`].

use core::cmp::Ordering;

/// Canonicalize a floating-point value for deterministic ordering.
///
/// `-0.0` becomes `0.0` and every NaN becomes the canonical NaN.
pub fn canonical_f64(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else if v.is_nan() {
        f64::NAN
    } else {
        v
    }
}

/// Total ordering for floats after canonicalization.
pub fn stable_total_cmp_f64(a: f64, b: f64) -> Ordering {
    canonical_f64(a).total_cmp(&canonical_f64(b))
}

/// A float key with a deterministic total ordering, usable in sorted keys.
#[derive(Debug, Copy, Clone, Default)]
pub struct StableF64(pub f64);

impl PartialEq for StableF64 {
    fn eq(&self, other: &Self) -> bool {
        stable_total_cmp_f64(self.0, other.0) == Ordering::Equal
    }
}

impl Eq for StableF64 {}

impl PartialOrd for StableF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StableF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        stable_total_cmp_f64(self.0, other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{StableF64, canonical_f64, stable_total_cmp_f64};
    use core::cmp::Ordering;

    #[test]
    fn negative_zero_orders_equal_to_zero() {
        assert_eq!(canonical_f64(-0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(stable_total_cmp_f64(-0.0, 0.0), Ordering::Equal);
    }

    #[test]
    fn nan_sorts_after_finite_values() {
        let mut keys = vec![StableF64(f64::NAN), StableF64(3.0), StableF64(-1.0)];
        keys.sort();
        assert_eq!(keys[0].0, -1.0);
        assert_eq!(keys[1].0, 3.0);
        assert!(keys[2].0.is_nan());
        assert!(StableF64(f64::NAN) == StableF64(f64::NAN));
    }
}
