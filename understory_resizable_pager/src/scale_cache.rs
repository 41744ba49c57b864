// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sanitized per-item scales with cached cumulative sums.

use alloc::vec::Vec;

/// Scale used in place of unusable provider values.
pub const FALLBACK_SCALE: f64 = 1.0;

/// Returns `raw` if it is a usable scale, otherwise [`FALLBACK_SCALE`].
///
/// A usable scale is finite and strictly positive. Zero, NaN, negative and
/// infinite values would otherwise poison every height and offset derived
/// from them.
#[must_use]
pub fn sanitize_scale(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw
    } else {
        FALLBACK_SCALE
    }
}

/// Ordered per-item scales, parallel-indexed with the pager's items.
///
/// Every stored scale has passed through [`sanitize_scale`], so all values are
/// finite and `> 0`. Alongside the scales the cache keeps prefix sums so that
/// [`ScaleCache::sum_before`] is O(1); the cache is rebuilt wholesale on each
/// reload and never updated incrementally.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleCache {
    scales: Vec<f64>,
    // `prefix[i]` is the sum of `scales[..i]`; always `scales.len() + 1` long.
    prefix: Vec<f64>,
}

impl Default for ScaleCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaleCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        let mut prefix = Vec::new();
        prefix.push(0.0);
        Self {
            scales: Vec::new(),
            prefix,
        }
    }

    /// Builds a cache from raw provider scales.
    #[must_use]
    pub fn from_raw<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut cache = Self::new();
        cache.rebuild(raw);
        cache
    }

    /// Discards all scales and refills the cache from `raw`.
    pub fn rebuild<I>(&mut self, raw: I)
    where
        I: IntoIterator<Item = f64>,
    {
        self.clear();
        for scale in raw {
            self.push(scale);
        }
    }

    /// Removes every scale.
    pub fn clear(&mut self) {
        self.scales.clear();
        self.prefix.clear();
        self.prefix.push(0.0);
    }

    /// Sanitizes and appends a scale, returning the value actually stored.
    pub fn push(&mut self, raw: f64) -> f64 {
        let scale = sanitize_scale(raw);
        if scale.to_bits() != raw.to_bits() {
            tracing::debug!(
                index = self.scales.len(),
                raw,
                "coerced unusable item scale to fallback"
            );
        }
        let total = self.total();
        self.scales.push(scale);
        self.prefix.push(total + scale);
        scale
    }

    /// Number of scales (equal to the current item count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Returns `true` if the cache holds no scales.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Returns the sanitized scale of `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.scales.get(index).copied()
    }

    /// Returns the sanitized scales in item order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.scales
    }

    /// Sum of the scales of all items before `index`.
    ///
    /// `index` is clamped to `len()`, so `sum_before(len())` is the total.
    #[must_use]
    pub fn sum_before(&self, index: usize) -> f64 {
        let i = index.min(self.scales.len());
        self.prefix[i]
    }

    /// Sum of all scales.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.sum_before(self.scales.len())
    }
}

#[cfg(test)]
mod tests {
    use super::{FALLBACK_SCALE, ScaleCache, sanitize_scale};

    #[test]
    fn unusable_scales_fall_back_to_one() {
        assert_eq!(sanitize_scale(0.0), FALLBACK_SCALE);
        assert_eq!(sanitize_scale(-0.0), FALLBACK_SCALE);
        assert_eq!(sanitize_scale(f64::NAN), FALLBACK_SCALE);
        assert_eq!(sanitize_scale(-2.0), FALLBACK_SCALE);
        assert_eq!(sanitize_scale(f64::INFINITY), FALLBACK_SCALE);
        assert_eq!(sanitize_scale(0.5), 0.5);
        assert_eq!(sanitize_scale(2.0), 2.0);
    }

    #[test]
    fn push_records_sanitized_value() {
        let mut cache = ScaleCache::new();
        assert_eq!(cache.push(2.0), 2.0);
        assert_eq!(cache.push(f64::NAN), 1.0);
        assert_eq!(cache.push(0.0), 1.0);
        assert_eq!(cache.as_slice(), &[2.0, 1.0, 1.0]);
    }

    #[test]
    fn cumulative_sums() {
        let cache = ScaleCache::from_raw([1.0, 2.0, 0.5]);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.sum_before(0), 0.0);
        assert_eq!(cache.sum_before(1), 1.0);
        assert_eq!(cache.sum_before(2), 3.0);
        assert_eq!(cache.sum_before(3), 3.5);
        // Clamped past the end.
        assert_eq!(cache.sum_before(10), 3.5);
        assert_eq!(cache.total(), 3.5);
    }

    #[test]
    fn rebuild_discards_previous_scales() {
        let mut cache = ScaleCache::from_raw([1.0, 2.0]);
        cache.rebuild([3.0]);
        assert_eq!(cache.as_slice(), &[3.0]);
        assert_eq!(cache.total(), 3.0);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.total(), 0.0);
        assert_eq!(cache.get(0), None);
    }
}
