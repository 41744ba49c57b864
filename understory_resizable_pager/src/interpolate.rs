// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-offset to height / offset interpolation.
//!
//! The pager's scroll content is a strip of pages, each `page_width` wide. At a
//! *breakpoint* (`x = k * page_width`) the pager shows item `k` at its native
//! aspect ratio, so its height is [`Interpolator::page_height`]`(k)`. Between
//! two breakpoints every derived quantity is the straight line joining its
//! values at the two ends, which keeps the transition continuous.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Insets;

use crate::ScaleCache;

/// Page geometry shared by every item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageMetrics {
    /// Width of one page of scroll content (the scroll surface width).
    pub page_width: f64,
    /// Total horizontal item padding (`left + right`).
    pub horizontal_padding: f64,
}

impl PageMetrics {
    /// Creates metrics from a page width and total horizontal padding.
    #[must_use]
    pub const fn new(page_width: f64, horizontal_padding: f64) -> Self {
        Self {
            page_width,
            horizontal_padding,
        }
    }

    /// Creates metrics from a page width and the per-item insets.
    #[must_use]
    pub fn from_insets(page_width: f64, item_inset: Insets) -> Self {
        Self::new(page_width, item_inset.x_value())
    }

    /// Returns `true` if pages have a finite, positive width.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.page_width.is_finite() && self.page_width > 0.0
    }

    /// Width left for an item that fills its own page.
    #[must_use]
    pub fn item_extent(&self) -> f64 {
        (self.page_width - self.horizontal_padding).max(0.0)
    }

    /// Height of a page showing an item of `scale` at its native aspect ratio.
    #[must_use]
    pub fn page_height(&self, scale: f64) -> f64 {
        self.item_extent() / scale
    }
}

/// The pair of breakpoint indices bounding a scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Page at or before the offset.
    pub begin: usize,
    /// Page after `begin`, clamped to the last page.
    pub end: usize,
}

impl Segment {
    /// Returns `true` when there is no neighbour to interpolate towards.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.begin == self.end
    }
}

/// Everything the layout pass needs for one scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// The scroll offset this sample was taken at.
    pub offset: f64,
    /// The page at or before `offset`.
    pub page: usize,
    /// Current content height.
    pub height: f64,
    /// Horizontal origin of the item cluster in scroll-content coordinates.
    pub x_offset: f64,
    /// Normalized scale factor, `height / page_width`.
    pub scale: f64,
}

/// Borrowed view over a [`ScaleCache`] that evaluates the interpolation.
///
/// Construction fails when there is nothing to interpolate, so every method
/// can assume at least one item and a usable page width.
#[derive(Clone, Copy, Debug)]
pub struct Interpolator<'a> {
    scales: &'a ScaleCache,
    metrics: PageMetrics,
}

impl<'a> Interpolator<'a> {
    /// Creates an interpolator, or `None` if `scales` is empty or the page
    /// width is not positive.
    #[must_use]
    pub fn new(scales: &'a ScaleCache, metrics: PageMetrics) -> Option<Self> {
        if scales.is_empty() || !metrics.is_usable() {
            return None;
        }
        Some(Self { scales, metrics })
    }

    /// Returns the page metrics.
    #[must_use]
    pub const fn metrics(&self) -> PageMetrics {
        self.metrics
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Always `false`; an interpolator is only built over a non-empty cache.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    fn last(&self) -> usize {
        self.scales.len() - 1
    }

    /// Scroll offset of the breakpoint for `index`.
    #[must_use]
    pub fn breakpoint(&self, index: usize) -> f64 {
        index as f64 * self.metrics.page_width
    }

    /// Largest meaningful scroll offset (the last breakpoint).
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.breakpoint(self.last())
    }

    /// Returns the breakpoints bounding `offset`.
    ///
    /// Negative (and NaN) offsets are treated as `0`; offsets past the last
    /// breakpoint map to the last page.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Ratio is non-negative and below `last` when cast"
    )]
    pub fn segment(&self, offset: f64) -> Segment {
        let last = self.last();
        let ratio = offset.max(0.0) / self.metrics.page_width;
        let begin = if ratio >= last as f64 {
            last
        } else {
            ratio.floor() as usize
        };
        Segment {
            begin,
            end: (begin + 1).min(last),
        }
    }

    /// Height of page `index` at its item's native aspect ratio.
    ///
    /// `index` is clamped to the last page.
    #[must_use]
    pub fn page_height(&self, index: usize) -> f64 {
        let i = index.min(self.last());
        self.metrics.page_height(self.scales.as_slice()[i])
    }

    /// Horizontal origin of the item cluster when resting on page `index`.
    ///
    /// This places item `index` exactly over its own page: every earlier item
    /// is drawn at page `index`'s height, so the cluster is shifted left by
    /// their combined width and padding.
    #[must_use]
    pub fn cumulative_offset(&self, index: usize) -> f64 {
        let i = index.min(self.last());
        let pages = i as f64;
        pages * self.metrics.page_width
            - (self.scales.sum_before(i) * self.page_height(i)
                + pages * self.metrics.horizontal_padding)
    }

    /// Content height at `offset`.
    #[must_use]
    pub fn height(&self, offset: f64) -> f64 {
        self.lerp(offset, Self::page_height)
    }

    /// Horizontal origin of the item cluster at `offset`.
    #[must_use]
    pub fn x_offset(&self, offset: f64) -> f64 {
        self.lerp(offset, Self::cumulative_offset)
    }

    /// Normalized scale factor at `offset`.
    #[must_use]
    pub fn scale(&self, offset: f64) -> f64 {
        self.height(offset) / self.metrics.page_width
    }

    /// Evaluates everything at once.
    #[must_use]
    pub fn sample(&self, offset: f64) -> Sample {
        let height = self.height(offset);
        Sample {
            offset,
            page: self.segment(offset).begin,
            height,
            x_offset: self.x_offset(offset),
            scale: height / self.metrics.page_width,
        }
    }

    fn lerp(&self, offset: f64, value_at: fn(&Self, usize) -> f64) -> f64 {
        let segment = self.segment(offset);
        let begin_y = value_at(self, segment.begin);
        if segment.is_degenerate() {
            return begin_y;
        }
        let end_y = value_at(self, segment.end);
        let begin_x = self.breakpoint(segment.begin);
        let end_x = self.breakpoint(segment.end);
        let slope = (end_y - begin_y) / (end_x - begin_x);
        slope * (offset.max(0.0) - begin_x) + begin_y
    }
}

#[cfg(test)]
mod tests {
    use super::{Interpolator, PageMetrics, Segment};
    use crate::ScaleCache;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn empty_or_zero_width_has_no_interpolator() {
        let empty = ScaleCache::new();
        assert!(Interpolator::new(&empty, PageMetrics::new(100.0, 0.0)).is_none());

        let scales = ScaleCache::from_raw([1.0]);
        assert!(Interpolator::new(&scales, PageMetrics::new(0.0, 0.0)).is_none());
        assert!(Interpolator::new(&scales, PageMetrics::new(-5.0, 0.0)).is_none());
        assert!(Interpolator::new(&scales, PageMetrics::new(f64::NAN, 0.0)).is_none());
    }

    #[test]
    fn segments_are_clamped() {
        let scales = ScaleCache::from_raw([1.0, 1.0, 1.0]);
        let interp = Interpolator::new(&scales, PageMetrics::new(100.0, 0.0)).unwrap();
        assert_eq!(interp.segment(-10.0), Segment { begin: 0, end: 1 });
        assert_eq!(interp.segment(0.0), Segment { begin: 0, end: 1 });
        assert_eq!(interp.segment(150.0), Segment { begin: 1, end: 2 });
        assert_eq!(interp.segment(200.0), Segment { begin: 2, end: 2 });
        assert_eq!(interp.segment(1e9), Segment { begin: 2, end: 2 });
        assert_eq!(interp.segment(f64::NAN), Segment { begin: 0, end: 1 });
    }

    #[test]
    fn uniform_scales_give_constant_height() {
        let scales = ScaleCache::from_raw([1.0, 1.0, 1.0]);
        let interp = Interpolator::new(&scales, PageMetrics::new(100.0, 0.0)).unwrap();
        for step in 0..=30 {
            let x = f64::from(step) * 10.0;
            assert!(close(interp.height(x), 100.0), "height at {x}");
            assert!(close(interp.scale(x), 1.0), "scale at {x}");
            assert!(close(interp.x_offset(x), 0.0), "x_offset at {x}");
        }
    }

    #[test]
    fn two_pages_interpolate_monotonically() {
        let scales = ScaleCache::from_raw([1.0, 2.0]);
        let interp = Interpolator::new(&scales, PageMetrics::new(100.0, 0.0)).unwrap();
        assert!(close(interp.height(0.0), 100.0));
        assert!(close(interp.height(100.0), 50.0));

        let mid = interp.height(50.0);
        assert!(mid > 50.0 && mid < 100.0, "mid height {mid}");
        assert!(close(mid, 75.0));

        let mut previous = interp.height(0.0);
        for step in 1..=10 {
            let h = interp.height(f64::from(step) * 10.0);
            assert!(h < previous, "height must shrink towards the wider item");
            previous = h;
        }
    }

    #[test]
    fn endpoints_use_native_page_height() {
        let scales = ScaleCache::from_raw([0.5, 1.5, 2.0, 0.75]);
        let metrics = PageMetrics::new(320.0, 4.0);
        let interp = Interpolator::new(&scales, metrics).unwrap();
        assert!(close(interp.height(0.0), (320.0 - 4.0) / 0.5));
        assert!(close(interp.height(interp.max_offset()), (320.0 - 4.0) / 0.75));
    }

    #[test]
    fn cumulative_offset_places_item_on_its_page() {
        // Resting on page k, item k starts at k * W + left, so the cluster
        // origin plus the widths and paddings of earlier items lands there.
        let scales = ScaleCache::from_raw([0.5, 1.5, 2.0, 0.75]);
        let metrics = PageMetrics::new(200.0, 10.0);
        let interp = Interpolator::new(&scales, metrics).unwrap();
        for k in 0..scales.len() {
            let x = interp.breakpoint(k);
            let height = interp.height(x);
            let before: f64 = scales.as_slice()[..k]
                .iter()
                .map(|s| s * height + metrics.horizontal_padding)
                .sum();
            assert!(close(interp.x_offset(x) + before, x), "page {k}");
        }
        assert_eq!(interp.cumulative_offset(0), 0.0);
    }

    #[test]
    fn continuous_across_breakpoints() {
        let scales = ScaleCache::from_raw([0.6, 1.9, 1.0, 0.8, 1.4]);
        let interp = Interpolator::new(&scales, PageMetrics::new(375.0, 8.0)).unwrap();
        let delta = 1e-7;
        for k in 1..scales.len() - 1 {
            let x = interp.breakpoint(k);
            assert!((interp.height(x - delta) - interp.height(x + delta)).abs() < 1e-4);
            assert!((interp.x_offset(x - delta) - interp.x_offset(x + delta)).abs() < 1e-4);
        }
    }

    #[test]
    fn single_item_height_is_constant() {
        let scales = ScaleCache::from_raw([1.6]);
        let interp = Interpolator::new(&scales, PageMetrics::new(300.0, 6.0)).unwrap();
        let native = (300.0 - 6.0) / 1.6;
        assert_eq!(interp.segment(0.0), Segment { begin: 0, end: 0 });
        for x in [0.0, 10.0, 150.0, 300.0, -20.0] {
            assert!(close(interp.height(x), native), "height at {x}");
            assert!(close(interp.x_offset(x), 0.0), "x_offset at {x}");
        }
    }

    #[test]
    fn sample_matches_individual_queries() {
        let scales = ScaleCache::from_raw([1.0, 2.0, 0.5]);
        let interp = Interpolator::new(&scales, PageMetrics::new(100.0, 4.0)).unwrap();
        let sample = interp.sample(130.0);
        assert_eq!(sample.page, 1);
        assert_eq!(sample.height, interp.height(130.0));
        assert_eq!(sample.x_offset, interp.x_offset(130.0));
        assert!(close(sample.scale, interp.scale(130.0)));
    }
}
