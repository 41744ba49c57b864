// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame assignment for a single row of items.

use kurbo::{Insets, Rect};

use crate::Sample;

/// Iterator over item frames for one [`Sample`], left to right.
///
/// Frames are in scroll-content coordinates. Every item is `sample.height`
/// tall and `scale * sample.height` wide, and occupies a slot that also
/// includes its left and right item inset. The first slot starts at
/// `sample.x_offset`; each following slot starts where the previous one ends.
#[derive(Clone, Debug)]
pub struct ItemFrames<'a> {
    scales: core::slice::Iter<'a, f64>,
    height: f64,
    insets: Insets,
    // Right edge of the previous slot, including its right inset.
    cursor: f64,
}

impl<'a> ItemFrames<'a> {
    /// Lays out `scales` for `sample` with the given item insets.
    #[must_use]
    pub fn new(scales: &'a [f64], sample: &Sample, insets: Insets) -> Self {
        Self {
            scales: scales.iter(),
            // `page_width * sample.scale` without the round trip.
            height: sample.height,
            insets,
            cursor: sample.x_offset,
        }
    }
}

impl Iterator for ItemFrames<'_> {
    type Item = Rect;

    fn next(&mut self) -> Option<Rect> {
        let scale = *self.scales.next()?;
        let x0 = self.cursor + self.insets.x0;
        let y0 = self.insets.y0;
        let frame = Rect::new(x0, y0, x0 + scale * self.height, y0 + self.height);
        self.cursor = frame.x1 + self.insets.x1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.scales.size_hint()
    }
}

impl ExactSizeIterator for ItemFrames<'_> {}

/// Height of the container after placing items, given the last placed frame.
///
/// The height is driven by placed geometry rather than recomputed, so the
/// container always matches its items.
#[must_use]
pub fn container_height(last_frame: Rect, insets: Insets) -> f64 {
    last_frame.y1 + insets.y1
}
