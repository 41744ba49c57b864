// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pager component: provider binding, scroll state and frame application.

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Point, Rect, Size};

use crate::{
    ConfigError, Interpolator, ItemFrames, PageMetrics, PagerConfig, PagerProvider, ScaleCache,
    container_height,
};

/// One materialized item: the provider's view and the frame assigned to it.
#[derive(Clone, Debug)]
pub struct PagerItem<V> {
    view: V,
    frame: Rect,
}

impl<V> PagerItem<V> {
    /// The view supplied by the provider.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the view, e.g. to update its content in place.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Frame in scroll-content coordinates from the last layout pass.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }
}

/// Result of [`ResizablePager::hit_test`].
///
/// A hit inside the pager always belongs to its scroll surface; the pager
/// itself never claims the interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagerHit {
    /// The hit point in scroll-content coordinates (the space of item frames).
    pub content_point: Point,
    /// Index of the item under the point, if any.
    pub item: Option<usize>,
}

/// A horizontally paged strip whose height follows the scales of its items.
///
/// The pager owns scroll state, the [`ScaleCache`], and the views handed to it
/// by its [`PagerProvider`]. Every mutation that affects geometry goes through
/// an explicit setter which re-runs layout and reports height changes to the
/// provider:
///
/// - [`ResizablePager::set_provider`], [`ResizablePager::set_config`] and the
///   inset setters reload all items.
/// - [`ResizablePager::set_scroll_offset`] (and the helpers built on it)
///   re-lays out at the new offset; hosts call it on every scroll event.
/// - [`ResizablePager::set_geometry`] resizes the scroll surface.
///
/// All geometry is in the pager's local coordinate space unless noted.
pub struct ResizablePager<P: PagerProvider> {
    provider: Option<P>,
    config: PagerConfig,
    origin: Point,
    size: Size,
    scroll_offset: f64,
    scales: ScaleCache,
    items: Vec<PagerItem<P::View>>,
}

impl<P: PagerProvider> fmt::Debug for ResizablePager<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizablePager")
            .field("has_provider", &self.provider.is_some())
            .field("config", &self.config)
            .field("frame", &self.frame())
            .field("scroll_offset", &self.scroll_offset)
            .field("scales", &self.scales)
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}

impl<P: PagerProvider> ResizablePager<P> {
    /// Creates an unbound pager with the default configuration.
    #[must_use]
    pub fn new(frame: Rect) -> Self {
        Self {
            provider: None,
            config: PagerConfig::default(),
            origin: frame.origin(),
            size: frame.size(),
            scroll_offset: 0.0,
            scales: ScaleCache::new(),
            items: Vec::new(),
        }
    }

    /// Creates an unbound pager with a validated configuration.
    pub fn with_config(frame: Rect, config: PagerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut pager = Self::new(frame);
        pager.config = config;
        Ok(pager)
    }

    // --- Provider -------------------------------------------------------

    /// Returns the bound provider, if any.
    #[must_use]
    pub fn provider(&self) -> Option<&P> {
        self.provider.as_ref()
    }

    /// Returns the bound provider mutably, if any.
    ///
    /// Call [`ResizablePager::reload_data`] after changing the data it serves.
    pub fn provider_mut(&mut self) -> Option<&mut P> {
        self.provider.as_mut()
    }

    /// Binds a new provider (or none) and reloads, returning the previous one.
    ///
    /// Views created by the previous provider are handed back to it before
    /// the swap.
    pub fn set_provider(&mut self, provider: Option<P>) -> Option<P> {
        self.release_items();
        let previous = core::mem::replace(&mut self.provider, provider);
        tracing::debug!(bound = self.provider.is_some(), "pager provider changed");
        self.reload_data();
        previous
    }

    /// Unbinds and returns the provider, releasing its views to it first.
    pub fn take_provider(&mut self) -> Option<P> {
        self.set_provider(None)
    }

    // --- Configuration --------------------------------------------------

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> PagerConfig {
        self.config
    }

    /// Replaces the configuration and reloads.
    ///
    /// An invalid configuration is rejected and leaves the pager untouched.
    pub fn set_config(&mut self, config: PagerConfig) -> Result<(), ConfigError> {
        config
            .validate()
            .inspect_err(|err| tracing::warn!(%err, "rejected pager configuration"))?;
        self.config = config;
        self.reload_data();
        Ok(())
    }

    /// Sets the margin between the pager's edges and its scroll surface.
    pub fn set_horizontal_inset(&mut self, inset: f64) -> Result<(), ConfigError> {
        self.set_config(self.config.with_horizontal_inset(inset))
    }

    /// Sets the spacing around every item.
    pub fn set_item_inset(&mut self, inset: kurbo::Insets) -> Result<(), ConfigError> {
        self.set_config(self.config.with_item_inset(inset))
    }

    // --- Geometry -------------------------------------------------------

    /// The pager's frame in its parent's coordinate space.
    #[must_use]
    pub fn frame(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// The pager's bounds in its own coordinate space.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.size)
    }

    /// The scroll surface: the bounds inset horizontally by
    /// [`PagerConfig::horizontal_inset`] on both sides.
    #[must_use]
    pub fn surface_frame(&self) -> Rect {
        let inset = self.config.horizontal_inset;
        let x1 = (self.size.width - inset).max(inset);
        Rect::new(inset, 0.0, x1, self.size.height)
    }

    /// Width of one page (the scroll surface width).
    #[must_use]
    pub fn page_width(&self) -> f64 {
        self.surface_frame().width()
    }

    /// Page metrics for the current geometry and item inset.
    #[must_use]
    pub fn metrics(&self) -> PageMetrics {
        PageMetrics::from_insets(self.page_width(), self.config.item_inset)
    }

    /// Total scrollable content width: one page per item.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.items.len() as f64 * self.page_width()
    }

    /// Moves and resizes the pager.
    ///
    /// A height change is reported to the provider. A width change resizes
    /// the pages, keeps the scroll position on the same fraction of a page,
    /// and re-lays out the items.
    pub fn set_geometry(&mut self, frame: Rect) {
        let old_size = self.size;
        let old_page_width = self.page_width();
        self.origin = frame.origin();
        self.size = frame.size();

        if self.size.height != old_size.height {
            self.notify_height(self.size.height);
        }
        if self.size.width != old_size.width {
            if old_page_width > 0.0 {
                self.scroll_offset = self.scroll_offset / old_page_width * self.page_width();
            }
            self.scroll_offset = self.clamp_offset(self.scroll_offset);
            self.apply_layout();
        }
    }

    // --- Scrolling ------------------------------------------------------

    /// Current horizontal scroll offset in scroll-content coordinates.
    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Largest scroll offset: the start of the last page.
    #[must_use]
    pub fn max_scroll_offset(&self) -> f64 {
        self.items.len().saturating_sub(1) as f64 * self.page_width()
    }

    /// Jumps to `offset` without animation and re-lays out immediately.
    ///
    /// The offset is clamped to `0..=max_scroll_offset()`.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = self.clamp_offset(offset);
        self.apply_layout();
    }

    /// Adjusts the scroll offset by `delta`.
    pub fn scroll_by(&mut self, delta: f64) {
        self.set_scroll_offset(self.scroll_offset + delta);
    }

    /// Jumps to the start of page `index`, clamped to the last page.
    pub fn scroll_to_page(&mut self, index: usize) {
        let page = index.min(self.items.len().saturating_sub(1));
        self.set_scroll_offset(page as f64 * self.page_width());
    }

    /// The page at or before the current offset.
    #[must_use]
    pub fn current_page(&self) -> Option<usize> {
        let interp = self.interpolator()?;
        Some(interp.segment(self.scroll_offset).begin)
    }

    /// The page whose start is closest to the current offset.
    #[must_use]
    pub fn nearest_page(&self) -> Option<usize> {
        let interp = self.interpolator()?;
        let segment = interp.segment(self.scroll_offset);
        let into_page = self.scroll_offset - interp.breakpoint(segment.begin);
        if into_page * 2.0 >= interp.metrics().page_width {
            Some(segment.end)
        } else {
            Some(segment.begin)
        }
    }

    /// Snaps the offset to the nearest page, as a paging scroll view does
    /// when a drag ends. Returns the page settled on.
    pub fn settle(&mut self) -> Option<usize> {
        let page = self.nearest_page()?;
        self.scroll_to_page(page);
        Some(page)
    }

    fn clamp_offset(&self, offset: f64) -> f64 {
        // `max` first so NaN lands on 0.
        offset.max(0.0).min(self.max_scroll_offset())
    }

    // --- Items ----------------------------------------------------------

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The materialized items, in index order.
    #[must_use]
    pub fn visible_items(&self) -> &[PagerItem<P::View>] {
        &self.items
    }

    /// The sanitized scales, parallel to [`ResizablePager::visible_items`].
    #[must_use]
    pub fn scales(&self) -> &ScaleCache {
        &self.scales
    }

    /// Interpolator over the current scales and metrics, if there is
    /// anything to lay out.
    #[must_use]
    pub fn interpolator(&self) -> Option<Interpolator<'_>> {
        Interpolator::new(&self.scales, self.metrics())
    }

    /// Rebuilds every item from the provider and lays them out at the
    /// current offset.
    ///
    /// Without a provider this does nothing.
    pub fn reload_data(&mut self) {
        let Some(provider) = self.provider.as_mut() else {
            return;
        };
        let count = provider.item_count();

        for (index, item) in self.items.drain(..).enumerate() {
            provider.on_view_removed(index, item.view);
        }
        self.scales.clear();

        self.items.reserve(count);
        for index in 0..count {
            self.scales.push(provider.scale_for_item(index));
            let view = provider.view_for_item(index);
            self.items.push(PagerItem {
                view,
                frame: Rect::ZERO,
            });
        }
        tracing::debug!(count, page_width = self.page_width(), "reloaded pager items");

        self.scroll_offset = self.clamp_offset(self.scroll_offset);
        self.apply_layout();
    }

    fn release_items(&mut self) {
        let items = core::mem::take(&mut self.items);
        self.scales.clear();
        if let Some(provider) = self.provider.as_mut() {
            for (index, item) in items.into_iter().enumerate() {
                provider.on_view_removed(index, item.view);
            }
        }
    }

    // --- Layout ---------------------------------------------------------

    fn apply_layout(&mut self) {
        let metrics = self.metrics();
        let Some(interp) = Interpolator::new(&self.scales, metrics) else {
            return;
        };
        let sample = interp.sample(self.scroll_offset);
        let insets = self.config.item_inset;
        let frames = ItemFrames::new(self.scales.as_slice(), &sample, insets);

        let mut last = None;
        for (item, frame) in self.items.iter_mut().zip(frames) {
            item.frame = frame;
            last = Some(frame);
        }
        if let Some(last) = last {
            self.set_height(container_height(last, insets));
        }
    }

    fn set_height(&mut self, height: f64) {
        if height == self.size.height {
            return;
        }
        tracing::trace!(from = self.size.height, to = height, "pager height changed");
        self.size.height = height;
        self.notify_height(height);
    }

    fn notify_height(&mut self, height: f64) {
        if let Some(provider) = self.provider.as_mut() {
            provider.on_height_will_change(height);
        }
    }

    // --- Interaction ----------------------------------------------------

    /// Routes a point in the pager's local coordinates.
    ///
    /// Points inside the bounds go to the scroll surface and come back in
    /// scroll-content coordinates along with the item under them; points
    /// outside return `None`.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<PagerHit> {
        if !self.bounds().contains(point) {
            return None;
        }
        let surface = self.surface_frame();
        let content_point = Point::new(
            point.x - surface.x0 + self.scroll_offset,
            point.y - surface.y0,
        );
        let item = self
            .items
            .iter()
            .position(|item| item.frame.contains(content_point));
        Some(PagerHit {
            content_point,
            item,
        })
    }

    /// Handles a tap on the scroll surface.
    ///
    /// The tapped index is the current page, `floor(offset / page_width)`.
    /// It is reported to the provider and returned; with no items nothing is
    /// reported.
    pub fn tap(&mut self) -> Option<usize> {
        let index = self.current_page()?;
        tracing::debug!(index, "pager item clicked");
        if let Some(provider) = self.provider.as_mut() {
            provider.on_item_clicked(index);
        }
        Some(index)
    }

    /// Hit tests `point` and taps if it lands inside the pager.
    pub fn tap_at(&mut self, point: Point) -> Option<usize> {
        self.hit_test(point)?;
        self.tap()
    }
}
