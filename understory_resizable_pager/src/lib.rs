// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_resizable_pager --heading-base-level=0

//! Understory Resizable Pager: a horizontal pager whose height follows its items.
//!
//! Each item has an intrinsic width/height *scale*. Resting on page `k`, the
//! pager is exactly as tall as item `k` needs to fill its page at its native
//! aspect ratio; while scrolling between pages the height, the horizontal
//! origin of the item row, and every item frame are interpolated linearly, so
//! the strip grows and shrinks smoothly.
//!
//! The crate is headless. It does not draw, animate or receive input itself;
//! host frameworks are responsible for:
//!
//! - Implementing [`PagerProvider`] to supply the item count, scales and views.
//! - Forwarding geometry changes ([`ResizablePager::set_geometry`]) and scroll
//!   events ([`ResizablePager::set_scroll_offset`]).
//! - Reading back [`PagerItem::frame`] for each of
//!   [`ResizablePager::visible_items`] and positioning their views.
//! - Resizing whatever encloses the pager when
//!   [`PagerProvider::on_height_will_change`] fires.
//!
//! The core pieces are:
//!
//! - [`ScaleCache`]: sanitized per-item scales with cumulative sums.
//! - [`Interpolator`]: maps a scroll offset to a height, a row origin and a
//!   normalized scale ([`Sample`]).
//! - [`ItemFrames`]: turns a [`Sample`] into item frames.
//! - [`ResizablePager`]: binds a provider and keeps all of the above in sync.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_resizable_pager::{PagerProvider, ResizablePager};
//!
//! struct Photos {
//!     aspect: Vec<f64>,
//! }
//!
//! impl PagerProvider for Photos {
//!     type View = usize;
//!
//!     fn item_count(&self) -> usize {
//!         self.aspect.len()
//!     }
//!     fn scale_for_item(&self, index: usize) -> f64 {
//!         self.aspect[index]
//!     }
//!     fn view_for_item(&mut self, index: usize) -> usize {
//!         index
//!     }
//!     fn on_height_will_change(&mut self, _height: f64) {}
//! }
//!
//! // 232 wide with the default 16pt margins: pages are 200 wide.
//! let mut pager = ResizablePager::new(Rect::new(0.0, 0.0, 232.0, 100.0));
//! pager.set_provider(Some(Photos { aspect: vec![1.0, 2.0] }));
//!
//! // Default item insets are 2pt left and right, so page 0 is (200 - 4) / 1 tall.
//! assert!((pager.frame().height() - 196.0).abs() < 1e-9);
//!
//! // Half way to the wider item the pager is half way to its height.
//! pager.set_scroll_offset(100.0);
//! assert!((pager.frame().height() - 147.0).abs() < 1e-9);
//! ```
//!
//! The interpolation is also available on its own, without a pager:
//!
//! ```rust
//! use understory_resizable_pager::{Interpolator, PageMetrics, ScaleCache};
//!
//! let scales = ScaleCache::from_raw([1.0, 2.0]);
//! let interp = Interpolator::new(&scales, PageMetrics::new(100.0, 0.0)).unwrap();
//! assert_eq!(interp.height(0.0), 100.0);
//! assert_eq!(interp.height(50.0), 75.0);
//! assert_eq!(interp.height(100.0), 50.0);
//! ```
//!
//! All work happens synchronously on the caller's thread. A layout pass is
//! O(item count), so the pager suits strips of tens of items, not thousands.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod interpolate;
mod layout;
mod pager;
mod provider;
mod scale_cache;

pub use config::PagerConfig;
pub use error::ConfigError;
pub use interpolate::{Interpolator, PageMetrics, Sample, Segment};
pub use layout::{ItemFrames, container_height};
pub use pager::{PagerHit, PagerItem, ResizablePager};
pub use provider::PagerProvider;
pub use scale_cache::{FALLBACK_SCALE, ScaleCache, sanitize_scale};
