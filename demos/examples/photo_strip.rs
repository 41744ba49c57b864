// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A header strip of photos with mixed aspect ratios.
//!
//! This example drives a `ResizablePager` the way a host UI would:
//! - it binds a provider that hands out labelled "cells",
//! - feeds a sequence of scroll events as if the user dragged across pages,
//! - settles on a page when the drag ends, and taps it,
//! - and resizes its "table header" whenever the pager reports a new height.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example photo_strip`

use kurbo::{Insets, Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_resizable_pager::{PagerConfig, PagerProvider, ResizablePager};

/// Stand-in for a host widget.
#[derive(Debug)]
struct Cell {
    label: String,
}

/// The host: owns the photo data and the header height it lays out around.
#[derive(Debug)]
struct Gallery {
    aspect_ratios: Vec<f64>,
    header_height: f64,
    recycled: Vec<Cell>,
}

impl PagerProvider for Gallery {
    type View = Cell;

    fn item_count(&self) -> usize {
        self.aspect_ratios.len()
    }

    fn scale_for_item(&self, index: usize) -> f64 {
        self.aspect_ratios[index]
    }

    fn view_for_item(&mut self, index: usize) -> Cell {
        let label = format!("#{index} ({:.2})", self.aspect_ratios[index]);
        match self.recycled.pop() {
            Some(mut cell) => {
                cell.label = label;
                cell
            }
            None => Cell { label },
        }
    }

    fn on_height_will_change(&mut self, height: f64) {
        self.header_height = height;
    }

    fn on_item_clicked(&mut self, index: usize) {
        println!("clicked photo {index}");
    }

    fn on_view_removed(&mut self, _index: usize, view: Cell) {
        self.recycled.push(view);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut gallery = Gallery {
        // Includes a zero, which the pager treats as 1.0.
        aspect_ratios: vec![1.5, 0.75, 2.0, 0.0, 1.2, 0.6],
        header_height: 0.0,
        recycled: Vec::new(),
    };

    let config = PagerConfig::default().with_item_inset(Insets::new(5.0, 0.0, 5.0, 10.0));
    let screen_width = 375.0;
    let mut pager = ResizablePager::with_config(
        Rect::new(0.0, 0.0, screen_width, screen_width / 2.0),
        config,
    )
    .expect("demo configuration is valid");
    pager.set_provider(Some(&mut gallery));

    let page = pager.page_width();
    println!(
        "{} photos, page width {page}, content width {}",
        pager.len(),
        pager.content_width()
    );

    // A drag from the first page to two and a half pages in.
    let target = page * 2.5;
    let steps = 10;
    for step in 0..=steps {
        pager.set_scroll_offset(target * f64::from(step) / f64::from(steps));
        let frames: Vec<String> = pager
            .visible_items()
            .iter()
            .take(4)
            .map(|item| {
                let f = item.frame();
                format!("{}@{:.0}x{:.0}", item.view().label, f.x0, f.width())
            })
            .collect();
        println!(
            "offset {:>7.1}  height {:>6.1}  {}",
            pager.scroll_offset(),
            pager.frame().height(),
            frames.join("  ")
        );
    }

    // Drag ends: snap like a paging scroll view, then tap the middle.
    if let Some(settled) = pager.settle() {
        tracing::info!(settled, offset = pager.scroll_offset(), "drag ended");
    }
    let middle = Point::new(screen_width / 2.0, pager.frame().height() / 2.0);
    if let Some(hit) = pager.hit_test(middle) {
        println!("hit {:?} at {:?}", hit.item, hit.content_point);
    }
    pager.tap_at(middle);

    // Rotate to landscape.
    pager.set_geometry(Rect::new(0.0, 0.0, 812.0, pager.frame().height()));
    println!(
        "landscape: page width {}, height {:.1}",
        pager.page_width(),
        pager.frame().height()
    );

    // Unbinding hands every cell back to the gallery.
    pager.take_provider();
    drop(pager);
    println!(
        "header height {:.1}, {} cells recycled",
        gallery.header_height,
        gallery.recycled.len()
    );
}
