// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The collaborator that supplies items and observes the pager.

/// Supplies items to a [`ResizablePager`](crate::ResizablePager) and receives
/// its notifications.
///
/// The pager never owns the host's data: it asks for the item count, each
/// item's scale and each item's view during a reload, and calls back when its
/// height changes or an item is tapped. Implement this on whatever handle your
/// host wants to inject; the forwarding impl for `&mut T` lets a host lend its
/// own state without giving up ownership.
pub trait PagerProvider {
    /// Host-side view (widget, node id, label...) displayed for one item.
    type View;

    /// Number of items.
    fn item_count(&self) -> usize;

    /// Intrinsic width/height scale of the item at `index`.
    ///
    /// Values that are not finite and positive are replaced with `1.0`.
    fn scale_for_item(&self, index: usize) -> f64;

    /// Produces the view for the item at `index`.
    ///
    /// The pager keeps the view until the next reload, then returns it through
    /// [`PagerProvider::on_view_removed`].
    fn view_for_item(&mut self, index: usize) -> Self::View;

    /// Called whenever the pager's height changes to `height`.
    fn on_height_will_change(&mut self, height: f64);

    /// Called when the item at `index` is tapped. Does nothing by default.
    fn on_item_clicked(&mut self, index: usize) {
        let _ = index;
    }

    /// Hands back a view the pager no longer displays. Drops it by default.
    fn on_view_removed(&mut self, index: usize, view: Self::View) {
        let _ = (index, view);
    }
}

impl<T: PagerProvider + ?Sized> PagerProvider for &mut T {
    type View = T::View;

    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn scale_for_item(&self, index: usize) -> f64 {
        (**self).scale_for_item(index)
    }

    fn view_for_item(&mut self, index: usize) -> Self::View {
        (**self).view_for_item(index)
    }

    fn on_height_will_change(&mut self, height: f64) {
        (**self).on_height_will_change(height);
    }

    fn on_item_clicked(&mut self, index: usize) {
        (**self).on_item_clicked(index);
    }

    fn on_view_removed(&mut self, index: usize, view: Self::View) {
        (**self).on_view_removed(index, view);
    }
}
