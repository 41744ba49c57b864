// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

/// A rejected [`PagerConfig`](crate::PagerConfig) value.
///
/// Insets must be finite and non-negative; anything else would produce
/// negative or NaN geometry.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The outer horizontal inset is negative or not finite.
    #[error("horizontal inset must be finite and non-negative; got {0}")]
    HorizontalInset(f64),
    /// One edge of the item inset is negative or not finite.
    #[error("item inset `{edge}` must be finite and non-negative; got {value}")]
    ItemInset {
        /// Which edge was rejected (`top`, `left`, `bottom` or `right`).
        edge: &'static str,
        /// The rejected value.
        value: f64,
    },
}
