// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pager configuration.

use kurbo::Insets;

use crate::ConfigError;

/// Outer and per-item spacing for a [`ResizablePager`](crate::ResizablePager).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PagerConfig {
    /// Margin between the pager's edges and its scroll surface, applied on
    /// both the left and the right.
    pub horizontal_inset: f64,
    /// Spacing around every item: `x0` left, `y0` top, `x1` right, `y1` bottom.
    pub item_inset: Insets,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            horizontal_inset: 16.0,
            item_inset: Insets::new(2.0, 0.0, 2.0, 0.0),
        }
    }
}

impl PagerConfig {
    /// Returns the configuration with a different horizontal inset.
    #[must_use]
    pub fn with_horizontal_inset(mut self, inset: f64) -> Self {
        self.horizontal_inset = inset;
        self
    }

    /// Returns the configuration with a different item inset.
    #[must_use]
    pub fn with_item_inset(mut self, inset: Insets) -> Self {
        self.item_inset = inset;
        self
    }

    /// Checks that every inset is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_inset(self.horizontal_inset) {
            return Err(ConfigError::HorizontalInset(self.horizontal_inset));
        }
        let edges = [
            ("top", self.item_inset.y0),
            ("left", self.item_inset.x0),
            ("bottom", self.item_inset.y1),
            ("right", self.item_inset.x1),
        ];
        for (edge, value) in edges {
            if !is_valid_inset(value) {
                return Err(ConfigError::ItemInset { edge, value });
            }
        }
        Ok(())
    }
}

fn is_valid_inset(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use kurbo::Insets;

    use super::PagerConfig;
    use crate::ConfigError;

    #[test]
    fn default_is_valid() {
        let config = PagerConfig::default();
        assert_eq!(config.horizontal_inset, 16.0);
        assert_eq!(config.item_inset.x_value(), 4.0);
        assert_eq!(config.item_inset.y_value(), 0.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_insets() {
        let config = PagerConfig::default().with_horizontal_inset(-1.0);
        assert_eq!(config.validate(), Err(ConfigError::HorizontalInset(-1.0)));

        let config = PagerConfig::default().with_item_inset(Insets::new(0.0, 0.0, 0.0, -3.0));
        assert_eq!(
            config.validate(),
            Err(ConfigError::ItemInset {
                edge: "bottom",
                value: -3.0
            })
        );

        let config =
            PagerConfig::default().with_item_inset(Insets::new(f64::INFINITY, 0.0, 0.0, 0.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ItemInset { edge: "left", .. })
        ));
    }

    #[test]
    fn nan_horizontal_inset_is_rejected() {
        let config = PagerConfig::default().with_horizontal_inset(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::HorizontalInset(v)) if v.is_nan()
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_with_defaults() {
        let config: PagerConfig = serde_json::from_str(r#"{ "horizontal_inset": 8.0 }"#).unwrap();
        assert_eq!(config.horizontal_inset, 8.0);
        assert_eq!(config.item_inset, PagerConfig::default().item_inset);

        let json = serde_json::to_string(&config).unwrap();
        let back: PagerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
