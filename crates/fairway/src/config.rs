//! Configuration types for Fairway diagram layout and rendering.
//!
//! All types implement [`serde::Deserialize`] so configuration can be loaded
//! from external sources (the CLI loads TOML files).
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Deterministic layout metrics (lane geometry, cursor step, shape sizes).
//! - [`StyleConfig`] - Visual styling options such as background color.
//!
//! The layout defaults reproduce the original spreadsheet geometry: 75-unit
//! lane rows, a 150-unit header column, 150x50 task rectangles placed every
//! 175 units.

use serde::Deserialize;

use fairway_core::color::Color;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Deterministic layout metrics.
///
/// Spacing is constant and independent of shape text, so shapes never
/// overlap regardless of label length.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of one lane band.
    lane_height: f32,

    /// Width of the lane-header column.
    header_width: f32,

    /// Margin between the header column (or previous cursor stop) and a shape.
    left_margin: f32,

    /// Horizontal distance the lane cursor advances per placed shape.
    horizontal_step: f32,

    /// Width of every task shape.
    shape_width: f32,

    /// Height of a rectangle task shape.
    shape_height: f32,

    /// Vertical inset of rectangles from the lane top.
    shape_inset: f32,
}

impl LayoutConfig {
    /// Returns the height of one lane band.
    pub fn lane_height(&self) -> f32 {
        self.lane_height
    }

    /// Returns the width of the lane-header column.
    pub fn header_width(&self) -> f32 {
        self.header_width
    }

    /// Returns the left margin applied before the first shape of a lane.
    pub fn left_margin(&self) -> f32 {
        self.left_margin
    }

    /// Returns the fixed horizontal cursor step.
    pub fn horizontal_step(&self) -> f32 {
        self.horizontal_step
    }

    /// Returns the width of every task shape.
    pub fn shape_width(&self) -> f32 {
        self.shape_width
    }

    /// Returns the height of a rectangle task shape.
    pub fn shape_height(&self) -> f32 {
        self.shape_height
    }

    /// Returns the vertical inset of rectangles from the lane top.
    pub fn shape_inset(&self) -> f32 {
        self.shape_inset
    }

    /// Returns the height of a diamond (decision) shape.
    ///
    /// Diamonds are half again as tall as rectangles and sit at the lane
    /// top, filling the band.
    pub fn diamond_height(&self) -> f32 {
        self.shape_height * 1.5
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            lane_height: 75.0,
            header_width: 150.0,
            left_margin: 15.0,
            horizontal_step: 175.0,
            shape_width: 150.0,
            shape_height: 50.0,
            shape_inset: 15.0,
        }
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Default background [`Color`] for diagrams, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
    }
}
