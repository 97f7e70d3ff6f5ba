//! The fixed stage-to-color palette.
//!
//! Stages are an enumerated configuration: each known stage name maps to a
//! specific fill color. A stage value outside this set is a configuration
//! gap surfaced as [`UnknownStageError`] rather than silently defaulted,
//! since silent defaulting would mask authoring mistakes in the source table.

use thiserror::Error;

use crate::color::Color;

/// Error returned when a stage name has no entry in the palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("stage '{stage}' is not in the color configuration")]
pub struct UnknownStageError {
    stage: String,
}

impl UnknownStageError {
    /// Returns the offending stage name.
    pub fn stage(&self) -> &str {
        &self.stage
    }
}

/// Mapping from stage names to fill colors.
///
/// The default palette carries the six migration stages with their fixed
/// colors; the entry order is stable.
#[derive(Debug, Clone, PartialEq)]
pub struct StagePalette {
    entries: Vec<(String, Color)>,
}

impl StagePalette {
    /// Creates a palette from explicit `(stage, color)` entries.
    pub fn new(entries: Vec<(String, Color)>) -> Self {
        Self { entries }
    }

    /// Looks up the fill color for a stage.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStageError`] if the stage is not configured.
    pub fn color_for(&self, stage: &str) -> Result<&Color, UnknownStageError> {
        self.entries
            .iter()
            .find(|(name, _)| name == stage)
            .map(|(_, color)| color)
            .ok_or_else(|| UnknownStageError {
                stage: stage.to_string(),
            })
    }

    /// Returns `true` if the stage is configured.
    pub fn contains(&self, stage: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == stage)
    }

    /// Iterates over the configured `(stage, color)` entries in order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Color)> {
        self.entries
            .iter()
            .map(|(name, color)| (name.as_str(), color))
    }
}

impl Default for StagePalette {
    fn default() -> Self {
        let entries = [
            ("Planning", "#C04F15"),       // Orange
            ("Prepare Target", "#223861"), // Dark teal
            ("Prepare Source", "#6d7178"), // Gray
            ("Migrate", "#c00000"),        // Red
            ("Cutover", "#43186e"),        // Dark purple
            ("Closure", "#508021"),        // Green
        ];

        Self {
            entries: entries
                .into_iter()
                .map(|(name, hex)| {
                    let color = Color::new(hex).expect("default palette colors are valid hex");
                    (name.to_string(), color)
                })
                .collect(),
        }
    }
}
