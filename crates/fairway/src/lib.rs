//! Fairway - swimlane process-flow diagrams from ordered task tables.
//!
//! Fairway turns a flat, ordered table of tasks (id, stage, label, type,
//! owner persona, dependencies) into a positioned diagram: one horizontal
//! lane per distinct persona, one shape per task placed left-to-right in
//! table order, and directed connectors for dependencies, optionally
//! annotated with a decision-branch label.

pub mod config;
pub mod export;
pub mod layout;

mod error;

pub use fairway_core::{color, diagnostic, diagram, geometry, stage, task};
pub use fairway_parser::{DependencyReference, ParseError, decode, parse_table};

pub use error::FairwayError;
pub use export::RenderAdapter;

use log::{debug, info};

use fairway_core::{stage::StagePalette, task::TaskRow};

use config::AppConfig;
use layout::{Diagram, LaneMap};

/// Builder for parsing, laying out, and rendering swimlane diagrams.
///
/// The builder holds configuration only; every build is an independent pass
/// over the rows it is given, so one builder can process any number of
/// tables and repeated builds of the same rows yield identical diagrams.
///
/// # Examples
///
/// ```rust
/// use fairway::SwimlaneBuilder;
///
/// let source = "TaskID\tStage\tTask\tType\tInput\tOutput\tOwnerPersona\tDependsOn\n\
///               1\tPlanning\tKickoff\tTask\t\t\tAlice\t\n\
///               2\tMigrate\tMigrate\tTask\t\t\tBob\t1\n###END_OF_DATA###";
///
/// let builder = SwimlaneBuilder::default();
/// let rows = builder.parse(source).expect("valid table");
/// let diagram = builder.build(&rows);
/// assert_eq!(diagram.shapes().len(), 2);
///
/// let svg = builder.render_svg(&diagram).expect("rendering succeeds");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Default)]
pub struct SwimlaneBuilder {
    config: AppConfig,
    palette: StagePalette,
}

impl SwimlaneBuilder {
    /// Create a new builder with the given configuration and the default
    /// stage palette.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            palette: StagePalette::default(),
        }
    }

    /// Replace the stage palette (builder style).
    pub fn with_palette(mut self, palette: StagePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Returns the builder's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a tab-separated task table into its ordered rows.
    ///
    /// # Errors
    ///
    /// Returns [`FairwayError::Parse`] if the table's start or end marker
    /// is missing.
    pub fn parse(&self, source: &str) -> Result<Vec<TaskRow>, FairwayError> {
        let rows = fairway_parser::parse_table(source)?;
        debug!(row_count = rows.len(); "Parsed task table");
        Ok(rows)
    }

    /// Lay out the diagram for the given rows.
    ///
    /// Lane assignment runs first (one pass, first-appearance order), then
    /// the build pass places shapes and resolves connectors. Row-level
    /// problems are reported via [`Diagram::diagnostics`], not as errors.
    pub fn build(&self, rows: &[TaskRow]) -> Diagram {
        let lanes = LaneMap::assign(rows);
        debug!(lane_count = lanes.len(); "Assigned lanes");

        let diagram = layout::build(rows, &lanes, &self.palette, self.config.layout());
        info!(
            shape_count = diagram.shapes().len(),
            connector_count = diagram.connectors().len(),
            diagnostic_count = diagram.diagnostics().len();
            "Built diagram"
        );
        diagram
    }

    /// Render a built diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`FairwayError::Export`] if rendering fails (for example an
    /// invalid configured background color).
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, FairwayError> {
        let renderer = export::svg::Svg::new(&self.config, self.palette.clone());
        let output = renderer.render_diagram(diagram)?;
        Ok(output)
    }
}
