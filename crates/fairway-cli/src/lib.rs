//! CLI logic for the Fairway diagram tool.
//!
//! This module contains the core CLI logic for the Fairway diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use fairway::{FairwayError, SwimlaneBuilder};

/// Run the Fairway CLI application
///
/// This function processes the input task table through the Fairway
/// pipeline and writes the resulting SVG to the output file. Row-level
/// build diagnostics (skipped or mis-colored rows) are logged as warnings;
/// they do not fail the run.
///
/// # Errors
///
/// Returns `FairwayError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Table parsing errors (missing markers)
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), FairwayError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process the table using the SwimlaneBuilder API
    let builder = SwimlaneBuilder::new(app_config);
    let rows = builder.parse(&source)?;
    let diagram = builder.build(&rows);

    for diagnostic in diagram.diagnostics() {
        warn!("{diagnostic}");
    }

    let svg = builder.render_svg(&diagram)?;

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
