//! Error adapter for converting FairwayError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. Each
//! variant gets a help text where there is a concrete fix the user can make
//! to the source table.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use fairway::{FairwayError, ParseError};

/// A miette-reportable wrapper around one Fairway error.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Reportable {
    message: String,
    help: Option<String>,
}

impl MietteDiagnostic for Reportable {
    fn help(&self) -> Option<Box<dyn fmt::Display + '_>> {
        self.help
            .as_ref()
            .map(|help| Box::new(help) as Box<dyn fmt::Display + '_>)
    }
}

/// Convert a [`FairwayError`] into its reportable diagnostics.
pub fn to_reportables(err: &FairwayError) -> Vec<Reportable> {
    let help = match err {
        FairwayError::Parse(ParseError::MissingStartMarker) => Some(
            "the table must contain a header row whose first cell is 'TaskID'".to_string(),
        ),
        FairwayError::Parse(ParseError::MissingEndMarker) => Some(
            "terminate the data block with a row whose first cell is '###END_OF_DATA###'"
                .to_string(),
        ),
        _ => None,
    };

    vec![Reportable {
        message: err.to_string(),
        help,
    }]
}
