//! Error types for table parsing.

use thiserror::Error;

/// Error type for decoding the tabular source.
///
/// Only the structural markers of the table are required; everything between
/// them is decoded tolerantly, so these are the only failure modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No header row starting with the `TaskID` marker was found.
    #[error("start marker 'TaskID' not found in the source table")]
    MissingStartMarker,

    /// No `###END_OF_DATA###` row was found after the header row.
    #[error("end marker '###END_OF_DATA###' not found after the header row")]
    MissingEndMarker,
}
