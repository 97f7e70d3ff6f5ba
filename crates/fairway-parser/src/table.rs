//! The tabular input adapter.
//!
//! The source is a tab-separated table whose data block is delimited by a
//! header row beginning with `TaskID` (matched case-insensitively) and a
//! terminator row beginning with `###END_OF_DATA###`. Both marker rows are
//! exclusive: only the rows strictly between them are decoded.
//!
//! Column layout: `TaskID  Stage  Task  Type  Input  Output  OwnerPersona
//! DependsOn`. The `Input` and `Output` columns are read but dropped at
//! decode; layout does not use them.

use log::{debug, trace};

use fairway_core::task::{TaskKind, TaskRow};

use crate::error::ParseError;

/// First cell of the header row that starts the data block (exclusive).
pub const START_MARKER: &str = "TaskID";

/// First cell of the row that ends the data block (exclusive).
pub const END_MARKER: &str = "###END_OF_DATA###";

/// Column positions within a data row.
const COL_ID: usize = 0;
const COL_STAGE: usize = 1;
const COL_LABEL: usize = 2;
const COL_TYPE: usize = 3;
const COL_OWNER: usize = 6;
const COL_DEPENDS_ON: usize = 7;

/// Parse the source table into its ordered task rows.
///
/// Row order in the source is preserved as processing order; it drives both
/// lane assignment and shape placement downstream.
///
/// # Errors
///
/// Returns [`ParseError::MissingStartMarker`] if no `TaskID` header row is
/// found, and [`ParseError::MissingEndMarker`] if no `###END_OF_DATA###`
/// row follows it.
pub fn parse_table(source: &str) -> Result<Vec<TaskRow>, ParseError> {
    let lines: Vec<&str> = source.lines().collect();

    let start = lines
        .iter()
        .position(|line| first_cell(line).eq_ignore_ascii_case(START_MARKER))
        .ok_or(ParseError::MissingStartMarker)?;

    let end = lines[start + 1..]
        .iter()
        .position(|line| first_cell(line).eq_ignore_ascii_case(END_MARKER))
        .map(|offset| start + 1 + offset)
        .ok_or(ParseError::MissingEndMarker)?;

    debug!(start_line = start, end_line = end; "Detected data block markers");

    let rows: Vec<TaskRow> = lines[start + 1..end]
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| decode_row(line))
        .collect();

    debug!(row_count = rows.len(); "Decoded task rows");

    Ok(rows)
}

/// Returns the first tab-separated cell of a line, trimmed.
fn first_cell(line: &str) -> &str {
    line.split('\t').next().unwrap_or("").trim()
}

/// Decode one data row positionally. Missing trailing cells decode as empty.
fn decode_row(line: &str) -> TaskRow {
    let cells: Vec<&str> = line.split('\t').map(str::trim).collect();
    let cell = |index: usize| cells.get(index).copied().unwrap_or("");

    let row = TaskRow::new(
        cell(COL_ID),
        cell(COL_STAGE),
        cell(COL_LABEL),
        TaskKind::from_cell(cell(COL_TYPE)),
        cell(COL_OWNER),
        cell(COL_DEPENDS_ON),
    );
    trace!(task_id = row.id(), owner = row.owner(); "Decoded row");
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_cell_takes_text_before_first_tab() {
        assert_eq!(first_cell("TaskID\tStage"), "TaskID");
        assert_eq!(first_cell("single"), "single");
        assert_eq!(first_cell(""), "");
    }

    #[test]
    fn short_rows_decode_with_empty_trailing_cells() {
        let row = decode_row("1\tPlanning\tKickoff");
        assert_eq!(row.id(), "1");
        assert_eq!(row.stage(), "Planning");
        assert_eq!(row.label(), "Kickoff");
        assert_eq!(row.kind(), TaskKind::Task);
        assert_eq!(row.owner(), "");
        assert_eq!(row.depends_on(), "");
    }
}
