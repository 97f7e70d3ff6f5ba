//! The input task model.
//!
//! A [`TaskRow`] is one record of the source table. Row order is significant:
//! it drives both lane assignment (first appearance of an owner) and the
//! left-to-right placement of shapes within a lane.

use serde::Deserialize;

use crate::diagram::ShapeKind;

/// The declared type of a task, taken from the table's `Type` column.
///
/// Any value other than `Task` or `Decision` falls back to [`TaskKind::Task`]
/// (not an error).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum TaskKind {
    /// A regular process step, drawn as a rectangle.
    #[default]
    Task,
    /// A decision point, drawn as a diamond.
    Decision,
}

impl TaskKind {
    /// Classify a raw `Type` cell value.
    ///
    /// Unrecognized values default to [`TaskKind::Task`].
    pub fn from_cell(value: &str) -> Self {
        match value {
            "Decision" => TaskKind::Decision,
            _ => TaskKind::Task,
        }
    }

    /// The shape used to draw a task of this kind.
    pub fn shape_kind(self) -> ShapeKind {
        match self {
            TaskKind::Task => ShapeKind::Rectangle,
            TaskKind::Decision => ShapeKind::Diamond,
        }
    }
}

/// One input record of the task table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Unique, non-empty task identifier.
    id: String,
    /// Stage name; selects the fill color category.
    stage: String,
    /// Display text for the task's shape.
    label: String,
    /// Declared task kind.
    kind: TaskKind,
    /// Owning persona; identifies the lane.
    owner: String,
    /// Raw dependency-encoded string, possibly empty.
    depends_on: String,
}

impl TaskRow {
    /// Creates a new task row.
    pub fn new(
        id: impl Into<String>,
        stage: impl Into<String>,
        label: impl Into<String>,
        kind: TaskKind,
        owner: impl Into<String>,
        depends_on: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            stage: stage.into(),
            label: label.into(),
            kind,
            owner: owner.into(),
            depends_on: depends_on.into(),
        }
    }

    /// Returns the task identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the stage name.
    pub fn stage(&self) -> &str {
        &self.stage
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the declared task kind.
    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Returns the owning persona.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the raw dependency-encoded string.
    pub fn depends_on(&self) -> &str {
        &self.depends_on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_classification_defaults_to_task() {
        assert_eq!(TaskKind::from_cell("Task"), TaskKind::Task);
        assert_eq!(TaskKind::from_cell("Decision"), TaskKind::Decision);
        assert_eq!(TaskKind::from_cell("Milestone"), TaskKind::Task);
        assert_eq!(TaskKind::from_cell(""), TaskKind::Task);
    }

    #[test]
    fn kind_maps_to_shape() {
        assert_eq!(TaskKind::Task.shape_kind(), ShapeKind::Rectangle);
        assert_eq!(TaskKind::Decision.shape_kind(), ShapeKind::Diamond);
    }
}
