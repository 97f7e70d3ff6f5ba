//! Positioned shape and connector descriptors.
//!
//! These are the layout engine's output: pure data describing *what* to draw
//! and *where*, with no knowledge of any drawing API. A render adapter
//! consumes them to produce actual output (see the `fairway` crate's export
//! module).

use crate::geometry::{Point, Size};

/// The geometric shape used to draw a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// A regular task step.
    Rectangle,
    /// A decision point.
    Diamond,
}

/// The computed geometry and content for one task's visual node.
///
/// Created once when its task row is processed, immutable afterward.
/// `position` is the top-left of the shape's cell within its lane; the
/// vertical inset applied to rectangles (which are shorter than the lane) is
/// a rendering detail decided by the render adapter from `kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    task_id: String,
    kind: ShapeKind,
    lane_index: usize,
    position: Point,
    size: Size,
    fill_category: String,
    text: String,
}

impl ShapeDescriptor {
    /// Creates a new shape descriptor.
    pub fn new(
        task_id: impl Into<String>,
        kind: ShapeKind,
        lane_index: usize,
        position: Point,
        size: Size,
        fill_category: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            kind,
            lane_index,
            position,
            size,
            fill_category: fill_category.into(),
            text: text.into(),
        }
    }

    /// Returns the id of the task this shape represents.
    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    /// Returns the shape kind.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Returns the index of the lane this shape belongs to.
    pub fn lane_index(&self) -> usize {
        self.lane_index
    }

    /// Returns the top-left position of the shape's cell.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the shape's size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the stage name selecting the fill color.
    pub fn fill_category(&self) -> &str {
        &self.fill_category
    }

    /// Returns the display text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A directed edge between two shapes, optionally labeled (decision branch).
///
/// Connectors reference shapes by task id, not by handle; resolution against
/// the built shapes happens when the connector is emitted, so a descriptor
/// always names two existing shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorDescriptor {
    from_task_id: String,
    to_task_id: String,
    label: Option<String>,
}

impl ConnectorDescriptor {
    /// Creates an unlabeled connector.
    pub fn new(from_task_id: impl Into<String>, to_task_id: impl Into<String>) -> Self {
        Self {
            from_task_id: from_task_id.into(),
            to_task_id: to_task_id.into(),
            label: None,
        }
    }

    /// Attaches a decision-branch label (builder style).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the source task id.
    pub fn from_task_id(&self) -> &str {
        &self.from_task_id
    }

    /// Returns the target task id.
    pub fn to_task_id(&self) -> &str {
        &self.to_task_id
    }

    /// Returns the decision-branch label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
