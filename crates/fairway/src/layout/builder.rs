//! The diagram build pass.
//!
//! A single forward walk over the task rows: each row gets a shape placed by
//! the per-lane cursor, and its decoded dependency references are resolved
//! against the shapes built so far. There is no backtracking and no
//! re-processing of earlier rows; all state is owned by the one invocation,
//! so independent builds never interfere.

use std::collections::HashMap;

use log::{trace, warn};

use fairway_core::{
    diagnostic::Diagnostic,
    diagram::{ConnectorDescriptor, ShapeDescriptor, ShapeKind},
    geometry::Size,
    stage::StagePalette,
    task::TaskRow,
};
use fairway_parser::depends;

use crate::{
    config::LayoutConfig,
    layout::{LaneMap, LayoutCursor},
};

/// The complete layout result: positioned shapes, resolved connectors, the
/// lane map, and the diagnostics for rows that were skipped or mis-colored.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    shapes: Vec<ShapeDescriptor>,
    connectors: Vec<ConnectorDescriptor>,
    lanes: LaneMap,
    diagnostics: Vec<Diagnostic>,
}

impl Diagram {
    /// Returns the shape descriptors in table order.
    pub fn shapes(&self) -> &[ShapeDescriptor] {
        &self.shapes
    }

    /// Returns the connector descriptors in emission order.
    pub fn connectors(&self) -> &[ConnectorDescriptor] {
        &self.connectors
    }

    /// Returns the lane map.
    pub fn lanes(&self) -> &LaneMap {
        &self.lanes
    }

    /// Returns the diagnostics collected during the build.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Looks up a shape by its task id.
    pub fn shape_by_task_id(&self, task_id: &str) -> Option<&ShapeDescriptor> {
        self.shapes.iter().find(|shape| shape.task_id() == task_id)
    }
}

/// Build the diagram for the given rows and lane map.
///
/// Rows whose owner has no lane assignment are skipped with a diagnostic;
/// rows whose stage is missing from the palette keep their shape but gain a
/// diagnostic. Dependency references that fail to decode or that name a
/// task with no built shape are dropped silently.
pub fn build(
    rows: &[TaskRow],
    lanes: &LaneMap,
    palette: &StagePalette,
    layout: &LayoutConfig,
) -> Diagram {
    let mut cursor = LayoutCursor::new(lanes.len(), layout);
    let mut shapes: Vec<ShapeDescriptor> = Vec::with_capacity(rows.len());
    let mut connectors = Vec::new();
    let mut diagnostics = Vec::new();

    // Shapes built so far, keyed by task id, for connector resolution.
    let mut built: HashMap<String, usize> = HashMap::with_capacity(rows.len());

    for row in rows {
        let Some(lane_index) = lanes.index_of(row.owner()) else {
            warn!(task_id = row.id(), owner = row.owner(); "Skipping row: owner has no lane assignment");
            diagnostics.push(
                Diagnostic::error(format!("owner '{}' has no lane assignment", row.owner()))
                    .with_task_id(row.id()),
            );
            continue;
        };

        if let Err(err) = palette.color_for(row.stage()) {
            warn!(task_id = row.id(), stage = row.stage(); "Stage missing from color configuration");
            diagnostics.push(Diagnostic::error(err.to_string()).with_task_id(row.id()));
        }

        let kind = row.kind().shape_kind();
        let position = cursor.advance(lane_index);
        let shape = ShapeDescriptor::new(
            row.id(),
            kind,
            lane_index,
            position,
            shape_size(kind, layout),
            row.stage(),
            row.label(),
        );
        trace!(task_id = row.id(), lane = lane_index; "Placed shape");

        shapes.push(shape);
        built.insert(row.id().to_string(), shapes.len() - 1);

        for reference in depends::decode(row.depends_on()) {
            if built.contains_key(reference.task_id()) {
                let mut connector = ConnectorDescriptor::new(reference.task_id(), row.id());
                if let Some(label) = reference.label() {
                    connector = connector.with_label(label);
                }
                connectors.push(connector);
            } else {
                // Dangling reference: the target was never drawn (forward
                // reference or unknown id). Tolerated as a no-op.
                trace!(task_id = row.id(), target = reference.task_id(); "Dropping dangling dependency reference");
            }
        }
    }

    Diagram {
        shapes,
        connectors,
        lanes: lanes.clone(),
        diagnostics,
    }
}

/// The kind-dependent shape size.
fn shape_size(kind: ShapeKind, layout: &LayoutConfig) -> Size {
    match kind {
        ShapeKind::Rectangle => Size::new(layout.shape_width(), layout.shape_height()),
        ShapeKind::Diamond => Size::new(layout.shape_width(), layout.diamond_height()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::task::TaskKind;
    use float_cmp::approx_eq;

    fn row(id: &str, stage: &str, label: &str, kind: TaskKind, owner: &str, deps: &str) -> TaskRow {
        TaskRow::new(id, stage, label, kind, owner, deps)
    }

    fn build_default(rows: &[TaskRow]) -> Diagram {
        let lanes = LaneMap::assign(rows);
        build(
            rows,
            &lanes,
            &StagePalette::default(),
            &LayoutConfig::default(),
        )
    }

    #[test]
    fn end_to_end_scenario_two_lanes_three_shapes_two_connectors() {
        let rows = vec![
            row("1", "Planning", "Kickoff", TaskKind::Task, "Alice", ""),
            row("2", "Planning", "Plan", TaskKind::Decision, "Alice", "1"),
            row("3", "Migrate", "Migrate", TaskKind::Task, "Bob", "2:yes"),
        ];
        let diagram = build_default(&rows);

        assert_eq!(diagram.lanes().len(), 2);
        assert_eq!(diagram.lanes().index_of("Alice"), Some(0));
        assert_eq!(diagram.lanes().index_of("Bob"), Some(1));

        let kinds: Vec<ShapeKind> = diagram.shapes().iter().map(ShapeDescriptor::kind).collect();
        assert_eq!(
            kinds,
            vec![ShapeKind::Rectangle, ShapeKind::Diamond, ShapeKind::Rectangle]
        );

        assert_eq!(diagram.connectors().len(), 2);
        assert_eq!(diagram.connectors()[0].from_task_id(), "1");
        assert_eq!(diagram.connectors()[0].to_task_id(), "2");
        assert_eq!(diagram.connectors()[0].label(), None);
        assert_eq!(diagram.connectors()[1].from_task_id(), "2");
        assert_eq!(diagram.connectors()[1].to_task_id(), "3");
        assert_eq!(diagram.connectors()[1].label(), Some("yes"));

        assert!(diagram.diagnostics().is_empty());
    }

    #[test]
    fn shapes_advance_left_to_right_within_a_lane() {
        let rows = vec![
            row("1", "Planning", "a", TaskKind::Task, "Alice", ""),
            row("2", "Planning", "b", TaskKind::Task, "Alice", ""),
            row("3", "Planning", "c", TaskKind::Task, "Bob", ""),
        ];
        let diagram = build_default(&rows);

        let a = diagram.shape_by_task_id("1").unwrap();
        let b = diagram.shape_by_task_id("2").unwrap();
        let c = diagram.shape_by_task_id("3").unwrap();

        assert!(approx_eq!(f32, b.position().x() - a.position().x(), 175.0));
        // Bob's lane starts from its own origin
        assert!(approx_eq!(f32, c.position().x(), a.position().x()));
        assert!(approx_eq!(f32, c.position().y(), 75.0));
    }

    #[test]
    fn dangling_forward_reference_emits_no_connector() {
        let rows = vec![
            row("1", "Planning", "a", TaskKind::Task, "Alice", "2"),
            row("2", "Planning", "b", TaskKind::Task, "Alice", ""),
        ];
        let diagram = build_default(&rows);

        assert_eq!(diagram.shapes().len(), 2);
        assert!(diagram.connectors().is_empty());
        assert!(diagram.diagnostics().is_empty());
    }

    #[test]
    fn malformed_dependency_tokens_are_ignored() {
        let rows = vec![
            row("1", "Planning", "a", TaskKind::Task, "Alice", ""),
            row("2", "Planning", "b", TaskKind::Task, "Alice", "1,garbage,1:ok"),
        ];
        let diagram = build_default(&rows);

        assert_eq!(diagram.connectors().len(), 2);
        assert_eq!(diagram.connectors()[1].label(), Some("ok"));
    }

    #[test]
    fn unknown_persona_skips_the_row_and_continues() {
        let rows = vec![
            row("1", "Planning", "a", TaskKind::Task, "Alice", ""),
            row("2", "Planning", "b", TaskKind::Task, "Eve", ""),
            row("3", "Planning", "c", TaskKind::Task, "Alice", "1"),
        ];
        // Lane map built without Eve, as if her row had not been seen.
        let lanes = LaneMap::assign(&[rows[0].clone(), rows[2].clone()]);
        let diagram = build(
            &rows,
            &lanes,
            &StagePalette::default(),
            &LayoutConfig::default(),
        );

        assert_eq!(diagram.shapes().len(), 2);
        assert!(diagram.shape_by_task_id("2").is_none());
        assert_eq!(diagram.connectors().len(), 1);
        assert_eq!(diagram.diagnostics().len(), 1);
        assert!(diagram.diagnostics()[0].severity().is_error());
        assert_eq!(diagram.diagnostics()[0].task_id(), Some("2"));
    }

    #[test]
    fn unknown_stage_keeps_the_shape_but_reports_it() {
        let rows = vec![row("1", "Rollback", "a", TaskKind::Task, "Alice", "")];
        let diagram = build_default(&rows);

        assert_eq!(diagram.shapes().len(), 1);
        assert_eq!(diagram.shapes()[0].fill_category(), "Rollback");
        assert_eq!(diagram.diagnostics().len(), 1);
        assert!(
            diagram.diagnostics()[0]
                .message()
                .contains("color configuration")
        );
    }

    #[test]
    fn building_twice_yields_identical_diagrams() {
        let rows = vec![
            row("1", "Planning", "a", TaskKind::Task, "Alice", ""),
            row("2", "Cutover", "b", TaskKind::Decision, "Bob", "1"),
            row("3", "Closure", "c", TaskKind::Task, "Alice", "2:done"),
        ];
        let first = build_default(&rows);
        let second = build_default(&rows);
        assert_eq!(first, second);
    }
}
