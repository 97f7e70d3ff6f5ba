//! SVG render adapter.
//!
//! Draws lane bands with bold header cells, one shape per descriptor
//! (rectangle or diamond) filled from the stage palette, and elbow
//! connectors with an open arrowhead and optional decision labels.

use log::{debug, warn};
use svg::{
    Document,
    node::element::{Definitions, Group, Line, Marker, Path, Polygon, Rectangle, Text},
};

use fairway_core::{
    diagram::{ShapeDescriptor, ShapeKind},
    geometry::Point,
    stage::StagePalette,
};

use crate::{
    config::{AppConfig, LayoutConfig, StyleConfig},
    export::{Error, RenderAdapter},
    layout::Diagram,
};

/// Fill used for shapes whose stage is not in the palette. The build pass
/// has already diagnosed those rows; rendering still completes.
const FALLBACK_FILL: &str = "#d9d9d9";

/// Font family for all diagram text.
const FONT_FAMILY: &str = "Arial";

/// Horizontal and vertical offset of a decision label from its connector's
/// top-left corner.
const LABEL_OFFSET: (f32, f32) = (15.0, 5.0);

/// SVG renderer for swimlane diagrams.
pub struct Svg {
    layout: LayoutConfig,
    style: StyleConfig,
    palette: StagePalette,
}

impl Svg {
    /// Creates a renderer from the application configuration and palette.
    pub fn new(config: &AppConfig, palette: StagePalette) -> Self {
        Self {
            layout: config.layout().clone(),
            style: config.style().clone(),
            palette,
        }
    }

    /// The drawn top edge of a shape. Rectangles are inset from the lane
    /// top; diamonds are taller and sit at the lane top.
    fn draw_top(&self, shape: &ShapeDescriptor) -> f32 {
        match shape.kind() {
            ShapeKind::Rectangle => shape.position().y() + self.layout.shape_inset(),
            ShapeKind::Diamond => shape.position().y(),
        }
    }

    /// The point where a connector leaves this shape (right edge midpoint).
    fn exit_point(&self, shape: &ShapeDescriptor) -> Point {
        let right = shape.position().x() + shape.size().width();
        let top = self.draw_top(shape);
        Point::new(right, top).midpoint(Point::new(right, top + shape.size().height()))
    }

    /// The point where a connector enters this shape (left edge midpoint).
    fn entry_point(&self, shape: &ShapeDescriptor) -> Point {
        let left = shape.position().x();
        let top = self.draw_top(shape);
        Point::new(left, top).midpoint(Point::new(left, top + shape.size().height()))
    }

    /// Total canvas size for the diagram.
    fn canvas_size(&self, diagram: &Diagram) -> (f32, f32) {
        let min_width = self.layout.header_width() + self.layout.horizontal_step();
        let width = diagram
            .shapes()
            .iter()
            .map(|shape| shape.position().x() + shape.size().width())
            .fold(min_width, f32::max)
            + self.layout.left_margin();
        let height = diagram.lanes().len().max(1) as f32 * self.layout.lane_height();
        (width, height)
    }

    /// Open-arrowhead marker referenced by every connector path.
    fn marker_definitions() -> Definitions {
        let arrow = Marker::new()
            .set("id", "arrow-open")
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10")
                    .set("fill", "none")
                    .set("stroke", "black"),
            );

        Definitions::new().add(arrow)
    }

    /// Lane bands: thin horizontal rules, the header column rule, and one
    /// bold centered header cell per lane in lane-index order.
    fn render_lanes(&self, diagram: &Diagram, width: f32, height: f32) -> Group {
        let mut group = Group::new();

        for (persona, lane_index) in diagram.lanes().iter() {
            let top = lane_index as f32 * self.layout.lane_height();

            group = group.add(
                Line::new()
                    .set("x1", 0.0)
                    .set("y1", top)
                    .set("x2", width)
                    .set("y2", top)
                    .set("stroke", "black")
                    .set("stroke-width", 0.5),
            );

            group = group.add(
                Text::new(persona)
                    .set("x", self.layout.header_width() / 2.0)
                    .set("y", top + self.layout.lane_height() / 2.0)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("font-family", FONT_FAMILY)
                    .set("font-size", 12)
                    .set("font-weight", "bold"),
            );
        }

        // Closing bottom rule and the vertical rule after the header column.
        group = group.add(
            Line::new()
                .set("x1", 0.0)
                .set("y1", height)
                .set("x2", width)
                .set("y2", height)
                .set("stroke", "black")
                .set("stroke-width", 0.5),
        );
        group.add(
            Line::new()
                .set("x1", self.layout.header_width())
                .set("y1", 0.0)
                .set("x2", self.layout.header_width())
                .set("y2", height)
                .set("stroke", "black")
                .set("stroke-width", 0.5),
        )
    }

    /// One shape with its centered label.
    fn render_shape(&self, shape: &ShapeDescriptor) -> Group {
        let fill = match self.palette.color_for(shape.fill_category()) {
            Ok(color) => color.to_string(),
            Err(_) => FALLBACK_FILL.to_string(),
        };

        let x = shape.position().x();
        let top = self.draw_top(shape);
        let width = shape.size().width();
        let height = shape.size().height();

        let mut group = Group::new();
        group = match shape.kind() {
            ShapeKind::Rectangle => group.add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", top)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", fill)
                    .set("stroke", "black"),
            ),
            ShapeKind::Diamond => {
                let points = format!(
                    "{},{} {},{} {},{} {},{}",
                    x + width / 2.0,
                    top,
                    x + width,
                    top + height / 2.0,
                    x + width / 2.0,
                    top + height,
                    x,
                    top + height / 2.0,
                );
                group.add(
                    Polygon::new()
                        .set("points", points)
                        .set("fill", fill)
                        .set("stroke", "black"),
                )
            }
        };

        group.add(
            Text::new(shape.text())
                .set("x", x + width / 2.0)
                .set("y", top + height / 2.0)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "middle")
                .set("font-family", FONT_FAMILY)
                .set("font-size", 12)
                .set("fill", "white"),
        )
    }

    /// An elbow path between two points using only horizontal and vertical
    /// segments.
    fn elbow_path_data(start: Point, end: Point) -> String {
        let dx = (end.x() - start.x()).abs();
        let dy = (end.y() - start.y()).abs();

        if dx > dy {
            let mid_x = start.x() + (end.x() - start.x()) * 0.5;
            format!(
                "M {} {} L {} {} L {} {} L {} {}",
                start.x(),
                start.y(),
                mid_x,
                start.y(),
                mid_x,
                end.y(),
                end.x(),
                end.y()
            )
        } else {
            let mid_y = start.y() + (end.y() - start.y()) * 0.5;
            format!(
                "M {} {} L {} {} L {} {} L {} {}",
                start.x(),
                start.y(),
                start.x(),
                mid_y,
                end.x(),
                mid_y,
                end.x(),
                end.y()
            )
        }
    }

    /// All connectors with their optional decision labels.
    fn render_connectors(&self, diagram: &Diagram) -> Group {
        let mut group = Group::new();

        for connector in diagram.connectors() {
            let (Some(from), Some(to)) = (
                diagram.shape_by_task_id(connector.from_task_id()),
                diagram.shape_by_task_id(connector.to_task_id()),
            ) else {
                // Connectors emitted by the build pass always name built
                // shapes; tolerate hand-assembled diagrams that don't.
                warn!(
                    from = connector.from_task_id(),
                    to = connector.to_task_id();
                    "Skipping connector with no matching shape"
                );
                continue;
            };

            let start = self.exit_point(from);
            let end = self.entry_point(to);

            group = group.add(
                Path::new()
                    .set("d", Self::elbow_path_data(start, end))
                    .set("fill", "none")
                    .set("stroke", "black")
                    .set("marker-end", "url(#arrow-open)"),
            );

            if let Some(label) = connector.label() {
                let (dx, dy) = LABEL_OFFSET;
                group = group.add(
                    Text::new(label)
                        .set("x", start.x().min(end.x()) + dx)
                        .set("y", start.y().min(end.y()) + dy)
                        .set("font-family", FONT_FAMILY)
                        .set("font-size", 11),
                );
            }
        }

        group
    }
}

impl RenderAdapter for Svg {
    fn render_diagram(&self, diagram: &Diagram) -> Result<String, Error> {
        let (width, height) = self.canvas_size(diagram);
        debug!(width = width, height = height; "Rendering SVG document");

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        if let Some(background) = self.style.background_color().map_err(Error::Render)? {
            doc = doc.add(
                Rectangle::new()
                    .set("x", 0.0)
                    .set("y", 0.0)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", background.to_string()),
            );
        }

        doc = doc.add(Self::marker_definitions());
        doc = doc.add(self.render_lanes(diagram, width, height));

        let mut shapes = Group::new();
        for shape in diagram.shapes() {
            shapes = shapes.add(self.render_shape(shape));
        }
        doc = doc.add(shapes);
        doc = doc.add(self.render_connectors(diagram));

        Ok(doc.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::task::{TaskKind, TaskRow};

    use crate::layout::{self, LaneMap};

    fn sample_diagram() -> Diagram {
        let rows = vec![
            TaskRow::new("1", "Planning", "Kickoff", TaskKind::Task, "Alice", ""),
            TaskRow::new("2", "Planning", "Plan", TaskKind::Decision, "Alice", "1"),
            TaskRow::new("3", "Migrate", "Migrate", TaskKind::Task, "Bob", "2:yes"),
        ];
        let lanes = LaneMap::assign(&rows);
        layout::build(
            &rows,
            &lanes,
            &StagePalette::default(),
            &LayoutConfig::default(),
        )
    }

    fn render(diagram: &Diagram) -> String {
        let renderer = Svg::new(&AppConfig::default(), StagePalette::default());
        renderer
            .render_diagram(diagram)
            .expect("rendering should succeed")
    }

    #[test]
    fn renders_a_complete_svg_document() {
        let output = render(&sample_diagram());
        assert!(output.contains("<svg"));
        assert!(output.contains("</svg>"));
    }

    #[test]
    fn renders_lane_headers_and_shapes() {
        let output = render(&sample_diagram());
        assert!(output.contains("Alice"));
        assert!(output.contains("Bob"));
        assert!(output.contains("<rect"));
        assert!(output.contains("<polygon"));
    }

    #[test]
    fn renders_connectors_with_arrowheads_and_labels() {
        let output = render(&sample_diagram());
        assert!(output.contains("marker-end=\"url(#arrow-open)\""));
        assert!(output.contains("yes"));
    }

    #[test]
    fn connector_paths_join_edge_midpoints() {
        let output = render(&sample_diagram());
        // Task 1's rectangle exits at its right edge midpoint (315, 40) and
        // the elbow bends halfway towards task 2's diamond.
        assert!(output.contains("M 315 40 L 327.5 40"));
    }

    #[test]
    fn unknown_stage_renders_with_fallback_fill() {
        let rows = vec![TaskRow::new(
            "1",
            "Rollback",
            "Oops",
            TaskKind::Task,
            "Alice",
            "",
        )];
        let lanes = LaneMap::assign(&rows);
        let diagram = layout::build(
            &rows,
            &lanes,
            &StagePalette::default(),
            &LayoutConfig::default(),
        );

        let output = render(&diagram);
        assert!(output.contains(FALLBACK_FILL));
    }
}
