//! Example: Building a diagram from task rows directly
//!
//! This example demonstrates how to lay out and render a swimlane diagram
//! from programmatically constructed rows, without parsing a table source.

use fairway::{
    SwimlaneBuilder,
    task::{TaskKind, TaskRow},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rows = vec![
        TaskRow::new("1", "Planning", "Kickoff", TaskKind::Task, "Alice", ""),
        TaskRow::new("2", "Planning", "Plan ready?", TaskKind::Decision, "Alice", "1"),
        TaskRow::new("3", "Prepare Source", "Export data", TaskKind::Task, "Bob", "2:yes"),
        TaskRow::new("4", "Prepare Target", "Provision target", TaskKind::Task, "Carol", "2:yes"),
        TaskRow::new("5", "Migrate", "Migrate data", TaskKind::Task, "Bob", "3,4"),
        TaskRow::new("6", "Closure", "Sign off", TaskKind::Task, "Alice", "5"),
    ];

    let builder = SwimlaneBuilder::default();
    let diagram = builder.build(&rows);

    println!(
        "Built {} shapes in {} lanes with {} connectors",
        diagram.shapes().len(),
        diagram.lanes().len(),
        diagram.connectors().len()
    );

    for diagnostic in diagram.diagnostics() {
        eprintln!("{diagnostic}");
    }

    let svg = builder.render_svg(&diagram)?;
    std::fs::write("swimlane.svg", svg)?;
    println!("Wrote swimlane.svg");

    Ok(())
}
