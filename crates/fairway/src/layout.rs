//! The swimlane layout engine.
//!
//! Layout is a pure, two-pass computation over the ordered task rows:
//!
//! 1. [`LaneMap::assign`] scans the rows once and gives each distinct owner
//!    persona a dense lane index in first-appearance order.
//! 2. [`build`] walks the rows a second time, placing one shape per row via
//!    the per-lane [`LayoutCursor`] and resolving each row's dependency
//!    references into connectors against the shapes already built.
//!
//! The passes must run in that order; the whole pipeline relies on
//! dependencies only ever pointing backward in table order. A reference to
//! a not-yet-built (or never-built) shape is dropped, not an error.

pub mod builder;
pub mod cursor;
pub mod lanes;

pub use builder::{Diagram, build};
pub use cursor::LayoutCursor;
pub use lanes::LaneMap;
