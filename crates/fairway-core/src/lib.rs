//! Fairway Core Types and Definitions
//!
//! This crate provides the foundational types for the Fairway swimlane
//! diagram generator. It includes:
//!
//! - **Tasks**: The input task model ([`task`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Stages**: The fixed stage-to-color palette ([`stage`] module)
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Diagram**: Positioned shape and connector descriptors ([`diagram`] module)
//! - **Diagnostics**: Row-level build diagnostics ([`diagnostic`] module)

pub mod color;
pub mod diagnostic;
pub mod diagram;
pub mod geometry;
pub mod stage;
pub mod task;
