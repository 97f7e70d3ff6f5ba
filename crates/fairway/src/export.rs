//! Render adapters for built diagrams.
//!
//! The layout engine only decides *what* to draw and *where*; a render
//! adapter consumes the shape, connector, and lane descriptors and performs
//! the actual drawing. [`svg::Svg`] is the built-in adapter.

pub mod svg;

use crate::layout::Diagram;

/// A render adapter turns a built [`Diagram`] into output.
///
/// Implementations must draw one shape per descriptor at its recorded
/// position/size/kind with its fill category mapped to a color, one directed
/// connector per descriptor from the source shape's exit point to the target
/// shape's entry point (with an adjacent text label when present), and one
/// lane-header cell per lane, in lane-index order, labeled with the persona
/// name.
pub trait RenderAdapter {
    /// Render the diagram to its output representation.
    fn render_diagram(&self, diagram: &Diagram) -> Result<String, Error>;
}

#[derive(Debug)]
pub enum Error {
    Render(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FairwayError;

    #[test]
    fn render_errors_convert_into_export_errors() {
        let err = FairwayError::from(Error::Render("bad background".into()));
        assert!(matches!(err, FairwayError::Export(_)));
        assert_eq!(err.to_string(), "Export error: Render error: bad background");
    }
}
