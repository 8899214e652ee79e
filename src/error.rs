use thiserror::Error;

/// Internal geometry defects. None of these can be triggered by user input;
/// every solid is built from fixed tables, so hitting one is a bug.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("degenerate triangle: edges ({a:?}) and ({b:?}) have a zero-length cross product")]
    Degenerate { a: [f64; 3], b: [f64; 3] },

    #[error("{solid} vertex {index} is not finite after orientation")]
    NonFinite { solid: &'static str, index: usize },

    #[error("vertex index {index} out of bounds for {len} vertices")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Errors from mapping a user-supplied selector to a solid
#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("Invalid type {0}. Run with --help to list type names.")]
    UnknownType(i64),

    #[error("Invalid type name {0:?}. Expected one of: tetrahedron, cube, octahedron, dodecahedron, icosahedron")]
    UnknownName(String),
}
