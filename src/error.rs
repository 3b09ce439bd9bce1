//! Error taxonomy shared by the kernel registry, gradient composer and
//! image constructors.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeError {
    /// Zero-sized input where a pixel grid was required.
    EmptyInput,
    /// Kernel name or tag that the registry does not provide.
    UnsupportedOperator { name: String },
    /// Two grids that must be combined pixel by pixel differ in shape.
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// Backing buffer length does not match `width * height`.
    SizeMismatch { expected: usize, actual: usize },
    /// Nested rows of unequal length.
    JaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for EdgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty input image"),
            Self::UnsupportedOperator { name } => {
                write!(f, "unsupported operator: {name}")
            }
            Self::ShapeMismatch { expected, actual } => write!(
                f,
                "shape mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::JaggedRows {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {row} has {actual} samples, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for EdgeError {}
