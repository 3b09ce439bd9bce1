#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;

// Stage-level building blocks. Public so tooling can run or inspect single
// stages, but their signatures may still move.
pub mod canny;
pub mod config;
pub mod convolve;
pub mod gradient;
pub mod kernels;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{
    canny_edges, prewitt_edges, sobel_edges, EdgeDetector, EdgeDetectorParams, Operator,
};
pub use crate::diagnostics::EdgeReport;
pub use crate::error::EdgeError;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use edge_detector::prelude::*;
///
/// let (w, h) = (8usize, 8usize);
/// let gray: Vec<u8> = (0..w * h).map(|i| if i % w < 4 { 200 } else { 10 }).collect();
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let det = EdgeDetector::new(EdgeDetectorParams::default());
/// let edges = det.process(&img).unwrap().expect("non-empty frame");
/// assert_eq!(edges.width(), 8);
/// ```
pub mod prelude {
    pub use crate::canny::HysteresisParams;
    pub use crate::image::{GrayImageU8, ImageU8, ImageView, PackedGray};
    pub use crate::{EdgeDetector, EdgeDetectorParams, EdgeError, Operator};
}

// --- Stage-level API ---------------------------------------------------------

pub mod stages {
    pub use crate::canny::{hysteresis, non_max_suppression, Thresholds};
    pub use crate::convolve::apply_kernel;
    pub use crate::detector::{normalize, render};
    pub use crate::gradient::{direction, magnitude, DirectionBin, DirectionMap, Grad};
    pub use crate::kernels::{kernel, kernel_by_name, Kernel, KernelTag, KernelWeights};
}
