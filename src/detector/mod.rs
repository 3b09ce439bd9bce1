//! Pipeline orchestration: frame in, edge image out.
//!
//! Overview
//! - Normalizes the incoming frame to 0..=255 by keeping each sample's low
//!   byte.
//! - Sobel / Prewitt: convolve with the operator's X and Y kernels and keep the
//!   rounded gradient magnitude.
//! - Canny: 5×5 Gaussian blur, Sobel gradients and direction bins,
//!   non-maximum suppression, then hysteresis with thresholds scaled from the
//!   mean magnitude.
//! - Renders by saturating into 8 bits. An empty frame yields `Ok(None)`.
//!
//! Modules
//! - [`params`] – operator selection and detector configuration.
//! - `pipeline` – [`EdgeDetector`] plus the per-operator free functions.
//!
//! Every call is independent; nothing is cached across frames.

pub mod params;
mod pipeline;

pub use params::{EdgeDetectorParams, Operator};
pub use pipeline::{canny_edges, normalize, prewitt_edges, render, sobel_edges, EdgeDetector};
