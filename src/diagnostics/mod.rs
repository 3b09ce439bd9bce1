//! Per-frame report returned by [`EdgeDetector::process_with_diagnostics`].
//!
//! Bundles the rendered edge image with the thresholds Canny derived for the
//! frame and a timing trace of every stage that ran. Everything except the
//! pixels serializes to JSON for the demo tooling.
//!
//! [`EdgeDetector::process_with_diagnostics`]: crate::detector::EdgeDetector::process_with_diagnostics

pub mod timing;

pub use timing::{StageTiming, TimingBreakdown};

use crate::canny::Thresholds;
use crate::detector::Operator;
use crate::image::GrayImageU8;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeReport {
    pub operator: Operator,
    pub width: usize,
    pub height: usize,
    /// Hysteresis thresholds; only Canny computes them.
    pub thresholds: Option<Thresholds>,
    /// Number of non-zero output pixels.
    pub edge_pixels: usize,
    pub timing: TimingBreakdown,
    #[serde(skip)]
    pub image: GrayImageU8,
}
