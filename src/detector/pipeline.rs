use super::params::{EdgeDetectorParams, Operator};
use crate::canny::{hysteresis, non_max_suppression, HysteresisParams, Thresholds};
use crate::convolve::apply_kernel;
use crate::diagnostics::{EdgeReport, TimingBreakdown};
use crate::error::EdgeError;
use crate::gradient::{direction, prewitt_gradients, sobel_gradients};
use crate::image::{GrayImageU8, ImageI32, ImageView};
use crate::kernels::{kernel, KernelTag};
use log::debug;
use std::time::Instant;

/// Keep the low byte of every sample as its 0..=255 intensity.
pub fn normalize<I>(view: &I) -> ImageI32
where
    I: ImageView,
    I::Pixel: Into<u32>,
{
    let (w, h) = (view.width(), view.height());
    if w == 0 || h == 0 {
        return ImageI32::empty();
    }
    let mut out = ImageI32::new(w, h);
    for (dst, src) in out.data.chunks_exact_mut(w).zip(view.rows()) {
        for (d, &s) in dst.iter_mut().zip(src) {
            let sample: u32 = s.into();
            *d = (sample & 0xFF) as i32;
        }
    }
    out
}

/// Saturate an intensity grid into a displayable 8-bit image; `None` when
/// there is nothing to show.
pub fn render(image: &ImageI32) -> Option<GrayImageU8> {
    if image.is_empty() {
        return None;
    }
    Some(GrayImageU8::from_intensity(image))
}

/// Sobel gradient magnitude of `view`.
pub fn sobel_edges<I>(view: &I) -> Result<Option<GrayImageU8>, EdgeError>
where
    I: ImageView,
    I::Pixel: Into<u32>,
{
    detect(view, Operator::Sobel, &HysteresisParams::default())
}

/// Prewitt gradient magnitude of `view`.
pub fn prewitt_edges<I>(view: &I) -> Result<Option<GrayImageU8>, EdgeError>
where
    I: ImageView,
    I::Pixel: Into<u32>,
{
    detect(view, Operator::Prewitt, &HysteresisParams::default())
}

/// Canny edges of `view` with thresholds derived from `params`.
pub fn canny_edges<I>(view: &I, params: &HysteresisParams) -> Result<Option<GrayImageU8>, EdgeError>
where
    I: ImageView,
    I::Pixel: Into<u32>,
{
    detect(view, Operator::Canny, params)
}

fn detect<I>(
    view: &I,
    operator: Operator,
    params: &HysteresisParams,
) -> Result<Option<GrayImageU8>, EdgeError>
where
    I: ImageView,
    I::Pixel: Into<u32>,
{
    let image = normalize(view);
    if image.is_empty() {
        return Ok(None);
    }
    let (edges, _) = run_operator(&image, operator, params, None)?;
    Ok(render(&edges))
}

/// Run `stage`, recording its duration only when a breakdown is attached.
fn timed<T>(
    timing: &mut Option<&mut TimingBreakdown>,
    label: &str,
    stage: impl FnOnce() -> T,
) -> T {
    match timing {
        Some(timing) => timing.time(label, stage),
        None => stage(),
    }
}

/// Runs the selected operator on a normalized, non-empty image.
fn run_operator(
    image: &ImageI32,
    operator: Operator,
    params: &HysteresisParams,
    mut timing: Option<&mut TimingBreakdown>,
) -> Result<(ImageI32, Option<Thresholds>), EdgeError> {
    match operator {
        Operator::Sobel => {
            let grad = timed(&mut timing, "sobel_gradients", || sobel_gradients(image))?;
            Ok((grad.mag, None))
        }
        Operator::Prewitt => {
            let grad = timed(&mut timing, "prewitt_gradients", || prewitt_gradients(image))?;
            Ok((grad.mag, None))
        }
        Operator::Canny => {
            let blurred = timed(&mut timing, "gaussian_blur", || {
                apply_kernel(image, &kernel(KernelTag::GaussianBlur))
            });
            let (mag, dirs) = timed(&mut timing, "gradients", || {
                let grad = sobel_gradients(&blurred)?;
                let dirs = direction(&grad.gx, &grad.gy)?;
                Ok::<_, EdgeError>((grad.mag, dirs))
            })?;
            let mut suppressed = timed(&mut timing, "non_max_suppression", || {
                non_max_suppression(&mag, &dirs)
            })?;
            let thresholds = Thresholds::from_mean(&mag, params);
            timed(&mut timing, "hysteresis", || hysteresis(&mut suppressed, thresholds));
            debug!(
                "canny: mean magnitude {:.3}, thresholds [{:.3}, {:.3}]",
                mag.mean(),
                thresholds.lower,
                thresholds.upper
            );
            Ok((suppressed, Some(thresholds)))
        }
    }
}

/// Per-frame edge detector with fixed parameters.
///
/// Holds no state between frames; callers must not overlap calls for the same
/// frame stream if they rely on output ordering.
#[derive(Clone, Debug, Default)]
pub struct EdgeDetector {
    params: EdgeDetectorParams,
}

impl EdgeDetector {
    pub fn new(params: EdgeDetectorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EdgeDetectorParams {
        &self.params
    }

    /// Switch to the next operator in cycling order and return it.
    pub fn cycle_operator(&mut self) -> Operator {
        self.params.operator = self.params.operator.next();
        self.params.operator
    }

    /// Run the configured operator. `Ok(None)` for an empty frame.
    pub fn process<I>(&self, view: &I) -> Result<Option<GrayImageU8>, EdgeError>
    where
        I: ImageView,
        I::Pixel: Into<u32>,
    {
        detect(view, self.params.operator, &self.params.canny)
    }

    /// Like [`process`](Self::process) but also reports thresholds and
    /// per-stage timings.
    pub fn process_with_diagnostics<I>(&self, view: &I) -> Result<Option<EdgeReport>, EdgeError>
    where
        I: ImageView,
        I::Pixel: Into<u32>,
    {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();
        let image = timing.time("normalize", || normalize(view));
        if image.is_empty() {
            debug!("EdgeDetector::process empty frame, nothing to render");
            return Ok(None);
        }

        let operator = self.params.operator;
        let (edges, thresholds) = run_operator(
            &image,
            operator,
            &self.params.canny,
            Some(&mut timing),
        )?;
        let Some(rendered) = timing.time("render", || render(&edges)) else {
            return Ok(None);
        };
        timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        Ok(Some(EdgeReport {
            operator,
            width: rendered.width(),
            height: rendered.height(),
            thresholds,
            edge_pixels: rendered.data().iter().filter(|&&v| v > 0).count(),
            timing,
            image: rendered,
        }))
    }
}
