//! Gradient composition from X/Y kernel responses.
//!
//! - `magnitude`: per-pixel `round(sqrt(gx² + gy²))`.
//! - `direction`: per-pixel orientation `atan2(gx, gy)` in degrees, folded
//!   into [0°, 180°) and snapped to the nearest of 0°, 45°, 90°, 135°.
//!
//! Both require equally shaped inputs and fail with
//! [`EdgeError::ShapeMismatch`] otherwise.
//!
//! Note the argument order: `gx` is the first argument of `atan2`, so a
//! purely horizontal response (vertical edge) maps to 90° and a purely
//! vertical response (horizontal edge) maps to 0°. Non-maximum suppression
//! picks its neighbours with the same convention.
use crate::convolve::apply_kernel;
use crate::error::EdgeError;
use crate::image::ImageI32;
use crate::kernels::{kernel, KernelTag};
use serde::Serialize;

/// Quantized gradient orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DirectionBin {
    Deg0,
    Deg45,
    Deg90,
    Deg135,
}

impl DirectionBin {
    /// Bins in tie-breaking order.
    pub const ALL: [DirectionBin; 4] = [
        DirectionBin::Deg0,
        DirectionBin::Deg45,
        DirectionBin::Deg90,
        DirectionBin::Deg135,
    ];

    pub fn degrees(self) -> f64 {
        match self {
            Self::Deg0 => 0.0,
            Self::Deg45 => 45.0,
            Self::Deg90 => 90.0,
            Self::Deg135 => 135.0,
        }
    }

    /// Nearest bin to `angle_deg` (any range). On a tie the earlier bin in
    /// [`DirectionBin::ALL`] wins.
    pub fn snap(angle_deg: f64) -> DirectionBin {
        let folded = angle_deg.rem_euclid(180.0);
        let mut best = DirectionBin::Deg0;
        let mut best_residual = f64::INFINITY;
        for bin in Self::ALL {
            let diff = (folded - bin.degrees()).abs();
            let residual = diff.min(180.0 - diff);
            if residual < best_residual {
                best = bin;
                best_residual = residual;
            }
        }
        best
    }
}

/// Per-pixel direction bins, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionMap {
    pub w: usize,
    pub h: usize,
    pub bins: Vec<DirectionBin>,
}

impl DirectionMap {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> DirectionBin {
        self.bins[y * self.w + x]
    }
}

/// Kernel responses and their magnitude.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Response to the X kernel
    pub gx: ImageI32,
    /// Response to the Y kernel
    pub gy: ImageI32,
    /// Rounded Euclidean magnitude per pixel
    pub mag: ImageI32,
}

fn ensure_same_shape(gx: &ImageI32, gy: &ImageI32) -> Result<(), EdgeError> {
    if gx.dims() != gy.dims() {
        return Err(EdgeError::ShapeMismatch {
            expected: gx.dims(),
            actual: gy.dims(),
        });
    }
    Ok(())
}

/// Gradient magnitude `round(sqrt(gx² + gy²))`.
pub fn magnitude(gx: &ImageI32, gy: &ImageI32) -> Result<ImageI32, EdgeError> {
    ensure_same_shape(gx, gy)?;
    let data = gx
        .data
        .iter()
        .zip(&gy.data)
        // `as` saturates responses beyond i32::MAX.
        .map(|(&x, &y)| f64::from(x).hypot(f64::from(y)).round() as i32)
        .collect();
    ImageI32::from_vec(gx.w, gx.h, data)
}

/// Quantized orientation of `atan2(gx, gy)`.
pub fn direction(gx: &ImageI32, gy: &ImageI32) -> Result<DirectionMap, EdgeError> {
    ensure_same_shape(gx, gy)?;
    let bins = gx
        .data
        .iter()
        .zip(&gy.data)
        .map(|(&x, &y)| DirectionBin::snap(f64::from(x).atan2(f64::from(y)).to_degrees()))
        .collect();
    Ok(DirectionMap {
        w: gx.w,
        h: gx.h,
        bins,
    })
}

/// Convolve `image` with the kernels for `x_tag` and `y_tag` and combine the
/// responses.
pub fn gradients_with_kernels(
    image: &ImageI32,
    x_tag: KernelTag,
    y_tag: KernelTag,
) -> Result<Grad, EdgeError> {
    let gx = apply_kernel(image, &kernel(x_tag));
    let gy = apply_kernel(image, &kernel(y_tag));
    let mag = magnitude(&gx, &gy)?;
    Ok(Grad { gx, gy, mag })
}

/// Sobel responses and magnitude.
pub fn sobel_gradients(image: &ImageI32) -> Result<Grad, EdgeError> {
    gradients_with_kernels(image, KernelTag::SobelX, KernelTag::SobelY)
}

/// Prewitt responses and magnitude.
pub fn prewitt_gradients(image: &ImageI32) -> Result<Grad, EdgeError> {
    gradients_with_kernels(image, KernelTag::PrewittX, KernelTag::PrewittY)
}
