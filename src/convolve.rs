//! Dense 2D convolution with replicate (clamp) borders.
//!
//! The kernel is applied as a correlation centred on each output pixel:
//! `out(x, y) = Σ k[r][c] · img(x + c − s/2, y + r − s/2)` with coordinates
//! clamped into the image. Integer kernels accumulate in `i64`, fractional
//! kernels in `f64` (truncated toward zero on store). Negative responses are
//! stored as 0.
//!
//! Even-sized kernels have no centre and are not applied: the input is
//! returned unchanged.
//!
//! Complexity: O(W·H·s²).
use crate::image::{ImageI32, ImageView, ImageViewMut};
use crate::kernels::{Kernel, KernelWeights};
use log::debug;

/// Convolve `image` with `kernel`, returning a new image of the same size.
pub fn apply_kernel(image: &ImageI32, kernel: &Kernel<'_>) -> ImageI32 {
    if image.is_empty() {
        return ImageI32::empty();
    }
    if !kernel.is_odd() {
        debug!(
            "apply_kernel: {}x{} kernel has no centre, passing image through",
            kernel.size(),
            kernel.size()
        );
        return image.clone();
    }

    match kernel.weights() {
        KernelWeights::Int(weights) => convolve_with(image, kernel.size(), weights, |sum: i64| {
            sum.clamp(0, i64::from(i32::MAX)) as i32
        }),
        KernelWeights::Float(weights) => {
            convolve_with(image, kernel.size(), weights, |sum: f64| {
                // `as` saturates and truncates toward zero.
                sum.max(0.0) as i32
            })
        }
    }
}

/// Accumulator type per weight type.
trait Weight: Copy {
    type Acc: Copy + Default + std::ops::AddAssign;
    fn mul_sample(self, sample: i32) -> Self::Acc;
}

impl Weight for i32 {
    type Acc = i64;
    #[inline]
    fn mul_sample(self, sample: i32) -> i64 {
        i64::from(self) * i64::from(sample)
    }
}

impl Weight for f64 {
    type Acc = f64;
    #[inline]
    fn mul_sample(self, sample: i32) -> f64 {
        self * f64::from(sample)
    }
}

fn convolve_with<W: Weight>(
    image: &ImageI32,
    size: usize,
    weights: &[W],
    store: impl Fn(W::Acc) -> i32,
) -> ImageI32 {
    let w = image.w;
    let h = image.h;
    let half = (size / 2) as isize;
    let mut out = ImageI32::new(w, h);

    // Clamped source column for every (output column, kernel column) pair.
    let col_idx: Vec<usize> = (0..w as isize)
        .flat_map(|x| (-half..=half).map(move |dc| clamp_index(x + dc, w)))
        .collect();

    let mut rows: Vec<&[i32]> = Vec::with_capacity(size);
    for y in 0..h {
        rows.clear();
        rows.extend((-half..=half).map(|dr| image.row(clamp_index(y as isize + dr, h))));

        let out_row = out.row_mut(y);
        for (x, px) in out_row.iter_mut().enumerate() {
            let cols = &col_idx[x * size..(x + 1) * size];
            let mut sum = W::Acc::default();
            for (src_row, k_row) in rows.iter().zip(weights.chunks_exact(size)) {
                for (&cx, &k) in cols.iter().zip(k_row) {
                    sum += k.mul_sample(src_row[cx]);
                }
            }
            *px = store(sum);
        }
    }

    out
}

#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::apply_kernel;
    use crate::image::{ImageI32, ImageView};
    use crate::kernels::{kernel, Kernel, KernelTag};

    fn ramp(w: usize, h: usize) -> ImageI32 {
        let data = (0..w * h).map(|i| ((i * 37) % 256) as i32).collect();
        ImageI32::from_vec(w, h, data).unwrap()
    }

    #[test]
    fn even_kernel_passes_image_through() {
        let img = ramp(5, 4);
        let k = Kernel::from_int(2, &[1, 2, 3, 4]).unwrap();
        assert_eq!(apply_kernel(&img, &k), img);
        let empty = Kernel::from_int(0, &[]).unwrap();
        assert_eq!(apply_kernel(&img, &empty), img);
    }

    #[test]
    fn empty_image_stays_empty() {
        let out = apply_kernel(&ImageI32::empty(), &kernel(KernelTag::SobelX));
        assert!(out.is_empty());
    }

    #[test]
    fn output_keeps_dimensions_and_is_non_negative() {
        let img = ramp(7, 3);
        for tag in KernelTag::ALL {
            let out = apply_kernel(&img, &kernel(tag));
            assert_eq!(out.dims(), img.dims(), "{tag}");
            assert!(out.data.iter().all(|&v| v >= 0), "{tag}");
        }
    }

    #[test]
    fn identity_kernel_reproduces_input() {
        let img = ramp(4, 4);
        let k = Kernel::from_int(3, &[0, 0, 0, 0, 1, 0, 0, 0, 0]).unwrap();
        assert_eq!(apply_kernel(&img, &k), img);
    }

    #[test]
    fn borders_replicate_edge_samples() {
        // Box sum on a 1x3 image: every tap outside the row repeats the edge.
        let img = ImageI32::from_rows(&[[10, 20, 30]]).unwrap();
        let k = Kernel::from_int(3, &[1; 9]).unwrap();
        let out = apply_kernel(&img, &k);
        assert_eq!(out.row(0), &[3 * (10 + 10 + 20), 3 * 60, 3 * (20 + 30 + 30)]);
    }

    #[test]
    fn non_square_image_clamps_columns_by_width() {
        let img = ImageI32::from_rows(&[[0, 0, 0, 0, 100]]).unwrap();
        let out = apply_kernel(&img, &kernel(KernelTag::PrewittX));
        // x = 4 sees [0, 100, 100] per row: 3 * (0 - 100) < 0.
        assert_eq!(out.row(0), &[0, 0, 0, 0, 0]);
        let out = apply_kernel(
            &ImageI32::from_rows(&[[100, 0, 0, 0, 0]]).unwrap(),
            &kernel(KernelTag::PrewittX),
        );
        assert_eq!(out.row(0), &[300, 300, 0, 0, 0]);
    }

    #[test]
    fn negative_responses_are_zeroed() {
        let img = ImageI32::from_rows(&[[0, 0, 255], [0, 0, 255], [0, 0, 255]]).unwrap();
        let out = apply_kernel(&img, &kernel(KernelTag::SobelX));
        // Left-minus-right kernel sees a rising edge: negative, so zero.
        assert!(out.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn gaussian_truncates_toward_zero() {
        let mut img = ImageI32::new(5, 5);
        img.set(2, 2, 100);
        let out = apply_kernel(&img, &kernel(KernelTag::GaussianBlur));
        // 100 * 36/256 = 14.06..
        assert_eq!(out.get(2, 2), 14);
        // 100 * 1/256 = 0.39..
        assert_eq!(out.get(0, 0), 0);
        // 100 * 24/256 = 9.375
        assert_eq!(out.get(1, 2), 9);
    }

    #[test]
    fn uniform_image_blurs_to_itself() {
        let img = ImageI32::from_vec(6, 4, vec![200; 24]).unwrap();
        let out = apply_kernel(&img, &kernel(KernelTag::GaussianBlur));
        assert_eq!(out, img);
    }
}
