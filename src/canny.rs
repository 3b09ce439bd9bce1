//! Canny post-processing: non-maximum suppression and hysteresis.
//!
//! Suppression compares each pixel with two neighbours chosen by its
//! direction bin, reading from the unsuppressed magnitude so earlier
//! decisions never influence later ones:
//!
//! | bin  | neighbours              |
//! |------|-------------------------|
//! | 0°   | below, above            |
//! | 45°  | below-left, above-right |
//! | 90°  | left, right             |
//! | 135° | above-left, below-right |
//!
//! A pixel survives when it is not smaller than either neighbour.
//!
//! Hysteresis runs in place in raster order. Pixels under the lower threshold
//! are zeroed, pixels at or above the upper threshold are kept, and pixels in
//! between survive only next to a pixel at or above the upper threshold.
//! Neighbour reads see the buffer as modified so far.
use crate::error::EdgeError;
use crate::gradient::{DirectionBin, DirectionMap};
use crate::image::ImageI32;
use serde::{Deserialize, Serialize};

/// Threshold multipliers applied to the mean gradient magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HysteresisParams {
    pub low_ratio: f64,
    pub high_ratio: f64,
}

impl Default for HysteresisParams {
    fn default() -> Self {
        Self {
            low_ratio: 0.3,
            high_ratio: 0.8,
        }
    }
}

/// Absolute thresholds for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Thresholds {
    pub lower: f64,
    pub upper: f64,
}

impl Thresholds {
    /// `ratio × mean(magnitude)` for both bounds. The mean of an empty image
    /// is 0.
    pub fn from_mean(magnitude: &ImageI32, params: &HysteresisParams) -> Self {
        let mean = magnitude.mean();
        Self {
            lower: params.low_ratio * mean,
            upper: params.high_ratio * mean,
        }
    }
}

#[inline]
fn neighbour_offsets(bin: DirectionBin) -> [(isize, isize); 2] {
    // (dx, dy), y grows downward
    match bin {
        DirectionBin::Deg0 => [(0, 1), (0, -1)],
        DirectionBin::Deg45 => [(-1, 1), (1, -1)],
        DirectionBin::Deg90 => [(-1, 0), (1, 0)],
        DirectionBin::Deg135 => [(-1, -1), (1, 1)],
    }
}

/// Zero every pixel that is smaller than one of its two neighbours across
/// the edge.
pub fn non_max_suppression(
    magnitude: &ImageI32,
    directions: &DirectionMap,
) -> Result<ImageI32, EdgeError> {
    if magnitude.dims() != (directions.w, directions.h) {
        return Err(EdgeError::ShapeMismatch {
            expected: magnitude.dims(),
            actual: (directions.w, directions.h),
        });
    }

    let mut out = magnitude.clone();
    for y in 0..magnitude.h {
        for x in 0..magnitude.w {
            let mag = magnitude.get(x, y);
            let suppressed = neighbour_offsets(directions.get(x, y))
                .into_iter()
                .any(|(dx, dy)| mag < magnitude.get_clamped(x as isize + dx, y as isize + dy));
            if suppressed {
                out.set(x, y, 0);
            }
        }
    }
    Ok(out)
}

/// Double-threshold filtering of `image` in place.
pub fn hysteresis(image: &mut ImageI32, thresholds: Thresholds) {
    let Thresholds { lower, upper } = thresholds;
    for y in 0..image.h {
        for x in 0..image.w {
            let v = f64::from(image.get(x, y));
            if v < lower || (v < upper && !has_strong_neighbour(image, x, y, upper)) {
                image.set(x, y, 0);
            }
        }
    }
}

fn has_strong_neighbour(image: &ImageI32, x: usize, y: usize, upper: f64) -> bool {
    (-1isize..=1).any(|dy| {
        (-1isize..=1).any(|dx| {
            (dx, dy) != (0, 0)
                && f64::from(image.get_clamped(x as isize + dx, y as isize + dy)) >= upper
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::DirectionBin::*;
    use crate::image::ImageView;

    fn uniform_dirs(w: usize, h: usize, bin: DirectionBin) -> DirectionMap {
        DirectionMap {
            w,
            h,
            bins: vec![bin; w * h],
        }
    }

    #[test]
    fn nms_keeps_ridge_across_columns() {
        let mag = ImageI32::from_rows(&[[10, 50, 20], [10, 50, 20], [10, 50, 20]]).unwrap();
        let out = non_max_suppression(&mag, &uniform_dirs(3, 3, Deg90)).unwrap();
        assert_eq!(out.row(0), &[0, 50, 0]);
        assert_eq!(out.row(2), &[0, 50, 0]);
    }

    #[test]
    fn nms_vertical_bin_compares_rows() {
        let mag = ImageI32::from_rows(&[[5, 5], [9, 9], [7, 7]]).unwrap();
        let out = non_max_suppression(&mag, &uniform_dirs(2, 3, Deg0)).unwrap();
        assert_eq!(out.data, vec![0, 0, 9, 9, 0, 0]);
    }

    #[test]
    fn nms_reads_unsuppressed_values() {
        // Plateau: equal neighbours never suppress each other, whatever the
        // scan order.
        let mag = ImageI32::from_rows(&[[7, 7, 7, 7]]).unwrap();
        let out = non_max_suppression(&mag, &uniform_dirs(4, 1, Deg90)).unwrap();
        assert_eq!(out, mag);

        // 8 is suppressed by 9 on its right; 5 still compares against the
        // original 8 and goes too.
        let mag = ImageI32::from_rows(&[[5, 8, 9]]).unwrap();
        let out = non_max_suppression(&mag, &uniform_dirs(3, 1, Deg90)).unwrap();
        assert_eq!(out.row(0), &[0, 0, 9]);
    }

    #[test]
    fn nms_diagonal_bins() {
        #[rustfmt::skip]
        let mag = ImageI32::from_rows(&[
            [1, 0, 9],
            [0, 5, 0],
            [9, 0, 1],
        ])
        .unwrap();
        // 45°: below-left (9) and above-right (9) beat the centre.
        let out = non_max_suppression(&mag, &uniform_dirs(3, 3, Deg45)).unwrap();
        assert_eq!(out.get(1, 1), 0);
        // 135°: above-left (1) and below-right (1) do not.
        let out = non_max_suppression(&mag, &uniform_dirs(3, 3, Deg135)).unwrap();
        assert_eq!(out.get(1, 1), 5);
    }

    #[test]
    fn nms_rejects_mismatched_direction_map() {
        let mag = ImageI32::new(3, 3);
        let err = non_max_suppression(&mag, &uniform_dirs(3, 2, Deg0)).unwrap_err();
        assert_eq!(
            err,
            EdgeError::ShapeMismatch {
                expected: (3, 3),
                actual: (3, 2)
            }
        );
    }

    #[test]
    fn thresholds_scale_mean_magnitude() {
        let mag = ImageI32::from_rows(&[[0, 100], [100, 200]]).unwrap();
        let t = Thresholds::from_mean(&mag, &HysteresisParams::default());
        assert!((t.lower - 30.0).abs() < 1e-9);
        assert!((t.upper - 80.0).abs() < 1e-9);
    }

    #[test]
    fn weak_pixels_need_a_strong_neighbour() {
        let mut img = ImageI32::from_rows(&[[0, 10, 50, 100, 10, 50]]).unwrap();
        hysteresis(
            &mut img,
            Thresholds {
                lower: 20.0,
                upper: 80.0,
            },
        );
        assert_eq!(img.row(0), &[0, 0, 50, 100, 0, 0]);
    }

    #[test]
    fn diagonal_strong_neighbour_counts() {
        let mut img = ImageI32::from_rows(&[[40, 0, 0], [0, 0, 0], [0, 0, 90]]).unwrap();
        let t = Thresholds {
            lower: 30.0,
            upper: 80.0,
        };
        hysteresis(&mut img, t);
        assert_eq!(img.get(0, 0), 0);

        let mut img = ImageI32::from_rows(&[[0, 0, 0], [0, 40, 0], [0, 0, 90]]).unwrap();
        hysteresis(&mut img, t);
        assert_eq!(img.get(1, 1), 40);
        assert_eq!(img.get(2, 2), 90);
    }

    #[test]
    fn zero_thresholds_keep_everything() {
        let mut img = ImageI32::new(4, 3);
        hysteresis(&mut img, Thresholds::default());
        assert!(img.data.iter().all(|&v| v == 0));

        let mut img = ImageI32::from_rows(&[[0, 3, 0]]).unwrap();
        hysteresis(&mut img, Thresholds::default());
        assert_eq!(img.row(0), &[0, 3, 0]);
    }

    #[test]
    fn strong_pixels_unchanged_and_sub_lower_pixels_zeroed() {
        #[rustfmt::skip]
        let original = ImageI32::from_rows(&[
            [12, 85, 40, 0],
            [90, 25, 60, 79],
            [5, 61, 200, 81],
        ])
        .unwrap();
        let t = Thresholds {
            lower: 26.0,
            upper: 80.0,
        };
        let mut img = original.clone();
        hysteresis(&mut img, t);
        for (&before, &after) in original.data.iter().zip(&img.data) {
            if f64::from(before) >= t.upper {
                assert_eq!(after, before);
            }
            if f64::from(before) < t.lower {
                assert_eq!(after, 0);
            }
        }
    }
}
