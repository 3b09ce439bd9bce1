//! Owned single-channel integer image, tightly packed in row-major order.
//!
//! Working buffer for every pipeline stage. Samples are 0..=255 after
//! normalization; convolution responses may exceed that range but are never
//! negative.
use crate::error::EdgeError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageI32 {
    /// Image width in pixels (columns)
    pub w: usize,
    /// Image height in pixels (rows)
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<i32>,
}

impl ImageI32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    /// A 0×0 image.
    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Wrap a row-major buffer, checking its length against `w × h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<i32>) -> Result<Self, EdgeError> {
        let expected = w.checked_mul(h).ok_or(EdgeError::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;
        if data.len() != expected {
            return Err(EdgeError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { w, h, data })
    }

    /// Build from nested rows. All rows must have the length of the first one.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, EdgeError> {
        let h = rows.len();
        let w = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(w * h);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != w {
                return Err(EdgeError::JaggedRows {
                    row: y,
                    expected: w,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        if w == 0 {
            return Ok(Self::empty());
        }
        Self::from_vec(w, h, data)
    }

    /// `(width, height)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: i32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Pixel value with both coordinates clamped into the image (replicate
    /// border). The image must not be empty.
    #[inline]
    pub fn get_clamped(&self, x: isize, y: isize) -> i32 {
        let xx = x.clamp(0, self.w as isize - 1) as usize;
        let yy = y.clamp(0, self.h as isize - 1) as usize;
        self.get(xx, yy)
    }

    /// Mean of all samples; 0 for an empty image.
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        let sum: i64 = self.data.iter().map(|&v| i64::from(v)).sum();
        sum as f64 / self.data.len() as f64
    }
}

impl crate::image::traits::ImageView for ImageI32 {
    type Pixel = i32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[i32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for ImageI32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [i32] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
