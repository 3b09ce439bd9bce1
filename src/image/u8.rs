//! Borrowed input frames as delivered by the capture side.
//!
//! - `ImageU8`: plain 8-bit luma samples.
//! - `PackedGray`: 32-bit samples with luma in the low byte (e.g. opaque ARGB
//!   gray pixels `0xFFyyyyyy`). Normalization keeps only the low byte.

#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // samples between rows
    pub data: &'a [u8],
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

#[derive(Clone, Debug)]
pub struct PackedGray<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: &'a [u32],
}

impl<'a> crate::image::traits::ImageView for PackedGray<'a> {
    type Pixel = u32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
