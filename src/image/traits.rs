/// Row access over a rectangular grid of samples.
///
/// Implemented by the borrowed input frames (which may be padded between
/// rows) and by the owned working grid.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// The `width()` samples of row `y`, without row padding.
    fn row(&self, y: usize) -> &[Self::Pixel];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    /// True when either dimension is zero.
    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];
}

/// Top-to-bottom row iterator returned by [`ImageView::rows`].
pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let image = self.image;
        let y = self.y;
        self.y += 1;
        Some(image.row(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.image.height().saturating_sub(self.y);
        (left, Some(left))
    }
}

#[cfg(test)]
mod tests {
    use super::ImageView;
    use crate::image::ImageU8;

    #[test]
    fn rows_skip_padding_and_report_remaining() {
        let data = [1u8, 2, 0, 3, 4, 0, 5, 6, 0];
        let view = ImageU8 {
            w: 2,
            h: 3,
            stride: 3,
            data: &data,
        };
        let mut rows = view.rows();
        assert_eq!(rows.size_hint(), (3, Some(3)));
        assert_eq!(rows.next(), Some(&[1u8, 2][..]));
        assert_eq!(rows.size_hint(), (2, Some(2)));
        assert_eq!(rows.collect::<Vec<_>>(), vec![&[3u8, 4][..], &[5, 6][..]]);
        assert!(!view.is_empty());
    }
}
