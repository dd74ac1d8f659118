pub mod color;
pub mod draw;

pub type Argb = u32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct P2(pub i32, pub i32);

/// Low resolution canvas the scene renders into. Presentation upscales
/// it into the window surface with `scale_to`.
pub struct PixelBuffer {
    buffer: Vec<Argb>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            buffer: vec![0; w * h],
            width: w,
            height: h,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Argb] {
        &self.buffer[..self.width * self.height]
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Argb] {
        let len = self.width * self.height;
        &mut self.buffer[..len]
    }

    pub fn clear(&mut self, c: Argb) {
        self.pixels_mut().fill(c);
    }

    /// The backing allocation only ever grows; shrinking the window
    /// reuses the larger buffer.
    pub fn resize(&mut self, w: usize, h: usize) {
        let len = w * h;
        if len > self.buffer.len() {
            self.buffer.resize(len, 0);
        }
        self.width = w;
        self.height = h;
    }

    // On Winit Wayland, resize increments aren't implemented, so the
    // width parameter is there to ensure that the horizontal lines of
    // the destination are aligned.
    pub fn scale_to(&self, scale: usize, dest: &mut [Argb], width: Option<usize>) {
        if self.width == 0 {
            return;
        }

        let dst_width = width.unwrap_or(self.width * scale);

        self.pixels()
            .chunks_exact(self.width) // source lines
            .zip(dest.chunks_exact_mut(dst_width * scale)) // with destination bands
            .flat_map(|(src_row, dst_band)| {
                src_row.iter().cycle().zip(dst_band.chunks_exact_mut(scale))
            })
            .for_each(|(src_pixel, dst_chunk)| dst_chunk.fill(*src_pixel));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_fills_every_pixel() {
        let mut pix = PixelBuffer::new(4, 3);
        pix.clear(0xFF_AB_CD_EF);
        assert!(pix.pixels().iter().all(|&p| p == 0xFF_AB_CD_EF));
    }

    #[test]
    fn resize_keeps_allocation() {
        let mut pix = PixelBuffer::new(8, 8);
        pix.resize(2, 2);
        assert_eq!(pix.pixels().len(), 4);
        pix.resize(6, 6);
        assert_eq!(pix.pixels().len(), 36);
    }

    #[test]
    fn scale_to_duplicates_pixels() {
        let mut pix = PixelBuffer::new(2, 1);
        pix.pixels_mut().copy_from_slice(&[1, 2]);

        let mut dest = vec![0u32; 4 * 2];
        pix.scale_to(2, &mut dest, None);

        assert_eq!(dest, vec![1, 1, 2, 2, 1, 1, 2, 2]);
    }
}
