//! Owned monochrome framebuffer.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// In-memory 1-bit frame at panel resolution.
///
/// Background is white (`BinaryColor::Off`); drawn ink is `BinaryColor::On`.
/// Implements [`DrawTarget`] so embedded-graphics text and primitives render
/// into it directly, and packs into the driver-native buffer layout on
/// demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    /// Row-major, `true` = ink.
    pixels: Vec<bool>,
}

impl Frame {
    /// Create a frame cleared to white.
    // SAFETY: width * height is a pixel count bounded by display dimensions
    // (250×122 for the reference panel), so the product fits comfortably in
    // usize.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width as usize * height as usize],
        }
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set one pixel. Out-of-bounds coordinates are ignored.
    // SAFETY: x < width and y < height are checked before use; y * width + x
    // is bounded by width * height, the buffer length.
    #[allow(clippy::arithmetic_side_effects, clippy::indexing_slicing)]
    pub fn set_pixel(&mut self, x: u32, y: u32, ink: bool) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) as usize;
            self.pixels[idx] = ink;
        }
    }

    /// Read one pixel; `None` when out of bounds.
    // SAFETY: x < width and y < height are checked before use; y * width + x
    // is bounded by width * height, the buffer length.
    #[allow(clippy::arithmetic_side_effects, clippy::indexing_slicing)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<bool> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Flood the frame with a solid color.
    pub fn fill(&mut self, color: BinaryColor) {
        self.pixels.fill(color.is_on());
    }

    /// Count of ink pixels, for assertions and diagnostics.
    pub fn ink_count(&self) -> usize {
        self.pixels.iter().filter(|ink| **ink).count()
    }

    /// Pack into the driver-native buffer layout: one bit per pixel, rows
    /// padded to a whole byte, MSB first, `1` = white. This matches the RAM
    /// layout SSD1680-family controllers expect.
    // SAFETY: row_bytes and the y * row_bytes + x / 8 index are bounded by
    // the output length computed from the same dimensions; x % 8 < 8 keeps
    // the shift in range.
    #[allow(clippy::arithmetic_side_effects, clippy::indexing_slicing)]
    pub fn packed(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize + 7) / 8;
        let mut out = vec![0xFFu8; row_bytes * self.height as usize];
        for y in 0..self.height {
            for x in 0..self.width {
                if self.pixel(x, y) == Some(true) {
                    let idx = y as usize * row_bytes + x as usize / 8;
                    out[idx] &= !(0x80u8 >> (x % 8));
                }
            }
        }
        out
    }
}

impl DrawTarget for Frame {
    type Color = BinaryColor;
    type Error = Infallible;

    // SAFETY: coordinates are checked non-negative before the cast;
    // set_pixel bounds-checks against the frame dimensions.
    #[allow(clippy::cast_sign_loss)]
    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.set_pixel(point.x as u32, point.y as u32, color.is_on());
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::indexing_slicing)]
    use super::*;

    #[test]
    fn test_new_frame_is_white() {
        let frame = Frame::new(250, 122);
        assert_eq!(frame.width(), 250);
        assert_eq!(frame.height(), 122);
        assert_eq!(frame.ink_count(), 0);
        assert_eq!(frame.pixel(0, 0), Some(false));
        assert_eq!(frame.pixel(249, 121), Some(false));
    }

    #[test]
    fn test_set_get_pixel() {
        let mut frame = Frame::new(10, 10);
        frame.set_pixel(5, 5, true);
        assert_eq!(frame.pixel(5, 5), Some(true));
        assert_eq!(frame.pixel(0, 0), Some(false));
        assert_eq!(frame.ink_count(), 1);
    }

    #[test]
    fn test_bounds_checking() {
        let mut frame = Frame::new(10, 10);
        frame.set_pixel(100, 100, true); // Should not panic
        assert_eq!(frame.pixel(100, 100), None);
        assert_eq!(frame.pixel(10, 0), None);
        assert_eq!(frame.pixel(0, 10), None);
        assert_eq!(frame.ink_count(), 0);
    }

    #[test]
    fn test_fill_and_clear() {
        let mut frame = Frame::new(4, 4);
        frame.fill(BinaryColor::On);
        assert_eq!(frame.ink_count(), 16);
        frame.fill(BinaryColor::Off);
        assert_eq!(frame.ink_count(), 0);
    }

    #[test]
    fn test_draw_target_clips_negative_coordinates() {
        let mut frame = Frame::new(10, 10);
        Pixel(Point::new(-1, -1), BinaryColor::On)
            .draw(&mut frame)
            .unwrap_or_default();
        Pixel(Point::new(3, 4), BinaryColor::On)
            .draw(&mut frame)
            .unwrap_or_default();
        assert_eq!(frame.ink_count(), 1);
        assert_eq!(frame.pixel(3, 4), Some(true));
    }

    #[test]
    fn test_packed_all_white() {
        let frame = Frame::new(10, 2);
        let packed = frame.packed();
        // 10 px rows pad to 2 bytes each.
        assert_eq!(packed.len(), 4);
        assert!(packed.iter().all(|byte| *byte == 0xFF));
    }

    #[test]
    fn test_packed_ink_clears_bits_msb_first() {
        let mut frame = Frame::new(10, 2);
        frame.set_pixel(0, 0, true);
        frame.set_pixel(9, 1, true);
        let packed = frame.packed();
        assert_eq!(packed[0], 0x7F); // bit 7 of row 0, byte 0
        assert_eq!(packed[3], 0xBF); // bit 6 of row 1, byte 1
    }

    #[test]
    fn test_packed_reference_panel_buffer_size() {
        let frame = Frame::new(250, 122);
        // ceil(250 / 8) = 32 bytes per row.
        assert_eq!(frame.packed().len(), 32 * 122);
    }

    #[test]
    fn test_equal_drawing_gives_equal_frames() {
        let mut a = Frame::new(20, 20);
        let mut b = Frame::new(20, 20);
        for frame in [&mut a, &mut b] {
            frame.set_pixel(1, 2, true);
            frame.set_pixel(15, 19, true);
        }
        assert_eq!(a, b);
        b.set_pixel(0, 0, true);
        assert_ne!(a, b);
    }
}
