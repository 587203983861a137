use crate::core::data::packed_colour::PackedColour;
use std::{
    error::Error,
    fmt,
    sync::atomic::{AtomicU32, Ordering},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CanvasError {
    ZeroSized { width: usize, height: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSized { width, height } => {
                write!(f, "canvas dimensions must be non-zero, got {width}x{height}")
            }
        }
    }
}

impl Error for CanvasError {}

/// Shared pixel store written by render workers and read by the presenter.
///
/// Each pixel is an independent atomic, so disjoint writes and snapshot
/// reads need no lock. All accesses are relaxed: a mid-render snapshot may
/// mix older and newer pixels, which only shows up as a partially drawn
/// frame until the next copy.
#[derive(Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<AtomicU32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::ZeroSized { width, height });
        }

        let mut pixels = Vec::with_capacity(width * height);
        pixels.resize_with(width * height, || AtomicU32::new(PackedColour::BLACK.packed()));

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Writes one pixel. Coordinates outside the canvas are ignored.
    pub fn set_pixel(&self, x: usize, y: usize, colour: PackedColour) {
        if x >= self.width || y >= self.height {
            return;
        }

        self.pixels[y * self.width + x].store(colour.packed(), Ordering::Relaxed);
    }

    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<PackedColour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let packed = self.pixels[y * self.width + x].load(Ordering::Relaxed);

        Some(PackedColour::from_packed(packed))
    }

    /// Copies the current pixels into a fresh row-major RGB byte buffer.
    #[must_use]
    pub fn snapshot_rgb(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);

        for pixel in &self.pixels {
            let colour = PackedColour::from_packed(pixel.load(Ordering::Relaxed));
            bytes.push(colour.red());
            bytes.push(colour.green());
            bytes.push(colour.blue());
        }

        bytes
    }

    /// Copies the current pixels into an RGBA frame, one 4-byte chunk per
    /// pixel with full alpha. The frame must hold exactly four bytes per
    /// pixel.
    pub fn write_rgba_into(&self, frame: &mut [u8]) {
        assert_eq!(frame.len(), self.pixels.len() * 4);

        for (chunk, pixel) in frame.chunks_exact_mut(4).zip(&self.pixels) {
            let colour = PackedColour::from_packed(pixel.load(Ordering::Relaxed));
            chunk[0] = colour.red();
            chunk[1] = colour.green();
            chunk[2] = colour.blue();
            chunk[3] = 0xFF;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_rejects_zero_width() {
        assert_eq!(
            Canvas::new(0, 4).unwrap_err(),
            CanvasError::ZeroSized {
                width: 0,
                height: 4
            }
        );
    }

    #[test]
    fn test_rejects_zero_height() {
        assert!(matches!(
            Canvas::new(4, 0),
            Err(CanvasError::ZeroSized { .. })
        ));
    }

    #[test]
    fn test_new_canvas_is_black() {
        let canvas = Canvas::new(3, 2).unwrap();

        assert_eq!(canvas.pixel(2, 1), Some(PackedColour::BLACK));
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let canvas = Canvas::new(4, 4).unwrap();
        let colour = PackedColour::from_rgb(12, 34, 56);

        canvas.set_pixel(3, 1, colour);

        assert_eq!(canvas.pixel(3, 1), Some(colour));
    }

    #[test]
    fn test_out_of_bounds_write_is_ignored() {
        let canvas = Canvas::new(2, 2).unwrap();

        canvas.set_pixel(2, 0, PackedColour::from_rgb(255, 0, 0));
        canvas.set_pixel(0, 2, PackedColour::from_rgb(255, 0, 0));

        assert_eq!(canvas.pixel(2, 0), None);
        assert_eq!(canvas.pixel(0, 0), Some(PackedColour::BLACK));
    }

    #[test]
    fn test_snapshot_rgb_is_row_major() {
        let canvas = Canvas::new(2, 1).unwrap();
        canvas.set_pixel(0, 0, PackedColour::from_rgb(1, 2, 3));
        canvas.set_pixel(1, 0, PackedColour::from_rgb(4, 5, 6));

        assert_eq!(canvas.snapshot_rgb(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_write_rgba_into_sets_full_alpha() {
        let canvas = Canvas::new(2, 1).unwrap();
        canvas.set_pixel(0, 0, PackedColour::from_rgb(9, 8, 7));

        let mut frame = [0u8; 8];
        canvas.write_rgba_into(&mut frame);

        assert_eq!(frame, [9, 8, 7, 255, 0, 0, 0, 255]);
    }

    #[test]
    fn test_concurrent_disjoint_writes_all_land() {
        let canvas = Canvas::new(8, 8).unwrap();

        thread::scope(|scope| {
            for y in 0..8 {
                let canvas = &canvas;
                scope.spawn(move || {
                    for x in 0..8 {
                        canvas.set_pixel(x, y, PackedColour::from_rgb(x as u8, y as u8, 0));
                    }
                });
            }
        });

        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(
                    canvas.pixel(x, y),
                    Some(PackedColour::from_rgb(x as u8, y as u8, 0))
                );
            }
        }
    }
}
