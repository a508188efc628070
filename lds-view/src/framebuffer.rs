use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use std::convert::Infallible;

/// Owned RGBA8888 pixel buffer all drawing lands in.
///
/// Backends blit the buffer to whatever they drive; the renderer only ever
/// talks to this, which is what makes the differential redraw logic
/// testable without a window.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> FrameBuffer {
        let mut fb = FrameBuffer {
            width,
            height,
            data: vec![0; (width * height * 4) as usize],
        };
        fb.fill(Rgb888::BLACK);
        fb
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn fill(&mut self, color: Rgb888) {
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r(), color.g(), color.b(), 0xFF]);
        }
    }

    /// Color at (x, y), None when out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb888> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        Some(Rgb888::new(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
        ))
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0
                && point.y >= 0
                && (point.x as u32) < self.width
                && (point.y as u32) < self.height
            {
                let idx = ((point.y as u32 * self.width + point.x as u32) * 4) as usize;
                self.data[idx] = color.r();
                self.data[idx + 1] = color.g();
                self.data[idx + 2] = color.b();
                self.data[idx + 3] = 0xFF;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
