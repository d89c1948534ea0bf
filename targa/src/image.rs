use log::debug;

use crate::header::{Header, PixelFormat};
use crate::{Color, Error, Result};

const BYTES_PER_PIXEL: usize = PixelFormat::Bgra32 as usize / 8;

/// Uncompressed BGRA32 image. Rows are stored bottom-to-top.
#[derive(Clone, Debug)]
pub struct Image {
    header: Header,
    pixels: Vec<u8>,
}

/// Allocates a `width` x `height` image with every pixel set to `blank_color`.
///
/// Zero-area images are valid and have an empty pixel buffer.
pub fn create_image(width: u16, height: u16, blank_color: Color) -> Result<Image> {
    let bytes = u64::from(width) * u64::from(height) * BYTES_PER_PIXEL as u64;
    let mut pixels = alloc_pixels(bytes)?;
    // alloc_pixels rejects sizes that do not fit in usize
    let size = bytes as usize;

    let bgra = blank_color.to_bgra();
    if bgra.iter().all(|&b| b == bgra[0]) {
        pixels.resize(size, bgra[0]);
    } else {
        pixels.extend(bgra.iter().copied().cycle().take(size));
    }
    debug_assert_eq!(pixels.len(), size);

    debug!("Created {}x{} image ({} bytes of pixel data)", width, height, size);
    Ok(Image {
        header: Header::true_color(width, height),
        pixels,
    })
}

/// Reserves room for `bytes` bytes of pixel data without initializing it.
fn alloc_pixels(bytes: u64) -> Result<Vec<u8>> {
    let size = usize::try_from(bytes).map_err(|_| Error::OutOfMemory { bytes })?;
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(size)
        .map_err(|_| Error::OutOfMemory { bytes })?;
    Ok(pixels)
}

/// Writes `color` at (`x`, `y`).
///
/// TGA rows are stored bottom-to-top. If `top_to_bottom` is set, `y` counts
/// rows from the top of the image and is flipped before addressing.
pub fn set_pixel(x: u16, y: u16, image: &mut Image, color: Color, top_to_bottom: bool) -> Result<()> {
    let offset = image.pixel_offset(x, y, top_to_bottom)?;
    image.pixels[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&color.to_bgra());
    Ok(())
}

impl Image {
    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn width(&self) -> u16 {
        self.header.width()
    }

    pub fn height(&self) -> u16 {
        self.header.height()
    }

    /// Raw pixel data in file order (BGRA, bottom row first).
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Byte offset of pixel (`x`, `y`) in the pixel buffer.
    pub fn pixel_offset(&self, x: u16, y: u16, top_to_bottom: bool) -> Result<usize> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        let row = if top_to_bottom { height - 1 - y } else { y };
        let index = usize::from(row) * usize::from(width) + usize::from(x);
        Ok(index * BYTES_PER_PIXEL)
    }

    pub fn set_pixel(&mut self, x: u16, y: u16, color: Color, top_to_bottom: bool) -> Result<()> {
        set_pixel(x, y, self, color, top_to_bottom)
    }

    pub fn get_pixel(&self, x: u16, y: u16, top_to_bottom: bool) -> Result<Color> {
        let offset = self.pixel_offset(x, y, top_to_bottom)?;
        let mut bgra = [0u8; BYTES_PER_PIXEL];
        bgra.copy_from_slice(&self.pixels[offset..offset + BYTES_PER_PIXEL]);
        Ok(Color::from_bgra(bgra))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(255, 0, 0, 255);

    #[test]
    fn blank_fill() {
        let c = Color::new(30, 20, 10, 128);
        let img = create_image(3, 2, c).unwrap();
        assert_eq!(img.pixels().len(), 3 * 2 * 4);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(img.get_pixel(x, y, false).unwrap(), c);
            }
        }
        assert_eq!(&img.pixels()[..8], &[10, 20, 30, 128, 10, 20, 30, 128]);
    }

    #[test]
    fn uniform_fill() {
        let img = create_image(2, 2, Color::new(7, 7, 7, 7)).unwrap();
        assert_eq!(img.pixels(), &[7u8; 16][..]);
    }

    #[test]
    fn unsatisfiable_allocation() {
        let result = alloc_pixels(u64::MAX);
        assert!(matches!(result, Err(Error::OutOfMemory { bytes: u64::MAX })));
    }

    #[test]
    fn zero_size_allocation_succeeds() {
        assert!(alloc_pixels(0).unwrap().is_empty());
    }

    #[test]
    fn zero_area() {
        for (w, h) in [(0, 0), (0, 5), (5, 0)] {
            let img = create_image(w, h, Color::WHITE).unwrap();
            assert!(img.pixels().is_empty());
            assert!(matches!(img.get_pixel(0, 0, false), Err(Error::OutOfBounds { .. })));
        }
    }

    #[test]
    fn header_fields() {
        let img = create_image(640, 480, Color::BLACK).unwrap();
        assert_eq!(img.header().image_type(), 2);
        assert_eq!(img.header().pixel_depth(), 32);
        assert_eq!((img.width(), img.height()), (640, 480));
    }

    #[test]
    fn boundary_offsets_bottom_to_top() {
        let img = create_image(4, 3, Color::BLACK).unwrap();
        assert_eq!(img.pixel_offset(0, 0, false).unwrap(), 0);
        assert_eq!(img.pixel_offset(3, 0, false).unwrap(), 12);
        assert_eq!(img.pixel_offset(0, 2, false).unwrap(), 32);
        assert_eq!(img.pixel_offset(3, 2, false).unwrap(), 44);
    }

    #[test]
    fn boundary_offsets_top_to_bottom() {
        let img = create_image(4, 3, Color::BLACK).unwrap();
        assert_eq!(img.pixel_offset(0, 0, true).unwrap(), 32);
        assert_eq!(img.pixel_offset(3, 0, true).unwrap(), 44);
        assert_eq!(img.pixel_offset(0, 2, true).unwrap(), 0);
        assert_eq!(img.pixel_offset(3, 2, true).unwrap(), 12);
        assert_eq!(img.pixel_offset(1, 1, true).unwrap(), 20);
    }

    #[test]
    fn set_pixel_writes_bgra() {
        let mut img = create_image(5, 4, Color::BLACK).unwrap();
        let c = Color::new(1, 2, 3, 4);
        set_pixel(2, 3, &mut img, c, false).unwrap();
        let offset = (3 * 5 + 2) * 4;
        assert_eq!(&img.pixels()[offset..offset + 4], &[3, 2, 1, 4]);
        assert_eq!(img.get_pixel(2, 3, false).unwrap(), c);
    }

    #[test]
    fn orientation_flip() {
        let mut a = create_image(3, 5, Color::BLACK).unwrap();
        let mut b = a.clone();
        for y in 0..5 {
            for x in 0..3 {
                let c = Color::new(x as u8, y as u8, 0, 255);
                a.set_pixel(x, y, c, true).unwrap();
                b.set_pixel(x, 5 - 1 - y, c, false).unwrap();
            }
        }
        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn out_of_bounds_leaves_buffer() {
        let mut img = create_image(2, 3, Color::WHITE).unwrap();
        let before = img.pixels().to_vec();
        for (x, y, flip) in [(2, 0, false), (0, 3, false), (2, 0, true), (0, 3, true), (u16::MAX, u16::MAX, true)] {
            let err = set_pixel(x, y, &mut img, RED, flip).unwrap_err();
            assert!(matches!(err, Error::OutOfBounds { width: 2, height: 3, .. }));
        }
        assert_eq!(img.pixels(), &before[..]);
    }
}
