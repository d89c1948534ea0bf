use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{Result, Write};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ImageType {
    NoImage = 0,
    ColorMapped = 1,
    TrueColor = 2,
    BlackAndWhite = 3,
    RleColorMapped = 9,
    RleTrueColor = 10,
    RleBlackAndWhite = 11,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PixelFormat {
    Bw8 = 8,
    Bgr15 = 15,
    Bgr24 = 24,
    Bgra32 = 32,
}

impl PixelFormat {
    pub fn bits_per_pixel(self) -> u8 {
        self as u8
    }

    pub fn bytes_per_pixel(self) -> usize {
        (self as usize + 7) / 8
    }
}

/// TGA file header. Encoded as 18 bytes, multi-byte fields little-endian.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Header {
    id_length: u8,
    color_map_type: u8,
    image_type: u8,
    color_map_origin: u16,
    color_map_length: u16,
    color_map_depth: u8,
    x_origin: u16,
    y_origin: u16,
    width: u16,
    height: u16,
    pixel_depth: u8,
    image_descriptor: u8,
}

impl Header {
    pub const SIZE: usize = 18;

    /// Header of an uncompressed BGRA32 image with bottom-left origin.
    pub fn true_color(width: u16, height: u16) -> Self {
        Self {
            id_length: 0,
            color_map_type: 0,
            image_type: ImageType::TrueColor as u8,
            color_map_origin: 0,
            color_map_length: 0,
            color_map_depth: 0,
            x_origin: 0,
            y_origin: 0,
            width,
            height,
            pixel_depth: PixelFormat::Bgra32.bits_per_pixel(),
            image_descriptor: 0,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn image_type(&self) -> u8 {
        self.image_type
    }

    pub fn pixel_depth(&self) -> u8 {
        self.pixel_depth
    }

    pub fn write<W: Write>(&self, wrt: &mut W) -> Result<()> {
        wrt.write_u8(self.id_length)?;
        wrt.write_u8(self.color_map_type)?;
        wrt.write_u8(self.image_type)?;
        wrt.write_u16::<LittleEndian>(self.color_map_origin)?;
        wrt.write_u16::<LittleEndian>(self.color_map_length)?;
        wrt.write_u8(self.color_map_depth)?;
        wrt.write_u16::<LittleEndian>(self.x_origin)?;
        wrt.write_u16::<LittleEndian>(self.y_origin)?;
        wrt.write_u16::<LittleEndian>(self.width)?;
        wrt.write_u16::<LittleEndian>(self.height)?;
        wrt.write_u8(self.pixel_depth)?;
        wrt.write_u8(self.image_descriptor)?;
        Ok(())
    }
}
