//! Encoder for uncompressed 32-bit true-color TGA images.
//!
//! Images are built with [`create_image`], edited with [`set_pixel`] and
//! written with [`write_image`] or [`save_image`].

mod color;
mod error;
mod header;
mod image;
mod write;

pub use color::Color;
pub use error::{Error, Result};
pub use header::{Header, ImageType, PixelFormat};
pub use image::{create_image, set_pixel, Image};
pub use write::{create_image_file, save_image, write_image};
