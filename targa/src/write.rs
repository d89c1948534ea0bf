use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::header::Header;
use crate::image::create_image;
use crate::{Color, Error, Image, Result};

/// Writes the TGA header followed by the raw pixel data.
///
/// A short write is reported as [`Error::Io`].
pub fn write_image<W: Write>(wrt: &mut W, image: &Image) -> Result<()> {
    image.header().write(wrt)?;
    wrt.write_all(image.pixels())?;
    wrt.flush()?;
    debug!(
        "Wrote {} header bytes and {} pixel bytes",
        Header::SIZE,
        image.pixels().len()
    );
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes `image` to it.
pub fn save_image<P: AsRef<Path>>(path: P, image: &Image) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::SinkUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut wrt = BufWriter::new(file);
    write_image(&mut wrt, image)?;
    info!("Saved {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}

/// Writes a `width` x `height` image filled with `blank_color` to `path`.
pub fn create_image_file<P: AsRef<Path>>(path: P, width: u16, height: u16, blank_color: Color) -> Result<()> {
    let image = create_image(width, height, blank_color)?;
    save_image(path, &image)
}
