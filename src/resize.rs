use crate::error::{Error, Result};
use crate::fs::{ensure_dir, list_dir};
use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageReader};
use log::{debug, info};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// Number of images written to the output directory.
    Resized(usize),
    /// The source was not a directory; nothing was done.
    NotDirectory(String),
}

/// Stretches every entry of `source_dir` to exactly `width` x `height` and
/// writes it under the same file name in `output_dir`.
///
/// Entries are not filtered: a subdirectory or a file that does not decode as
/// an image stops the whole batch.
pub fn resize_images(
    source_dir: &Path,
    output_dir: &Path,
    width: u32,
    height: u32,
) -> Result<ResizeOutcome> {
    if !source_dir.is_dir() {
        return Ok(ResizeOutcome::NotDirectory(format!(
            "Not directory!: {}",
            source_dir.display()
        )));
    }

    ensure_dir(output_dir)?;

    let entries = list_dir(source_dir)?;
    info!(
        "Resizing {} entries from {} to {}x{}",
        entries.len(),
        source_dir.display(),
        width,
        height
    );

    for path in &entries {
        let img = decode_image(path)?;
        let resized = img.resize_exact(width, height, FilterType::Lanczos3);

        let out_path = output_dir.join(path.file_name().unwrap_or_default());
        debug!("Writing resized image: {}", out_path.display());
        resized.save(&out_path).map_err(|source| Error::ImageEncode {
            path: out_path.clone(),
            source,
        })?;
    }

    Ok(ResizeOutcome::Resized(entries.len()))
}

/// Decodes by sniffing the file contents, falling back to the extension.
fn decode_image(path: &Path) -> Result<DynamicImage> {
    let decode = || -> std::result::Result<DynamicImage, ImageError> {
        ImageReader::open(path)?.with_guessed_format()?.decode()
    };
    decode().map_err(|source| Error::ImageDecode {
        path: path.to_path_buf(),
        source,
    })
}
