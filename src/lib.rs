use clap::Parser;
use std::path::PathBuf;

pub mod copier;
pub mod domain;
pub mod error;
pub mod fs;
pub mod resize;

pub use copier::copy_images_over;
pub use error::{Error, Result};
pub use resize::{ResizeOutcome, resize_images};

/// Copies sample images and thumbnails into the folders named by a manifest
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CopyArgs {
    /// Path to the JSON manifest; folders are created next to it
    #[arg(long)]
    pub manifest: PathBuf,

    /// Directory holding the full-size sample images
    #[arg(long = "sourceDir")]
    pub source_dir: PathBuf,

    /// Directory holding the thumbnail images
    #[arg(long = "thumbnailsDir")]
    pub thumbnails_dir: PathBuf,
}

/// Resizes every image in a directory to a fixed size
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ResizeArgs {
    /// Source directory containing images
    #[arg(long = "dir")]
    pub dir: PathBuf,

    /// Target directory to store resized images
    #[arg(long = "outputDir")]
    pub output_dir: PathBuf,

    /// Width of the resized images in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Height of the resized images in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,
}
