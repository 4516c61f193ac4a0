use crate::CopyArgs;
use crate::domain::{CopyTally, FolderEntry, Manifest, ModelEntry, target_root};
use crate::error::{Error, Result};
use crate::fs::{copy_file, ensure_dir};
use log::info;
use std::fs;
use std::path::Path;

/// Checks that the manifest and both source directories exist before any work starts.
pub fn validate(args: &CopyArgs) -> Result<()> {
    if !args.manifest.is_file() {
        return Err(Error::ManifestNotFound(args.manifest.clone()));
    }
    if !args.source_dir.is_dir() {
        return Err(Error::SourceDirNotFound(args.source_dir.clone()));
    }
    if !args.thumbnails_dir.is_dir() {
        return Err(Error::ThumbnailsDirNotFound(args.thumbnails_dir.clone()));
    }
    Ok(())
}

pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let raw = fs::read_to_string(path).map_err(|source| Error::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| Error::ManifestParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Copies the sample image and thumbnail of every model in the manifest into
/// `<manifest dir>/<folder>/Figures/{SampleImages,Thumbnails}`.
///
/// The tally printed after each folder is cumulative. Only sample images
/// count as copied; thumbnails are copied but not counted.
pub fn copy_images_over(
    manifest_path: &Path,
    source_dir: &Path,
    thumbnails_dir: &Path,
) -> Result<CopyTally> {
    let manifest = load_manifest(manifest_path)?;
    let root = target_root(manifest_path);
    info!(
        "Copying images for {} folders into {}",
        manifest.0.len(),
        root.display()
    );

    manifest
        .folders()
        .try_fold(CopyTally::default(), |tally, entry| {
            let entry = entry.map_err(|source| bad_entry(manifest_path, source))?;
            let tally = copy_folder(&entry, manifest_path, source_dir, thumbnails_dir, tally)?;
            println!("{tally}");
            Ok(tally)
        })
}

fn copy_folder(
    entry: &FolderEntry,
    manifest_path: &Path,
    source_dir: &Path,
    thumbnails_dir: &Path,
    tally: CopyTally,
) -> Result<CopyTally> {
    let targets = entry.targets(target_root(manifest_path));
    entry.models().try_fold(tally, |tally, model| {
        let model = model.map_err(|source| bad_entry(manifest_path, source))?;
        let copied = copy_model_image(&model, source_dir, &targets.sample_dir)?;
        copy_model_image(&model, thumbnails_dir, &targets.thumb_dir)?;
        Ok(tally.record(copied))
    })
}

fn bad_entry(manifest_path: &Path, source: serde_json::Error) -> Error {
    Error::ManifestEntry {
        path: manifest_path.to_path_buf(),
        source,
    }
}

/// Copies the model's image from `from_dir` into `to_dir` if it exists there,
/// creating `to_dir` on first use. Returns whether a copy happened.
fn copy_model_image(model: &ModelEntry, from_dir: &Path, to_dir: &Path) -> Result<bool> {
    let image_name = model.image_name();
    let src = from_dir.join(&image_name);
    if !src.is_file() {
        return Ok(false);
    }
    ensure_dir(to_dir)?;
    copy_file(&src, &to_dir.join(&image_name))?;
    Ok(true)
}
