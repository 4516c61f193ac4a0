use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        debug!("Creating directory: {}", dir.display());
        fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Copies `src` over `dst`, replacing whatever is already there.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    println!("{} --> {}", src.display(), dst.display());
    debug!("Copying image: {} -> {}", src.display(), dst.display());
    fs::copy(src, dst).map_err(|source| Error::Copy {
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Direct children of `dir`, files and subdirectories alike, in file name order.
pub fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            entry
                .map(|e| e.into_path())
                .map_err(|source| Error::ReadDir {
                    path: dir.to_path_buf(),
                    source,
                })
        })
        .collect()
}
