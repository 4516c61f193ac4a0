use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};

const MODEL_EXTENSION: &str = ".gltf";
const IMAGE_EXTENSION: &str = ".png";

/// Top level of a manifest file: an ordered list of folders.
///
/// Records are kept as raw JSON and only read as each folder and model is
/// reached, so a bad record fails the run at that point and not before.
#[derive(Deserialize, Debug, Clone)]
#[serde(transparent)]
pub struct Manifest(pub Vec<Value>);

#[derive(Deserialize, Debug, Clone)]
pub struct FolderEntry {
    pub folder: String,
    pub models: Vec<Value>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ModelEntry {
    #[serde(rename = "fileName")]
    pub file_name: String,
}

/// Where a folder's sample images and thumbnails end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderTargets {
    pub sample_dir: PathBuf,
    pub thumb_dir: PathBuf,
}

/// Running counters carried from one folder to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyTally {
    pub total: usize,
    pub copied: usize,
}

impl ModelEntry {
    /// Name of the rendered image for this model. Every `.gltf` in the
    /// name is replaced, not only a trailing one.
    pub fn image_name(&self) -> String {
        self.file_name.replace(MODEL_EXTENSION, IMAGE_EXTENSION)
    }
}

impl Manifest {
    pub fn folders(&self) -> impl Iterator<Item = serde_json::Result<FolderEntry>> + '_ {
        self.0.iter().map(FolderEntry::deserialize)
    }
}

impl FolderEntry {
    pub fn models(&self) -> impl Iterator<Item = serde_json::Result<ModelEntry>> + '_ {
        self.models.iter().map(ModelEntry::deserialize)
    }

    pub fn targets(&self, target_root: &Path) -> FolderTargets {
        let figures_dir = target_root.join(&self.folder).join("Figures");
        FolderTargets {
            sample_dir: figures_dir.join("SampleImages"),
            thumb_dir: figures_dir.join("Thumbnails"),
        }
    }
}

impl CopyTally {
    pub fn record(self, copied: bool) -> Self {
        CopyTally {
            total: self.total + 1,
            copied: self.copied + usize::from(copied),
        }
    }
}

impl fmt::Display for CopyTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.total, self.copied)
    }
}

/// Directory the manifest lives in. Copied folders are created under it.
pub fn target_root(manifest_path: &Path) -> &Path {
    manifest_path.parent().unwrap_or_else(|| Path::new(""))
}
