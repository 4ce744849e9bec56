// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::export::ExportError;

/// Where an exported blob ends up.
pub trait Delivery {
    /// Hand over `contents` under `filename`. Returns where it landed.
    fn deliver(&mut self, filename: &str, contents: &str) -> Result<PathBuf, ExportError>;
}

/// Writes each delivery as a file inside one directory.
#[derive(Clone, Debug)]
pub struct DirDelivery {
    dir: PathBuf,
}

impl DirDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Delivery for DirDelivery {
    fn deliver(&mut self, filename: &str, contents: &str) -> Result<PathBuf, ExportError> {
        ensure_directory(&self.dir)?;
        let path = self.dir.join(filename);
        fs::write(&path, contents).map_err(|source| ExportError::Io { path: path.clone(), source })?;
        logf!("Export: wrote {}", path.display());
        Ok(path)
    }
}

/// Create `dir` if needed; fail if the path exists as something else.
pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
