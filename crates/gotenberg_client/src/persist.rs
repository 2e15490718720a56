use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use gotenberg_core::Asset;
use gotenberg_logging::gotenberg_debug;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::filename::safe_filename;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Creates `dir` when missing and checks that files can be written into it.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    let unusable = |err: io::Error| PersistError::OutputDir(format!("{}: {err}", dir.display()));
    fs::create_dir_all(dir).map_err(unusable)?;
    NamedTempFile::new_in(dir).map_err(unusable)?;
    Ok(())
}

/// Writes assets into `dir` under their sanitized filename, through a temp
/// file that is renamed into place.
pub struct AssetWriter {
    dir: PathBuf,
}

impl AssetWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, asset: &Asset) -> Result<PathBuf, PersistError> {
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(safe_filename(&asset.filename));
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(&asset.content)?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        gotenberg_debug!("wrote {} bytes to {:?}", asset.len(), target);
        Ok(target)
    }

    pub fn write_all<'a, I>(&self, assets: I) -> Result<Vec<PathBuf>, PersistError>
    where
        I: IntoIterator<Item = &'a Asset>,
    {
        assets.into_iter().map(|asset| self.write(asset)).collect()
    }
}
