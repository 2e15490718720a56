use std::io::{Cursor, Read};

use gotenberg_core::Asset;
use zip::ZipArchive;

use crate::ArchiveError;

/// Splits an archive into its files.
pub trait ArchiveReader: Send + Sync {
    fn read_entries(&self, archive: &[u8]) -> Result<Vec<Asset>, ArchiveError>;
}

/// Reads zip archives, returning files in central-directory order and
/// skipping directory entries.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZipArchiveReader;

impl ArchiveReader for ZipArchiveReader {
    fn read_entries(&self, archive: &[u8]) -> Result<Vec<Asset>, ArchiveError> {
        let mut zip = ZipArchive::new(Cursor::new(archive))?;
        let mut assets = Vec::with_capacity(zip.len());

        for index in 0..zip.len() {
            let mut entry = zip.by_index(index)?;
            if entry.is_dir() {
                continue;
            }
            let mut content = Vec::new();
            entry.read_to_end(&mut content)?;
            assets.push(Asset::new(entry.name(), content));
        }

        Ok(assets)
    }
}
