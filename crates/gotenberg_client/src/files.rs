use std::path::Path;

use gotenberg_core::Asset;
use gotenberg_logging::gotenberg_trace;

use crate::ClientError;

/// Reads a whole file into an asset.
///
/// Without `filename` the asset is named after the file name component of
/// `path`.
pub async fn read_asset(
    path: impl AsRef<Path>,
    filename: Option<&str>,
) -> Result<Asset, ClientError> {
    let path = path.as_ref();
    let content = tokio::fs::read(path)
        .await
        .map_err(|source| ClientError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let filename = match filename {
        Some(name) => name.to_string(),
        None => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned()),
    };
    gotenberg_trace!("read {} bytes from {:?} as {}", content.len(), path, filename);
    Ok(Asset::new(filename, content))
}
