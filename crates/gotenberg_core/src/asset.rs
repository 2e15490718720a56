use bytes::Bytes;

/// Filename given to single-file conversion results.
pub const DEFAULT_OUTPUT_FILENAME: &str = "output.pdf";

/// A named binary payload, used both as request attachment and as
/// conversion result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub filename: String,
    pub content: Bytes,
}

impl Asset {
    pub fn new(filename: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.filename.ends_with(suffix)
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
