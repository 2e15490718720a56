//! Gotenberg core: assets, form encoding, request builders and headers.
//!
//! Nothing in this crate performs I/O.
mod asset;
mod form;
mod headers;
mod options;
pub mod request;

pub use asset::{Asset, DEFAULT_OUTPUT_FILENAME};
pub use form::{
    emit_field, encode_files, encode_options, FormOptions, FormPart, FormPayload, FormValue,
    OptionValue, RawOptions, FILES_FIELD,
};
pub use headers::{GotenbergHeader, HeaderOptions, HeaderSet, WebhookMethod, WebhookOptions};
pub use options::{
    ChromiumOptions, ConvertOptions, EmulatedMediaType, LibreOfficeOptions, MergeOptions,
    PdfFormat,
};
pub use request::{Endpoint, RequestInfo, INDEX_FILENAME};
