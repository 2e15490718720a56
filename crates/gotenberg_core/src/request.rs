//! Request builders, one per conversion route.
//!
//! Builders are pure: they assemble a [`FormPayload`] and pick the route,
//! nothing is sent until the result reaches an executor.
use crate::form::{encode_files, encode_options, FormOptions, FormPayload};
use crate::options::{ChromiumOptions, ConvertOptions, LibreOfficeOptions, MergeOptions};
use crate::Asset;

/// Filename Chromium requires for the entry document of html and markdown
/// conversions.
pub const INDEX_FILENAME: &str = "index.html";

/// The fixed set of conversion routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ChromiumUrl,
    ChromiumHtml,
    ChromiumMarkdown,
    LibreOffice,
    PdfEnginesMerge,
    PdfEnginesConvert,
}

impl Endpoint {
    pub const ALL: [Endpoint; 6] = [
        Endpoint::ChromiumUrl,
        Endpoint::ChromiumHtml,
        Endpoint::ChromiumMarkdown,
        Endpoint::LibreOffice,
        Endpoint::PdfEnginesMerge,
        Endpoint::PdfEnginesConvert,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::ChromiumUrl => "/forms/chromium/convert/url",
            Endpoint::ChromiumHtml => "/forms/chromium/convert/html",
            Endpoint::ChromiumMarkdown => "/forms/chromium/convert/markdown",
            Endpoint::LibreOffice => "/forms/libreoffice/convert",
            Endpoint::PdfEnginesMerge => "/forms/pdfengines/merge",
            Endpoint::PdfEnginesConvert => "/forms/pdfengines/convert",
        }
    }
}

/// A request body plus the route it targets. Carries no transport state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    pub endpoint: Endpoint,
    pub payload: FormPayload,
}

impl RequestInfo {
    pub fn path(&self) -> &'static str {
        self.endpoint.path()
    }
}

/// Converts the page at `target` to PDF. `files` are extra assets made
/// available to the page.
pub fn url(target: &str, options: &ChromiumOptions, files: Vec<Asset>) -> RequestInfo {
    let mut payload = FormPayload::new();
    encode_options(&mut payload, options);
    payload.push_text("url", target);
    encode_files(&mut payload, files);

    RequestInfo {
        endpoint: Endpoint::ChromiumUrl,
        payload,
    }
}

/// Converts an HTML document to PDF. `files` are the assets the index
/// document references.
pub fn html(index: Asset, files: Vec<Asset>, options: &ChromiumOptions) -> RequestInfo {
    chromium_document(Endpoint::ChromiumHtml, index, files, options)
}

/// Converts an HTML document that pulls in markdown files to PDF. The
/// markdown files go in `files`.
pub fn markdown(index: Asset, files: Vec<Asset>, options: &ChromiumOptions) -> RequestInfo {
    chromium_document(Endpoint::ChromiumMarkdown, index, files, options)
}

/// Converts office documents to PDF, one result per input unless merged.
pub fn office(files: Vec<Asset>, options: &LibreOfficeOptions) -> RequestInfo {
    files_request(Endpoint::LibreOffice, files, options)
}

/// Merges PDFs in the given order.
pub fn merge(files: Vec<Asset>, options: &MergeOptions) -> RequestInfo {
    files_request(Endpoint::PdfEnginesMerge, files, options)
}

/// Converts PDFs to another PDF format.
pub fn convert(files: Vec<Asset>, options: &ConvertOptions) -> RequestInfo {
    files_request(Endpoint::PdfEnginesConvert, files, options)
}

fn chromium_document(
    endpoint: Endpoint,
    mut index: Asset,
    files: Vec<Asset>,
    options: &ChromiumOptions,
) -> RequestInfo {
    let mut payload = FormPayload::new();
    encode_options(&mut payload, options);
    encode_files(&mut payload, files);

    if !index.has_suffix(INDEX_FILENAME) {
        index.filename = INDEX_FILENAME.to_string();
    }
    encode_files(&mut payload, [index]);

    RequestInfo { endpoint, payload }
}

fn files_request(endpoint: Endpoint, files: Vec<Asset>, options: &dyn FormOptions) -> RequestInfo {
    let mut payload = FormPayload::new();
    encode_options(&mut payload, options);
    encode_files(&mut payload, files);

    RequestInfo { endpoint, payload }
}

#[cfg(test)]
mod tests {
    use super::Endpoint;

    #[test]
    fn every_route_is_a_forms_path() {
        for endpoint in Endpoint::ALL {
            assert!(endpoint.path().starts_with("/forms/"));
        }
    }
}
