//! Typed form options for each conversion module.
//!
//! Every field is optional. An unset field is never sent, so the service
//! applies its own default.
use serde::{Deserialize, Serialize};

use crate::form::{emit_field, FormOptions, FormValue};

/// Target PDF/A format of a conversion result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PdfFormat {
    #[serde(rename = "PDF/A-1a")]
    PdfA1a,
    #[serde(rename = "PDF/A-2b")]
    PdfA2b,
    #[serde(rename = "PDF/A-3b")]
    PdfA3b,
}

impl PdfFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            PdfFormat::PdfA1a => "PDF/A-1a",
            PdfFormat::PdfA2b => "PDF/A-2b",
            PdfFormat::PdfA3b => "PDF/A-3b",
        }
    }
}

impl FormValue for PdfFormat {
    fn to_form_value(&self) -> String {
        self.as_str().to_string()
    }
}

/// Media type Chromium emulates while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmulatedMediaType {
    Screen,
    Print,
}

impl FormValue for EmulatedMediaType {
    fn to_form_value(&self) -> String {
        let media = match self {
            EmulatedMediaType::Screen => "screen",
            EmulatedMediaType::Print => "print",
        };
        media.to_string()
    }
}

/// Layout and rendering options for the Chromium routes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChromiumOptions {
    /// Paper width in inches.
    pub paper_width: Option<f64>,
    /// Paper height in inches.
    pub paper_height: Option<f64>,
    pub margin_top: Option<f64>,
    pub margin_bottom: Option<f64>,
    pub margin_left: Option<f64>,
    pub margin_right: Option<f64>,
    pub prefer_css_page_size: Option<bool>,
    pub print_background: Option<bool>,
    pub landscape: Option<bool>,
    pub scale: Option<f64>,
    /// Page ranges such as `1-5, 8, 11-13`.
    pub native_page_ranges: Option<String>,
    /// Duration string such as `2s`.
    pub wait_delay: Option<String>,
    /// JavaScript expression that must return true before printing.
    pub wait_for_expression: Option<String>,
    pub user_agent: Option<String>,
    /// Headers Chromium sends while loading the page, as a JSON object.
    pub extra_http_headers: Option<String>,
    /// Fail with 409 when the page logs console exceptions.
    pub fail_on_console_exceptions: Option<bool>,
    pub emulated_media_type: Option<EmulatedMediaType>,
    pub pdf_format: Option<PdfFormat>,
}

impl FormOptions for ChromiumOptions {
    fn visit_fields(&self, emit: &mut dyn FnMut(&str, String)) {
        emit_field(emit, "paperWidth", &self.paper_width);
        emit_field(emit, "paperHeight", &self.paper_height);
        emit_field(emit, "marginTop", &self.margin_top);
        emit_field(emit, "marginBottom", &self.margin_bottom);
        emit_field(emit, "marginLeft", &self.margin_left);
        emit_field(emit, "marginRight", &self.margin_right);
        emit_field(emit, "preferCssPageSize", &self.prefer_css_page_size);
        emit_field(emit, "printBackground", &self.print_background);
        emit_field(emit, "landscape", &self.landscape);
        emit_field(emit, "scale", &self.scale);
        emit_field(emit, "nativePageRanges", &self.native_page_ranges);
        emit_field(emit, "waitDelay", &self.wait_delay);
        emit_field(emit, "waitForExpression", &self.wait_for_expression);
        emit_field(emit, "userAgent", &self.user_agent);
        emit_field(emit, "extraHttpHeaders", &self.extra_http_headers);
        emit_field(emit, "failOnConsoleExceptions", &self.fail_on_console_exceptions);
        emit_field(emit, "emulatedMediaType", &self.emulated_media_type);
        emit_field(emit, "pdfFormat", &self.pdf_format);
    }
}

/// Options for the LibreOffice route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LibreOfficeOptions {
    pub landscape: Option<bool>,
    pub native_page_ranges: Option<String>,
    /// Let LibreOffice itself produce PDF/A-1a.
    pub native_pdf_a1a_format: Option<bool>,
    pub pdf_format: Option<PdfFormat>,
    /// Merge all converted documents into a single PDF.
    pub merge: Option<bool>,
}

impl FormOptions for LibreOfficeOptions {
    fn visit_fields(&self, emit: &mut dyn FnMut(&str, String)) {
        emit_field(emit, "landscape", &self.landscape);
        emit_field(emit, "nativePageRanges", &self.native_page_ranges);
        emit_field(emit, "nativePdfA1aFormat", &self.native_pdf_a1a_format);
        emit_field(emit, "pdfFormat", &self.pdf_format);
        emit_field(emit, "merge", &self.merge);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeOptions {
    pub pdf_format: Option<PdfFormat>,
}

impl FormOptions for MergeOptions {
    fn visit_fields(&self, emit: &mut dyn FnMut(&str, String)) {
        emit_field(emit, "pdfFormat", &self.pdf_format);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertOptions {
    pub pdf_format: Option<PdfFormat>,
}

impl FormOptions for ConvertOptions {
    fn visit_fields(&self, emit: &mut dyn FnMut(&str, String)) {
        emit_field(emit, "pdfFormat", &self.pdf_format);
    }
}
