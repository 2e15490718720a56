use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Every request header the service recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GotenbergHeader {
    OutputFilename,
    Trace,
    WebhookUrl,
    WebhookErrorUrl,
    WebhookMethod,
    WebhookErrorMethod,
    WebhookExtraHttpHeaders,
}

impl GotenbergHeader {
    pub fn name(self) -> &'static str {
        match self {
            GotenbergHeader::OutputFilename => "Gotenberg-Output-Filename",
            GotenbergHeader::Trace => "Gotenberg-Trace",
            GotenbergHeader::WebhookUrl => "Gotenberg-Webhook-Url",
            GotenbergHeader::WebhookErrorUrl => "Gotenberg-Webhook-Error-Url",
            GotenbergHeader::WebhookMethod => "Gotenberg-Webhook-Method",
            GotenbergHeader::WebhookErrorMethod => "Gotenberg-Webhook-Error-Method",
            GotenbergHeader::WebhookExtraHttpHeaders => "Gotenberg-Webhook-Extra-Http-Headers",
        }
    }
}

/// Per-request headers that are not tied to webhooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderOptions {
    /// Request identifier the service uses in its logs.
    pub trace: Option<String>,
    /// Filename the service should give the result.
    pub output_filename: Option<String>,
}

impl HeaderOptions {
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    pub fn with_output_filename(mut self, filename: impl Into<String>) -> Self {
        self.output_filename = Some(filename.into());
        self
    }
}

/// HTTP method the service uses when calling a webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebhookMethod {
    Post,
    Patch,
    Put,
}

impl WebhookMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            WebhookMethod::Post => "POST",
            WebhookMethod::Patch => "PATCH",
            WebhookMethod::Put => "PUT",
        }
    }
}

/// Asynchronous delivery: the service posts the result to `url` (or the
/// error to `error_url`) instead of answering inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookOptions {
    pub url: Option<String>,
    pub error_url: Option<String>,
    pub method: Option<WebhookMethod>,
    pub error_method: Option<WebhookMethod>,
    /// Extra headers sent to both callbacks, as a JSON object.
    pub extra_http_headers: Option<String>,
}

impl WebhookOptions {
    pub fn new(url: impl Into<String>, error_url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            error_url: Some(error_url.into()),
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: WebhookMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_error_method(mut self, method: WebhookMethod) -> Self {
        self.error_method = Some(method);
        self
    }

    /// Serializes `headers` to the JSON object the service expects.
    pub fn with_extra_http_headers(
        mut self,
        headers: &BTreeMap<String, String>,
    ) -> Result<Self, serde_json::Error> {
        self.extra_http_headers = Some(serde_json::to_string(headers)?);
        Ok(self)
    }
}

/// The headers present on a request. A header is either set, with a value,
/// or not in the set at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: BTreeMap<GotenbergHeader, String>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_options(options: &HeaderOptions) -> Self {
        let mut set = Self::new();
        set.apply_options(options);
        set
    }

    pub fn with_webhook(mut self, webhook: &WebhookOptions) -> Self {
        self.set(GotenbergHeader::WebhookUrl, webhook.url.as_deref());
        self.set(GotenbergHeader::WebhookErrorUrl, webhook.error_url.as_deref());
        self.set(
            GotenbergHeader::WebhookMethod,
            webhook.method.map(WebhookMethod::as_str),
        );
        self.set(
            GotenbergHeader::WebhookErrorMethod,
            webhook.error_method.map(WebhookMethod::as_str),
        );
        self.set(
            GotenbergHeader::WebhookExtraHttpHeaders,
            webhook.extra_http_headers.as_deref(),
        );
        self
    }

    /// Copy of this set with the headers present in `overrides` replacing
    /// their counterparts. Headers absent from `overrides` are kept.
    pub fn merged(&self, overrides: &HeaderOptions) -> Self {
        let mut set = self.clone();
        set.apply_options(overrides);
        set
    }

    pub fn get(&self, header: GotenbergHeader) -> Option<&str> {
        self.entries.get(&header).map(String::as_str)
    }

    pub fn contains(&self, header: GotenbergHeader) -> bool {
        self.entries.contains_key(&header)
    }

    /// `(wire name, value)` pairs of the present headers.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(header, value)| (header.name(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn apply_options(&mut self, options: &HeaderOptions) {
        self.set(
            GotenbergHeader::OutputFilename,
            options.output_filename.as_deref(),
        );
        self.set(GotenbergHeader::Trace, options.trace.as_deref());
    }

    fn set(&mut self, header: GotenbergHeader, value: Option<&str>) {
        if let Some(value) = value {
            self.entries.insert(header, value.to_string());
        }
    }
}
