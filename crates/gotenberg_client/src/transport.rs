use std::time::Duration;

use bytes::Bytes;
use futures_util::StreamExt;
use gotenberg_core::{FormPart, FormPayload, GotenbergHeader, HeaderSet};
use gotenberg_logging::gotenberg_trace;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use url::Url;

use crate::{TransportError, TransportFailureKind};

#[derive(Debug, Clone)]
pub struct TransportSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_response_bytes: u64,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
            max_response_bytes: 256 * 1024 * 1024,
        }
    }
}

/// A fully resolved conversion request, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingRequest {
    pub url: Url,
    pub headers: HeaderSet,
    pub payload: FormPayload,
}

/// What came back from the service. The body is read eagerly; a failure
/// while reading it is kept here rather than raised, so a rejected
/// conversion can still be reported with its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResponse {
    pub status: u16,
    pub content_type: Option<String>,
    /// Trace the service assigned to the request.
    pub trace: Option<String>,
    pub body: Result<Bytes, TransportError>,
}

impl ConversionResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: None,
            trace: None,
            body: Ok(body.into()),
        }
    }

    pub fn with_body_error(status: u16, error: TransportError) -> Self {
        Self {
            status,
            content_type: None,
            trace: None,
            body: Err(error),
        }
    }
}

#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: OutgoingRequest) -> Result<ConversionResponse, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    settings: TransportSettings,
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(settings: TransportSettings) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| TransportError::new(TransportFailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &TransportSettings {
        &self.settings
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Bytes, TransportError> {
        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(TransportError::new(
                    TransportFailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(TransportError::new(
                    TransportFailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        gotenberg_trace!("read {} response bytes", bytes.len());
        Ok(Bytes::from(bytes))
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: OutgoingRequest) -> Result<ConversionResponse, TransportError> {
        let mut builder = self
            .client
            .post(request.url)
            .multipart(build_form(request.payload));
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let content_type = header_value(&response, CONTENT_TYPE.as_str());
        let trace = header_value(&response, GotenbergHeader::Trace.name());
        let body = self.read_body(response).await;

        Ok(ConversionResponse {
            status,
            content_type,
            trace,
            body,
        })
    }
}

fn build_form(payload: FormPayload) -> Form {
    payload
        .into_parts()
        .into_iter()
        .fold(Form::new(), |form, part| match part {
            FormPart::Text { name, value } => form.text(name, value),
            // `Bytes` bodies carry their length into the part.
            FormPart::File { name, asset } => {
                form.part(name, Part::stream(asset.content).file_name(asset.filename))
            }
        })
}

fn header_value(response: &reqwest::Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::new(TransportFailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return TransportError::new(TransportFailureKind::InvalidRequest, err.to_string());
    }
    if err.is_body() || err.is_decode() {
        return TransportError::new(TransportFailureKind::Body, err.to_string());
    }
    TransportError::new(TransportFailureKind::Network, err.to_string())
}
