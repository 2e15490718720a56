use std::fmt;
use std::sync::Arc;

use gotenberg_core::{HeaderOptions, HeaderSet, RequestInfo, WebhookOptions};
use gotenberg_logging::gotenberg_debug;
use url::Url;

use crate::transport::{
    ConversionResponse, OutgoingRequest, ReqwestTransport, Transport, TransportSettings,
};
use crate::{ClientConfig, ClientError};

/// Sends built requests to one Gotenberg instance.
///
/// The base url and header set are fixed at construction; every call to
/// [`Executor::execute`] is independent.
#[derive(Clone)]
pub struct Executor {
    base_url: Url,
    headers: HeaderSet,
    transport: Arc<dyn Transport>,
}

impl Executor {
    /// Executor that answers inline. Only the headers set in `headers` are
    /// sent.
    pub fn new(base_url: &str, headers: &HeaderOptions) -> Result<Self, ClientError> {
        Self::with_header_set(base_url, HeaderSet::from_options(headers))
    }

    /// Executor that asks the service to deliver results to a webhook.
    pub fn with_webhook(
        base_url: &str,
        webhook: &WebhookOptions,
        headers: &HeaderOptions,
    ) -> Result<Self, ClientError> {
        Self::with_header_set(base_url, HeaderSet::from_options(headers).with_webhook(webhook))
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        match &config.webhook {
            Some(webhook) => Self::with_webhook(&config.url, webhook, &config.headers),
            None => Self::new(&config.url, &config.headers),
        }
    }

    fn with_header_set(base_url: &str, headers: HeaderSet) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)?;
        let transport = ReqwestTransport::new(TransportSettings::default())?;
        Ok(Self {
            base_url,
            headers,
            transport: Arc::new(transport),
        })
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_transport_settings(self, settings: TransportSettings) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(settings)?;
        Ok(self.with_transport(Arc::new(transport)))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    /// Absolute url the request is posted to.
    pub fn target(&self, info: &RequestInfo) -> Result<Url, ClientError> {
        Ok(self.base_url.join(info.path())?)
    }

    pub async fn execute(&self, info: RequestInfo) -> Result<ConversionResponse, ClientError> {
        self.dispatch(info, self.headers.clone()).await
    }

    /// Like [`Executor::execute`], with `overrides` replacing the matching
    /// executor headers for this call only.
    pub async fn execute_with_headers(
        &self,
        info: RequestInfo,
        overrides: &HeaderOptions,
    ) -> Result<ConversionResponse, ClientError> {
        self.dispatch(info, self.headers.merged(overrides)).await
    }

    async fn dispatch(
        &self,
        info: RequestInfo,
        headers: HeaderSet,
    ) -> Result<ConversionResponse, ClientError> {
        let url = self.target(&info)?;
        let path = info.path();
        gotenberg_debug!(
            "POST {} parts={} headers={}",
            url,
            info.payload.len(),
            headers.len()
        );

        let response = self
            .transport
            .send(OutgoingRequest {
                url,
                headers,
                payload: info.payload,
            })
            .await?;

        gotenberg_debug!("{} responded with status {}", path, response.status);
        Ok(response)
    }
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executor")
            .field("base_url", &self.base_url.as_str())
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}
