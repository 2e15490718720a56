use std::future::{ready, IntoFuture, Ready};

use gotenberg_core::{Asset, DEFAULT_OUTPUT_FILENAME};
use gotenberg_logging::gotenberg_debug;

use crate::archive::{ArchiveReader, ZipArchiveReader};
use crate::transport::ConversionResponse;
use crate::ClientError;

/// The only status treated as a successful conversion.
pub const SUCCESS_STATUS: u16 = 200;
/// Message used when a failed response's body could not be read.
pub const NO_ERROR_MESSAGE: &str = "No Error message!";

/// Lets an already received response go wherever a pending one is accepted.
impl IntoFuture for ConversionResponse {
    type Output = Result<ConversionResponse, ClientError>;
    type IntoFuture = Ready<Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        ready(Ok(self))
    }
}

/// Waits for `response` and turns a 200 into a single `output.pdf` asset.
pub async fn handle_response<R>(response: R) -> Result<Asset, ClientError>
where
    R: IntoFuture<Output = Result<ConversionResponse, ClientError>>,
{
    let response = response.await?;

    if response.status != SUCCESS_STATUS {
        let message = match &response.body {
            Ok(body) => String::from_utf8_lossy(body).into_owned(),
            Err(_) => NO_ERROR_MESSAGE.to_string(),
        };
        return Err(ClientError::ConversionFailed {
            status: response.status,
            message,
        });
    }

    let content = response.body?;
    Ok(Asset::new(DEFAULT_OUTPUT_FILENAME, content))
}

/// Waits for `response` and unpacks the zip archive it carries.
pub async fn handle_zip_response<R>(response: R) -> Result<Vec<Asset>, ClientError>
where
    R: IntoFuture<Output = Result<ConversionResponse, ClientError>>,
{
    handle_archive_response(response, &ZipArchiveReader).await
}

pub async fn handle_archive_response<R>(
    response: R,
    reader: &dyn ArchiveReader,
) -> Result<Vec<Asset>, ClientError>
where
    R: IntoFuture<Output = Result<ConversionResponse, ClientError>>,
{
    let archive = handle_response(response).await?;
    let assets = reader.read_entries(&archive.content)?;
    gotenberg_debug!("archive response held {} files", assets.len());
    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TransportError, TransportFailureKind};

    #[tokio::test]
    async fn unreadable_error_body_uses_fallback_message() {
        let response = ConversionResponse::with_body_error(
            503,
            TransportError::new(TransportFailureKind::Body, "connection reset"),
        );

        let err = handle_response(response).await.unwrap_err();
        match err {
            ClientError::ConversionFailed { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "No Error message!");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreadable_success_body_is_a_transport_failure() {
        let response = ConversionResponse::with_body_error(
            200,
            TransportError::new(TransportFailureKind::Body, "truncated"),
        );

        let err = handle_response(response).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Transport(TransportError {
                kind: TransportFailureKind::Body,
                ..
            })
        ));
    }

    struct WholeBodyReader;

    impl ArchiveReader for WholeBodyReader {
        fn read_entries(&self, archive: &[u8]) -> Result<Vec<Asset>, crate::ArchiveError> {
            Ok(vec![Asset::new("whole.bin", archive.to_vec())])
        }
    }

    #[tokio::test]
    async fn archive_handler_delegates_to_given_reader() {
        let assets = handle_archive_response(ConversionResponse::new(200, "raw"), &WholeBodyReader)
            .await
            .unwrap();
        assert_eq!(assets, vec![Asset::new("whole.bin", "raw")]);
    }

    #[tokio::test]
    async fn other_success_codes_are_rejected() {
        let err = handle_response(ConversionResponse::new(204, ""))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::ConversionFailed { status: 204, .. }
        ));
    }
}
