//! Gotenberg client: executors, transport and response handling.
mod archive;
mod config;
mod error;
mod executor;
mod filename;
mod files;
mod persist;
mod response;
mod transport;

pub use archive::{ArchiveReader, ZipArchiveReader};
pub use config::ClientConfig;
pub use error::{ArchiveError, ClientError, TransportError, TransportFailureKind};
pub use executor::Executor;
pub use filename::safe_filename;
pub use files::read_asset;
pub use persist::{ensure_output_dir, AssetWriter, PersistError};
pub use response::{
    handle_archive_response, handle_response, handle_zip_response, NO_ERROR_MESSAGE,
    SUCCESS_STATUS,
};
pub use transport::{
    ConversionResponse, OutgoingRequest, ReqwestTransport, Transport, TransportSettings,
};

pub use gotenberg_core::*;
