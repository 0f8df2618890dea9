//! Error types for the parts of the client that can fail before a request
//! is sent.
//!
//! # Design
//! Transfer failures never show up here; they are reported through the
//! `Response` sentinels in `http`. Only global initialization and form
//! building have their own error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// `curl_global_init` returned something other than `CURLE_OK`.
#[derive(Debug, Error)]
#[error("libcurl global initialization failed with code {code}")]
pub struct InitError {
    pub code: i32,
}

/// A multipart field could not be appended to a `FormBuilder`.
#[derive(Debug, Error)]
pub enum FormError {
    /// The field name contains a NUL byte and cannot be handed to libcurl.
    #[error("invalid form field name {0:?}")]
    InvalidName(String),

    /// The file path contains a NUL byte.
    #[error("invalid form file path {}", .0.display())]
    InvalidPath(PathBuf),

    /// The file cannot be opened for reading, or is not a regular file.
    #[error("cannot read form file {}: {source}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
