//! Blocking REST client over libcurl.
//!
//! # Overview
//! The crate root exposes one function per HTTP verb (`get`, `post`, `put`,
//! `patch`, `del`, `head`, `options`) plus `post_form` for multipart
//! uploads. Each call performs exactly one roundtrip on a connection that
//! lives only for that call and returns a `Response` by value.
//!
//! # Design
//! - `init` / `disable` wrap libcurl's global setup and teardown and are left
//!   to the application to sequence around all other use.
//! - `Connection` carries per-connection settings (base URL, headers,
//!   timeout, user agent) for callers that need more than the one-shot
//!   functions.
//! - Transport failures are reported inside `Response` through sentinel
//!   codes rather than as `Err`, so every verb returns a plain `Response`.
//! - `FormBuilder` validates each field as it is appended and is only
//!   borrowed when submitted.

pub mod client;
pub mod connection;
pub mod error;
pub mod form;
pub mod global;
pub mod http;
mod transfer;

pub use client::{del, get, head, options, patch, post, post_form, put};
pub use connection::Connection;
pub use error::{FormError, InitError};
pub use form::{FormBuilder, FormField};
pub use global::{disable, init};
pub use http::{
    HeaderFields, Method, RequestInfo, Response, OPERATION_TIMEDOUT, QUERY_FAILED,
    SSL_CERT_PROBLEM,
};
