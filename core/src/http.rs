//! Plain data types shared by the facade and `Connection`.
//!
//! # Design
//! A `Response` is produced exactly once per call and handed back by value.
//! Transport failures are not a separate error type: they arrive as a
//! `Response` whose `code` is a sentinel (see the constants below) and whose
//! `body` carries a human-readable description.

use std::collections::BTreeMap;
use std::time::Duration;

/// Response headers keyed by the name exactly as the server sent it.
pub type HeaderFields = BTreeMap<String, String>;

/// `code` of a response whose transfer failed for a reason other than the
/// two libcurl codes below.
pub const QUERY_FAILED: i32 = -1;

/// `CURLE_OPERATION_TIMEDOUT`, reported as-is when a transfer times out.
pub const OPERATION_TIMEDOUT: i32 = 28;

/// `CURLE_SSL_CERTPROBLEM`, reported as-is for client certificate failures.
pub const SSL_CERT_PROBLEM: i32 = 58;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    /// The verb as it appears on the request line.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

/// Result of one HTTP roundtrip.
///
/// `code` is the HTTP status on success, or one of `QUERY_FAILED`,
/// `OPERATION_TIMEDOUT` and `SSL_CERT_PROBLEM` when the transfer itself
/// failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub code: i32,
    pub body: String,
    pub headers: HeaderFields,
}

impl Response {
    /// A response describing a failed transfer.
    pub(crate) fn failure(code: i32, body: impl Into<String>) -> Self {
        Self {
            code,
            body: body.into(),
            headers: HeaderFields::new(),
        }
    }

    /// Look up a header by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Transfer details of the last request made through a `Connection`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestInfo {
    pub effective_url: String,
    pub total_time: Duration,
    pub name_lookup_time: Duration,
    pub connect_time: Duration,
    pub app_connect_time: Duration,
    pub pre_transfer_time: Duration,
    pub start_transfer_time: Duration,
    pub redirect_time: Duration,
    pub redirect_count: u32,
}
