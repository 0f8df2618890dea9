//! One-shot request functions.
//!
//! # Design
//! Each function builds a throwaway `Connection` with an empty base URL, so
//! `url` must be fully qualified. Body-bearing verbs set `Content-Type` from
//! the caller's value before sending. The connection is dropped before the
//! function returns and no state is kept between calls.

use crate::connection::Connection;
use crate::form::FormBuilder;
use crate::http::Response;

const CONTENT_TYPE: &str = "Content-Type";

/// HTTP GET `url`.
pub fn get(url: &str) -> Response {
    Connection::new("").get(url)
}

/// HTTP POST `data` to `url` with the given content type.
pub fn post(url: &str, content_type: &str, data: impl AsRef<[u8]>) -> Response {
    let mut conn = Connection::new("");
    conn.append_header(CONTENT_TYPE, content_type);
    conn.post(url, data)
}

/// HTTP POST a multipart form to `url`. The form stays owned by the caller.
pub fn post_form(url: &str, form: &FormBuilder) -> Response {
    Connection::new("").post_form(url, form)
}

/// HTTP PUT `data` to `url` with the given content type.
pub fn put(url: &str, content_type: &str, data: impl AsRef<[u8]>) -> Response {
    let mut conn = Connection::new("");
    conn.append_header(CONTENT_TYPE, content_type);
    conn.put(url, data)
}

/// HTTP PATCH `data` to `url` with the given content type.
pub fn patch(url: &str, content_type: &str, data: impl AsRef<[u8]>) -> Response {
    let mut conn = Connection::new("");
    conn.append_header(CONTENT_TYPE, content_type);
    conn.patch(url, data)
}

/// HTTP DELETE `url`.
pub fn del(url: &str) -> Response {
    Connection::new("").del(url)
}

/// HTTP HEAD `url`.
pub fn head(url: &str) -> Response {
    Connection::new("").head(url)
}

/// HTTP OPTIONS `url`.
pub fn options(url: &str) -> Response {
    Connection::new("").options(url)
}
