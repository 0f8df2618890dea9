//! A configurable HTTP connection backed by a libcurl easy handle.
//!
//! # Design
//! `Connection` keeps only settings (base URL, header overrides, timeout,
//! user agent) plus the transfer info of its last request. Every verb method
//! builds a fresh easy handle, performs exactly one transfer and drops the
//! handle before returning, so nothing is reused between calls and a
//! `Connection` can be moved freely across threads.
//!
//! Transfer failures never panic or return `Err`; they are folded into the
//! returned `Response` as sentinel codes (see `http::QUERY_FAILED`).

use std::time::Duration;

use curl::easy::{Easy2, Form, List};
use log::{debug, warn};

use crate::form::FormBuilder;
use crate::http::{
    HeaderFields, Method, RequestInfo, Response, OPERATION_TIMEDOUT, QUERY_FAILED,
    SSL_CERT_PROBLEM,
};
use crate::transfer::Collector;

const USER_AGENT: &str = concat!("restclient-rs/", env!("CARGO_PKG_VERSION"));
const TIMEOUT_BODY: &str = "Operation Timeout.";
const FAILED_BODY: &str = "Failed to query.";

enum Payload<'a> {
    Empty,
    Bytes(&'a [u8]),
    Form(Form),
}

/// HTTP connection to a base URL.
///
/// Every request URL is appended verbatim to `base_url`; pass an empty base
/// URL to use fully-qualified request URLs.
#[derive(Debug, Clone)]
pub struct Connection {
    base_url: String,
    headers: HeaderFields,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    last_request: RequestInfo,
}

impl Connection {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            headers: HeaderFields::new(),
            timeout: None,
            user_agent: None,
            last_request: RequestInfo::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add a request header, replacing any earlier value for `name`.
    pub fn append_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    /// Replace all request headers.
    pub fn set_headers(&mut self, headers: HeaderFields) {
        self.headers = headers;
    }

    pub fn headers(&self) -> &HeaderFields {
        &self.headers
    }

    /// Limit the whole transfer, connection setup included, to `timeout`.
    ///
    /// A timed-out request yields a response with code
    /// `OPERATION_TIMEDOUT`.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    /// Prefix the default user agent with `user_agent`.
    pub fn set_user_agent(&mut self, user_agent: &str) {
        self.user_agent = Some(user_agent.to_string());
    }

    pub fn user_agent(&self) -> String {
        match &self.user_agent {
            Some(custom) => format!("{custom} {USER_AGENT}"),
            None => USER_AGENT.to_string(),
        }
    }

    /// Transfer info of the most recent request.
    pub fn info(&self) -> &RequestInfo {
        &self.last_request
    }

    pub fn get(&mut self, url: &str) -> Response {
        self.perform(Method::Get, url, Payload::Empty)
    }

    pub fn post(&mut self, url: &str, data: impl AsRef<[u8]>) -> Response {
        self.perform(Method::Post, url, Payload::Bytes(data.as_ref()))
    }

    pub fn put(&mut self, url: &str, data: impl AsRef<[u8]>) -> Response {
        self.perform(Method::Put, url, Payload::Bytes(data.as_ref()))
    }

    pub fn patch(&mut self, url: &str, data: impl AsRef<[u8]>) -> Response {
        self.perform(Method::Patch, url, Payload::Bytes(data.as_ref()))
    }

    pub fn del(&mut self, url: &str) -> Response {
        self.perform(Method::Delete, url, Payload::Empty)
    }

    pub fn head(&mut self, url: &str) -> Response {
        self.perform(Method::Head, url, Payload::Empty)
    }

    pub fn options(&mut self, url: &str) -> Response {
        self.perform(Method::Options, url, Payload::Empty)
    }

    /// POST `form` as `multipart/form-data`. The form is only borrowed.
    pub fn post_form(&mut self, url: &str, form: &FormBuilder) -> Response {
        match form.to_curl_form() {
            Ok(chain) => self.perform(Method::Post, url, Payload::Form(chain)),
            Err(err) => {
                warn!("POST {}{} form rejected by libcurl: {err}", self.base_url, url);
                self.last_request = RequestInfo::default();
                Response::failure(QUERY_FAILED, FAILED_BODY)
            }
        }
    }

    fn perform(&mut self, method: Method, url: &str, payload: Payload<'_>) -> Response {
        let url = format!("{}{}", self.base_url, url);
        debug!("{} {}", method.as_str(), url);

        let mut easy = Easy2::new(Collector::default());
        let result = self
            .configure(&mut easy, method, &url, payload)
            .and_then(|()| easy.perform())
            .and_then(|()| easy.response_code());
        self.last_request = transfer_info(&mut easy);

        match result {
            Ok(code) => {
                debug!("{} {} -> {}", method.as_str(), url, code);
                let collector = easy.get_mut();
                Response {
                    code: code as i32,
                    body: collector.take_body(),
                    headers: collector.take_headers(),
                }
            }
            Err(err) => {
                warn!("{} {} failed: {}", method.as_str(), url, err);
                failure_response(&err)
            }
        }
    }

    fn configure(
        &self,
        easy: &mut Easy2<Collector>,
        method: Method,
        url: &str,
        payload: Payload<'_>,
    ) -> Result<(), curl::Error> {
        easy.url(url)?;
        easy.useragent(&self.user_agent())?;

        match method {
            Method::Get => easy.get(true)?,
            Method::Post => easy.post(true)?,
            Method::Head => easy.nobody(true)?,
            Method::Put | Method::Patch | Method::Delete | Method::Options => {
                easy.custom_request(method.as_str())?
            }
        }

        match payload {
            Payload::Empty => {}
            Payload::Bytes(data) => easy.post_fields_copy(data)?,
            Payload::Form(form) => easy.httppost(form)?,
        }

        if !self.headers.is_empty() {
            let mut list = List::new();
            for (name, value) in &self.headers {
                list.append(&format!("{name}: {value}"))?;
            }
            easy.http_headers(list)?;
        }

        if let Some(timeout) = self.timeout {
            easy.timeout(timeout)?;
            easy.signal(false)?;
        }
        Ok(())
    }
}

fn transfer_info(easy: &mut Easy2<Collector>) -> RequestInfo {
    RequestInfo {
        effective_url: easy
            .effective_url()
            .ok()
            .flatten()
            .unwrap_or_default()
            .to_string(),
        total_time: easy.total_time().unwrap_or_default(),
        name_lookup_time: easy.namelookup_time().unwrap_or_default(),
        connect_time: easy.connect_time().unwrap_or_default(),
        app_connect_time: easy.appconnect_time().unwrap_or_default(),
        pre_transfer_time: easy.pretransfer_time().unwrap_or_default(),
        start_transfer_time: easy.starttransfer_time().unwrap_or_default(),
        redirect_time: easy.redirect_time().unwrap_or_default(),
        redirect_count: easy.redirect_count().unwrap_or_default(),
    }
}

/// Map a libcurl failure to the response handed back to callers.
fn failure_response(err: &curl::Error) -> Response {
    if err.is_operation_timedout() {
        Response::failure(OPERATION_TIMEDOUT, TIMEOUT_BODY)
    } else if err.is_ssl_certproblem() {
        Response::failure(SSL_CERT_PROBLEM, err.description())
    } else {
        Response::failure(QUERY_FAILED, FAILED_BODY)
    }
}
