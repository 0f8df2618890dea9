//! libcurl callback handler collecting one response.

use std::mem::take;

use curl::easy::{Handler, WriteError};
use log::trace;

use crate::http::HeaderFields;

/// Value stored for header lines that carry no `:` separator, such as the
/// status line.
const PRESENT: &str = "present";

#[derive(Debug, Default)]
pub(crate) struct Collector {
    body: Vec<u8>,
    headers: HeaderFields,
}

impl Collector {
    pub(crate) fn take_body(&mut self) -> String {
        String::from_utf8_lossy(&take(&mut self.body)).into_owned()
    }

    pub(crate) fn take_headers(&mut self) -> HeaderFields {
        take(&mut self.headers)
    }
}

impl Handler for Collector {
    fn write(&mut self, data: &[u8]) -> Result<usize, WriteError> {
        self.body.extend_from_slice(data);
        Ok(data.len())
    }

    fn header(&mut self, data: &[u8]) -> bool {
        let line = String::from_utf8_lossy(data);
        trace!("response header line {:?}", line.trim_end());
        parse_header_line(&mut self.headers, &line);
        true
    }
}

/// Record one raw header line. Lines are split at the first `:`; lines
/// without one are kept under their trimmed text, blank lines are skipped.
pub(crate) fn parse_header_line(headers: &mut HeaderFields, line: &str) {
    match line.split_once(':') {
        Some((name, value)) => {
            headers.insert(name.trim().to_string(), value.trim().to_string());
        }
        None => {
            let line = line.trim();
            if !line.is_empty() {
                headers.insert(line.to_string(), PRESENT.to_string());
            }
        }
    }
}
