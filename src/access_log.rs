//! Access log for HTTP handlers
//!
//! [`AccessLog`] times a request handler and writes one info-level line
//! per request through a [`StdLogger`]:
//!
//! ```text
//! 10.0.0.7 - alice "GET /orders?page=2 HTTP/1.1" 200 512 0.0123
//! ```
//!
//! It only uses the adapter's public emit API.

use crate::adapters::StdLogger;
use crate::core::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// The request side of an access-log line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestInfo {
    /// Value of the `X-Forwarded-For` header, preferred over `remote_addr`
    pub forwarded_for: Option<String>,
    pub remote_addr: Option<String>,
    pub remote_user: Option<String>,
    pub method: String,
    pub path: String,
    pub query_string: String,
    pub http_version: String,
}

impl RequestInfo {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            http_version: "HTTP/1.1".to_string(),
            ..Default::default()
        }
    }

    fn client_address(&self) -> &str {
        self.forwarded_for
            .as_deref()
            .or(self.remote_addr.as_deref())
            .unwrap_or("-")
    }
}

/// The response side of an access-log line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseInfo {
    pub status: u16,
    /// `Content-Length` of the response, if known
    pub content_length: Option<u64>,
}

/// Everything one access-log line is built from
#[derive(Debug, Clone, PartialEq)]
pub struct AccessRecord {
    pub request: RequestInfo,
    pub response: ResponseInfo,
    pub elapsed: Duration,
}

impl AccessRecord {
    /// Format the line, escaping `%` as `%%`
    pub fn format_line(&self) -> String {
        let request = &self.request;
        let query = if request.query_string.is_empty() {
            String::new()
        } else {
            format!("?{}", request.query_string)
        };
        let length = match self.response.content_length {
            None | Some(0) => "-".to_string(),
            Some(len) => len.to_string(),
        };

        let line = format!(
            "{} - {} \"{} {}{} {}\" {} {} {:.4}",
            request.client_address(),
            request.remote_user.as_deref().unwrap_or("-"),
            request.method,
            request.path,
            query,
            request.http_version,
            self.response.status,
            length,
            self.elapsed.as_secs_f64(),
        );
        line.replace('%', "%%")
    }
}

/// Request logger wrapping a shared [`StdLogger`]
#[derive(Debug, Clone)]
pub struct AccessLog {
    logger: Arc<StdLogger>,
}

impl AccessLog {
    pub fn new(logger: Arc<StdLogger>) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &StdLogger {
        &self.logger
    }

    /// Run `handler`, then log one line for the request.
    ///
    /// The handler's response is returned unless the log write fails.
    pub fn call<F>(&self, request: &RequestInfo, handler: F) -> Result<ResponseInfo>
    where
        F: FnOnce(&RequestInfo) -> ResponseInfo,
    {
        let began_at = Instant::now();
        let response = handler(request);

        self.record(&AccessRecord {
            request: request.clone(),
            response,
            elapsed: began_at.elapsed(),
        })?;
        Ok(response)
    }

    pub fn record(&self, record: &AccessRecord) -> Result<()> {
        self.logger.info(record.format_line())
    }
}
