use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::error;

use crate::error::Error;
use crate::frame::Frame;

/// Per-call transport options forwarded to the underlying GET.
///
/// The recognized options are enumerated here rather than passed as an
/// untyped bag: query parameters, headers and a timeout. When no timeout is
/// set the reqwest client default applies.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub query_params: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Shared request execution for every catalog method.
///
/// One GET per call, no retries. Every failure is classified into an
/// [`Error`] variant and logged exactly once before it is returned, so the
/// cause stays inspectable on the return channel and visible in the logs.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    http: Client,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// Issue one GET and decode the body as untyped JSON.
    pub async fn get(&self, url: &str, opts: &RequestOptions) -> Result<Value, Error> {
        let mut request = self.http.get(url);
        if !opts.query_params.is_empty() {
            request = request.query(&opts.query_params);
        }
        for (name, value) in &opts.headers {
            request = request.header(name, value);
        }
        if let Some(timeout) = opts.timeout {
            request = request.timeout(timeout);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return Err(classify(url, e)),
        };

        let status = response.status();
        if !status.is_success() {
            error!("HTTP error: status {} for {url}", status.as_u16());
            return Err(Error::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        response.json::<Value>().await.map_err(|e| classify(url, e))
    }

    /// Issue one GET and project the body into a row/column [`Frame`].
    pub async fn get_frame(&self, url: &str, opts: &RequestOptions) -> Result<Frame, Error> {
        let value = self.get(url, opts).await?;
        project(url, value)
    }
}

/// Project a decoded payload into a [`Frame`].
///
/// Every shape failure funnels through here so it is logged once like the
/// transport failures are.
pub(crate) fn project(url: &str, value: Value) -> Result<Frame, Error> {
    Frame::from_value(value).map_err(|e| {
        error!("shape error for {url}: {e}");
        e
    })
}

fn classify(url: &str, e: reqwest::Error) -> Error {
    if e.is_connect() {
        error!("connection error for {url}: {e}");
        Error::Connect(e)
    } else if e.is_timeout() {
        error!("request timed out for {url}: {e}");
        Error::Timeout(e)
    } else {
        error!("error during request to {url}: {e}");
        Error::Transport(e)
    }
}
