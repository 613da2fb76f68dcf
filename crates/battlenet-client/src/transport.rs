//! HTTP transport abstraction
//!
//! Defines the `Transport` trait that decouples the client from the HTTP
//! stack. The client shapes a `TransportRequest`; the transport executes
//! it and reports either a `TransportResponse` or a `TransportFailure`
//! (a non-HTTP failure such as a refused connection). The transport does
//! not classify failures further — timeout vs DNS vs refused is its
//! concern alone, surfaced only through the failure message.
//!
//! `ReqwestTransport` is the production implementation. Tests swap in a
//! mock implementing the same trait.
//!
//! Uses `Pin<Box<dyn Future>>` return types for dyn-compatibility
//! (`Arc<dyn Transport>`).

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::time::Duration;

use crate::error::{Error, Result};

/// HTTP methods the client dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Head,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Patch => "PATCH",
        }
    }

    /// Whether the parameter bag travels as a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }
}

/// Body encoding for POST/PUT/PATCH requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormContentType {
    /// `application/x-www-form-urlencoded`
    UrlEncoded,
    /// `multipart/form-data`
    #[default]
    Multipart,
}

/// A fully shaped request, ready for the transport.
#[derive(Debug)]
pub struct TransportRequest {
    pub url: String,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    /// Body parameters for methods that carry one, with their encoding.
    pub body: Option<(FormContentType, Vec<(String, String)>)>,
}

/// What the transport observed from a completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    /// Status line as it would appear on the wire, e.g. `HTTP/1.1 200 OK`.
    pub status_line: String,
    pub headers: Vec<(String, String)>,
    pub content_type: Option<String>,
    pub body: String,
    /// Final URL after any redirects.
    pub effective_url: String,
}

/// A transport-level (non-HTTP) failure.
///
/// The code space belongs to the transport implementation; the client
/// records the failure and soft-surfaces it in the response envelope
/// without interpreting the code.
#[derive(Debug, Clone)]
pub struct TransportFailure {
    pub code: u32,
    pub message: String,
}

/// Abstraction over the HTTP stack.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: TransportRequest,
    ) -> Pin<
        Box<dyn Future<Output = std::result::Result<TransportResponse, TransportFailure>> + Send + '_>,
    >;
}

/// Recognized transport options.
///
/// Every knob the client supports is a named field. With no CA file
/// configured, peer verification is DISABLED; setting `ca_file`
/// re-enables it against that bundle. Under rustls `verify_peer` and
/// `verify_host` cannot be toggled independently; disabling either
/// disables both.
#[derive(Debug, Clone)]
pub struct TransportOptions {
    pub verify_peer: bool,
    pub verify_host: bool,
    /// PEM bundle to trust; setting this re-enables verification.
    pub ca_file: Option<PathBuf>,
    pub timeout: Option<Duration>,
    /// Headers attached to every request before per-call headers.
    pub extra_headers: Vec<(String, String)>,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            verify_peer: false,
            verify_host: false,
            ca_file: None,
            timeout: None,
            extra_headers: Vec::new(),
        }
    }
}

/// Production transport backed by `reqwest`.
#[derive(Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    extra_headers: Vec<(String, String)>,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        Self::with_options(TransportOptions::default())
    }

    pub fn with_options(options: TransportOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder();

        if let Some(ca_file) = &options.ca_file {
            let pem = std::fs::read(ca_file).map_err(|e| {
                Error::Transport(format!("reading CA file {}: {e}", ca_file.display()))
            })?;
            let certificate = reqwest::Certificate::from_pem(&pem)
                .map_err(|e| Error::Transport(format!("parsing CA file: {e}")))?;
            builder = builder.add_root_certificate(certificate);
        } else if !options.verify_peer || !options.verify_host {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(format!("building HTTP client: {e}")))?;

        Ok(Self {
            client,
            extra_headers: options.extra_headers,
        })
    }
}

impl Transport for ReqwestTransport {
    fn execute(
        &self,
        request: TransportRequest,
    ) -> Pin<
        Box<dyn Future<Output = std::result::Result<TransportResponse, TransportFailure>> + Send + '_>,
    > {
        Box::pin(async move {
            let mut builder = match request.method {
                Method::Get => self.client.get(&request.url),
                Method::Post => self.client.post(&request.url),
                Method::Put => self.client.put(&request.url),
                Method::Delete => self.client.delete(&request.url),
                Method::Head => self.client.head(&request.url),
                Method::Patch => self.client.patch(&request.url),
            };

            for (name, value) in self.extra_headers.iter().chain(request.headers.iter()) {
                builder = builder.header(name, value);
            }

            if let Some((content_type, params)) = &request.body {
                builder = match content_type {
                    FormContentType::UrlEncoded => builder.form(params),
                    FormContentType::Multipart => {
                        let mut form = reqwest::multipart::Form::new();
                        for (key, value) in params {
                            form = form.text(key.clone(), value.clone());
                        }
                        builder.multipart(form)
                    }
                };
            }

            let response = builder.send().await.map_err(|e| TransportFailure {
                code: 1,
                message: e.to_string(),
            })?;

            let status = response.status();
            let status_line = format!(
                "{:?} {} {}",
                response.version(),
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            );
            let headers = response
                .headers()
                .iter()
                .map(|(name, value)| {
                    (
                        name.as_str().to_string(),
                        value.to_str().unwrap_or("").to_string(),
                    )
                })
                .collect();
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let effective_url = response.url().to_string();
            let body = response.text().await.map_err(|e| TransportFailure {
                code: 1,
                message: format!("reading response body: {e}"),
            })?;

            Ok(TransportResponse {
                status: status.as_u16(),
                status_line,
                headers,
                content_type,
                body,
                effective_url,
            })
        })
    }
}
