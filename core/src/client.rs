//! Stateless HTTP request builder and response parser for FlightXML.
//!
//! # Design
//! `FlightXmlClient` holds the endpoint and a precomputed Basic Auth header,
//! nothing else. Every operation goes through the same two steps: `build`
//! turns a `FlightRequest` into an `HttpRequest`, and `parse` turns the
//! `HttpResponse` the host got back into the request's typed output. The
//! `*_raw` variants take an operation name and query directly and return the
//! bare JSON payload.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;
use url::Url;

use crate::config::Config;
use crate::envelope::unwrap_envelope;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::QueryParams;
use crate::request::FlightRequest;

/// Synchronous, stateless client for the FlightXML2 JSON API.
#[derive(Clone)]
pub struct FlightXmlClient {
    base_url: String,
    authorization: String,
}

impl FlightXmlClient {
    pub fn new(config: &Config) -> Self {
        let credentials = format!("{}:{}", config.username(), config.api_key());
        Self {
            base_url: config.base_url().trim_end_matches('/').to_string(),
            authorization: format!("Basic {}", STANDARD.encode(credentials)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build<R: FlightRequest>(&self, request: &R) -> Result<HttpRequest, ApiError> {
        self.build_raw(request.operation().name(), &request.query())
    }

    /// Build a GET for `<base>/<operation>?<query>`.
    pub fn build_raw(&self, operation: &str, query: &QueryParams) -> Result<HttpRequest, ApiError> {
        let endpoint = format!("{}/{}", self.base_url, operation);
        let url = if query.is_empty() {
            Url::parse(&endpoint)?
        } else {
            Url::parse_with_params(&endpoint, query.iter())?
        };
        Ok(HttpRequest {
            url: url.into(),
            headers: vec![("authorization".to_string(), self.authorization.clone())],
        })
    }

    pub fn parse<R: FlightRequest>(&self, request: &R, response: HttpResponse) -> Result<R::Output, ApiError> {
        let payload = self.parse_raw(response, request.sub_key())?;
        request.decode(payload)
    }

    pub fn parse_raw(&self, response: HttpResponse, sub_key: Option<&str>) -> Result<Value, ApiError> {
        unwrap_envelope(&response, sub_key)
    }
}

impl std::fmt::Debug for FlightXmlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlightXmlClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
