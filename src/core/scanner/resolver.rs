// src/core/scanner/resolver.rs

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::core::errors::ResolveError;
use crate::core::models::ResolvedAddress;

/// Turns a domain into the address the rest of the scan works with.
#[async_trait]
pub trait DomainResolver: Send + Sync {
    async fn resolve(&self, domain: &str) -> Result<ResolvedAddress, ResolveError>;
}

/// Answer section of a DNS-over-HTTPS JSON response. Other sections are ignored.
#[derive(Debug, Deserialize)]
struct DohResponse {
    #[serde(rename = "Answer", default)]
    answer: Vec<DohAnswer>,
}

#[derive(Debug, Deserialize)]
struct DohAnswer {
    data: String,
}

/// Extracts the `data` of the first answer record.
///
/// The record type is not checked: whatever the provider lists first is the result.
pub fn parse_doh_response(domain: &str, body: &str) -> Result<ResolvedAddress, ResolveError> {
    let response: DohResponse = serde_json::from_str(body)?;
    response
        .answer
        .into_iter()
        .next()
        .map(|answer| answer.data)
        .ok_or_else(|| ResolveError::NotFound { domain: domain.to_string() })
}

/// Resolver backed by a public DNS-over-HTTPS JSON API (`?name=<domain>`).
#[derive(Debug, Clone)]
pub struct DohResolver {
    client: reqwest::Client,
    endpoint: String,
}

impl DohResolver {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self { client, endpoint: endpoint.into() }
    }
}

#[async_trait]
impl DomainResolver for DohResolver {
    async fn resolve(&self, domain: &str) -> Result<ResolvedAddress, ResolveError> {
        info!(domain, endpoint = %self.endpoint, "Resolving domain.");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("name", domain)])
            .header(reqwest::header::ACCEPT, "application/dns-json")
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .inspect_err(|e| warn!(domain, error = %e, "DoH request failed."))?;

        let body = response.text().await?;
        debug!(domain, bytes = body.len(), "DoH response received.");

        let address = parse_doh_response(domain, &body)
            .inspect_err(|e| warn!(domain, error = %e, "Domain did not resolve."))?;
        info!(domain, address = %address, "Domain resolved.");
        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scanner::canned_server::{CannedServer, closed_base_url, local_client};

    const NORWELL_ANSWER: &str =
        r#"{"Status":0,"Answer":[{"name":"example.com.","type":1,"TTL":300,"data":"93.184.216.34"}]}"#;

    fn resolver_at(base_url: &str) -> DohResolver {
        DohResolver::new(local_client(), format!("{base_url}/resolve"))
    }

    #[test]
    fn first_answer_wins() {
        let body = r#"{"Status":0,"Answer":[
            {"name":"example.com.","type":1,"TTL":300,"data":"93.184.216.34"},
            {"name":"example.com.","type":1,"TTL":300,"data":"93.184.216.35"}]}"#;
        assert_eq!(parse_doh_response("example.com", body).unwrap(), "93.184.216.34");
    }

    #[test]
    fn missing_answer_section_is_not_found() {
        let body = r#"{"Status":3,"Authority":[{"name":"invalid.","type":6,"data":"a.root-servers.net."}]}"#;
        let err = parse_doh_response("nope.invalid", body).unwrap_err();
        assert!(matches!(err, ResolveError::NotFound { ref domain } if domain == "nope.invalid"));
    }

    #[test]
    fn empty_answer_section_is_not_found() {
        let err = parse_doh_response("example.com", r#"{"Status":0,"Answer":[]}"#).unwrap_err();
        assert!(matches!(err, ResolveError::NotFound { .. }));
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let err = parse_doh_response("example.com", "<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, ResolveError::Decode(_)));
    }

    #[tokio::test]
    async fn asks_for_the_name_as_dns_json() {
        let server = CannedServer::start("200 OK", NORWELL_ANSWER).await;
        let resolver = resolver_at(&server.base_url);

        assert_eq!(resolver.resolve("example.com").await.unwrap(), "93.184.216.34");

        let head = server.request_head().await;
        assert!(head.starts_with("GET /resolve?name=example.com HTTP/1.1\r\n"), "{head}");
        assert!(head.to_ascii_lowercase().contains("accept: application/dns-json"), "{head}");
    }

    #[tokio::test]
    async fn name_is_query_encoded() {
        let server = CannedServer::start("200 OK", NORWELL_ANSWER).await;
        resolver_at(&server.base_url).resolve("exa mple.com").await.unwrap();

        let head = server.request_head().await;
        assert!(head.starts_with("GET /resolve?name=exa+mple.com "), "{head}");
    }

    #[tokio::test]
    async fn error_status_is_a_network_error() {
        let server = CannedServer::start("500 Internal Server Error", NORWELL_ANSWER).await;
        let err = resolver_at(&server.base_url).resolve("example.com").await.unwrap_err();
        assert!(matches!(err, ResolveError::Network(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_error() {
        let err = resolver_at(&closed_base_url().await).resolve("example.com").await.unwrap_err();
        assert!(matches!(err, ResolveError::Network(_)));
    }
}
