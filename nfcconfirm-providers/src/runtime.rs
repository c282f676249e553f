use crate::request::HttpRequest;
use anyhow::{Context, anyhow};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// A reqwest client with bounded connect and read phases.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(connect_timeout: Duration, read_timeout: Duration) -> anyhow::Result<Self> {
        // Without explicit timeouts a dead endpoint could hold the login forever.
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .read_timeout(read_timeout)
            .build()
            .context("build http client")?;
        Ok(Self { client })
    }

    pub async fn execute(&self, req: &HttpRequest) -> anyhow::Result<HttpResponse> {
        let mut headers = HeaderMap::new();
        for (k, v) in &req.headers {
            let name = HeaderName::from_bytes(k.as_bytes())
                .with_context(|| format!("invalid header name: {k}"))?;
            let value =
                HeaderValue::from_str(v).with_context(|| format!("invalid header value for {k}"))?;
            headers.insert(name, value);
        }

        let builder = match req.method.as_str() {
            "GET" => self.client.get(&req.url),
            "HEAD" => self.client.head(&req.url),
            other => return Err(anyhow!("unsupported method: {other}")),
        }
        .headers(headers);

        let resp = builder.send().await.context("http request failed")?;
        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .context("failed reading response body")?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx() {
        let resp = |status| HttpResponse {
            status,
            body: vec![],
        };
        assert!(resp(200).is_success());
        assert!(resp(204).is_success());
        assert!(resp(299).is_success());
        assert!(!resp(199).is_success());
        assert!(!resp(301).is_success());
        assert!(!resp(500).is_success());
    }

    #[tokio::test]
    async fn rejects_unsupported_method() {
        let client = HttpClient::new(Duration::from_secs(1), Duration::from_secs(1)).unwrap();
        let mut req = HttpRequest::get("http://127.0.0.1:9/");
        req.method = "PATCH".into();
        let err = client.execute(&req).await.unwrap_err();
        assert!(err.to_string().contains("unsupported method"));
    }
}
