//! URL status checks over blocking HTTP.

use crate::domain::errors::ToolError;
use crate::domain::models::UrlStatus;
use std::time::{Duration, Instant};

pub fn check_url(raw: &str, timeout_ms: u64) -> anyhow::Result<UrlStatus> {
    let url = url::Url::parse(raw.trim()).map_err(ToolError::from)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ToolError::InvalidArgument(format!(
            "only http and https URLs can be checked, got {}",
            url.scheme()
        ))
        .into());
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .user_agent(concat!("webtoolkit/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let started = Instant::now();
    let resp = client.get(url.as_str()).send()?;
    let elapsed_ms = started.elapsed().as_millis();
    let status = resp.status();
    tracing::debug!(url = %url, status = status.as_u16(), elapsed_ms, "url checked");

    Ok(UrlStatus {
        url: url.to_string(),
        final_url: resp.url().to_string(),
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("").to_string(),
        ok: status.is_success(),
        elapsed_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}/health", addr)
    }

    #[test]
    fn reports_status_of_reachable_url() {
        let url = serve_once(
            "HTTP/1.1 204 No Content\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let r = check_url(&url, 5000).unwrap();
        assert_eq!(r.status, 204);
        assert!(r.ok);
        assert_eq!(r.reason, "No Content");
    }

    #[test]
    fn non_success_status_is_reported_not_raised() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let r = check_url(&url, 5000).unwrap();
        assert_eq!(r.status, 404);
        assert!(!r.ok);
    }

    #[test]
    fn rejects_non_http_schemes_and_garbage() {
        assert!(check_url("ftp://example.com/file", 1000).is_err());
        assert!(check_url("not a url", 1000).is_err());
    }
}
