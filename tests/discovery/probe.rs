use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use devlauncher::config::DiscoveryConfig;
use devlauncher::discovery::{discover, HttpProbe, LocalPackagers, PackagerSource, ProbeError, StatusProbe};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves every connection with a fixed HTTP status line and returns the port.
async fn status_server(status: &'static str) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let response = format!("HTTP/1.1 {status}\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok");
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });
    port
}

/// A port nothing listens on.
async fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

#[tokio::test]
async fn test_only_status_200_is_live() {
    let missing = status_server("404 Not Found").await;
    let live = status_server("200 OK").await;
    let closed = closed_port().await;

    let probe = HttpProbe::new(Duration::from_millis(500)).unwrap();
    let packagers = discover(&probe, &[missing, live, closed], "http://127.0.0.1", "status").await;

    assert_eq!(packagers.len(), 1);
    assert_eq!(packagers[0].url, format!("http://127.0.0.1:{live}"));
    assert_eq!(packagers[0].description, format!("http://127.0.0.1:{live}"));
    assert_eq!(packagers[0].source, "desktop");
    assert!(packagers[0].hide_image);
}

#[tokio::test]
async fn test_local_packagers_from_config() {
    let live = status_server("200 OK").await;
    let config = DiscoveryConfig {
        base_address: Some("http://127.0.0.1/".to_string()),
        ports: vec![live],
        probe_timeout_ms: 500,
        ..DiscoveryConfig::default()
    };

    let source = LocalPackagers::from_config(&config).unwrap();
    let packagers = source.fetch().await;

    assert_eq!(packagers.len(), 1);
    assert!(packagers[0].url.ends_with(&format!(":{live}")));
}

/// Answers from a table; unknown URLs fail like a refused connection.
struct TableProbe(HashMap<String, bool>);

#[async_trait]
impl StatusProbe for TableProbe {
    async fn probe(&self, url: &str) -> Result<bool, ProbeError> {
        self.0.get(url).copied().ok_or_else(|| ProbeError::Request {
            url: url.to_string(),
            message: "connection refused".to_string(),
        })
    }
}

#[tokio::test]
async fn test_results_keep_port_order_and_swallow_errors() {
    let probe = TableProbe(HashMap::from([
        ("http://localhost:19000/status".to_string(), true),
        ("http://localhost:8081/status".to_string(), true),
        ("http://localhost:8082/status".to_string(), false),
    ]));

    let packagers = discover(&probe, &[8081, 8082, 19000, 19001], "http://localhost", "/status").await;

    let urls: Vec<&str> = packagers.iter().map(|p| p.url.as_str()).collect();
    assert_eq!(urls, vec!["http://localhost:8081", "http://localhost:19000"]);
}

#[test]
fn test_packager_serializes_camel_case() {
    let packager = devlauncher::discovery::Packager::local("http://localhost:8081");
    let json = serde_json::to_value(&packager).unwrap();
    assert_eq!(json["hideImage"], serde_json::Value::Bool(true));
    assert_eq!(json["source"], "desktop");
}
