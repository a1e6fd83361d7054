//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use portflow_gateway::{GatewayConfig, HttpServer, Shutdown};

/// Start a mock prediction service that returns a fixed JSON body.
#[allow(dead_code)]
pub async fn start_mock_upstream(addr: SocketAddr, body: &'static str) {
    start_programmable_upstream(addr, move |_target| async move { (200, body.to_string()) })
        .await;
}

/// Start a programmable mock prediction service.
///
/// The closure receives the request target (path and query) of each
/// request and returns the status code and body to answer with.
pub async fn start_programmable_upstream<F, Fut>(addr: SocketAddr, f: F)
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await.unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let mut buf = vec![0u8; 4096];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        let target = String::from_utf8_lossy(&buf[..n])
                            .lines()
                            .next()
                            .and_then(|line| line.split_whitespace().nth(1))
                            .unwrap_or("/")
                            .to_string();

                        let (status, body) = f(target).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Gateway config pointing at a mock upstream, with short timeouts.
pub fn gateway_config(proxy_addr: SocketAddr, upstream_addr: SocketAddr) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.listener.bind_address = proxy_addr.to_string();
    config.upstream.base_url = format!("http://{}", upstream_addr);
    config.timeouts.upstream_secs = 2;
    config.timeouts.connect_secs = 1;
    config
}

/// Spawn the gateway on `proxy_addr` and wait until it accepts requests.
///
/// Returns the shutdown coordinator; triggering it stops the server.
pub async fn start_gateway(config: GatewayConfig) -> Shutdown {
    let proxy_addr: SocketAddr = config.listener.bind_address.parse().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind(proxy_addr).await.unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(200)).await;

    shutdown
}

/// Non-pooled reqwest client for test requests.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
