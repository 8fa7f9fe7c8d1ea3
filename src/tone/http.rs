use reqwest::Client;
use std::time::Duration;

/// Shared HTTP client for the tone advisory endpoint. Tone checks are
/// interactive, so the total timeout is short and the pool stays small.
pub fn build_tone_client(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .pool_max_idle_per_host(2)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .build()
        .unwrap_or_else(|_| Client::new())
}
