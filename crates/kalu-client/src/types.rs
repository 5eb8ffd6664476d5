/// Configuration for the dashboard client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the dashboard API, without trailing path.
    pub base_url: String,
    /// Bearer token to start the session with.
    pub token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: "http://127.0.0.1:8000".to_string(), token: None, timeout_secs: 30 }
    }
}
