// Runtime configuration shared by every layer

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub catalog_path: String,
    pub history_default_limit: usize,
    pub history_max_limit: usize,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3234".to_string(),
            api_token: None,
            catalog_path: "./catalog.yaml".to_string(),
            history_default_limit: 10,
            history_max_limit: 100,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
        }
    }
}
