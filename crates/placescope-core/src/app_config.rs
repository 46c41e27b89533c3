use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Base URL of the upstream profile provider. `None` means reference profiles.
    pub profile_source_url: Option<String>,
    /// Base URL of the live search-probing collaborator. `None` means reference policy.
    pub probe_url: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub probe_delay_ms: u64,
    pub default_max_pages: u32,
    pub reference_seed: Option<u64>,
    pub locality_tokens: Vec<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "profile_source_url",
                &self.profile_source_url.as_ref().map(|_| "[redacted]"),
            )
            .field("probe_url", &self.probe_url.as_ref().map(|_| "[redacted]"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .field("probe_delay_ms", &self.probe_delay_ms)
            .field("default_max_pages", &self.default_max_pages)
            .field("reference_seed", &self.reference_seed)
            .field("locality_tokens", &self.locality_tokens)
            .finish()
    }
}
