use thiserror::Error;

/// Failures talking to the session listing endpoint
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error requesting {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server returned {status} for {url}: {body}")]
    Status { url: String, status: u16, body: String },

    #[error("malformed session response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// Whether the server answered at all
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network { .. } | ApiError::Client(_))
    }
}

/// Failures loading the dashboard configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid value {value:?} for {name}")]
    InvalidEnv { name: &'static str, value: String },
}
