use std::env;
use std::net::SocketAddr;

use eyre::WrapErr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Structured JSON, one event per line (CloudWatch friendly).
    Json,
    Pretty,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Self::Pretty,
            _ => Self::Json,
        }
    }
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    /// Run under the Lambda runtime instead of binding a TCP listener.
    pub lambda: bool,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_addr =
            lookup("HEALTHRISK_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .wrap_err_with(|| format!("invalid HEALTHRISK_BIND_ADDR: {bind_addr}"))?;

        let log_format = lookup("HEALTHRISK_LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or(LogFormat::Json);

        Ok(Self {
            bind_addr,
            log_format,
            lambda: lookup("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> eyre::Result<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(!config.lambda);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("HEALTHRISK_BIND_ADDR", "127.0.0.1:8080"),
            ("HEALTHRISK_LOG_FORMAT", "Pretty"),
            ("AWS_LAMBDA_RUNTIME_API", "127.0.0.1:9001"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.lambda);
    }

    #[test]
    fn unknown_log_format_falls_back_to_json() {
        let config = config(&[("HEALTHRISK_LOG_FORMAT", "xml")]).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_bind_addr_is_an_error() {
        let err = config(&[("HEALTHRISK_BIND_ADDR", "not-an-address")]).unwrap_err();
        assert!(err.to_string().contains("HEALTHRISK_BIND_ADDR"));
    }
}
