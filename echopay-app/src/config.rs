//! Configuration loading from environment.

use std::env;
use std::str::FromStr;

/// Which of the two services a process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Payments,
    Transactions,
}

impl Service {
    /// Service-specific port variable, checked before `PORT`.
    fn port_var(&self) -> &'static str {
        match self {
            Service::Payments => "PAYMENTS_PORT",
            Service::Transactions => "TRANSACTIONS_PORT",
        }
    }

    fn default_port(&self) -> u16 {
        match self {
            Service::Payments => 8080,
            Service::Transactions => 8081,
        }
    }

    /// Name reported to the tracing backend.
    pub fn name(&self) -> &'static str {
        match self {
            Service::Payments => "payments-service",
            Service::Transactions => "transactions-service",
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("Unknown LOG_FORMAT: {}. Supported: pretty, json", other),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    pub log_format: LogFormat,
    /// OTLP collector endpoint; span export is off when unset.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env(service: Service) -> anyhow::Result<Self> {
        Self::from_lookup(service, |key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(service: Service, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(service.port_var()).or_else(|| lookup("PORT")) {
            Some(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid port {:?}: {}", raw, e))?,
            None => service.default_port(),
        };

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string());

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|s| !s.is_empty());

        Ok(Self {
            bind_addr,
            port,
            log_format,
            otlp_endpoint,
        })
    }

    /// Returns the `host:port` the server binds to.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
