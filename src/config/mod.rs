use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "handyhub")]
#[command(about = "Browse and search the HandyHub service directory")]
pub struct CliConfig {
    /// Where the service catalog JSON is served from
    #[arg(long, default_value = "http://localhost:8000/data/data.json")]
    pub endpoint: String,

    /// Delay before the signup acknowledgment fires, in milliseconds
    #[arg(long, default_value = "1000")]
    pub ack_delay_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn catalog_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn ack_delay(&self) -> Duration {
        Duration::from_millis(self.ack_delay_ms)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_positive_number("ack_delay_ms", self.ack_delay_ms, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: &str, ack_delay_ms: u64) -> CliConfig {
        CliConfig {
            endpoint: endpoint.to_string(),
            ack_delay_ms,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(config("http://localhost:8000/data/data.json", 1000)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_file_path_endpoint_is_rejected() {
        assert!(config("data/data.json", 1000).validate().is_err());
    }

    #[test]
    fn test_zero_delay_is_rejected() {
        assert!(config("http://localhost:8000/data/data.json", 0)
            .validate()
            .is_err());
    }
}
