//! CLI argument parsing and command handling

use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use loadtest_core::{run_load_test, ConfigError, LoadTestConfig, ReqwestClient};
use std::process::ExitCode;
use std::sync::Arc;

/// Exit status for configuration errors, matching clap's usage errors
const USAGE_ERROR: u8 = 2;

/// http-loadtest - issue a fixed number of GET requests and report the results
#[derive(Parser, Debug)]
#[command(name = "http-loadtest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URL of the service under test
    #[arg(long)]
    pub url: String,

    /// Total number of requests to send
    #[arg(long, default_value_t = 100)]
    pub requests: usize,

    /// Number of concurrent workers
    #[arg(long, default_value_t = 10)]
    pub concurrency: usize,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the core configuration from the parsed flags
    pub fn load_test_config(&self) -> LoadTestConfig {
        LoadTestConfig::new(self.url.clone())
            .with_requests(self.requests)
            .with_concurrency(self.concurrency)
    }

    /// Build and validate the core configuration
    pub fn validated_config(&self) -> Result<LoadTestConfig, ConfigError> {
        let config = self.load_test_config();
        config.validate()?;
        Ok(config)
    }

    /// Run the load test based on CLI arguments
    ///
    /// Configuration errors print usage and return a failing exit code
    /// before any request is sent.
    pub async fn run(&self) -> Result<ExitCode> {
        let config = match self.validated_config() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {e}\n");
                eprintln!("{}", Self::command().render_usage());
                eprintln!("\nFor more information, try '--help'.");
                return Ok(ExitCode::from(USAGE_ERROR));
            }
        };

        tracing::debug!(?config, format = ?self.format, "Configuration validated");

        if self.format == OutputFormat::Text {
            println!("{}", output::render_banner(&config));
        }

        let client = ReqwestClient::new().context("Failed to create HTTP client")?;

        let report = run_load_test(config, Arc::new(client))
            .await
            .context("Load test failed")?;

        print!("{}", output::render(&report, self.format)?);

        Ok(ExitCode::SUCCESS)
    }
}
