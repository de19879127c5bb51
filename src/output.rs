//! Report rendering for stdout

use anyhow::Result;
use clap::ValueEnum;
use loadtest_core::{LoadTestConfig, Report};
use serde_json::json;

/// How the final report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Single JSON document
    Json,
}

/// Render the report in the requested format
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// Lines printed before dispatch starts
pub fn render_banner(config: &LoadTestConfig) -> String {
    format!(
        "Starting load test:\n  URL:            {}\n  Total requests: {}\n  Concurrency:    {}\n",
        config.target_url, config.total_requests, config.concurrency
    )
}

/// Human-readable report
///
/// Sections appear in a fixed order: elapsed time, totals, the status
/// breakdown (transport errors on their own line), then throughput.
pub fn render_text(report: &Report) -> String {
    let mut lines = vec![
        "Load Test Report".to_string(),
        "=".repeat(40),
        format!("Total time:          {:?}", report.total_time),
        format!("Total requests:      {}", report.total_requests),
        format!("Status 200 requests: {}", report.success_count),
        format!("Failed requests:     {}", report.failure_count()),
        String::new(),
        "Status distribution:".to_string(),
    ];

    for (status, count) in report.http_statuses() {
        lines.push(format!("  Status {}: {}", status, count));
    }
    if report.error_count() > 0 {
        lines.push(format!("  Errors: {}", report.error_count()));
    }

    lines.push(String::new());
    lines.push(format!(
        "Requests per second: {:.2}",
        report.requests_per_second()
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// JSON report
pub fn render_json(report: &Report) -> Result<String> {
    let distribution: serde_json::Map<String, serde_json::Value> = report
        .status_distribution
        .iter()
        .map(|(status, count)| (status.to_string(), json!(count)))
        .collect();

    let output = json!({
        "total_time_secs": report.total_time.as_secs_f64(),
        "total_requests": report.total_requests,
        "success_count": report.success_count,
        "failure_count": report.failure_count(),
        "error_count": report.error_count(),
        "status_distribution": distribution,
        "requests_per_second": report.requests_per_second(),
    });

    Ok(serde_json::to_string_pretty(&output)?)
}
