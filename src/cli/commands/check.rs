//! Check command implementation.
//!
//! Runs the coverage check against every configured endpoint in order.
//! A failing endpoint is reported and recorded, never fatal to the batch.

use crate::core::coverage::CoverageReport;
use crate::models::config::Config;
use crate::services::epg::EpgClient;
use crate::Result;
use colored::Colorize;
use tracing::debug;

/// Outcome of checking a single endpoint.
#[derive(Debug)]
pub struct CheckOutcome {
    pub endpoint: String,
    pub result: Result<CoverageReport>,
}

impl CheckOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Check every endpoint sequentially and print per-endpoint diagnostics.
pub async fn check(config: &Config) -> Result<Vec<CheckOutcome>> {
    let client = EpgClient::new(config.timeout_secs)?;

    let mut outcomes = Vec::with_capacity(config.endpoints.len());
    for endpoint in &config.endpoints {
        let outcome = check_endpoint(&client, endpoint, config.detailed).await;
        match &outcome.result {
            Ok(report) => print_report(report),
            Err(e) => println!("{}", e),
        }
        outcomes.push(outcome);
    }

    print_summary(&outcomes);
    Ok(outcomes)
}

/// Check one endpoint: fetch the listing for "now" and evaluate coverage.
async fn check_endpoint(client: &EpgClient, endpoint: &str, detailed: bool) -> CheckOutcome {
    let now = chrono::Utc::now().timestamp();

    println!("Getting epg from {} at {}", endpoint, now);

    let result = run_check(client, endpoint, now, detailed).await;
    CheckOutcome {
        endpoint: endpoint.to_string(),
        result,
    }
}

async fn run_check(
    client: &EpgClient,
    endpoint: &str,
    now: i64,
    detailed: bool,
) -> Result<CoverageReport> {
    let total_channels = if detailed {
        Some(client.fetch_channel_count(endpoint).await?)
    } else {
        None
    };

    let channels = client.fetch_epg_list(endpoint, now).await?;
    debug!(endpoint, channels = channels.len(), "fetched epg listing");

    Ok(CoverageReport::evaluate(&channels, now, total_channels))
}

/// Print the per-endpoint result line.
fn print_report(report: &CoverageReport) {
    let Some(coverage) = report.coverage_percent() else {
        println!("No channels in response");
        return;
    };

    match report.total_channels {
        Some(total) => println!(
            "Epg present on {:.2} % of {} channels from {} total",
            coverage, report.evaluated, total
        ),
        None => println!("Epg present on {:.2} % of channels", coverage),
    }
}

/// Print the batch summary.
fn print_summary(outcomes: &[CheckOutcome]) {
    let failed: Vec<_> = outcomes.iter().filter(|o| !o.is_success()).collect();

    println!();
    for outcome in outcomes {
        if outcome.is_success() {
            println!("{} {}", "[OK]".green(), outcome.endpoint.bold());
        } else {
            println!("{} {}", "[FAIL]".red(), outcome.endpoint.bold());
        }
    }

    println!();
    if failed.is_empty() {
        println!("{}", "All endpoints checked successfully".green());
    } else {
        println!(
            "{}",
            format!("{} of {} endpoints failed", failed.len(), outcomes.len()).yellow()
        );
    }
}
