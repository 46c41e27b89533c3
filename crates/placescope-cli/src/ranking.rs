//! `check-ranking`: stream a probe run and print progress as it goes.

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Args;
use futures::StreamExt;
use placescope_core::{load_probe_plan, AppConfig, ProbeLocation};
use placescope_rank::{ProbeRequest, RankProbe};
use placescope_report::Report;

use crate::render;

/// Probe input, given inline or through a YAML plan file.
#[derive(Debug, Clone, Args)]
pub struct RankingArgs {
    /// Business name to look for in the results
    #[arg(long, conflicts_with = "plan")]
    pub target: Option<String>,
    /// Keyword to check; repeat for several keywords
    #[arg(long = "keyword", conflicts_with = "plan")]
    pub keywords: Vec<String>,
    /// Search from this street address
    #[arg(long, conflicts_with_all = ["lat", "lng", "plan"])]
    pub address: Option<String>,
    /// Search from this latitude (requires --lng)
    #[arg(long, requires = "lng", allow_negative_numbers = true, conflicts_with = "plan")]
    pub lat: Option<f64>,
    /// Search from this longitude (requires --lat)
    #[arg(long, requires = "lat", allow_negative_numbers = true, conflicts_with = "plan")]
    pub lng: Option<f64>,
    /// Result pages to scan per keyword (1-5)
    #[arg(long)]
    pub max_pages: Option<u32>,
    /// Load target, keywords and location from a YAML plan
    #[arg(long)]
    pub plan: Option<PathBuf>,
}

impl RankingArgs {
    /// Build the probe request. `--max-pages` wins over the plan file, which
    /// wins over `default_max_pages`.
    pub(crate) fn into_request(self, default_max_pages: u32) -> anyhow::Result<ProbeRequest> {
        let mut request = if let Some(path) = &self.plan {
            ProbeRequest::from_plan(load_probe_plan(path)?, default_max_pages)
        } else {
            let target = self
                .target
                .ok_or_else(|| anyhow!("--target is required unless --plan is given"))?;
            let mut request =
                ProbeRequest::new(target, self.keywords).with_max_pages(default_max_pages);
            if let Some(address) = self.address {
                request = request.with_location(ProbeLocation::Address { address });
            } else if let (Some(lat), Some(lng)) = (self.lat, self.lng) {
                request = request.with_location(ProbeLocation::Coords { lat, lng });
            }
            request
        };

        if let Some(max_pages) = self.max_pages {
            request.max_pages = max_pages;
        }
        Ok(request)
    }
}

/// Run `request` into `report`, printing one progress line per keyword to
/// stderr unless `quiet`.
///
/// # Errors
///
/// Returns an error if the request fails validation; nothing is recorded in
/// that case.
pub(crate) async fn probe_into_report(
    probe: &RankProbe,
    request: &ProbeRequest,
    report: &mut Report,
    quiet: bool,
) -> anyhow::Result<()> {
    let total = request.keywords.len();
    let mut stream = Box::pin(probe.probe(request)?);

    report.begin_ranking();
    let mut done = 0;
    while let Some(result) = stream.next().await {
        done += 1;
        if !quiet {
            eprintln!("{}", render::progress_line(done, total, &result));
        }
        report.record_rank(result);
    }
    Ok(())
}

pub(crate) async fn run_check_ranking(
    config: &AppConfig,
    args: RankingArgs,
    json: bool,
) -> anyhow::Result<()> {
    let request = args.into_request(config.default_max_pages)?;
    let probe = RankProbe::from_config(config)?;

    let mut report = Report::new();
    probe_into_report(&probe, &request, &mut report, json).await?;
    let results = report.ranks().unwrap_or_default();

    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        println!("{}", render::ranking_table(results));
    }
    Ok(())
}
