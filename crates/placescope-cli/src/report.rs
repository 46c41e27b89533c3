//! `report`: place analysis plus ranking check, fused and optionally exported.

use std::path::{Path, PathBuf};

use anyhow::Context;
use placescope_core::AppConfig;
use placescope_rank::RankProbe;
use placescope_report::{export, ExportDocument, Report};

use crate::place;
use crate::ranking::{probe_into_report, RankingArgs};
use crate::render;

pub(crate) async fn run_report(
    config: &AppConfig,
    url: &str,
    ranking: RankingArgs,
    export_to: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let request = ranking.into_request(config.default_max_pages)?;
    request.validated()?;
    let probe = RankProbe::from_config(config)?;

    let mut report = Report::new();
    let (resolved, score) = place::analyze(config, url).await?;
    let request = request.or_address(&resolved.record.basic_info.address);
    report.set_score(score);
    probe_into_report(&probe, &request, &mut report, json).await?;

    let integrated = report.aggregate();
    if json {
        println!("{}", serde_json::to_string_pretty(&integrated)?);
    } else {
        println!("{}", render::integrated_report(&integrated));
    }

    if let Some(path) = export_to {
        let document = export(&report)?;
        let written = write_export(&document, path)?;
        eprintln!("export written to {}", written.display());
    }
    Ok(())
}

/// Write `document` to `path`, or into `path` under its default file name
/// when `path` is an existing directory.
fn write_export(document: &ExportDocument, path: &Path) -> anyhow::Result<PathBuf> {
    let target = if path.is_dir() {
        path.join(document.file_name())
    } else {
        path.to_path_buf()
    };

    std::fs::write(&target, document.to_json_pretty()?)
        .with_context(|| format!("failed to write export to {}", target.display()))?;
    tracing::info!(path = %target.display(), "export document written");
    Ok(target)
}
