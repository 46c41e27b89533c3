//! `analyze-place`: resolve a profile and print its score.

use placescope_core::{AppConfig, ScoreResult};
use placescope_profile::{resolve_profile, score, HttpProfileSource, ProfileSource, ResolvedProfile};

use crate::render;

/// Resolve the profile behind `url` and score it.
///
/// # Errors
///
/// Returns an error only if the configured profile source URL is invalid; an
/// unreachable source degrades to the reference profile.
pub(crate) async fn analyze(
    config: &AppConfig,
    url: &str,
) -> anyhow::Result<(ResolvedProfile, ScoreResult)> {
    let source = config
        .profile_source_url
        .as_deref()
        .map(|base| HttpProfileSource::new(base, config.request_timeout_secs, &config.user_agent))
        .transpose()?;

    let resolved = resolve_profile(source.as_ref().map(|s| s as &dyn ProfileSource), url).await;
    let result = score(&resolved.record);
    Ok((resolved, result))
}

pub(crate) async fn run_analyze_place(
    config: &AppConfig,
    url: &str,
    json: bool,
) -> anyhow::Result<()> {
    let (resolved, result) = analyze(config, url).await?;

    if json {
        let body = serde_json::json!({
            "origin": resolved.origin,
            "record": &resolved.record,
            "grade": result.grade(),
            "analysis": &result,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{}", render::place_analysis(&resolved, &result));
    }
    Ok(())
}
