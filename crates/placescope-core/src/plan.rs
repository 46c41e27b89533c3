use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rank::ProbeLocation;
use crate::ConfigError;

/// A saved rank-probe run, loaded from YAML by the CLI.
///
/// ```yaml
/// target_business: 벌원학원
/// keywords:
///   - 벌원 영어학원
///   - 영어학원
/// location:
///   type: address
///   address: 광주광역시 서구 벌원동
/// max_pages: 3
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbePlan {
    pub target_business: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub location: Option<ProbeLocation>,
    #[serde(default)]
    pub max_pages: Option<u32>,
}

/// Load a probe plan from a YAML file.
///
/// Only structural checks happen here; keyword-level rules (duplicates,
/// limits) are enforced by the probe itself before any probing starts.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or has no target.
pub fn load_probe_plan(path: &Path) -> Result<ProbePlan, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::PlanFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_probe_plan(&content)
}

fn parse_probe_plan(content: &str) -> Result<ProbePlan, ConfigError> {
    let plan: ProbePlan = serde_yaml::from_str(content)?;

    if plan.target_business.trim().is_empty() {
        return Err(ConfigError::Validation(
            "target_business must be non-empty".to_string(),
        ));
    }

    Ok(plan)
}
