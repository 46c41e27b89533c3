//! Shared data model and configuration for placescope.
//!
//! Every other crate in the workspace speaks in these types: the profile
//! record handed to the scorer, the score it produces, the per-keyword rank
//! results produced by a probe run, and the environment-driven `AppConfig`.

pub mod app_config;
pub mod config;
pub mod grade;
pub mod plan;
pub mod profile;
pub mod rank;
pub mod score;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use grade::Grade;
pub use plan::{load_probe_plan, ProbePlan};
pub use profile::{is_present, BasicInfo, ProfileDetails, ProfileRecord, MISSING_PLACEHOLDER};
pub use rank::{KeywordRankResult, ProbeLocation};
pub use score::{Priority, Recommendation, ScoreResult};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read probe plan {path}: {source}")]
    PlanFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse probe plan: {0}")]
    PlanFileParse(#[from] serde_yaml::Error),

    #[error("invalid probe plan: {0}")]
    Validation(String),
}
