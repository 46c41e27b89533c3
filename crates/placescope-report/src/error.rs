use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export: run a place analysis or a ranking check first")]
    NoData,

    #[error("export document JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
