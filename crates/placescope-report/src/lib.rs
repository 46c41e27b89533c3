//! Report state, aggregation and export for placescope.

pub mod aggregate;
pub mod error;
pub mod export;
pub mod report;

pub use aggregate::{
    aggregate, CombinedStrategy, IntegratedReport, ProfileSummary, RankingSummary, ReportSections,
};
pub use error::ExportError;
pub use export::{default_file_name, export, export_at, ExportDocument, ExportRankingSummary, ExportSummary};
pub use report::Report;
