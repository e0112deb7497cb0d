mod categories;
mod ranking;
mod summary;
pub mod views;

pub use categories::{group_by_category, CategoryAggregate, CategoryGroup};
pub use ranking::{
    rank_by_score, top_performers, underperformers, TOP_PERFORMER_LIMIT,
    TOP_PERFORMER_THRESHOLD, UNDERPERFORMER_THRESHOLD,
};
pub use summary::{PerformanceReport, PortfolioSummary};
