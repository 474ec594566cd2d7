//! Dashboard data model and the fetch-and-aggregate cycle

pub mod aggregate;
pub mod asset;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod log;
pub mod source;

// Re-export main types for cleaner imports
pub use aggregate::{AggregateResult, ChartPoint, aggregate};
pub use asset::AssetRecord;
pub use dashboard::{Dashboard, DashboardState, DashboardView};
pub use error::FetchError;
pub use source::AssetSource;
