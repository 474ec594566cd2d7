//! The dashboard screen: one fetch on mount, one aggregate, one view update.
//!
//! Views never reach into the dashboard. They receive a [`DashboardState`]
//! through [`DashboardView::update`] once the fetch has resolved, which keeps
//! the chart, cards and invested value on a single update path.

use super::aggregate::{AggregateResult, aggregate};
use super::source::AssetSource;
use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, instrument, warn};

/// Outcome of a fetch-and-aggregate cycle, as seen by the view.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loaded(AggregateResult),
    Failed {
        message: String,
        /// The cycle may succeed if triggered again.
        recoverable: bool,
    },
}

/// Receives dashboard state. Implemented by renderers.
pub trait DashboardView {
    fn update(&mut self, state: &DashboardState) -> Result<()>;
}

pub struct Dashboard<'a> {
    source: &'a dyn AssetSource,
    mounted: AtomicBool,
}

impl<'a> Dashboard<'a> {
    pub fn new(source: &'a dyn AssetSource) -> Self {
        Self {
            source,
            mounted: AtomicBool::new(false),
        }
    }

    /// Runs the cycle once and pushes the resulting state into `view`.
    ///
    /// Only the first call fetches; later calls are ignored.
    pub async fn mount(&self, view: &mut dyn DashboardView) -> Result<()> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            warn!("Dashboard already mounted, ignoring");
            return Ok(());
        }

        let state = self.load().await;
        view.update(&state)
    }

    /// Fetches the records and aggregates them without touching a view.
    #[instrument(name = "DashboardLoad", skip(self))]
    pub async fn load(&self) -> DashboardState {
        match self.source.fetch_assets().await {
            Ok(records) => {
                debug!(count = records.len(), "Fetched asset records");
                DashboardState::Loaded(aggregate(&records))
            }
            Err(e) => {
                warn!(error = %e, "Asset fetch failed");
                DashboardState::Failed {
                    message: e.to_string(),
                    recoverable: e.is_recoverable(),
                }
            }
        }
    }
}
