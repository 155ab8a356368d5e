//! Dashboard orchestration: snapshot fetch plus KPI aggregation.

use agenda_core::kpi::{compute_kpis, DashboardKpis};

use crate::api::{EventApi, SNAPSHOT_LIMIT};

pub struct DashboardView<'a> {
    api: &'a EventApi,
    pub kpis: DashboardKpis,
}

impl<'a> DashboardView<'a> {
    pub fn new(api: &'a EventApi) -> Self {
        DashboardView {
            api,
            kpis: DashboardKpis::default(),
        }
    }

    /// Fetch an effectively-unpaginated snapshot and recompute every
    /// KPI from it. On fetch failure the previous KPIs (or the empty
    /// initial ones) stay in place; there is no automatic retry.
    pub async fn refresh(&mut self) {
        match self.api.list(1, SNAPSHOT_LIMIT).await {
            Ok(page) => {
                let now = chrono::Local::now().naive_local();
                self.kpis = compute_kpis(&page.events, now);
            }
            Err(e) => tracing::error!("dashboard snapshot fetch failed: {e}"),
        }
    }
}
