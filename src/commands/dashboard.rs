use anyhow::Result;

use crate::api::EventApi;
use crate::render::Render;
use crate::views::dashboard::DashboardView;

pub async fn run(api: &EventApi) -> Result<()> {
    let mut view = DashboardView::new(api);
    view.refresh().await;
    println!("{}", view.kpis.render());
    Ok(())
}
