use anyhow::Result;

use crate::api::EventApi;
use crate::form_host::{FormHost, TerminalFormHost};

pub async fn run(api: &EventApi, start: Option<String>) -> Result<()> {
    let host = TerminalFormHost::new(api);
    let committed = host.open_event_form(None, start).await?;
    if !committed {
        println!("  Aborted.");
    }
    Ok(())
}
