//! Calendar orchestration: snapshot fetch, entry mapping, interaction
//! routing.

use anyhow::Result;

use agenda_core::calendar::{to_calendar_entry, CalendarEntry, CalendarInteraction};
use agenda_core::Event;

use crate::api::{EventApi, SNAPSHOT_LIMIT};
use crate::form_host::FormHost;

/// How many events the side card next to the calendar shows.
const SIDE_CARD_LIMIT: usize = 5;

pub struct CalendarView<'a> {
    api: &'a EventApi,
    host: &'a dyn FormHost,
    pub entries: Vec<CalendarEntry>,
    /// First events of the snapshot, shown in the side card.
    pub recent: Vec<Event>,
}

impl<'a> CalendarView<'a> {
    pub fn new(api: &'a EventApi, host: &'a dyn FormHost) -> Self {
        CalendarView {
            api,
            host,
            entries: Vec::new(),
            recent: Vec::new(),
        }
    }

    /// Fetch a full snapshot and map it into calendar entries. On
    /// failure the previously rendered entries stay.
    pub async fn refresh(&mut self) {
        match self.api.list(1, SNAPSHOT_LIMIT).await {
            Ok(page) => {
                self.entries = page.events.iter().map(to_calendar_entry).collect();
                self.recent = page.events.into_iter().take(SIDE_CARD_LIMIT).collect();
            }
            Err(e) => tracing::error!("calendar fetch failed: {e}"),
        }
    }

    /// Route a calendar interaction to the form host and reload iff a
    /// write was committed.
    pub async fn handle_interaction(&mut self, interaction: CalendarInteraction) -> Result<()> {
        let committed = match interaction {
            CalendarInteraction::ClickedEntry(event) => {
                self.host.open_event_form(Some(event), None).await?
            }
            CalendarInteraction::SelectedSlot(start) => {
                self.host.open_event_form(None, Some(start)).await?
            }
        };
        if committed {
            self.refresh().await;
        }
        Ok(())
    }
}
