//! Paginated events list orchestration.

use anyhow::Result;

use agenda_core::pagination::Pagination;
use agenda_core::Event;

use crate::api::{ApiResult, EventApi};
use crate::form_host::FormHost;

pub struct EventsListView<'a> {
    api: &'a EventApi,
    host: &'a dyn FormHost,
    pub pagination: Pagination,
    pub events: Vec<Event>,
}

impl<'a> EventsListView<'a> {
    pub fn new(api: &'a EventApi, host: &'a dyn FormHost, page_size: u32) -> Self {
        EventsListView {
            api,
            host,
            pagination: Pagination::new(page_size),
            events: Vec::new(),
        }
    }

    /// Fetch the current page; the new snapshot fully replaces the old
    /// one. On failure the prior rows stay displayed.
    pub async fn refresh(&mut self) {
        match self
            .api
            .list(self.pagination.current_page, self.pagination.page_size)
            .await
        {
            Ok(page) => {
                self.pagination.apply_response(&page);
                self.events = page.events;
            }
            Err(e) => tracing::error!("event list fetch failed: {e}"),
        }
    }

    /// Clamped page navigation; refetches exactly once and only when
    /// the target page is valid.
    pub async fn go_to_page(&mut self, n: u32) {
        if self.pagination.go_to_page(n) {
            self.refresh().await;
        }
    }

    pub async fn next_page(&mut self) {
        let next = self.pagination.current_page + 1;
        self.go_to_page(next).await;
    }

    pub async fn prev_page(&mut self) {
        let prev = self.pagination.current_page.saturating_sub(1);
        self.go_to_page(prev).await;
    }

    /// Open the form on an existing row; reload iff a write committed.
    pub async fn edit(&mut self, event: Event) -> Result<()> {
        if self.host.open_event_form(Some(event), None).await? {
            self.refresh().await;
        }
        Ok(())
    }

    /// Open the form in create mode; reload iff a write committed.
    pub async fn create(&mut self) -> Result<()> {
        if self.host.open_event_form(None, None).await? {
            self.refresh().await;
        }
        Ok(())
    }

    /// Delete one event. The list is never optimistically mutated: a
    /// failed delete propagates the error and leaves the displayed row
    /// intact. On success, deleting the last row of a non-first page
    /// steps back one page before the refetch.
    pub async fn delete(&mut self, id: i64) -> ApiResult<()> {
        self.api.delete(id).await?;
        let remaining = self.events.iter().filter(|e| e.id != Some(id)).count();
        self.pagination.step_back_if_emptied(remaining);
        self.refresh().await;
        Ok(())
    }
}
