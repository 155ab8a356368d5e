//! Terminal rendering for agenda types.
//!
//! Extension traits that add colored terminal rendering to agenda-core
//! types using owo_colors. Pure string building; printing is left to
//! the commands.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use owo_colors::OwoColorize;

use agenda_core::calendar::CalendarEntry;
use agenda_core::kpi::DashboardKpis;
use agenda_core::pagination::Pagination;
use agenda_core::Event;

/// Format used by calendar entries and datetime inputs.
const ISO_MINUTES: &str = "%Y-%m-%dT%H:%M";

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let when = format!("{} .. {}", self.start_at, self.end_at);
        let mut line = format!("{} {}", self.title.bold(), when.dimmed());
        if !self.location.is_empty() {
            line.push_str(&format!("  @ {}", self.location));
        }
        match self.participants.len() {
            0 => {}
            1 => line.push_str(&"  (1 participant)".dimmed().to_string()),
            n => line.push_str(&format!("  ({n} participants)").dimmed().to_string()),
        }
        line
    }
}

impl Render for CalendarEntry {
    fn render(&self) -> String {
        let time = self
            .start
            .split_once('T')
            .map(|(_, t)| t.to_string())
            .unwrap_or_default();
        format!("{} {}", time.dimmed(), self.title)
    }
}

impl Render for DashboardKpis {
    fn render(&self) -> String {
        let mut lines = vec![
            format!("  {}  {}", "Today".bold(), self.count_today),
            format!("  {}  {}", "This week".bold(), self.count_this_week),
            String::new(),
            format!("  {}", "Recent".bold()),
        ];
        if self.recent.is_empty() {
            lines.push(format!("   {}", "(nothing in the next few days)".dimmed()));
        } else {
            for event in &self.recent {
                lines.push(format!("   {}", event.render()));
            }
        }
        lines.join("\n")
    }
}

/// One-line pagination footer, e.g. "page 2/3 (21 events)".
pub fn page_footer(pagination: &Pagination) -> String {
    format!(
        "page {}/{} ({} events)",
        pagination.current_page, pagination.total_pages, pagination.total
    )
    .dimmed()
    .to_string()
}

fn entry_start(entry: &CalendarEntry) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&entry.start, ISO_MINUTES).ok()
}

/// Render one month of entries as a day-by-day agenda. Days without
/// events are skipped; entries outside the month are filtered out.
pub fn render_month(entries: &[CalendarEntry], year: i32, month: u32) -> String {
    let title = NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{year}-{month:02}"));

    let mut in_month: Vec<(&CalendarEntry, NaiveDateTime)> = entries
        .iter()
        .filter_map(|entry| entry_start(entry).map(|start| (entry, start)))
        .filter(|(_, start)| start.year() == year && start.month() == month)
        .collect();
    in_month.sort_by_key(|(_, start)| *start);

    let mut lines = vec![format!("  {}", title.bold())];
    if in_month.is_empty() {
        lines.push(format!("   {}", "(no events this month)".dimmed()));
        return lines.join("\n");
    }

    let mut current_day: Option<NaiveDate> = None;
    for (entry, start) in in_month {
        let day = start.date();
        if current_day != Some(day) {
            lines.push(format!("  {}", day.format("%a %d").to_string().bold()));
            current_day = Some(day);
        }
        lines.push(format!("   {}", entry.render()));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::calendar::to_calendar_entry;

    fn event(title: &str, start: &str, end: &str) -> Event {
        Event {
            id: Some(1),
            title: title.to_string(),
            description: String::new(),
            location: String::new(),
            start_at: start.to_string(),
            end_at: end.to_string(),
            participants: vec![],
        }
    }

    #[test]
    fn month_rendering_filters_and_groups_by_day() {
        let events = [
            event("In June", "2024-06-10 09:00", "2024-06-10 10:00"),
            event("Also June 10", "2024-06-10 14:00", "2024-06-10 15:00"),
            event("July", "2024-07-01 09:00", "2024-07-01 10:00"),
        ];
        let entries: Vec<_> = events.iter().map(to_calendar_entry).collect();
        let rendered = render_month(&entries, 2024, 6);

        assert!(rendered.contains("June 2024"));
        assert!(rendered.contains("In June"));
        assert!(rendered.contains("Also June 10"));
        assert!(!rendered.contains("July"));
        // Both June entries share one day heading.
        assert_eq!(rendered.matches("Mon 10").count(), 1);
    }

    #[test]
    fn empty_month_says_so() {
        let rendered = render_month(&[], 2024, 6);
        assert!(rendered.contains("no events this month"));
    }
}
