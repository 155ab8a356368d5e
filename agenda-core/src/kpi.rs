//! Dashboard KPI aggregation.
//!
//! Consumes a full snapshot of the event collection (fetched with a
//! high page limit) and derives the three dashboard metrics. Every call
//! recomputes from scratch; there is no incremental update path.

use chrono::{Duration, NaiveDateTime};

use crate::date_window::{in_range, parse_wire, start_of_day, start_of_week};
use crate::event::Event;

/// How many events the "recent" card shows at most.
pub const RECENT_EVENTS_LIMIT: usize = 5;

/// The recent window spans [today - 2 days, today + 4 days).
const RECENT_DAYS_BACK: i64 = 2;
const RECENT_DAYS_AHEAD: i64 = 4;

/// Derived dashboard metrics for one snapshot of the event collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardKpis {
    /// Events starting on the same calendar day as "now".
    pub count_today: usize,
    /// Events starting within the Monday-based week containing "now".
    pub count_this_week: usize,
    /// Events starting near today, sorted ascending by start time and
    /// truncated to [`RECENT_EVENTS_LIMIT`].
    pub recent: Vec<Event>,
}

/// Recompute all KPIs from a full snapshot.
///
/// The three buckets are independent predicates; one event may count in
/// several at once. Events whose start instant fails to parse are
/// skipped from every bucket so a single bad record never poisons the
/// whole dashboard.
pub fn compute_kpis(events: &[Event], now: NaiveDateTime) -> DashboardKpis {
    let today = start_of_day(now);
    let week_start = start_of_week(now);
    let week_end = week_start + Duration::days(7);
    let recent_lo = today - Duration::days(RECENT_DAYS_BACK);
    let recent_hi = today + Duration::days(RECENT_DAYS_AHEAD);

    let mut kpis = DashboardKpis::default();
    let mut recent: Vec<(NaiveDateTime, Event)> = Vec::new();

    for event in events {
        let Ok(start) = parse_wire(&event.start_at) else {
            continue;
        };
        let day = start_of_day(start);

        if day == today {
            kpis.count_today += 1;
        }
        if in_range(day, week_start, week_end) {
            kpis.count_this_week += 1;
        }
        if in_range(day, recent_lo, recent_hi) {
            recent.push((start, event.clone()));
        }
    }

    recent.sort_by_key(|(start, _)| *start);
    recent.truncate(RECENT_EVENTS_LIMIT);
    kpis.recent = recent.into_iter().map(|(_, event)| event).collect();

    kpis
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        // A Monday.
        NaiveDate::from_ymd_opt(2024, 6, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn event(title: &str, start: &str) -> Event {
        Event {
            id: None,
            title: title.to_string(),
            description: String::new(),
            location: String::new(),
            start_at: start.to_string(),
            end_at: start.to_string(),
            participants: vec![],
        }
    }

    #[test]
    fn count_today_includes_exactly_the_same_day_events() {
        let events = vec![
            event("early", "2024-06-10 00:00"),
            event("late", "2024-06-10 23:59"),
            event("yesterday", "2024-06-09 12:00"),
            event("tomorrow", "2024-06-11 12:00"),
        ];
        let kpis = compute_kpis(&events, now());
        assert_eq!(kpis.count_today, 2);
    }

    #[test]
    fn monday_event_counts_in_both_today_and_this_week() {
        let events = vec![event("Sync", "2024-06-10 09:00")];
        let kpis = compute_kpis(&events, now());
        assert_eq!(kpis.count_today, 1);
        assert_eq!(kpis.count_this_week, 1);
    }

    #[test]
    fn week_bucket_spans_monday_through_sunday_only() {
        let events = vec![
            event("prev sunday", "2024-06-09 23:00"),
            event("monday", "2024-06-10 08:00"),
            event("sunday", "2024-06-16 23:00"),
            event("next monday", "2024-06-17 00:00"),
        ];
        let kpis = compute_kpis(&events, now());
        assert_eq!(kpis.count_this_week, 2);
    }

    #[test]
    fn recent_window_is_today_minus_two_to_plus_four_days() {
        let events = vec![
            event("too old", "2024-06-07 10:00"),
            event("edge low", "2024-06-08 00:00"),
            event("edge high", "2024-06-13 23:59"),
            event("too far", "2024-06-14 00:00"),
        ];
        let kpis = compute_kpis(&events, now());
        let titles: Vec<&str> = kpis.recent.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["edge low", "edge high"]);
    }

    #[test]
    fn recent_is_sorted_ascending_and_capped_at_five() {
        let events = vec![
            event("d", "2024-06-11 09:00"),
            event("a", "2024-06-09 08:00"),
            event("f", "2024-06-12 09:00"),
            event("b", "2024-06-09 10:00"),
            event("e", "2024-06-11 15:00"),
            event("c", "2024-06-10 09:00"),
            event("g", "2024-06-13 09:00"),
        ];
        let kpis = compute_kpis(&events, now());
        assert_eq!(kpis.recent.len(), RECENT_EVENTS_LIMIT);
        let titles: Vec<&str> = kpis.recent.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn unparsable_start_instants_are_skipped() {
        let events = vec![
            event("bad", "soon-ish"),
            event("good", "2024-06-10 09:00"),
        ];
        let kpis = compute_kpis(&events, now());
        assert_eq!(kpis.count_today, 1);
        assert_eq!(kpis.recent.len(), 1);
    }
}
