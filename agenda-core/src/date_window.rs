//! Date-window arithmetic shared by the KPI and calendar code.
//!
//! This module is the single place that decides what "today", "this
//! week" and half-open window membership mean. Events carry their
//! instants as wire strings; parsing happens here and nowhere else.

use chrono::{Datelike, Duration, NaiveDateTime};

use crate::error::{AgendaError, AgendaResult};

/// Wire datetime format used by the backend, e.g. "2024-06-10 09:00".
pub const WIRE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a wire datetime string ("YYYY-MM-DD HH:MM").
pub fn parse_wire(s: &str) -> AgendaResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, WIRE_FORMAT)
        .map_err(|_| AgendaError::InvalidDateTime(s.to_string()))
}

/// Format an instant back into the wire format.
pub fn format_wire(dt: NaiveDateTime) -> String {
    dt.format(WIRE_FORMAT).to_string()
}

/// Truncate to midnight of the same calendar day.
pub fn start_of_day(dt: NaiveDateTime) -> NaiveDateTime {
    dt.date().and_hms_opt(0, 0, 0).unwrap()
}

/// Midnight on the Monday of the week containing `dt`.
///
/// Weeks run Monday through Sunday: a Sunday maps to the Monday six
/// days earlier, not to the Sunday week start some platforms default to.
pub fn start_of_week(dt: NaiveDateTime) -> NaiveDateTime {
    let day = start_of_day(dt);
    day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

/// Half-open range membership: `lo <= x < hi`.
pub fn in_range(x: NaiveDateTime, lo: NaiveDateTime, hi: NaiveDateTime) -> bool {
    lo <= x && x < hi
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn parses_and_formats_the_wire_shape() {
        let parsed = parse_wire("2024-06-10 09:30").unwrap();
        assert_eq!(parsed, dt(2024, 6, 10, 9, 30));
        assert_eq!(format_wire(parsed), "2024-06-10 09:30");
    }

    #[test]
    fn rejects_t_separated_and_garbage_input() {
        assert!(parse_wire("2024-06-10T09:30").is_err());
        assert!(parse_wire("not a date").is_err());
    }

    #[test]
    fn start_of_day_truncates_to_midnight() {
        assert_eq!(start_of_day(dt(2024, 6, 10, 23, 59)), dt(2024, 6, 10, 0, 0));
        assert_eq!(start_of_day(dt(2024, 6, 10, 0, 0)), dt(2024, 6, 10, 0, 0));
    }

    #[test]
    fn every_day_of_a_week_maps_to_the_same_monday() {
        // 2024-06-10 is a Monday; the whole Monday..Sunday span maps to it.
        let monday = dt(2024, 6, 10, 0, 0);
        for offset in 0..7 {
            let day = monday + Duration::days(offset);
            assert_eq!(start_of_week(day), monday, "offset {offset}");
        }
    }

    #[test]
    fn sunday_maps_to_the_monday_six_days_prior() {
        let sunday = dt(2024, 6, 16, 15, 0);
        assert_eq!(start_of_week(sunday), dt(2024, 6, 10, 0, 0));
    }

    #[test]
    fn in_range_is_half_open() {
        let lo = dt(2024, 6, 10, 0, 0);
        let hi = dt(2024, 6, 17, 0, 0);
        assert!(in_range(lo, lo, hi));
        assert!(in_range(dt(2024, 6, 16, 23, 59), lo, hi));
        assert!(!in_range(hi, lo, hi));
        assert!(!in_range(dt(2024, 6, 9, 23, 59), lo, hi));
    }
}
