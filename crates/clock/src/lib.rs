//! Wall-clock time in IANA zones for tooltips and zone cards.
//!
//! Every entry point takes the instant explicitly (`*_now` variants read the
//! system clock) so results are reproducible in tests. Unknown zone ids never
//! fail: they render as UTC and set [`LocalTime::fell_back`].

use chrono::{DateTime, Duration, Utc};
use chrono_tz::{OffsetComponents, Tz};
use serde::Serialize;

/// A zone's local time rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalTime {
    /// Zone actually used for rendering (`UTC` after a fallback).
    pub zone: String,
    /// `HH:MM:SS`, 24-hour.
    pub time: String,
    /// e.g. `Mon, Jul 1`.
    pub date: String,
    /// e.g. `EDT`, `IST`, or a numeric form such as `-05` for `Etc/` zones.
    pub abbreviation: String,
    /// e.g. `+05:30`.
    pub utc_offset: String,
    pub is_dst: bool,
    /// The requested zone was not recognized.
    pub fell_back: bool,
}

/// Parse an IANA zone id.
pub fn resolve_zone(zone: &str) -> Option<Tz> {
    zone.trim().parse::<Tz>().ok()
}

/// Local time in `zone` at `now`, falling back to UTC for unknown ids.
pub fn format_local_time(zone: &str, now: DateTime<Utc>) -> LocalTime {
    let (tz, fell_back) = match resolve_zone(zone) {
        Some(tz) => (tz, false),
        None => {
            tracing::warn!(zone, "unknown timezone, showing UTC");
            (Tz::UTC, true)
        }
    };

    let local = now.with_timezone(&tz);
    let is_dst = local.offset().dst_offset() != Duration::zero();

    LocalTime {
        zone: tz.name().to_string(),
        time: local.format("%H:%M:%S").to_string(),
        date: local.format("%a, %b %-d").to_string(),
        abbreviation: local.format("%Z").to_string(),
        utc_offset: local.format("%:z").to_string(),
        is_dst,
        fell_back,
    }
}

pub fn format_local_time_now(zone: &str) -> LocalTime {
    format_local_time(zone, Utc::now())
}

/// Whether `zone` observes a daylight-saving offset at `now`.
/// Unknown zones report `false`.
pub fn is_daylight_saving(zone: &str, now: DateTime<Utc>) -> bool {
    format_local_time(zone, now).is_dst
}

/// Human label for a zone id: `America/New_York` becomes `New York`.
pub fn zone_display_name(zone: &str) -> String {
    match zone.split('/').nth(1) {
        Some(city) if !city.is_empty() => city.replace('_', " "),
        _ => zone.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn new_york_summer_is_dst() {
        let t = format_local_time("America/New_York", at(2024, 7, 1, 12, 0, 0));
        assert_eq!(t.time, "08:00:00");
        assert_eq!(t.date, "Mon, Jul 1");
        assert_eq!(t.abbreviation, "EDT");
        assert_eq!(t.utc_offset, "-04:00");
        assert!(t.is_dst);
        assert!(!t.fell_back);
    }

    #[test]
    fn new_york_winter_is_standard_time() {
        let t = format_local_time("America/New_York", at(2024, 1, 15, 12, 0, 0));
        assert_eq!(t.time, "07:00:00");
        assert!(!t.is_dst);
    }

    #[test]
    fn kolkata_half_hour_offset() {
        let t = format_local_time("Asia/Kolkata", at(2024, 7, 1, 12, 0, 0));
        assert_eq!(t.time, "17:30:00");
        assert_eq!(t.utc_offset, "+05:30");
        assert!(!t.is_dst);
    }

    #[test]
    fn southern_hemisphere_dst_in_january() {
        assert!(is_daylight_saving("Australia/Sydney", at(2024, 1, 15, 0, 0, 0)));
        assert!(!is_daylight_saving("Australia/Sydney", at(2024, 7, 15, 0, 0, 0)));
    }

    #[test]
    fn etc_zone_uses_inverted_sign() {
        let t = format_local_time("Etc/GMT+5", at(2024, 7, 1, 12, 0, 0));
        assert_eq!(t.time, "07:00:00");
        assert_eq!(t.utc_offset, "-05:00");
    }

    #[test]
    fn unknown_zone_falls_back_to_utc() {
        let t = format_local_time("Mars/Olympus_Mons", at(2024, 7, 1, 12, 34, 56));
        assert_eq!(t.zone, "UTC");
        assert_eq!(t.time, "12:34:56");
        assert!(t.fell_back);
        assert!(!t.is_dst);
        assert!(!is_daylight_saving("", at(2024, 7, 1, 0, 0, 0)));
    }

    #[test]
    fn display_names() {
        assert_eq!(zone_display_name("America/New_York"), "New York");
        assert_eq!(zone_display_name("America/Argentina/Buenos_Aires"), "Argentina");
        assert_eq!(zone_display_name("UTC"), "UTC");
        assert_eq!(zone_display_name("Etc/"), "Etc/");
    }
}
