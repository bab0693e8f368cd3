use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::{ReservationError, Result};

/// Parse the IANA zone name reported by the facility endpoint.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>().map_err(|_| {
        ReservationError::malformed("facility", format!("unknown timezone: {}", name))
    })
}

/// UTC offset of `tz` at the instant `at`.
pub fn utc_offset_at(tz: Tz, at: DateTime<Utc>) -> Duration {
    let offset = tz.offset_from_utc_datetime(&at.naive_utc()).fix();
    Duration::seconds(i64::from(offset.local_minus_utc()))
}

/// Shift a wall-clock time to UTC by subtracting `offset`.
///
/// The offset is whatever the caller measured, usually the zone's offset
/// *now*, so a target date on the other side of a DST switch lands an hour
/// off.
pub fn local_to_utc(local: NaiveDateTime, offset: Duration) -> NaiveDateTime {
    let utc = local - offset;
    debug!("Converted local time {} to UTC {} (offset {}s)", local, utc, offset.num_seconds());
    utc
}

/// Render a UTC instant the way the availability endpoint reports slot dates:
/// `YYYY-MM-DDTHH:MM:SS+00:00`, with microseconds only when non-zero.
pub fn format_utc_instant(instant: NaiveDateTime) -> String {
    let micros = instant.nanosecond() / 1_000;
    if micros == 0 {
        format!("{}+00:00", instant.format("%Y-%m-%dT%H:%M:%S"))
    } else {
        format!("{}.{:06}+00:00", instant.format("%Y-%m-%dT%H:%M:%S"), micros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("Europe/Berlin").unwrap(), chrono_tz::Europe::Berlin);
        assert!(matches!(
            parse_timezone("Mars/Olympus_Mons"),
            Err(ReservationError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_utc_offset_follows_the_reference_instant() {
        let summer = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();

        assert_eq!(utc_offset_at(chrono_tz::Europe::Berlin, summer), Duration::hours(2));
        assert_eq!(utc_offset_at(chrono_tz::Europe::Berlin, winter), Duration::hours(1));
        assert_eq!(utc_offset_at(chrono_tz::America::New_York, winter), Duration::hours(-5));
        assert_eq!(utc_offset_at(chrono_tz::Asia::Kolkata, winter), Duration::minutes(330));
    }

    #[test]
    fn test_local_to_utc_subtracts_offset() {
        let utc = local_to_utc(local(2024, 6, 1, 22, 0), Duration::hours(2));
        assert_eq!(format_utc_instant(utc), "2024-06-01T20:00:00+00:00");
    }

    #[test]
    fn test_local_to_utc_crosses_midnight() {
        let utc = local_to_utc(local(2024, 6, 1, 1, 30), Duration::hours(2));
        assert_eq!(format_utc_instant(utc), "2024-05-31T23:30:00+00:00");

        let utc = local_to_utc(local(2024, 1, 15, 22, 0), Duration::hours(-5));
        assert_eq!(format_utc_instant(utc), "2024-01-16T03:00:00+00:00");
    }

    #[test]
    fn test_format_keeps_sub_second_precision() {
        let instant = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_micro_opt(20, 0, 0, 1_500)
            .unwrap();
        assert_eq!(format_utc_instant(instant), "2024-06-01T20:00:00.001500+00:00");
    }
}
