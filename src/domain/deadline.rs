//! Deadline parsing, calendar arithmetic and formatting.
//!
//! Deadlines are persisted as the text the user typed. They are parsed on
//! demand into a local wall-clock `NaiveDateTime`; all comparisons against
//! "now" happen in that local frame.

use chrono::{DateTime, Days, FixedOffset, Local, NaiveDate, NaiveDateTime, SecondsFormat};

/// Textual shape a deadline was written in, so shifted copies keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    /// `2024-01-01T09:00` (HTML datetime-local)
    Minutes,
    /// `2024-01-01T09:00:00`
    Seconds,
    /// `2024-01-01 09:00`
    SpacedMinutes,
    /// `2024-01-01 09:00:00`
    SpacedSeconds,
    /// `2024-01-01`, local midnight
    DateOnly,
    /// RFC 3339 with an explicit offset
    Rfc3339 { utc_z: bool },
}

const NAIVE_FORMS: [(Form, &str); 4] = [
    (Form::Seconds, "%Y-%m-%dT%H:%M:%S"),
    (Form::Minutes, "%Y-%m-%dT%H:%M"),
    (Form::SpacedSeconds, "%Y-%m-%d %H:%M:%S"),
    (Form::SpacedMinutes, "%Y-%m-%d %H:%M"),
];

/// A parsed, valid deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    local: NaiveDateTime,
    form: Form,
    zoned: Option<DateTime<FixedOffset>>,
}

impl Deadline {
    /// Parse a stored deadline string. Returns `None` for empty or
    /// unrecognised input.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(zoned) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self {
                local: zoned.with_timezone(&Local).naive_local(),
                form: Form::Rfc3339 { utc_z: raw.ends_with('Z') || raw.ends_with('z') },
                zoned: Some(zoned),
            });
        }

        for (form, pattern) in NAIVE_FORMS {
            if let Ok(local) = NaiveDateTime::parse_from_str(raw, pattern) {
                return Some(Self { local, form, zoned: None });
            }
        }

        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
        Some(Self { local: date.and_hms_opt(0, 0, 0)?, form: Form::DateOnly, zoned: None })
    }

    /// True when `raw` is a deadline this module understands.
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_some()
    }

    /// Local wall-clock instant of the deadline.
    pub fn local(&self) -> NaiveDateTime {
        self.local
    }

    /// Move the deadline forward by whole calendar days, keeping the
    /// wall-clock time. Returns `None` only on calendar overflow.
    pub fn shift_days(&self, days: u64) -> Option<Self> {
        if days == 0 {
            return Some(*self);
        }
        let step = Days::new(days);
        match self.zoned {
            Some(zoned) => {
                let shifted = zoned.checked_add_days(step)?;
                Some(Self {
                    local: shifted.with_timezone(&Local).naive_local(),
                    form: self.form,
                    zoned: Some(shifted),
                })
            }
            None => Some(Self {
                local: self.local.checked_add_days(step)?,
                form: self.form,
                zoned: None,
            }),
        }
    }

    /// Render in the same textual form the deadline was parsed from.
    pub fn to_storage_string(&self) -> String {
        match (self.form, self.zoned) {
            (Form::Rfc3339 { utc_z }, Some(zoned)) => {
                zoned.to_rfc3339_opts(SecondsFormat::AutoSi, utc_z)
            }
            (Form::DateOnly, _) => self.local.format("%Y-%m-%d").to_string(),
            (form, _) => {
                let pattern = NAIVE_FORMS
                    .iter()
                    .find(|(f, _)| *f == form)
                    .map(|(_, p)| *p)
                    .unwrap_or("%Y-%m-%dT%H:%M:%S");
                self.local.format(pattern).to_string()
            }
        }
    }

    /// Human-facing local rendering used in listings.
    pub fn display(&self) -> String {
        self.local.format("%Y-%m-%d %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::Deadline;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn parses_datetime_local_forms() {
        assert_eq!(Deadline::parse("2024-01-01T09:00").unwrap().local(), at(2024, 1, 1, 9, 0));
        assert_eq!(Deadline::parse("2024-01-01T09:00:00").unwrap().local(), at(2024, 1, 1, 9, 0));
        assert_eq!(Deadline::parse("2024-01-01 09:30").unwrap().local(), at(2024, 1, 1, 9, 30));
        assert_eq!(Deadline::parse(" 2023-12-31 ").unwrap().local(), at(2023, 12, 31, 0, 0));
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert!(Deadline::parse("").is_none());
        assert!(Deadline::parse("   ").is_none());
        assert!(Deadline::parse("tomorrow").is_none());
        assert!(Deadline::parse("2024-13-01T09:00").is_none());
        assert!(!Deadline::is_valid("2024-02-30"));
    }

    #[test]
    fn shift_keeps_wall_clock_and_form() {
        let base = Deadline::parse("2024-01-31T09:00").unwrap();
        assert_eq!(base.shift_days(1).unwrap().to_storage_string(), "2024-02-01T09:00");

        let secs = Deadline::parse("2024-01-01T09:00:00").unwrap();
        assert_eq!(secs.shift_days(2).unwrap().to_storage_string(), "2024-01-03T09:00:00");

        let date = Deadline::parse("2024-02-28").unwrap();
        assert_eq!(date.shift_days(1).unwrap().to_storage_string(), "2024-02-29");
    }

    #[test]
    fn rfc3339_round_trips_with_offset() {
        let zoned = Deadline::parse("2024-03-09T22:00:00+09:00").unwrap();
        assert_eq!(zoned.to_storage_string(), "2024-03-09T22:00:00+09:00");
        assert_eq!(zoned.shift_days(1).unwrap().to_storage_string(), "2024-03-10T22:00:00+09:00");

        let utc = Deadline::parse("2024-03-09T22:00:00Z").unwrap();
        assert_eq!(utc.to_storage_string(), "2024-03-09T22:00:00Z");
    }

    #[test]
    fn display_uses_space_separator() {
        assert_eq!(Deadline::parse("2024-06-15T23:00").unwrap().display(), "2024-06-15 23:00");
    }
}
