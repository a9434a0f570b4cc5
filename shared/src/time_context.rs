use time::OffsetDateTime;

use crate::prize::Prize;

pub const MINUTE_MS: i64 = 60_000;
pub const DAY_MS: i64 = 86_400_000;

/// Wall-clock context for one evaluation pass. Carries the machine UTC
/// instant plus the embedder's display offset, so the same prize list
/// can be evaluated against a real or simulated clock.
///
/// All instants are epoch milliseconds. "Adjusted" values stay in the
/// prize's comparison frame: shifted by the configured offset for
/// UTC-policy prizes, untouched for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeContext {
    now_ms: i64,
    local_offset_minutes: i32,
}

impl TimeContext {
    /// Context at the machine's current UTC clock.
    pub fn current() -> Self {
        let now_ms = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64;
        Self::at(now_ms)
    }

    pub fn at(now_ms: i64) -> Self {
        Self { now_ms, local_offset_minutes: 0 }
    }

    /// Context whose calendar-day and weekday arithmetic for
    /// non-UTC-policy prizes happens in the user's timezone.
    pub fn with_local_offset(now_ms: i64, local_offset_minutes: i32) -> Self {
        Self { now_ms, local_offset_minutes }
    }

    pub fn now_ms(&self) -> i64 {
        self.now_ms
    }

    /// "Now" in the prize's comparison frame.
    pub fn resolve_now(&self, prize: &Prize) -> i64 {
        self.adjust(self.now_ms, prize)
    }

    /// Shifts a timestamp into the prize's comparison frame. Identity
    /// for anything but UTC-offset prizes.
    pub fn adjust(&self, ts: i64, prize: &Prize) -> i64 {
        match prize.utc_offset_minutes() {
            Some(offset) => ts + offset as i64 * MINUTE_MS,
            None => ts,
        }
    }

    /// Absent timestamps propagate as absent, never defaulted to now.
    pub fn adjust_opt(&self, ts: Option<i64>, prize: &Prize) -> Option<i64> {
        ts.map(|t| self.adjust(t, prize))
    }

    // Shift applied before reading civil fields (weekday, day bounds)
    // out of an adjusted instant. UTC-offset prizes are already in
    // their civil frame; everything else reads in the user's zone.
    fn civil_shift(&self, prize: &Prize) -> i64 {
        if prize.uses_utc_offset() {
            0
        } else {
            self.local_offset_minutes as i64 * MINUTE_MS
        }
    }

    fn datetime(ms: i64) -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp_nanos(ms as i128 * 1_000_000)
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }

    /// ISO weekday of an adjusted instant, Monday=1..Sunday=7.
    pub fn iso_weekday(&self, adjusted_ms: i64, prize: &Prize) -> u8 {
        Self::datetime(adjusted_ms + self.civil_shift(prize))
            .weekday()
            .number_from_monday()
    }

    /// ISO-8601 (week-year, week) of an adjusted instant. Standard
    /// Thursday anchoring, so weekly reconciliation holds at year edges.
    pub fn iso_week(&self, adjusted_ms: i64, prize: &Prize) -> (i32, u8) {
        let (year, week, _) = Self::datetime(adjusted_ms + self.civil_shift(prize))
            .date()
            .to_iso_week_date();
        (year, week)
    }

    /// 00:00:00.000 of the instant's civil day, in the adjusted frame.
    pub fn start_of_day(&self, adjusted_ms: i64, prize: &Prize) -> i64 {
        let dt = Self::datetime(adjusted_ms + self.civil_shift(prize));
        let since_midnight = (dt.hour() as i64 * 3_600 + dt.minute() as i64 * 60
            + dt.second() as i64)
            * 1_000
            + dt.millisecond() as i64;
        adjusted_ms - since_midnight
    }

    /// 23:59:59.999 of the instant's civil day, in the adjusted frame.
    pub fn end_of_day(&self, adjusted_ms: i64, prize: &Prize) -> i64 {
        self.start_of_day(adjusted_ms, prize) + DAY_MS - 1
    }
}
