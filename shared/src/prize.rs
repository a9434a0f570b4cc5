use serde::{Serialize, Deserialize};

/// Governs which "now" the availability checks for a prize must use.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimezonePolicy {
    FromLastAttempt,
    CalendarDaysUtc,
    CalendarDaysUserTimeZone,
    Lifetime,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AcknowledgeType {
    #[default]
    Implicit,
    // Requires a confirmatory user action after winning before the
    // claim is considered fully settled.
    Explicit,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrizeKind {
    #[default]
    Standard,
    // Surcharge prizes are exempt from the stock-exhaustion check and
    // sort after standard prizes within a slot.
    Surcharge,
}

/// One prize definition as supplied by the backing service. Display
/// strings are opaque to the engine and owned by the rendering side.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Prize {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub out_of_stock_message: Option<String>,
    pub requirements_message: Option<String>,
    // One-shot availability window, epoch milliseconds. Both present or
    // both absent.
    pub active_from: Option<i64>,
    pub active_till: Option<i64>,
    // Recurring weekly slot, ISO weekdays 1=Monday..7=Sunday.
    pub weekdays: Option<Vec<u8>>,
    pub timezone_policy: Option<TimezonePolicy>,
    pub timezone_offset_minutes: Option<i32>,
    // Remaining stock; 0 means exhausted unless the prize is surcharge.
    pub pool: i64,
    pub acknowledge_type: AcknowledgeType,
    pub kind: PrizeKind,
}

impl Prize {
    pub fn has_window(&self) -> bool {
        self.active_from.is_some() && self.active_till.is_some()
    }

    pub fn has_weekdays(&self) -> bool {
        self.weekdays.as_ref().map_or(false, |days| !days.is_empty())
    }

    pub fn min_weekday(&self) -> Option<u8> {
        self.weekdays.as_ref().and_then(|days| days.iter().min().copied())
    }

    pub fn weekday_matches(&self, day: u8) -> bool {
        self.weekdays.as_ref().map_or(false, |days| days.contains(&day))
    }

    pub fn is_surcharge(&self) -> bool {
        self.kind == PrizeKind::Surcharge
    }

    /// A prize can be placed on the calendar only with a complete date
    /// window or a non-empty weekday set.
    pub fn is_schedulable(&self) -> bool {
        self.has_window() || self.has_weekdays()
    }

    /// UTC-offset handling applies under an explicit CALENDAR_DAYS_UTC
    /// policy, or for legacy inputs that carry an offset but no policy.
    pub fn uses_utc_offset(&self) -> bool {
        match self.timezone_policy {
            Some(TimezonePolicy::CalendarDaysUtc) => true,
            Some(_) => false,
            None => self.timezone_offset_minutes.is_some(),
        }
    }

    pub fn utc_offset_minutes(&self) -> Option<i32> {
        if self.uses_utc_offset() {
            Some(self.timezone_offset_minutes.unwrap_or(0))
        } else {
            None
        }
    }
}

/// One claim fact from the remote history feed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub prize_id: i64,
    pub slot_template_id: i64,
    // Epoch milliseconds.
    pub claimed_at: i64,
    #[serde(default)]
    pub acknowledged_at: Option<i64>,
}
