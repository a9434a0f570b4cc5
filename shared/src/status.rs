use serde::Serialize;

use crate::grouping::SlotKey;
use crate::prize::{HistoryRecord, Prize};
use crate::time_context::TimeContext;

/// Full availability verdict for one (prize, slot) pair at one instant.
/// Recomputed on demand, never persisted.
///
/// `claimed` and `missed` are mutually exclusive, as are `locked` and
/// `active`; once `claimed` is true, `locked` and `missed` are false.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrizeStatus {
    pub locked: bool,
    pub missed: bool,
    pub claimed: bool,
    pub active: bool,
    pub out_of_stock: bool,
    pub acknowledged: bool,
}

impl PrizeStatus {
    /// A slot can start a claim only from this state.
    pub fn is_claimable(&self) -> bool {
        self.active && !self.locked && !self.missed && !self.claimed && !self.out_of_stock
    }
}

/// Computes the status tuple for a slot's representative prize against
/// the record (if any) that the matcher attributed to the current
/// occurrence.
pub fn status(
    prize: &Prize,
    key: SlotKey,
    matched: Option<&HistoryRecord>,
    ctx: &TimeContext,
) -> PrizeStatus {
    let claimed = matched.is_some();
    let acknowledged = matched.map_or(false, |r| r.acknowledged_at.is_some());

    let now = ctx.resolve_now(prize);
    let from = ctx.adjust_opt(prize.active_from, prize);
    let till = ctx.adjust_opt(prize.active_till, prize);
    let today = ctx.iso_weekday(now, prize);

    let active = match key {
        SlotKey::Date(_) => match (from, till) {
            (Some(from), Some(till)) => now >= from && now <= till,
            _ => false,
        },
        SlotKey::Weekday(day) => day == today,
    };

    let mut locked = false;
    let mut missed = false;

    if let Some(from) = from {
        locked = !claimed && now < from;
        if !claimed {
            if let Some(till) = till {
                if now > till {
                    missed = true;
                    locked = false;
                }
            }
        }
    }

    // Weekday scheduling overrides the date window verdict.
    if prize.has_weekdays() {
        let key_day = match key {
            SlotKey::Weekday(day) => Some(day),
            SlotKey::Date(_) => None,
        };
        if key_day == Some(today) {
            locked = false;
            missed = false;
        } else {
            locked = !claimed;
            missed = false;
            if let Some(first) = prize.min_weekday() {
                if first < today && !claimed {
                    missed = true;
                    locked = false;
                } else if first > today {
                    locked = true;
                    missed = false;
                }
            }
        }
    }

    // Claimed wins over locked/missed regardless of how stale the
    // other inputs are.
    if claimed {
        locked = false;
        missed = false;
    }

    let out_of_stock = !claimed && prize.pool == 0 && !prize.is_surcharge();

    PrizeStatus { locked, missed, claimed, active, out_of_stock, acknowledged }
}
