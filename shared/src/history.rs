use crate::grouping::{Slot, SlotKey};
use crate::prize::{HistoryRecord, Prize};
use crate::time_context::TimeContext;

/// The historical claim that belongs to the current occurrence of a
/// slot, paired with the member prize it was matched through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotClaim<'a> {
    pub prize: &'a Prize,
    pub record: &'a HistoryRecord,
}

/// Finds the (at most one) history record that counts for the current
/// occurrence of a slot.
///
/// Prizes are scanned in slot member order and records in feed order;
/// the first match wins. That is the deterministic tie-break for slots
/// whose members compete for the same claim.
pub fn find_current<'a>(
    slot: &'a Slot,
    history: &'a [HistoryRecord],
    ctx: &TimeContext,
) -> Option<SlotClaim<'a>> {
    for prize in &slot.prizes {
        for record in history.iter().filter(|r| r.prize_id == prize.id) {
            if record_matches(prize, slot.key, record, ctx) {
                log::debug!(
                    "record claimed at {} counts for the current occurrence of prize {}",
                    record.claimed_at,
                    prize.id
                );
                return Some(SlotClaim { prize, record });
            }
        }
    }
    None
}

fn record_matches(prize: &Prize, key: SlotKey, record: &HistoryRecord, ctx: &TimeContext) -> bool {
    let claimed_at = ctx.adjust(record.claimed_at, prize);
    match key {
        // A record satisfies a weekly slot only inside the current ISO
        // week; last week's claim never carries over.
        SlotKey::Weekday(day) => {
            if !prize.weekday_matches(day) {
                return false;
            }
            let now = ctx.resolve_now(prize);
            ctx.iso_week(claimed_at, prize) == ctx.iso_week(now, prize)
                && ctx.iso_weekday(claimed_at, prize) == day
        }
        SlotKey::Date(key_ts) => {
            let (from, till) = match (prize.active_from, prize.active_till) {
                (Some(from), Some(till)) => (from, till),
                _ => return false,
            };
            if from != key_ts {
                return false;
            }
            let mut from = ctx.adjust(from, prize);
            let mut till = ctx.adjust(till, prize);
            // Whole-day clamping absorbs intra-day clock skew when no
            // fixed UTC offset pins the window.
            if !prize.uses_utc_offset() {
                from = ctx.start_of_day(from, prize);
                till = ctx.end_of_day(till, prize);
            }
            claimed_at >= from && claimed_at <= till
        }
    }
}
