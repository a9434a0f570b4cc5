use crate::grouping::{Slot, SlotKey};
use crate::time_context::TimeContext;

/// Scans grouped slots for the one that is live today and returns its
/// id (the matching member's prize id). Returns `None` on gap days;
/// callers must not assume exactly one active slot per day.
pub fn active_slot_id(slots: &[Slot], ctx: &TimeContext) -> Option<i64> {
    for slot in slots {
        for prize in &slot.prizes {
            let now = ctx.resolve_now(prize);
            let live = match slot.key {
                SlotKey::Weekday(day) => day == ctx.iso_weekday(now, prize),
                SlotKey::Date(_) => {
                    match (
                        ctx.adjust_opt(prize.active_from, prize),
                        ctx.adjust_opt(prize.active_till, prize),
                    ) {
                        (Some(from), Some(till)) => now >= from && now <= till,
                        _ => false,
                    }
                }
            };
            if live {
                return Some(prize.id);
            }
        }
    }
    None
}
