use std::collections::BTreeSet;

use serde::Serialize;

use crate::prize::Prize;

/// Key of one calendar position: an ISO weekday for recurring slots, an
/// activation timestamp for one-shot slots.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SlotKey {
    Weekday(u8),
    Date(i64),
}

/// One calendar position with every prize scheduled on it. Rebuilt on
/// every load and after every successful claim, never mutated in place.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Slot {
    pub key: SlotKey,
    pub prizes: Vec<Prize>,
}

impl Slot {
    /// The first member, used as the slot's representative for status
    /// checks and as its public id.
    pub fn representative(&self) -> Option<&Prize> {
        self.prizes.first()
    }

    pub fn slot_id(&self) -> Option<i64> {
        self.representative().map(|p| p.id)
    }

    pub fn contains_prize(&self, prize_id: i64) -> bool {
        self.prizes.iter().any(|p| p.id == prize_id)
    }
}

/// Sorts and partitions raw prize definitions into availability slots.
///
/// The sort order is a tie-break contract: id ascending, surcharge
/// prizes last, then activation timestamp and first weekday (absent
/// treated as 0). Grouping unsorted input would assign members in a
/// non-reproducible order.
///
/// Mode detection is all-or-nothing: only when every schedulable prize
/// carries weekdays does the key space become weekdays; otherwise every
/// prize groups under its activation timestamp, and a weekday-only
/// minority would land under key 0.
pub fn group(prizes: &[Prize]) -> Vec<Slot> {
    let mut sorted: Vec<&Prize> = prizes.iter().collect();
    sorted.sort_by_key(|p| {
        (
            p.id,
            p.is_surcharge(),
            p.active_from.unwrap_or(0),
            p.min_weekday().unwrap_or(0),
        )
    });

    let eligible: Vec<&Prize> = sorted
        .into_iter()
        .filter(|p| {
            if !p.is_schedulable() {
                log::debug!("prize {} has neither date window nor weekdays, skipping", p.id);
            }
            p.is_schedulable()
        })
        .collect();
    if eligible.is_empty() {
        return Vec::new();
    }

    if eligible.iter().all(|p| p.has_weekdays()) {
        let keys: BTreeSet<u8> = eligible
            .iter()
            .flat_map(|p| p.weekdays.iter().flatten().copied())
            .collect();
        keys.into_iter()
            .map(|day| Slot {
                key: SlotKey::Weekday(day),
                prizes: eligible
                    .iter()
                    .filter(|p| p.weekday_matches(day))
                    .map(|p| (*p).clone())
                    .collect(),
            })
            .collect()
    } else {
        let keys: BTreeSet<i64> = eligible.iter().map(|p| p.active_from.unwrap_or(0)).collect();
        keys.into_iter()
            .map(|ts| Slot {
                key: SlotKey::Date(ts),
                prizes: eligible
                    .iter()
                    .filter(|p| p.active_from.unwrap_or(0) == ts)
                    .map(|p| (*p).clone())
                    .collect(),
            })
            .collect()
    }
}
