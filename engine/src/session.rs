use std::collections::HashMap;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{error, info, warn};

use shared::grouping::{self, SlotKey};
use shared::history;
use shared::play_error::{PlayErrorCode, UNKNOWN_PLAY_ERROR};
use shared::prize::{HistoryRecord, Prize};
use shared::selector;
use shared::status::{self, PrizeStatus};
use shared::time_context::TimeContext;

use crate::api::RemoteApi;
use crate::claim::{ClaimPhase, RevealProtocol, REVEAL_TAPS_REQUIRED};
use crate::error::Error;

pub const HISTORY_PAGE_SIZE: u32 = 50;
pub const DEFAULT_PLAY_TIMEOUT: Duration = Duration::from_secs(10);

/// Callbacks into the rendering collaborator. All methods default to
/// no-ops so adapters implement only what they present.
pub trait ClaimEvents: Send {
    fn on_claim_resolved(&mut self, _slot_id: i64, _prize: &Prize) {}
    fn on_claim_failed(&mut self, _slot_id: i64, _code: PlayErrorCode, _message: &str) {}
}

pub struct NoopEvents;

impl ClaimEvents for NoopEvents {}

/// One member prize with its computed status.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SlotEntry {
    pub prize: Prize,
    pub status: PrizeStatus,
}

/// One calendar slot as handed to the rendering collaborator: the key,
/// the prize (if any) whose claim counts for the current occurrence,
/// and a status per member.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SlotView {
    pub key: SlotKey,
    pub claimed_prize_id: Option<i64>,
    pub entries: Vec<SlotEntry>,
}

/// What a claim driver call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimProgress {
    Revealing { taps_remaining: u8 },
    Resolved { prize: Prize },
}

/// One player's view of one reward calendar: the loaded prize and
/// history feeds, the per-slot claim guards, and the remote handle.
/// Everything the engine needs travels through this object; there is
/// no module-level state.
pub struct GameSession<R: RemoteApi> {
    template_id: i64,
    remote: R,
    prizes: Vec<Prize>,
    history: Vec<HistoryRecord>,
    guards: HashMap<i64, ClaimPhase>,
    play_timeout: Duration,
    events: Box<dyn ClaimEvents>,
}

impl<R: RemoteApi> GameSession<R> {
    pub fn new(remote: R, template_id: i64) -> Self {
        Self {
            template_id,
            remote,
            prizes: Vec::new(),
            history: Vec::new(),
            guards: HashMap::new(),
            play_timeout: DEFAULT_PLAY_TIMEOUT,
            events: Box::new(NoopEvents),
        }
    }

    pub fn with_events(mut self, events: Box<dyn ClaimEvents>) -> Self {
        self.events = events;
        self
    }

    pub fn with_play_timeout(mut self, play_timeout: Duration) -> Self {
        self.play_timeout = play_timeout;
        self
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    /// Fetches the prize templates and the full claim history. An
    /// unreachable remote here is fatal for the session; the caller
    /// reports it once and does not retry.
    pub async fn load(&mut self) -> Result<(), Error> {
        self.prizes = self.remote.list_prize_templates(self.template_id).await?;
        self.history = self.fetch_full_history().await?;
        info!(
            "loaded {} prizes and {} history records for game {}",
            self.prizes.len(),
            self.history.len(),
            self.template_id
        );
        Ok(())
    }

    /// Replaces the claim history wholesale from the remote feed.
    pub async fn refresh_history(&mut self) -> Result<(), Error> {
        self.history = self.fetch_full_history().await?;
        Ok(())
    }

    async fn fetch_full_history(&self) -> Result<Vec<HistoryRecord>, Error> {
        let mut records = Vec::new();
        let mut offset = 0;
        loop {
            let page = self
                .remote
                .list_history(self.template_id, HISTORY_PAGE_SIZE, offset)
                .await?;
            let fetched = page.len() as u32;
            records.extend(page);
            if fetched < HISTORY_PAGE_SIZE {
                break;
            }
            offset += fetched;
        }
        Ok(records)
    }

    /// Groups the loaded prizes and attaches a status per member. A
    /// fresh pass over the current inputs; nothing is cached.
    pub fn compute_slots(&self, ctx: &TimeContext) -> Vec<SlotView> {
        grouping::group(&self.prizes)
            .into_iter()
            .map(|slot| {
                let claim = history::find_current(&slot, &self.history, ctx);
                let claimed_prize_id = claim.as_ref().map(|c| c.prize.id);
                let entries = slot
                    .prizes
                    .iter()
                    .map(|prize| {
                        let matched = claim
                            .as_ref()
                            .filter(|c| c.prize.id == prize.id)
                            .map(|c| c.record);
                        SlotEntry {
                            status: status::status(prize, slot.key, matched, ctx),
                            prize: prize.clone(),
                        }
                    })
                    .collect();
                SlotView { key: slot.key, claimed_prize_id, entries }
            })
            .collect()
    }

    /// Id of the slot that is live today, for highlight/scroll.
    pub fn active_slot_id(&self, ctx: &TimeContext) -> Option<i64> {
        selector::active_slot_id(&grouping::group(&self.prizes), ctx)
    }

    /// Current claim phase of a slot, if a claim is open on it.
    pub fn claim_phase(&self, slot_id: i64) -> Option<ClaimPhase> {
        let guard_key = self.guard_key_for(slot_id).ok()?;
        self.guards.get(&guard_key).copied()
    }

    /// Opens a claim on an eligible slot. Single-flip issues the play
    /// call right away; three-tap parks the slot in the reveal overlay
    /// until `advance_reveal` collects the taps. Ineligible slots are
    /// rejected without any transition or remote call, and a slot
    /// already mid-claim is rejected rather than queued.
    pub async fn begin_claim(
        &mut self,
        slot_id: i64,
        protocol: RevealProtocol,
        ctx: &TimeContext,
    ) -> Result<ClaimProgress, Error> {
        let slots = grouping::group(&self.prizes);
        let slot = slots
            .iter()
            .find(|s| s.contains_prize(slot_id))
            .ok_or(Error::UnknownSlot(slot_id))?;
        let guard_key = slot.slot_id().unwrap_or(slot_id);

        if self.guards.contains_key(&guard_key) {
            warn!("🚫 rejected re-entrant claim on slot {}", slot_id);
            return Err(Error::SlotBusy(slot_id));
        }

        let eligible = {
            let claim = history::find_current(slot, &self.history, ctx);
            let representative = slot.representative().ok_or(Error::UnknownSlot(slot_id))?;
            let matched = claim
                .as_ref()
                .filter(|c| c.prize.id == representative.id)
                .map(|c| c.record);
            let verdict = status::status(representative, slot.key, matched, ctx);
            verdict.is_claimable() && claim.is_none()
        };
        if !eligible {
            return Err(Error::SlotNotClaimable(slot_id));
        }

        let (phase, fire) = ClaimPhase::begin(protocol);
        self.guards.insert(guard_key, phase);
        info!("claim opened for slot {} ({:?})", slot_id, protocol);

        if fire {
            self.run_play(slot_id, guard_key, ctx).await
        } else {
            Ok(ClaimProgress::Revealing { taps_remaining: REVEAL_TAPS_REQUIRED })
        }
    }

    /// One reveal activation on a slot opened with the three-tap
    /// protocol. The third activation issues the play call; extras
    /// while the call is in flight are ignored.
    pub async fn advance_reveal(
        &mut self,
        slot_id: i64,
        ctx: &TimeContext,
    ) -> Result<ClaimProgress, Error> {
        let guard_key = self.guard_key_for(slot_id)?;
        let phase = *self
            .guards
            .get(&guard_key)
            .ok_or(Error::SlotNotClaimable(slot_id))?;
        let (next, fire) = phase.tap();
        self.guards.insert(guard_key, next);

        if fire {
            self.run_play(slot_id, guard_key, ctx).await
        } else {
            Ok(ClaimProgress::Revealing { taps_remaining: next.taps_remaining() })
        }
    }

    /// Dismisses a reveal overlay before the third tap. No remote call
    /// is ever issued for the aborted claim; once the call is in flight
    /// the claim can no longer be cancelled.
    pub fn cancel_reveal(&mut self, slot_id: i64) -> Result<(), Error> {
        let guard_key = self.guard_key_for(slot_id)?;
        match self.guards.get(&guard_key) {
            Some(phase) if phase.can_cancel() => {
                self.guards.remove(&guard_key);
                info!("reveal dismissed for slot {} before the play call", slot_id);
                Ok(())
            }
            Some(_) => Err(Error::SlotBusy(slot_id)),
            None => Err(Error::SlotNotClaimable(slot_id)),
        }
    }

    /// Confirms an explicit-acknowledge claim, stamping the current
    /// occurrence's record locally.
    pub fn acknowledge(&mut self, slot_id: i64, ctx: &TimeContext) -> Result<(), Error> {
        let slots = grouping::group(&self.prizes);
        let slot = slots
            .iter()
            .find(|s| s.contains_prize(slot_id))
            .ok_or(Error::UnknownSlot(slot_id))?;
        let (prize_id, claimed_at) = match history::find_current(slot, &self.history, ctx) {
            Some(claim) => (claim.prize.id, claim.record.claimed_at),
            None => return Err(Error::SlotNotClaimable(slot_id)),
        };

        for record in self.history.iter_mut() {
            if record.prize_id == prize_id && record.claimed_at == claimed_at {
                record.acknowledged_at.get_or_insert(ctx.now_ms());
                info!("claim acknowledged for prize {} in slot {}", prize_id, slot_id);
                return Ok(());
            }
        }
        Err(Error::SlotNotClaimable(slot_id))
    }

    async fn run_play(
        &mut self,
        slot_id: i64,
        guard_key: i64,
        ctx: &TimeContext,
    ) -> Result<ClaimProgress, Error> {
        info!("issuing play call for slot {} of game {}", slot_id, self.template_id);
        let outcome = match timeout(self.play_timeout, self.remote.play(self.template_id)).await {
            Err(_) => {
                self.fail(slot_id, guard_key, PlayErrorCode::Unknown, "the remote play call timed out");
                return Err(Error::Timeout);
            }
            Ok(Err(err)) => {
                self.fail(slot_id, guard_key, PlayErrorCode::Unknown, UNKNOWN_PLAY_ERROR);
                return Err(err);
            }
            Ok(Ok(outcome)) => outcome,
        };

        if !outcome.is_success() {
            let code = PlayErrorCode::from_code(outcome.error_code);
            let message = outcome
                .error_message
                .clone()
                .unwrap_or_else(|| code.message().to_string());
            self.fail(slot_id, guard_key, code, &message);
            return Err(Error::Play(code, outcome.error_message));
        }

        // The win only counts once the refreshed history confirms it;
        // the pre-call snapshot is never reused.
        if let Err(err) = self.refresh_history().await {
            self.fail(slot_id, guard_key, PlayErrorCode::Unknown, "the claim could not be confirmed");
            return Err(err);
        }
        self.guards.remove(&guard_key);

        let prize = match self.resolve_winning_prize(slot_id, outcome.prize_id, ctx) {
            Some(prize) => prize,
            None => {
                error!("play for slot {} succeeded but no winning prize could be resolved", slot_id);
                self.events
                    .on_claim_failed(slot_id, PlayErrorCode::Unknown, UNKNOWN_PLAY_ERROR);
                return Err(Error::Play(PlayErrorCode::Unknown, None));
            }
        };

        info!("🎁 slot {} resolved with prize {} ({})", slot_id, prize.id, prize.name);
        self.events.on_claim_resolved(slot_id, &prize);
        Ok(ClaimProgress::Resolved { prize })
    }

    fn fail(&mut self, slot_id: i64, guard_key: i64, code: PlayErrorCode, message: &str) {
        // Dropping the guard restores the slot: its status is
        // recomputed from the unmodified inputs on the next pass.
        self.guards.remove(&guard_key);
        error!("claim failed for slot {}: {} ({})", slot_id, message, code);
        self.events.on_claim_failed(slot_id, code, message);
    }

    fn resolve_winning_prize(
        &self,
        slot_id: i64,
        prize_id: Option<i64>,
        ctx: &TimeContext,
    ) -> Option<Prize> {
        if let Some(id) = prize_id {
            if let Some(prize) = self.prizes.iter().find(|p| p.id == id) {
                return Some(prize.clone());
            }
        }
        // The service did not name the win; re-match the slot against
        // the refreshed history instead.
        let slots = grouping::group(&self.prizes);
        let slot = slots.iter().find(|s| s.contains_prize(slot_id))?;
        history::find_current(slot, &self.history, ctx).map(|c| c.prize.clone())
    }

    fn guard_key_for(&self, slot_id: i64) -> Result<i64, Error> {
        let slots = grouping::group(&self.prizes);
        slots
            .iter()
            .find(|s| s.contains_prize(slot_id))
            .and_then(|s| s.slot_id())
            .ok_or(Error::UnknownSlot(slot_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PlayOutcome;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use std::collections::HashMap as StdHashMap;

    // 2024-01-03T00:00:00Z, a Wednesday; the test clock sits an hour in.
    const WED: i64 = 1_704_240_000_000;
    const NOW: i64 = WED + 3_600_000;
    const TEMPLATE: i64 = 9;

    #[derive(Clone)]
    struct MockRemote {
        prizes: Vec<Prize>,
        history: Arc<Mutex<Vec<HistoryRecord>>>,
        outcome: PlayOutcome,
        play_delay: Option<Duration>,
        play_calls: Arc<AtomicU32>,
    }

    impl MockRemote {
        fn new(prizes: Vec<Prize>, outcome: PlayOutcome) -> Self {
            Self {
                prizes,
                history: Arc::new(Mutex::new(Vec::new())),
                outcome,
                play_delay: None,
                play_calls: Arc::new(AtomicU32::new(0)),
            }
        }

        fn play_calls(&self) -> u32 {
            self.play_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RemoteApi for MockRemote {
        async fn list_prize_templates(&self, _template_id: i64) -> Result<Vec<Prize>, Error> {
            Ok(self.prizes.clone())
        }

        async fn list_history(
            &self,
            _template_id: i64,
            limit: u32,
            offset: u32,
        ) -> Result<Vec<HistoryRecord>, Error> {
            let all = self.history.lock().unwrap().clone();
            Ok(all
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect())
        }

        async fn play(&self, template_id: i64) -> Result<PlayOutcome, Error> {
            self.play_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.play_delay {
                tokio::time::sleep(delay).await;
            }
            if self.outcome.is_success() {
                if let Some(prize_id) = self.outcome.prize_id {
                    self.history.lock().unwrap().push(HistoryRecord {
                        prize_id,
                        slot_template_id: template_id,
                        claimed_at: NOW,
                        acknowledged_at: None,
                    });
                }
            }
            Ok(self.outcome.clone())
        }

        async fn get_translations(
            &self,
            _language: &str,
        ) -> Result<StdHashMap<String, String>, Error> {
            Ok(StdHashMap::new())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingEvents {
        resolved: Arc<Mutex<Vec<(i64, i64)>>>,
        failed: Arc<Mutex<Vec<(i64, PlayErrorCode)>>>,
    }

    impl ClaimEvents for RecordingEvents {
        fn on_claim_resolved(&mut self, slot_id: i64, prize: &Prize) {
            self.resolved.lock().unwrap().push((slot_id, prize.id));
        }

        fn on_claim_failed(&mut self, slot_id: i64, code: PlayErrorCode, _message: &str) {
            self.failed.lock().unwrap().push((slot_id, code));
        }
    }

    fn weekday_prize(id: i64, days: &[u8]) -> Prize {
        Prize {
            id,
            name: format!("prize-{}", id),
            weekdays: Some(days.to_vec()),
            pool: 5,
            ..Default::default()
        }
    }

    fn won(prize_id: i64) -> PlayOutcome {
        PlayOutcome { error_code: 0, error_message: None, prize_id: Some(prize_id) }
    }

    fn rejected(code: i32) -> PlayOutcome {
        PlayOutcome { error_code: code, error_message: None, prize_id: None }
    }

    async fn loaded(mock: MockRemote) -> GameSession<MockRemote> {
        let mut session = GameSession::new(mock, TEMPLATE);
        session.load().await.unwrap();
        session
    }

    fn claimed_in_view(session: &GameSession<MockRemote>, ctx: &TimeContext, prize_id: i64) -> bool {
        session
            .compute_slots(ctx)
            .iter()
            .flat_map(|view| view.entries.iter())
            .any(|entry| entry.prize.id == prize_id && entry.status.claimed)
    }

    #[tokio::test]
    async fn test_begin_claim_on_locked_slot_is_a_no_op() {
        // Friday's slot while the clock is on Wednesday.
        let mock = MockRemote::new(vec![weekday_prize(1, &[5])], won(1));
        let mut session = loaded(mock.clone()).await;
        let ctx = TimeContext::at(NOW);

        let result = session.begin_claim(1, RevealProtocol::SingleFlip, &ctx).await;
        assert!(matches!(result, Err(Error::SlotNotClaimable(1))));
        assert_eq!(mock.play_calls(), 0);
        assert_eq!(session.claim_phase(1), None);
    }

    #[tokio::test]
    async fn test_out_of_stock_slot_is_not_claimable() {
        let mut prize = weekday_prize(1, &[3]);
        prize.pool = 0;
        let mock = MockRemote::new(vec![prize], won(1));
        let mut session = loaded(mock.clone()).await;
        let ctx = TimeContext::at(NOW);

        let result = session.begin_claim(1, RevealProtocol::SingleFlip, &ctx).await;
        assert!(matches!(result, Err(Error::SlotNotClaimable(1))));
        assert_eq!(mock.play_calls(), 0);
    }

    #[tokio::test]
    async fn test_single_flip_claim_resolves_against_refreshed_history() {
        let events = RecordingEvents::default();
        let mock = MockRemote::new(vec![weekday_prize(1, &[3])], won(1));
        let mut session = loaded(mock.clone())
            .await
            .with_events(Box::new(events.clone()));
        let ctx = TimeContext::at(NOW);
        assert!(!claimed_in_view(&session, &ctx, 1));

        let progress = session
            .begin_claim(1, RevealProtocol::SingleFlip, &ctx)
            .await
            .unwrap();
        assert!(matches!(progress, ClaimProgress::Resolved { ref prize } if prize.id == 1));
        assert_eq!(mock.play_calls(), 1);
        assert_eq!(session.claim_phase(1), None);
        assert!(claimed_in_view(&session, &ctx, 1));
        assert_eq!(*events.resolved.lock().unwrap(), vec![(1, 1)]);

        // The slot is spent for this occurrence.
        let again = session.begin_claim(1, RevealProtocol::SingleFlip, &ctx).await;
        assert!(matches!(again, Err(Error::SlotNotClaimable(1))));
        assert_eq!(mock.play_calls(), 1);
    }

    #[tokio::test]
    async fn test_three_tap_fires_only_on_the_third_activation() {
        let mock = MockRemote::new(vec![weekday_prize(1, &[3])], won(1));
        let mut session = loaded(mock.clone()).await;
        let ctx = TimeContext::at(NOW);

        let progress = session
            .begin_claim(1, RevealProtocol::ThreeTap, &ctx)
            .await
            .unwrap();
        assert_eq!(progress, ClaimProgress::Revealing { taps_remaining: 3 });

        let progress = session.advance_reveal(1, &ctx).await.unwrap();
        assert_eq!(progress, ClaimProgress::Revealing { taps_remaining: 2 });
        let progress = session.advance_reveal(1, &ctx).await.unwrap();
        assert_eq!(progress, ClaimProgress::Revealing { taps_remaining: 1 });
        assert_eq!(mock.play_calls(), 0);

        let progress = session.advance_reveal(1, &ctx).await.unwrap();
        assert!(matches!(progress, ClaimProgress::Resolved { .. }));
        assert_eq!(mock.play_calls(), 1);
    }

    #[tokio::test]
    async fn test_reentrant_claim_is_rejected_not_queued() {
        let mock = MockRemote::new(vec![weekday_prize(1, &[3])], won(1));
        let mut session = loaded(mock.clone()).await;
        let ctx = TimeContext::at(NOW);

        session
            .begin_claim(1, RevealProtocol::ThreeTap, &ctx)
            .await
            .unwrap();
        let second = session.begin_claim(1, RevealProtocol::ThreeTap, &ctx).await;
        assert!(matches!(second, Err(Error::SlotBusy(1))));
    }

    #[tokio::test]
    async fn test_cancel_before_the_third_tap_aborts_without_a_call() {
        let mock = MockRemote::new(vec![weekday_prize(1, &[3])], won(1));
        let mut session = loaded(mock.clone()).await;
        let ctx = TimeContext::at(NOW);

        session
            .begin_claim(1, RevealProtocol::ThreeTap, &ctx)
            .await
            .unwrap();
        session.advance_reveal(1, &ctx).await.unwrap();
        session.cancel_reveal(1).unwrap();
        assert_eq!(session.claim_phase(1), None);
        assert_eq!(mock.play_calls(), 0);

        // The slot went back to Idle and may be retried.
        let progress = session
            .begin_claim(1, RevealProtocol::SingleFlip, &ctx)
            .await
            .unwrap();
        assert!(matches!(progress, ClaimProgress::Resolved { .. }));
    }

    #[tokio::test]
    async fn test_failed_play_restores_the_slot() {
        let events = RecordingEvents::default();
        let mock = MockRemote::new(
            vec![weekday_prize(1, &[3])],
            rejected(shared::play_error::CODE_POOL_EMPTY),
        );
        let mut session = loaded(mock.clone())
            .await
            .with_events(Box::new(events.clone()));
        let ctx = TimeContext::at(NOW);

        let result = session.begin_claim(1, RevealProtocol::SingleFlip, &ctx).await;
        assert!(matches!(result, Err(Error::Play(PlayErrorCode::PoolEmpty, _))));
        assert_eq!(session.claim_phase(1), None);
        assert!(!claimed_in_view(&session, &ctx, 1));
        assert_eq!(
            *events.failed.lock().unwrap(),
            vec![(1, PlayErrorCode::PoolEmpty)]
        );

        // The failure is not terminal; the slot may be retried.
        assert!(session
            .begin_claim(1, RevealProtocol::ThreeTap, &ctx)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_hung_play_call_times_out_to_failed() {
        let mut mock = MockRemote::new(vec![weekday_prize(1, &[3])], won(1));
        mock.play_delay = Some(Duration::from_millis(200));
        let mut session = loaded(mock.clone())
            .await
            .with_play_timeout(Duration::from_millis(20));
        let ctx = TimeContext::at(NOW);

        let result = session.begin_claim(1, RevealProtocol::SingleFlip, &ctx).await;
        assert!(matches!(result, Err(Error::Timeout)));
        assert_eq!(mock.play_calls(), 1);
        assert_eq!(session.claim_phase(1), None);
    }

    #[tokio::test]
    async fn test_load_pages_through_the_full_history() {
        let mock = MockRemote::new(vec![weekday_prize(1, &[3])], won(1));
        {
            let mut history = mock.history.lock().unwrap();
            for i in 0..120 {
                history.push(HistoryRecord {
                    prize_id: 1,
                    slot_template_id: TEMPLATE,
                    // Spread far in the past so nothing matches today.
                    claimed_at: i * 1_000,
                    acknowledged_at: None,
                });
            }
        }
        let session = loaded(mock).await;
        assert_eq!(session.history().len(), 120);
    }

    #[tokio::test]
    async fn test_acknowledge_stamps_the_current_record() {
        let mut prize = weekday_prize(1, &[3]);
        prize.acknowledge_type = shared::prize::AcknowledgeType::Explicit;
        let mock = MockRemote::new(vec![prize], won(1));
        let mut session = loaded(mock).await;
        let ctx = TimeContext::at(NOW);

        session
            .begin_claim(1, RevealProtocol::SingleFlip, &ctx)
            .await
            .unwrap();
        let views = session.compute_slots(&ctx);
        assert!(views[0].entries[0].status.claimed && !views[0].entries[0].status.acknowledged);

        session.acknowledge(1, &ctx).unwrap();
        let views = session.compute_slots(&ctx);
        assert!(views[0].entries[0].status.acknowledged);
    }
}
