/// Activations required by the three-tap protocol before the remote
/// call fires.
pub const REVEAL_TAPS_REQUIRED: u8 = 3;

/// How a slot's reveal is presented. Single-flip issues the remote call
/// on the first activation; three-tap collects taps first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealProtocol {
    SingleFlip,
    ThreeTap,
}

/// Per-slot claim lifecycle. The transitions are pure so the gesture
/// adapter can drive them without the machine ever touching a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimPhase {
    Idle,
    Revealing { taps: u8 },
    AwaitingRemote,
    Resolved,
    Failed,
}

impl ClaimPhase {
    /// First activation on an eligible slot. Returns the next phase and
    /// whether the remote call fires now.
    pub fn begin(protocol: RevealProtocol) -> (ClaimPhase, bool) {
        match protocol {
            RevealProtocol::SingleFlip => (ClaimPhase::AwaitingRemote, true),
            RevealProtocol::ThreeTap => (ClaimPhase::Revealing { taps: 0 }, false),
        }
    }

    /// One reveal activation. Taps outside the reveal window are
    /// ignored, including extras past the third while a call is in
    /// flight.
    pub fn tap(self) -> (ClaimPhase, bool) {
        match self {
            ClaimPhase::Revealing { taps } => {
                let taps = taps + 1;
                if taps >= REVEAL_TAPS_REQUIRED {
                    (ClaimPhase::AwaitingRemote, true)
                } else {
                    (ClaimPhase::Revealing { taps }, false)
                }
            }
            other => (other, false),
        }
    }

    /// Dismissing the overlay is only possible before the remote call
    /// has been issued.
    pub fn can_cancel(self) -> bool {
        matches!(self, ClaimPhase::Revealing { .. })
    }

    pub fn taps_remaining(self) -> u8 {
        match self {
            ClaimPhase::Revealing { taps } => REVEAL_TAPS_REQUIRED.saturating_sub(taps),
            _ => 0,
        }
    }
}
