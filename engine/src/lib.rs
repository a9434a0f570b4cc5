pub mod api;
pub mod claim;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;

pub use api::{HttpApi, PlayOutcome, RemoteApi};
pub use claim::{ClaimPhase, RevealProtocol, REVEAL_TAPS_REQUIRED};
pub use error::Error;
pub use session::{ClaimEvents, ClaimProgress, GameSession, SlotEntry, SlotView};
