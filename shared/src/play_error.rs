use serde::{Deserialize, Serialize};
use strum::Display;

/// Remote play result codes. Zero is success; everything else is a
/// fixed taxonomy the rendering collaborator maps to copy.
pub const PLAY_OK: i32 = 0;
pub const CODE_NO_SPINS_LEFT: i32 = 1;
pub const CODE_POOL_EMPTY: i32 = 2;
pub const CODE_INSUFFICIENT_CURRENCY: i32 = 3;
pub const CODE_INSUFFICIENT_POINTS: i32 = 4;
pub const CODE_MAX_ATTEMPTS_REACHED: i32 = 5;
pub const CODE_TEMPLATE_INACTIVE: i32 = 6;
pub const CODE_SEGMENT_INELIGIBLE: i32 = 7;
pub const CODE_USER_CANCELLED: i32 = 8;

pub const NO_SPINS_LEFT_ERROR: &str = "No attempts left for this reward.";
pub const POOL_EMPTY_ERROR: &str = "This prize has run out of stock.";
pub const INSUFFICIENT_CURRENCY_ERROR: &str = "Not enough currency to claim this reward.";
pub const INSUFFICIENT_POINTS_ERROR: &str = "Not enough points to claim this reward.";
pub const MAX_ATTEMPTS_REACHED_ERROR: &str = "The maximum number of attempts has been reached.";
pub const TEMPLATE_INACTIVE_ERROR: &str = "This reward calendar is not active.";
pub const SEGMENT_INELIGIBLE_ERROR: &str = "This reward is not available for your account.";
pub const USER_CANCELLED_ERROR: &str = "The claim was cancelled.";
pub const UNKNOWN_PLAY_ERROR: &str = "Something went wrong while claiming. Please try again.";

#[derive(Debug, Display, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PlayErrorCode {
    NoSpinsLeft,
    PoolEmpty,
    InsufficientCurrency,
    InsufficientPoints,
    MaxAttemptsReached,
    TemplateInactive,
    SegmentIneligible,
    UserCancelled,
    Unknown,
}

impl PlayErrorCode {
    /// Never call with `PLAY_OK`; success has no taxonomy tag.
    pub fn from_code(code: i32) -> Self {
        match code {
            CODE_NO_SPINS_LEFT => Self::NoSpinsLeft,
            CODE_POOL_EMPTY => Self::PoolEmpty,
            CODE_INSUFFICIENT_CURRENCY => Self::InsufficientCurrency,
            CODE_INSUFFICIENT_POINTS => Self::InsufficientPoints,
            CODE_MAX_ATTEMPTS_REACHED => Self::MaxAttemptsReached,
            CODE_TEMPLATE_INACTIVE => Self::TemplateInactive,
            CODE_SEGMENT_INELIGIBLE => Self::SegmentIneligible,
            CODE_USER_CANCELLED => Self::UserCancelled,
            _ => Self::Unknown,
        }
    }

    /// Fallback copy used when the service sends no message of its own.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoSpinsLeft => NO_SPINS_LEFT_ERROR,
            Self::PoolEmpty => POOL_EMPTY_ERROR,
            Self::InsufficientCurrency => INSUFFICIENT_CURRENCY_ERROR,
            Self::InsufficientPoints => INSUFFICIENT_POINTS_ERROR,
            Self::MaxAttemptsReached => MAX_ATTEMPTS_REACHED_ERROR,
            Self::TemplateInactive => TEMPLATE_INACTIVE_ERROR,
            Self::SegmentIneligible => SEGMENT_INELIGIBLE_ERROR,
            Self::UserCancelled => USER_CANCELLED_ERROR,
            Self::Unknown => UNKNOWN_PLAY_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_to_variants() {
        assert_eq!(PlayErrorCode::from_code(CODE_POOL_EMPTY), PlayErrorCode::PoolEmpty);
        assert_eq!(
            PlayErrorCode::from_code(CODE_SEGMENT_INELIGIBLE),
            PlayErrorCode::SegmentIneligible
        );
        assert_eq!(PlayErrorCode::from_code(999), PlayErrorCode::Unknown);
        assert_eq!(PlayErrorCode::from_code(-1), PlayErrorCode::Unknown);
    }

    #[test]
    fn test_every_variant_has_fallback_copy() {
        let variants = [
            PlayErrorCode::NoSpinsLeft,
            PlayErrorCode::PoolEmpty,
            PlayErrorCode::InsufficientCurrency,
            PlayErrorCode::InsufficientPoints,
            PlayErrorCode::MaxAttemptsReached,
            PlayErrorCode::TemplateInactive,
            PlayErrorCode::SegmentIneligible,
            PlayErrorCode::UserCancelled,
            PlayErrorCode::Unknown,
        ];
        for v in variants {
            assert!(!v.message().is_empty());
        }
    }
}
