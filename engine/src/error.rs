use std::fmt;

use shared::play_error::PlayErrorCode;

#[derive(Debug)]
pub enum Error {
    Transport(reqwest::Error),
    Timeout,
    Play(PlayErrorCode, Option<String>),
    SlotBusy(i64),
    SlotNotClaimable(i64),
    UnknownSlot(i64),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(err) => write!(f, "transport error: {}", err),
            Error::Timeout => write!(f, "the remote play call timed out"),
            Error::Play(code, message) => match message {
                Some(message) => write!(f, "play rejected ({}): {}", code, message),
                None => write!(f, "play rejected ({}): {}", code, code.message()),
            },
            Error::SlotBusy(id) => write!(f, "slot {} already has a claim in progress", id),
            Error::SlotNotClaimable(id) => write!(f, "slot {} is not claimable right now", id),
            Error::UnknownSlot(id) => write!(f, "no slot contains prize {}", id),
        }
    }
}

impl std::error::Error for Error {}
