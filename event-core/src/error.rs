use thiserror::Error;

use crate::types::{EventId, Timestamp, TokenId};

/// Result type for every event-core operation
pub type EventResult<T> = Result<T, EventError>;

/// Rejection reasons. A failed operation never leaves partial state behind.
///
/// The Display text of `InvalidTimeRange` and `NotTokenOwner` is what the
/// contracts surface as the transaction failure reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Invalid time range")]
    InvalidTimeRange {
        start_time: Timestamp,
        end_time: Timestamp,
    },

    #[error("Event {0} does not exist")]
    UnknownEvent(EventId),

    #[error("Token {0} does not exist")]
    UnknownToken(TokenId),

    #[error("Token {0} already exists")]
    DuplicateToken(TokenId),

    #[error("Must own the specified NFT")]
    NotTokenOwner { token_id: TokenId },

    // Policy rejections
    #[error("Registration for event {event_id} is closed at {now}")]
    RegistrationClosed { event_id: EventId, now: Timestamp },

    #[error("Already registered for event {0}")]
    AlreadyRegistered(EventId),

    #[error("Token {token_id} was already used to register for event {event_id}")]
    TokenAlreadyUsed { event_id: EventId, token_id: TokenId },
}
