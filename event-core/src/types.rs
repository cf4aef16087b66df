use std::fmt::{Debug, Display};

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

pub type TokenId = u64;
pub type EventId = u64;

/// Unix timestamp in seconds
pub type Timestamp = u64;

/// Account identifier used for owners, creators and participants.
///
/// Blanket-implemented; `String` works for standalone use and
/// `near_sdk::AccountId` inside the contracts.
pub trait Account: Clone + Eq + Ord + Debug + Display {}

impl<T: Clone + Eq + Ord + Debug + Display> Account for T {}

/// Identity of the caller and the ledger time for a single operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallContext<A> {
    pub caller: A,
    pub now: Timestamp,
}

impl<A> CallContext<A> {
    pub fn new(caller: A, now: Timestamp) -> Self {
        Self { caller, now }
    }
}

/// Event record. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Event<A> {
    pub name: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    /// NFT contract whose tokens grant access to this event
    pub nft_contract: A,
    /// Account that created the event
    pub owner: A,
}

impl<A> Event<A> {
    /// Whether `now` falls inside `[start_time, end_time]`
    pub fn is_open_at(&self, now: Timestamp) -> bool {
        self.start_time <= now && now <= self.end_time
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Registration<A> {
    pub event_id: EventId,
    pub participant: A,
    pub token_id: TokenId,
    pub registered_at: Timestamp,
}
