use event_contract_common::{refund, OrPanic, Owned, StorageCharge};
use event_core::{
    registry, validator, CallContext, Event, EventId, EventStore, Registration,
    RegistrationPolicy, ResolvedOwner, Timestamp, TokenId,
};
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::collections::{LookupMap, LookupSet, Vector};
use near_sdk::serde::Serialize;
use near_sdk::{
    env, ext_contract, log, near_bindgen, AccountId, BorshStorageKey, Gas, NearToken,
    PanicOnDefault, Promise, PromiseError,
};

mod admin;
mod events;
mod registration;
mod views;

// Gas constants
pub const GAS_FOR_OWNER_OF: Gas = Gas::from_tgas(10);
pub const GAS_FOR_ON_TOKEN_OWNER: Gas = Gas::from_tgas(20);
pub const GAS_FOR_ON_REGISTRATION_SETTLED: Gas = Gas::from_tgas(10);

pub const DEFAULT_PAGE_SIZE: u64 = 50;
pub const MAX_PAGE_SIZE: u64 = 100;
pub const MAX_EVENT_NAME_LEN: usize = 256;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

#[derive(BorshSerialize, BorshStorageKey)]
#[borsh(crate = "near_sdk::borsh")]
enum StorageKey {
    Events,
    Registrations,
    EventRegistrations { event_id: EventId },
    Participants,
    UsedTokens,
}

// External interface of the NFT contract referenced by an event
#[ext_contract(ext_event_nft)]
#[allow(dead_code)]
trait EventNft {
    fn owner_of(&self, token_id: TokenId) -> AccountId;
}

#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
#[borsh(crate = "near_sdk::borsh")]
#[near_bindgen(contract_state)]
pub struct Contract {
    // Contract configuration
    owner_id: AccountId,
    policy: RegistrationPolicy,

    // Events
    last_event_id: EventId,
    events: LookupMap<EventId, Event<AccountId>>,

    // Registrations, per event in arrival order
    registrations: LookupMap<EventId, Vector<Registration<AccountId>>>,
    participants: LookupSet<(EventId, AccountId)>,
    used_tokens: LookupSet<(EventId, TokenId)>,
}

#[near_bindgen]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, policy: Option<RegistrationPolicy>) -> Self {
        Self {
            owner_id,
            policy: policy.unwrap_or_default(),
            last_event_id: 0,
            events: LookupMap::new(StorageKey::Events),
            registrations: LookupMap::new(StorageKey::Registrations),
            participants: LookupSet::new(StorageKey::Participants),
            used_tokens: LookupSet::new(StorageKey::UsedTokens),
        }
    }

    /// Create an event gated by tokens of `nft_contract`. Times are Unix seconds.
    /// The caller pays for the event record; unused deposit is refunded.
    #[payable]
    pub fn create_event(
        &mut self,
        name: String,
        start_time: Timestamp,
        end_time: Timestamp,
        nft_contract: AccountId,
    ) -> EventId {
        assert!(
            name.len() <= MAX_EVENT_NAME_LEN,
            "Event name too long (max {} bytes)",
            MAX_EVENT_NAME_LEN
        );

        let ctx = call_context();
        let charge = StorageCharge::start();
        let event_id = registry::create_event(
            self,
            &mut events::RegistrationLog,
            &ctx,
            name,
            start_time,
            end_time,
            nft_contract,
        )
        .or_panic();
        charge.settle(&ctx.caller, env::attached_deposit());

        log!("Event {} created by {}", event_id, ctx.caller);
        event_id
    }
}

/// Caller and block time (in seconds) of the current receipt
fn call_context() -> CallContext<AccountId> {
    CallContext::new(env::predecessor_account_id(), now_seconds())
}

fn now_seconds() -> Timestamp {
    env::block_timestamp() / NANOS_PER_SECOND
}

impl EventStore<AccountId> for Contract {
    fn last_event_id(&self) -> EventId {
        self.last_event_id
    }

    fn set_last_event_id(&mut self, event_id: EventId) {
        self.last_event_id = event_id;
    }

    fn event(&self, event_id: EventId) -> Option<Event<AccountId>> {
        self.events.get(&event_id)
    }

    fn insert_event(&mut self, event_id: EventId, event: Event<AccountId>) {
        self.events.insert(&event_id, &event);
    }

    fn is_participant(&self, event_id: EventId, account: &AccountId) -> bool {
        self.participants.contains(&(event_id, account.clone()))
    }

    fn is_token_used(&self, event_id: EventId, token_id: TokenId) -> bool {
        self.used_tokens.contains(&(event_id, token_id))
    }

    fn insert_registration(&mut self, registration: Registration<AccountId>) {
        let event_id = registration.event_id;
        self.participants
            .insert(&(event_id, registration.participant.clone()));
        self.used_tokens.insert(&(event_id, registration.token_id));

        let mut list = self
            .registrations
            .get(&event_id)
            .unwrap_or_else(|| Vector::new(StorageKey::EventRegistrations { event_id }));
        list.push(&registration);
        self.registrations.insert(&event_id, &list);
    }

    fn registration_count(&self, event_id: EventId) -> u64 {
        self.registrations
            .get(&event_id)
            .map_or(0, |list| list.len())
    }

    fn registrations(
        &self,
        event_id: EventId,
        from_index: u64,
        limit: u64,
    ) -> Vec<Registration<AccountId>> {
        let Some(list) = self.registrations.get(&event_id) else {
            return vec![];
        };
        let end = from_index.saturating_add(limit).min(list.len());
        (from_index..end).filter_map(|index| list.get(index)).collect()
    }
}

#[cfg(test)]
mod tests;
