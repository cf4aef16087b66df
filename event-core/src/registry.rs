//! Event registry.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use crate::error::{EventError, EventResult};
use crate::notify::{Notifier, RegistryNotification};
use crate::types::{Account, CallContext, Event, EventId, Registration, Timestamp, TokenId};

/// Raw storage for events and their registrations
pub trait EventStore<A> {
    /// Highest identifier handed out so far, 0 when empty
    fn last_event_id(&self) -> EventId;
    fn set_last_event_id(&mut self, event_id: EventId);

    fn event(&self, event_id: EventId) -> Option<Event<A>>;
    fn insert_event(&mut self, event_id: EventId, event: Event<A>);

    fn is_participant(&self, event_id: EventId, account: &A) -> bool;
    fn is_token_used(&self, event_id: EventId, token_id: TokenId) -> bool;
    fn insert_registration(&mut self, registration: Registration<A>);

    fn registration_count(&self, event_id: EventId) -> u64;
    fn registrations(&self, event_id: EventId, from_index: u64, limit: u64) -> Vec<Registration<A>>;
}

/// Validate and store a new event created by `ctx.caller`
pub fn create_event<A, S, N>(
    store: &mut S,
    notifier: &mut N,
    ctx: &CallContext<A>,
    name: String,
    start_time: Timestamp,
    end_time: Timestamp,
    nft_contract: A,
) -> EventResult<EventId>
where
    A: Account,
    S: EventStore<A>,
    N: Notifier<RegistryNotification<A>>,
{
    if end_time <= start_time {
        return Err(EventError::InvalidTimeRange {
            start_time,
            end_time,
        });
    }

    let event_id = store.last_event_id() + 1;
    store.set_last_event_id(event_id);
    store.insert_event(
        event_id,
        Event {
            name: name.clone(),
            start_time,
            end_time,
            nft_contract,
            owner: ctx.caller.clone(),
        },
    );

    info!(event_id, owner = %ctx.caller, %name, start_time, end_time, "event created");
    notifier.notify(RegistryNotification::EventCreated {
        event_id,
        owner: ctx.caller.clone(),
        name,
    });
    Ok(event_id)
}

pub fn event_details<A, S>(store: &S, event_id: EventId) -> EventResult<Event<A>>
where
    S: EventStore<A>,
{
    store.event(event_id).ok_or(EventError::UnknownEvent(event_id))
}

/// In-memory event store
#[derive(Clone, Debug)]
pub struct EventRegistry<A> {
    last_event_id: EventId,
    events: BTreeMap<EventId, Event<A>>,
    registrations: BTreeMap<EventId, Vec<Registration<A>>>,
    participants: BTreeSet<(EventId, A)>,
    used_tokens: BTreeSet<(EventId, TokenId)>,
}

impl<A> Default for EventRegistry<A> {
    fn default() -> Self {
        Self {
            last_event_id: 0,
            events: BTreeMap::new(),
            registrations: BTreeMap::new(),
            participants: BTreeSet::new(),
            used_tokens: BTreeSet::new(),
        }
    }
}

impl<A: Account> EventRegistry<A> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A: Account> EventStore<A> for EventRegistry<A> {
    fn last_event_id(&self) -> EventId {
        self.last_event_id
    }

    fn set_last_event_id(&mut self, event_id: EventId) {
        self.last_event_id = event_id;
    }

    fn event(&self, event_id: EventId) -> Option<Event<A>> {
        self.events.get(&event_id).cloned()
    }

    fn insert_event(&mut self, event_id: EventId, event: Event<A>) {
        self.events.insert(event_id, event);
    }

    fn is_participant(&self, event_id: EventId, account: &A) -> bool {
        self.participants.contains(&(event_id, account.clone()))
    }

    fn is_token_used(&self, event_id: EventId, token_id: TokenId) -> bool {
        self.used_tokens.contains(&(event_id, token_id))
    }

    fn insert_registration(&mut self, registration: Registration<A>) {
        let event_id = registration.event_id;
        self.participants
            .insert((event_id, registration.participant.clone()));
        self.used_tokens.insert((event_id, registration.token_id));
        debug!(event_id, token_id = registration.token_id, "registration stored");
        self.registrations
            .entry(event_id)
            .or_default()
            .push(registration);
    }

    fn registration_count(&self, event_id: EventId) -> u64 {
        self.registrations
            .get(&event_id)
            .map_or(0, |list| list.len() as u64)
    }

    fn registrations(&self, event_id: EventId, from_index: u64, limit: u64) -> Vec<Registration<A>> {
        self.registrations
            .get(&event_id)
            .map(|list| {
                list.iter()
                    .skip(usize::try_from(from_index).unwrap_or(usize::MAX))
                    .take(usize::try_from(limit).unwrap_or(usize::MAX))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
