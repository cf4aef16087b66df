use crate::error::EventResult;
use crate::ledger::{self, TokenLedger, TokenStore};
use crate::notify::{Notification, Subscribers};
use crate::policy::RegistrationPolicy;
use crate::registry::{self, EventRegistry, EventStore};
use crate::types::{Account, CallContext, Event, EventId, Registration, Timestamp, TokenId};
use crate::validator;

/// Token ledger, event registry and validator behind one `&mut` owner, so
/// event ids and registrations are written under exclusive access.
pub struct EventSystem<A> {
    tokens: TokenLedger<A>,
    events: EventRegistry<A>,
    policy: RegistrationPolicy,
    subscribers: Subscribers<A>,
}

impl<A> Default for EventSystem<A> {
    fn default() -> Self {
        Self {
            tokens: TokenLedger::default(),
            events: EventRegistry::default(),
            policy: RegistrationPolicy::default(),
            subscribers: Subscribers::default(),
        }
    }
}

impl<A: Account> EventSystem<A> {
    pub fn new(policy: RegistrationPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn policy(&self) -> &RegistrationPolicy {
        &self.policy
    }

    pub fn set_policy(&mut self, policy: RegistrationPolicy) {
        self.policy = policy;
    }

    /// Observe every notification emitted from now on
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&Notification<A>) + Send + 'static,
    {
        self.subscribers.subscribe(observer);
    }

    pub fn tokens(&self) -> &TokenLedger<A> {
        &self.tokens
    }

    pub fn events(&self) -> &EventRegistry<A> {
        &self.events
    }

    pub fn mint(&mut self, owner: A, token_id: TokenId) -> EventResult<()> {
        ledger::mint(&mut self.tokens, &mut self.subscribers, owner, token_id)
    }

    pub fn owner_of(&self, token_id: TokenId) -> EventResult<A> {
        ledger::owner_of(&self.tokens, token_id)
    }

    pub fn transfer(&mut self, ctx: &CallContext<A>, token_id: TokenId, receiver: A) -> EventResult<A> {
        ledger::transfer(
            &mut self.tokens,
            &mut self.subscribers,
            &ctx.caller,
            token_id,
            receiver,
        )
    }

    pub fn balance_of(&self, account: &A) -> u64 {
        self.tokens.balance(account)
    }

    pub fn total_supply(&self) -> u64 {
        self.tokens.total_supply()
    }

    pub fn create_event(
        &mut self,
        ctx: &CallContext<A>,
        name: &str,
        start_time: Timestamp,
        end_time: Timestamp,
        nft_contract: A,
    ) -> EventResult<EventId> {
        registry::create_event(
            &mut self.events,
            &mut self.subscribers,
            ctx,
            name.to_string(),
            start_time,
            end_time,
            nft_contract,
        )
    }

    pub fn get_event_details(&self, event_id: EventId) -> EventResult<Event<A>> {
        registry::event_details(&self.events, event_id)
    }

    pub fn event_count(&self) -> EventId {
        self.events.last_event_id()
    }

    pub fn register_for_event(
        &mut self,
        ctx: &CallContext<A>,
        event_id: EventId,
        token_id: TokenId,
    ) -> EventResult<Registration<A>> {
        validator::register_for_event(
            &mut self.events,
            &self.tokens,
            &mut self.subscribers,
            &self.policy,
            ctx,
            event_id,
            token_id,
        )
    }

    pub fn registrations(&self, event_id: EventId, from_index: u64, limit: u64) -> Vec<Registration<A>> {
        self.events.registrations(event_id, from_index, limit)
    }

    pub fn is_registered(&self, event_id: EventId, account: &A) -> bool {
        self.events.is_participant(event_id, account)
    }
}
