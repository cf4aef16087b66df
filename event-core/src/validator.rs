//! Registration validator.
//!
//! Stateless: it reads the event from an [`EventStore`], the token owner from
//! an [`OwnershipLookup`], and writes the registration back to the store only
//! after every check passed.

use tracing::{info, warn};

use crate::error::{EventError, EventResult};
use crate::notify::{Notifier, RegistryNotification};
use crate::policy::RegistrationPolicy;
use crate::registry::{event_details, EventStore};
use crate::types::{Account, CallContext, Event, EventId, Registration, TokenId};

/// Source of truth for who owns a token
pub trait OwnershipLookup<A> {
    fn owner_of(&self, token_id: TokenId) -> EventResult<A>;
}

/// Ownership of a single token that was resolved elsewhere, e.g. by a
/// cross-contract call. `owner == None` means the lookup failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedOwner<A> {
    pub token_id: TokenId,
    pub owner: Option<A>,
}

impl<A: Account> OwnershipLookup<A> for ResolvedOwner<A> {
    fn owner_of(&self, token_id: TokenId) -> EventResult<A> {
        match &self.owner {
            Some(owner) if token_id == self.token_id => Ok(owner.clone()),
            _ => Err(EventError::UnknownToken(token_id)),
        }
    }
}

/// Checks that do not depend on token ownership: the event exists, the
/// window is open and the caller is not already registered (per `policy`).
pub fn check_registration_open<A, S>(
    store: &S,
    policy: &RegistrationPolicy,
    ctx: &CallContext<A>,
    event_id: EventId,
) -> EventResult<Event<A>>
where
    A: Account,
    S: EventStore<A>,
{
    let event = event_details(store, event_id)?;

    if policy.enforce_event_window && !event.is_open_at(ctx.now) {
        return Err(EventError::RegistrationClosed {
            event_id,
            now: ctx.now,
        });
    }
    if policy.unique_participant && store.is_participant(event_id, &ctx.caller) {
        return Err(EventError::AlreadyRegistered(event_id));
    }

    Ok(event)
}

/// Register `ctx.caller` for `event_id` using `token_id` as the entry pass
pub fn register_for_event<A, S, O, N>(
    store: &mut S,
    tokens: &O,
    notifier: &mut N,
    policy: &RegistrationPolicy,
    ctx: &CallContext<A>,
    event_id: EventId,
    token_id: TokenId,
) -> EventResult<Registration<A>>
where
    A: Account,
    S: EventStore<A>,
    O: OwnershipLookup<A>,
    N: Notifier<RegistryNotification<A>>,
{
    check_registration_open(store, policy, ctx, event_id)?;

    let owner = tokens.owner_of(token_id)?;
    if owner != ctx.caller {
        warn!(event_id, token_id, caller = %ctx.caller, owner = %owner, "registration with unowned token");
        return Err(EventError::NotTokenOwner { token_id });
    }

    if policy.unique_token && store.is_token_used(event_id, token_id) {
        return Err(EventError::TokenAlreadyUsed { event_id, token_id });
    }

    let registration = Registration {
        event_id,
        participant: ctx.caller.clone(),
        token_id,
        registered_at: ctx.now,
    };
    store.insert_registration(registration.clone());

    info!(event_id, token_id, participant = %ctx.caller, "participant registered");
    notifier.notify(RegistryNotification::ParticipantRegistered {
        event_id,
        participant: ctx.caller.clone(),
        token_id,
    });
    Ok(registration)
}
