//! Token ownership store.
//!
//! The rules (`mint`, `transfer`, `owner_of`) are free functions over a
//! [`TokenStore`] so contract storage can reuse them unchanged.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{EventError, EventResult};
use crate::notify::{Notifier, TokenNotification};
use crate::types::{Account, TokenId};
use crate::validator::OwnershipLookup;

/// Raw storage for token owners and per-account balances
pub trait TokenStore<A> {
    fn owner(&self, token_id: TokenId) -> Option<A>;
    fn set_owner(&mut self, token_id: TokenId, owner: &A);

    fn balance(&self, account: &A) -> u64;
    fn set_balance(&mut self, account: &A, balance: u64);

    fn total_supply(&self) -> u64;
    fn set_total_supply(&mut self, supply: u64);
}

/// Create `token_id` owned by `owner`
pub fn mint<A, S, N>(store: &mut S, notifier: &mut N, owner: A, token_id: TokenId) -> EventResult<()>
where
    A: Account,
    S: TokenStore<A>,
    N: Notifier<TokenNotification<A>>,
{
    if store.owner(token_id).is_some() {
        return Err(EventError::DuplicateToken(token_id));
    }

    store.set_owner(token_id, &owner);
    store.set_balance(&owner, store.balance(&owner) + 1);
    store.set_total_supply(store.total_supply() + 1);

    debug!(token_id, owner = %owner, "token minted");
    notifier.notify(TokenNotification::Minted { owner, token_id });
    Ok(())
}

/// Current owner of `token_id`
pub fn owner_of<A, S>(store: &S, token_id: TokenId) -> EventResult<A>
where
    A: Account,
    S: TokenStore<A>,
{
    store.owner(token_id).ok_or(EventError::UnknownToken(token_id))
}

/// Move `token_id` from `caller` to `receiver`. Returns the previous owner.
///
/// Sending a token to its current owner succeeds without a notification.
pub fn transfer<A, S, N>(
    store: &mut S,
    notifier: &mut N,
    caller: &A,
    token_id: TokenId,
    receiver: A,
) -> EventResult<A>
where
    A: Account,
    S: TokenStore<A>,
    N: Notifier<TokenNotification<A>>,
{
    let old_owner = owner_of(store, token_id)?;
    if &old_owner != caller {
        return Err(EventError::NotTokenOwner { token_id });
    }
    if old_owner == receiver {
        return Ok(old_owner);
    }

    store.set_owner(token_id, &receiver);
    store.set_balance(&old_owner, store.balance(&old_owner).saturating_sub(1));
    store.set_balance(&receiver, store.balance(&receiver) + 1);

    debug!(token_id, from = %old_owner, to = %receiver, "token transferred");
    notifier.notify(TokenNotification::Transferred {
        old_owner: old_owner.clone(),
        new_owner: receiver,
        token_id,
    });
    Ok(old_owner)
}

/// In-memory token store
#[derive(Clone, Debug)]
pub struct TokenLedger<A> {
    owners: BTreeMap<TokenId, A>,
    balances: BTreeMap<A, u64>,
    total_supply: u64,
}

impl<A> Default for TokenLedger<A> {
    fn default() -> Self {
        Self {
            owners: BTreeMap::new(),
            balances: BTreeMap::new(),
            total_supply: 0,
        }
    }
}

impl<A: Account> TokenLedger<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token ids held by `account`, ascending
    pub fn tokens_of(&self, account: &A) -> Vec<TokenId> {
        self.owners
            .iter()
            .filter(|(_, owner)| *owner == account)
            .map(|(token_id, _)| *token_id)
            .collect()
    }
}

impl<A: Account> TokenStore<A> for TokenLedger<A> {
    fn owner(&self, token_id: TokenId) -> Option<A> {
        self.owners.get(&token_id).cloned()
    }

    fn set_owner(&mut self, token_id: TokenId, owner: &A) {
        self.owners.insert(token_id, owner.clone());
    }

    fn balance(&self, account: &A) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    fn set_balance(&mut self, account: &A, balance: u64) {
        if balance == 0 {
            self.balances.remove(account);
        } else {
            self.balances.insert(account.clone(), balance);
        }
    }

    fn total_supply(&self) -> u64 {
        self.total_supply
    }

    fn set_total_supply(&mut self, supply: u64) {
        self.total_supply = supply;
    }
}

impl<A: Account> OwnershipLookup<A> for TokenLedger<A> {
    fn owner_of(&self, token_id: TokenId) -> EventResult<A> {
        owner_of(self, token_id)
    }
}
