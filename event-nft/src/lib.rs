use event_contract_common::{OrPanic, Owned, StorageCharge};
use event_core::{ledger, TokenId, TokenStore};
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::collections::LookupMap;
use near_sdk::serde::Serialize;
use near_sdk::{env, log, near, near_bindgen, AccountId, BorshStorageKey, PanicOnDefault};

mod admin;
mod events;
mod views;

pub const NFT_METADATA_SPEC: &str = "nft-1.0.0";
pub const NFT_NAME: &str = "EventNft";
pub const NFT_SYMBOL: &str = "ENFT";

#[derive(BorshSerialize, BorshStorageKey)]
#[borsh(crate = "near_sdk::borsh")]
enum StorageKey {
    TokenOwners,
    Balances,
}

/// Collection metadata returned by `nft_metadata`
#[derive(Clone, Debug, PartialEq)]
#[near(serializers = [json])]
pub struct NftContractMetadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
}

#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
#[borsh(crate = "near_sdk::borsh")]
#[near_bindgen(contract_state)]
pub struct Contract {
    owner_id: AccountId,
    token_owners: LookupMap<TokenId, AccountId>,
    balances: LookupMap<AccountId, u64>,
    total_supply: u64,
}

#[near_bindgen]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId) -> Self {
        Self {
            owner_id,
            token_owners: LookupMap::new(StorageKey::TokenOwners),
            balances: LookupMap::new(StorageKey::Balances),
            total_supply: 0,
        }
    }

    /// Mint `token_id` to `receiver_id`. The caller pays for the new
    /// storage; unused deposit is refunded.
    #[payable]
    pub fn mint(&mut self, receiver_id: AccountId, token_id: TokenId) {
        let charge = StorageCharge::start();
        ledger::mint(self, &mut events::Nep171Log, receiver_id.clone(), token_id).or_panic();
        charge.settle(&env::predecessor_account_id(), env::attached_deposit());

        log!("Minted token {} to {}", token_id, receiver_id);
    }

    /// Transfer a token owned by the caller to `receiver_id`. A receiver
    /// without tokens adds a balance entry, paid from the deposit.
    #[payable]
    pub fn transfer(&mut self, receiver_id: AccountId, token_id: TokenId) {
        let caller = env::predecessor_account_id();
        let charge = StorageCharge::start();
        ledger::transfer(
            self,
            &mut events::Nep171Log,
            &caller,
            token_id,
            receiver_id.clone(),
        )
        .or_panic();
        charge.settle(&caller, env::attached_deposit());

        log!("Token {} transferred from {} to {}", token_id, caller, receiver_id);
    }
}

impl TokenStore<AccountId> for Contract {
    fn owner(&self, token_id: TokenId) -> Option<AccountId> {
        self.token_owners.get(&token_id)
    }

    fn set_owner(&mut self, token_id: TokenId, owner: &AccountId) {
        self.token_owners.insert(&token_id, owner);
    }

    fn balance(&self, account: &AccountId) -> u64 {
        self.balances.get(account).unwrap_or(0)
    }

    fn set_balance(&mut self, account: &AccountId, balance: u64) {
        if balance == 0 {
            self.balances.remove(account);
        } else {
            self.balances.insert(account, &balance);
        }
    }

    fn total_supply(&self) -> u64 {
        self.total_supply
    }

    fn set_total_supply(&mut self, supply: u64) {
        self.total_supply = supply;
    }
}

#[cfg(test)]
mod tests;
