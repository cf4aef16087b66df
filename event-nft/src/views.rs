use crate::*;

#[near_bindgen]
impl Contract {
    /// Owner of `token_id`. Fails if the token was never minted.
    pub fn owner_of(&self, token_id: TokenId) -> AccountId {
        ledger::owner_of(self, token_id).or_panic()
    }

    pub fn balance_of(&self, account_id: AccountId) -> u64 {
        self.balance(&account_id)
    }

    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    pub fn nft_metadata(&self) -> NftContractMetadata {
        NftContractMetadata {
            spec: NFT_METADATA_SPEC.to_string(),
            name: NFT_NAME.to_string(),
            symbol: NFT_SYMBOL.to_string(),
        }
    }

    pub fn get_owner(&self) -> AccountId {
        self.owner_id.clone()
    }
}
