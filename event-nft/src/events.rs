use crate::*;
use event_core::{Notifier, TokenNotification};
use event_contract_common::log_event;

const EVENT_STANDARD: &str = "nep171";
const EVENT_STANDARD_VERSION: &str = "1.2.0";

/// Publishes token notifications as NEP-171 event logs
pub struct Nep171Log;

impl Notifier<TokenNotification<AccountId>> for Nep171Log {
    fn notify(&mut self, notification: TokenNotification<AccountId>) {
        match notification {
            TokenNotification::Minted { owner, token_id } => emit::nft_mint(&owner, token_id),
            TokenNotification::Transferred {
                old_owner,
                new_owner,
                token_id,
            } => emit::nft_transfer(&old_owner, &new_owner, token_id),
        }
    }
}

pub mod emit {
    use super::*;

    #[derive(Serialize)]
    #[serde(crate = "near_sdk::serde")]
    struct NftMintEventData<'a> {
        pub owner_id: &'a AccountId,
        pub token_ids: Vec<String>,
    }

    #[derive(Serialize)]
    #[serde(crate = "near_sdk::serde")]
    struct NftTransferEventData<'a> {
        pub old_owner_id: &'a AccountId,
        pub new_owner_id: &'a AccountId,
        pub token_ids: Vec<String>,
    }

    pub fn nft_mint(owner_id: &AccountId, token_id: TokenId) {
        log_event(
            EVENT_STANDARD,
            EVENT_STANDARD_VERSION,
            "nft_mint",
            NftMintEventData {
                owner_id,
                token_ids: vec![token_id.to_string()],
            },
        );
    }

    pub fn nft_transfer(old_owner_id: &AccountId, new_owner_id: &AccountId, token_id: TokenId) {
        log_event(
            EVENT_STANDARD,
            EVENT_STANDARD_VERSION,
            "nft_transfer",
            NftTransferEventData {
                old_owner_id,
                new_owner_id,
                token_ids: vec![token_id.to_string()],
            },
        );
    }
}
