use crate::*;
use near_sdk::test_utils::{accounts, get_logs, VMContextBuilder};
use near_sdk::{testing_env, NearToken};

/// Enough to cover a handful of mints
pub const STORAGE_DEPOSIT: NearToken = NearToken::from_millinear(100);

pub fn get_context(predecessor: AccountId) -> VMContextBuilder {
    let mut builder = VMContextBuilder::new();
    builder
        .current_account_id("nft.test.near".parse().unwrap())
        .predecessor_account_id(predecessor);
    builder
}

/// Deploys the contract owned by `accounts(0)` and mints tokens 1, 2 to
/// `accounts(1)` and token 3 to `accounts(2)`
pub fn setup_contract() -> Contract {
    let mut context = get_context(accounts(0));
    testing_env!(context.attached_deposit(STORAGE_DEPOSIT).build());

    let mut contract = Contract::new(accounts(0));
    contract.mint(accounts(1), 1);
    contract.mint(accounts(1), 2);
    contract.mint(accounts(2), 3);
    contract
}

mod mint_tests {
    use super::*;

    #[test]
    fn test_mint_sets_owner() {
        let contract = setup_contract();

        assert_eq!(contract.owner_of(1), accounts(1));
        assert_eq!(contract.owner_of(3), accounts(2));
        assert_eq!(contract.balance_of(accounts(1)), 2);
        assert_eq!(contract.total_supply(), 3);
    }

    #[test]
    fn test_mint_emits_nep171_event() {
        let mut context = get_context(accounts(0));
        testing_env!(context.attached_deposit(STORAGE_DEPOSIT).build());

        let mut contract = Contract::new(accounts(0));
        contract.mint(accounts(1), 7);

        let logs = get_logs();
        let event_log = logs
            .iter()
            .find(|log| log.starts_with("EVENT_JSON:"))
            .expect("mint should emit an event");
        let event: near_sdk::serde_json::Value =
            near_sdk::serde_json::from_str(event_log.trim_start_matches("EVENT_JSON:")).unwrap();

        assert_eq!(event["standard"], "nep171");
        assert_eq!(event["event"], "nft_mint");
        assert_eq!(event["data"][0]["owner_id"], accounts(1).to_string());
        assert_eq!(event["data"][0]["token_ids"][0], "7");
    }

    #[test]
    #[should_panic(expected = "Token 1 already exists")]
    fn test_mint_duplicate() {
        let mut contract = setup_contract();
        contract.mint(accounts(2), 1);
    }

    #[test]
    #[should_panic(expected = "Token 99 does not exist")]
    fn test_owner_of_unknown_token() {
        let contract = setup_contract();
        contract.owner_of(99);
    }

    #[test]
    #[should_panic(expected = "Insufficient storage deposit")]
    fn test_mint_without_deposit() {
        let mut contract = setup_contract();

        let context = get_context(accounts(3));
        testing_env!(context.build());
        contract.mint(accounts(3), 4);
    }

    #[test]
    fn test_mint_refunds_unused_deposit() {
        let mut contract = setup_contract();

        let mut context = get_context(accounts(3));
        testing_env!(context.attached_deposit(NearToken::from_near(1)).build());
        contract.mint(accounts(3), 4);

        assert_eq!(contract.owner_of(4), accounts(3));
        assert!(get_logs().iter().any(|log| log.starts_with("EVENT_JSON:")));
        assert_eq!(near_sdk::test_utils::get_created_receipts().len(), 1);
    }

    #[test]
    fn test_nft_metadata() {
        let contract = setup_contract();
        let metadata = contract.nft_metadata();

        assert_eq!(metadata.name, "EventNft");
        assert_eq!(metadata.symbol, "ENFT");
    }
}

mod transfer_tests {
    use super::*;

    #[test]
    fn test_transfer_by_owner() {
        let mut contract = setup_contract();

        let context = get_context(accounts(2));
        testing_env!(context.build());
        contract.transfer(accounts(1), 3);

        assert_eq!(contract.owner_of(3), accounts(1));
        assert_eq!(contract.balance_of(accounts(1)), 3);
        assert_eq!(contract.balance_of(accounts(2)), 0);
        assert!(get_logs()
            .iter()
            .any(|log| log.contains("\"event\":\"nft_transfer\"")));
    }

    #[test]
    #[should_panic(expected = "Must own the specified NFT")]
    fn test_transfer_unauthorized() {
        let mut contract = setup_contract();

        // accounts(1) does not own token 3
        let context = get_context(accounts(1));
        testing_env!(context.build());
        contract.transfer(accounts(1), 3);
    }

    #[test]
    #[should_panic(expected = "Insufficient storage deposit")]
    fn test_transfer_to_new_holder_without_deposit() {
        let mut contract = setup_contract();

        // accounts(1) keeps token 2, so accounts(3) adds a balance entry
        let context = get_context(accounts(1));
        testing_env!(context.build());
        contract.transfer(accounts(3), 1);
    }

    #[test]
    fn test_transfer_to_new_holder_with_deposit() {
        let mut contract = setup_contract();

        let mut context = get_context(accounts(1));
        testing_env!(context.attached_deposit(STORAGE_DEPOSIT).build());
        contract.transfer(accounts(3), 1);

        assert_eq!(contract.owner_of(1), accounts(3));
        assert_eq!(contract.balance_of(accounts(3)), 1);
    }

    #[test]
    fn test_transfer_to_self_emits_nothing() {
        let mut contract = setup_contract();

        let context = get_context(accounts(1));
        testing_env!(context.build());
        contract.transfer(accounts(1), 1);

        assert_eq!(contract.owner_of(1), accounts(1));
        assert!(!get_logs().iter().any(|log| log.starts_with("EVENT_JSON:")));
    }
}

mod admin_tests {
    use super::*;

    #[test]
    fn test_initialization() {
        let context = get_context(accounts(0));
        testing_env!(context.build());

        let contract = Contract::new(accounts(0));

        assert_eq!(contract.get_owner(), accounts(0));
        assert_eq!(contract.total_supply(), 0);
    }

    #[test]
    fn test_set_owner() {
        let mut contract = setup_contract();

        let context = get_context(accounts(0));
        testing_env!(context.build());
        contract.set_owner(accounts(3));

        assert_eq!(contract.get_owner(), accounts(3));
    }

    #[test]
    #[should_panic(expected = "Only owner can call this method")]
    fn test_set_owner_unauthorized() {
        let mut contract = setup_contract();

        let context = get_context(accounts(1));
        testing_env!(context.build());
        contract.set_owner(accounts(1));
    }
}
