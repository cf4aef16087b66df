

#[cfg(test)]
use crate::*;
#[cfg(test)]
use near_sdk::test_utils::{accounts, get_logs, VMContextBuilder};
#[cfg(test)]
use near_sdk::{testing_env, NearToken};

/// Block time used by the fixture, in seconds
#[cfg(test)]
pub const NOW: u64 = 1_700_000_000;

/// Covers an event record or a registration with room to spare
#[cfg(test)]
pub const STORAGE_DEPOSIT: NearToken = NearToken::from_millinear(100);

#[cfg(test)]
pub fn nft_contract() -> AccountId {
    "nft.test.near".parse().unwrap()
}

#[cfg(test)]
pub fn get_context(predecessor: AccountId, now: u64) -> VMContextBuilder {
    let mut builder = VMContextBuilder::new();
    builder
        .current_account_id("registration.test.near".parse().unwrap())
        .predecessor_account_id(predecessor)
        .block_timestamp(now * 1_000_000_000);
    builder
}

/// Deploys from `accounts(0)` and creates "Test Event" starting an hour from
/// `NOW` and lasting ten hours
#[cfg(test)]
pub fn setup_contract(policy: Option<RegistrationPolicy>) -> Contract {
    let mut context = get_context(accounts(0), NOW);
    testing_env!(context.attached_deposit(STORAGE_DEPOSIT).build());

    let mut contract = Contract::new(accounts(0), policy);
    let start_time = NOW + 3600;
    contract.create_event("Test Event".to_string(), start_time, start_time + 36000, nft_contract());
    contract
}

/// Parsed `EVENT_JSON:` logs of the current context
#[cfg(test)]
pub fn event_logs() -> Vec<near_sdk::serde_json::Value> {
    get_logs()
        .iter()
        .filter_map(|log| log.strip_prefix("EVENT_JSON:"))
        .map(|json| near_sdk::serde_json::from_str(json).unwrap())
        .collect()
}

#[cfg(test)]
mod basic_tests {
    use super::*;

    #[test]
    fn test_initialization() {
        let context = get_context(accounts(0), NOW);
        testing_env!(context.build());

        let contract = Contract::new(accounts(0), None);

        assert_eq!(contract.get_owner(), accounts(0));
        assert_eq!(contract.get_event_count(), 0);
        assert_eq!(contract.get_policy(), RegistrationPolicy::default());
    }

    #[test]
    fn test_initialization_with_policy() {
        let context = get_context(accounts(0), NOW);
        testing_env!(context.build());

        let contract = Contract::new(accounts(0), Some(RegistrationPolicy::strict()));
        assert_eq!(contract.get_policy(), RegistrationPolicy::strict());
    }
}

#[cfg(test)]
mod admin_tests {
    use super::*;

    #[test]
    fn test_set_owner() {
        let mut contract = setup_contract(None);

        let context = get_context(accounts(0), NOW);
        testing_env!(context.build());
        contract.set_owner(accounts(3));

        assert_eq!(contract.get_owner(), accounts(3));
    }

    #[test]
    #[should_panic(expected = "Only owner can call this method")]
    fn test_set_owner_unauthorized() {
        let mut contract = setup_contract(None);

        let context = get_context(accounts(2), NOW);
        testing_env!(context.build());
        contract.set_owner(accounts(2));
    }

    #[test]
    fn test_set_policy() {
        let mut contract = setup_contract(None);

        let context = get_context(accounts(0), NOW);
        testing_env!(context.build());

        let policy = RegistrationPolicy {
            unique_token: true,
            ..Default::default()
        };
        contract.set_policy(policy);

        assert_eq!(contract.get_policy(), policy);
    }

    #[test]
    #[should_panic(expected = "Only owner can call this method")]
    fn test_set_policy_unauthorized() {
        let mut contract = setup_contract(None);

        let context = get_context(accounts(1), NOW);
        testing_env!(context.build());
        contract.set_policy(RegistrationPolicy::strict());
    }
}
