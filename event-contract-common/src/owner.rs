use near_sdk::{env, log, AccountId};

/// Contract with a single owner account allowed to run admin methods
pub trait Owned {
    fn owner_id(&self) -> &AccountId;

    /// Store `new_owner_id`, returning the previous owner
    fn replace_owner(&mut self, new_owner_id: AccountId) -> AccountId;

    fn assert_owner(&self) {
        assert_eq!(
            &env::predecessor_account_id(),
            self.owner_id(),
            "Only owner can call this method"
        );
    }

    /// Hand the contract over to `new_owner_id` (only current owner can call)
    fn change_owner(&mut self, new_owner_id: AccountId) {
        self.assert_owner();
        let old_owner = self.replace_owner(new_owner_id.clone());

        log!("Owner changed from {} to {}", old_owner, new_owner_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use near_sdk::test_utils::{accounts, VMContextBuilder};
    use near_sdk::testing_env;

    struct Admin {
        owner_id: AccountId,
    }

    impl Owned for Admin {
        fn owner_id(&self) -> &AccountId {
            &self.owner_id
        }

        fn replace_owner(&mut self, new_owner_id: AccountId) -> AccountId {
            std::mem::replace(&mut self.owner_id, new_owner_id)
        }
    }

    fn as_caller(caller: AccountId) {
        testing_env!(VMContextBuilder::new().predecessor_account_id(caller).build());
    }

    #[test]
    fn test_change_owner() {
        as_caller(accounts(0));
        let mut admin = Admin { owner_id: accounts(0) };

        admin.change_owner(accounts(1));
        assert_eq!(admin.owner_id, accounts(1));

        as_caller(accounts(1));
        admin.assert_owner();
    }

    #[test]
    #[should_panic(expected = "Only owner can call this method")]
    fn test_change_owner_unauthorized() {
        as_caller(accounts(2));
        let mut admin = Admin { owner_id: accounts(0) };
        admin.change_owner(accounts(2));
    }
}
