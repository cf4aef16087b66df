use crate::*;

impl Owned for Contract {
    fn owner_id(&self) -> &AccountId {
        &self.owner_id
    }

    fn replace_owner(&mut self, new_owner_id: AccountId) -> AccountId {
        std::mem::replace(&mut self.owner_id, new_owner_id)
    }
}

#[near_bindgen]
impl Contract {
    /// Set new owner (only current owner can call)
    pub fn set_owner(&mut self, new_owner_id: AccountId) {
        self.change_owner(new_owner_id);
    }
}
