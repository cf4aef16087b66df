use crate::*;

#[near_bindgen]
impl Contract {
    /// Get event by ID. Fails if it does not exist.
    pub fn get_event_details(&self, event_id: EventId) -> Event<AccountId> {
        registry::event_details(self, event_id).or_panic()
    }

    /// Number of events created so far (also the latest event ID)
    pub fn get_event_count(&self) -> EventId {
        self.last_event_id
    }

    /// Registrations for an event in arrival order, at most `MAX_PAGE_SIZE` per page
    pub fn get_registrations(
        &self,
        event_id: EventId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<Registration<AccountId>> {
        self.registrations(
            event_id,
            from_index.unwrap_or(0),
            limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE),
        )
    }

    pub fn get_registration_count(&self, event_id: EventId) -> u64 {
        self.registration_count(event_id)
    }

    pub fn is_registered(&self, event_id: EventId, account_id: AccountId) -> bool {
        self.is_participant(event_id, &account_id)
    }

    pub fn get_policy(&self) -> RegistrationPolicy {
        self.policy
    }

    pub fn get_owner(&self) -> AccountId {
        self.owner_id.clone()
    }
}
