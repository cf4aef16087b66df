use crate::*;
use event_core::{Notifier, RegistryNotification};
use event_contract_common::log_event;

const EVENT_STANDARD: &str = "event-registration";
const EVENT_STANDARD_VERSION: &str = "1.0.0";

/// Publishes registry notifications as NEP-297 event logs
pub struct RegistrationLog;

impl Notifier<RegistryNotification<AccountId>> for RegistrationLog {
    fn notify(&mut self, notification: RegistryNotification<AccountId>) {
        match notification {
            RegistryNotification::EventCreated {
                event_id,
                owner,
                name,
            } => emit::event_created(event_id, &owner, &name),
            RegistryNotification::ParticipantRegistered {
                event_id,
                participant,
                token_id,
            } => emit::participant_registered(event_id, &participant, token_id),
        }
    }
}

pub mod emit {
    use super::*;
    use near_sdk::env;

    #[derive(Serialize)]
    #[serde(crate = "near_sdk::serde")]
    struct EventCreatedEventData<'a> {
        pub event_id: EventId,
        pub owner: &'a AccountId,
        pub name: &'a str,
        pub timestamp: u64,
    }

    #[derive(Serialize)]
    #[serde(crate = "near_sdk::serde")]
    struct ParticipantRegisteredEventData<'a> {
        pub event_id: EventId,
        pub participant: &'a AccountId,
        pub token_id: TokenId,
    }

    /// Emit event when an event is created
    pub fn event_created(event_id: EventId, owner: &AccountId, name: &str) {
        log_event(
            EVENT_STANDARD,
            EVENT_STANDARD_VERSION,
            "event_created",
            EventCreatedEventData {
                event_id,
                owner,
                name,
                timestamp: env::block_timestamp(),
            },
        );
    }

    /// Emit event when a participant is admitted
    pub fn participant_registered(event_id: EventId, participant: &AccountId, token_id: TokenId) {
        log_event(
            EVENT_STANDARD,
            EVENT_STANDARD_VERSION,
            "participant_registered",
            ParticipantRegisteredEventData {
                event_id,
                participant,
                token_id,
            },
        );
    }
}
