use crate::*;

#[near_bindgen]
impl Contract {
    /// Register the caller for `event_id` with `token_id` as entry pass.
    ///
    /// Ownership lives on the event's NFT contract, so the owner is fetched
    /// with a cross-contract call and the registration is completed in
    /// `on_token_owner`. The attached deposit pays for the registration
    /// record; the unused part, or all of it on failure, is refunded.
    #[payable]
    pub fn register_for_event(&mut self, event_id: EventId, token_id: TokenId) -> Promise {
        let deposit = env::attached_deposit();
        assert!(
            !deposit.is_zero(),
            "Attach a deposit to cover registration storage"
        );

        let ctx = call_context();
        let policy = self.policy;
        let event = validator::check_registration_open(&*self, &policy, &ctx, event_id).or_panic();

        log!(
            "Resolving owner of token {} on {} for event {}",
            token_id,
            event.nft_contract,
            event_id
        );

        ext_event_nft::ext(event.nft_contract)
            .with_static_gas(GAS_FOR_OWNER_OF)
            .owner_of(token_id)
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(GAS_FOR_ON_TOKEN_OWNER)
                    .on_token_owner(event_id, ctx.caller.clone(), token_id, deposit),
            )
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(GAS_FOR_ON_REGISTRATION_SETTLED)
                    .on_registration_settled(ctx.caller, deposit),
            )
    }

    /// Completes `register_for_event` once the token owner is known.
    /// Every check runs again since state may have changed in between.
    #[private]
    pub fn on_token_owner(
        &mut self,
        event_id: EventId,
        participant: AccountId,
        token_id: TokenId,
        deposit: NearToken,
        #[callback_result] owner: Result<AccountId, PromiseError>,
    ) -> Registration<AccountId> {
        if owner.is_err() {
            log!("owner_of({}) failed on the NFT contract", token_id);
        }

        let resolved = ResolvedOwner {
            token_id,
            owner: owner.ok(),
        };
        let ctx = CallContext::new(participant, now_seconds());
        let policy = self.policy;
        let charge = StorageCharge::start();

        let registration = validator::register_for_event(
            self,
            &resolved,
            &mut events::RegistrationLog,
            &policy,
            &ctx,
            event_id,
            token_id,
        )
        .or_panic();
        charge.settle(&ctx.caller, deposit);

        log!(
            "{} registered for event {} with token {}",
            registration.participant,
            event_id,
            token_id
        );
        registration
    }

    /// Last step of `register_for_event`. A failed `on_token_owner` reverted
    /// its own refund, so the whole deposit goes back to the participant.
    #[private]
    pub fn on_registration_settled(
        &mut self,
        participant: AccountId,
        deposit: NearToken,
        #[callback_result] result: Result<Registration<AccountId>, PromiseError>,
    ) -> Option<Registration<AccountId>> {
        match result {
            Ok(registration) => Some(registration),
            Err(_) => {
                log!(
                    "Registration failed, refunding {} yoctoNEAR to {}",
                    deposit.as_yoctonear(),
                    participant
                );
                refund(&participant, deposit);
                None
            }
        }
    }
}
