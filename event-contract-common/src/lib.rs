//! Helpers shared by the event contracts: error reporting, ownership,
//! storage charging and NEP-297 event logs.

use event_core::EventResult;
use near_sdk::env;

mod events;
mod owner;
mod storage;

pub use events::log_event;
pub use owner::Owned;
pub use storage::{refund, StorageCharge};

/// Abort the call with the error's message as the failure reason
pub trait OrPanic<T> {
    fn or_panic(self) -> T;
}

impl<T> OrPanic<T> for EventResult<T> {
    fn or_panic(self) -> T {
        self.unwrap_or_else(|err| env::panic_str(&err.to_string()))
    }
}
