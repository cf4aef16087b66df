#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

//! Event Core
//!
//! Chain-agnostic rules for NFT-gated event registration.
//!
//! ## Components
//!
//! 1. **Token ownership** (`ledger`): mint, transfer and resolve token owners
//! 2. **Event registry** (`registry`): create events and look them up
//! 3. **Registration validator** (`validator`): admit a participant only if
//!    they own the token they present
//!
//! Storage is abstracted behind [`TokenStore`] and [`EventStore`] so the same
//! rules run over the in-memory [`TokenLedger`] / [`EventRegistry`] and over
//! contract storage. Every call receives the caller identity and the current
//! time through a [`CallContext`].
//!
//! ## Usage
//!
//! ```
//! use event_core::{CallContext, EventSystem};
//!
//! let mut system = EventSystem::<String>::default();
//! let owner = CallContext::new("owner.near".to_string(), 1_000);
//!
//! let event_id = system
//!     .create_event(&owner, "Test Event", 4_600, 40_600, "nft.near".to_string())
//!     .unwrap();
//! system.mint("alice.near".to_string(), 1).unwrap();
//!
//! let alice = CallContext::new("alice.near".to_string(), 1_000);
//! let registration = system.register_for_event(&alice, event_id, 1).unwrap();
//! assert_eq!(registration.participant, "alice.near");
//! ```

mod error;
pub mod ledger;
mod notify;
mod policy;
pub mod registry;
mod system;
mod types;
pub mod validator;

pub use error::*;
pub use ledger::{TokenLedger, TokenStore};
pub use notify::*;
pub use policy::*;
pub use registry::{EventRegistry, EventStore};
pub use system::*;
pub use types::*;
pub use validator::{OwnershipLookup, ResolvedOwner};
