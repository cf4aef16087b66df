//! Proptest strategies for event-core property tests

use proptest::prelude::*;

/// Strategy: Generate NEAR-style account names
pub fn arb_account() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9\\-]{2,24}\\.near").unwrap()
}

/// Strategy: Generate event names (including empty and unicode)
pub fn arb_event_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Test Event".to_string()),
        Just(String::new()),
        "\\PC{0,64}",
    ]
}

/// Strategy: Generate (start, end) with start < end
pub fn arb_valid_window() -> impl Strategy<Value = (u64, u64)> {
    (0u64..u64::MAX - 1).prop_flat_map(|start| (Just(start), (start + 1)..=u64::MAX))
}

/// Strategy: Generate (start, end) with start >= end
pub fn arb_invalid_window() -> impl Strategy<Value = (u64, u64)> {
    any::<u64>().prop_flat_map(|start| (Just(start), 0..=start))
}
