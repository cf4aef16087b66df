use near_sdk::log;
use near_sdk::serde::Serialize;
use near_sdk::serde_json::json;

/// Log a NEP-297 event: `EVENT_JSON:{"standard", "version", "event", "data": [data]}`
pub fn log_event<T: Serialize>(standard: &str, version: &str, event: &str, data: T) {
    let event = json!({
        "standard": standard,
        "version": version,
        "event": event,
        "data": [data]
    });

    log!("EVENT_JSON:{}", event.to_string());
}
