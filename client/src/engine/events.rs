//! Engine callback payloads to typed events.
//!
//! Payloads arrive as JS objects; the player binding copies the fields the
//! overlay cares about into a JSON object first (see [`PAYLOAD_FIELDS`]).

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use overlay::engine::{EngineEvent, EngineEventKind, InteractionEvent, MessageEvent};
use serde_json::Value;

/// Payload fields copied out of engine callbacks. Everything else (player
/// back-references, internal state) is left behind.
pub const PAYLOAD_FIELDS: [&str; 8] =
    ["name", "id", "type", "phrase", "message", "compositionId", "compositionName", "clickInfo"];

/// Scene item `type` of interactive elements.
const INTERACTIVE_ITEM_TYPE: u64 = 4;

/// Build the typed event for a callback of `kind`.
pub fn engine_event(kind: EngineEventKind, payload: Value) -> EngineEvent {
    match kind {
        EngineEventKind::Click => {
            let name = item_name(&payload).to_owned();
            EngineEvent::Interaction(InteractionEvent::from_engine(&name, payload))
        }
        EngineEventKind::Message => EngineEvent::Message(MessageEvent {
            name: item_name(&payload).to_owned(),
            phrase: payload.get("phrase").cloned().unwrap_or(Value::Null),
        }),
        EngineEventKind::Error => EngineEvent::Error(error_message(&payload)),
        EngineEventKind::ItemClicked
        | EngineEventKind::Tap
        | EngineEventKind::Touch
        | EngineEventKind::MouseDown
        | EngineEventKind::MouseUp => EngineEvent::Diagnostic { kind, payload },
    }
}

/// `name` of the item a payload refers to, or `""`.
pub fn item_name(payload: &Value) -> &str {
    payload.get("name").and_then(Value::as_str).unwrap_or_default()
}

/// Human-readable description of an engine error payload.
pub fn error_message(payload: &Value) -> String {
    match payload {
        Value::Null => "unknown engine error".to_owned(),
        Value::String(message) => message.clone(),
        Value::Object(fields) => match fields.get("message").and_then(Value::as_str) {
            Some(message) => message.to_owned(),
            None => payload.to_string(),
        },
        other => other.to_string(),
    }
}

/// Whether a scene item summary describes an interactive element. The
/// engine reports the type as either a number or a numeric string.
pub fn is_interactive_item(item: &Value) -> bool {
    match item.get("type") {
        Some(Value::Number(n)) => n.as_u64() == Some(INTERACTIVE_ITEM_TYPE),
        Some(Value::String(s)) => s.parse::<u64>().is_ok_and(|t| t == INTERACTIVE_ITEM_TYPE),
        _ => false,
    }
}
