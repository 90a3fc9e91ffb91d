//! Console stand-in for a real telemetry sink. Every interactive behavior on
//! the page reports through these two functions; neither can fail.

use serde::Serialize;

/// Log an analytics event with no payload.
pub fn track(event: &str) {
    gloo_console::log!(format!("Analytics: {event}"));
}

/// Log an analytics event with a payload. A payload that cannot be
/// serialized is dropped rather than surfaced as an error.
pub fn track_with<T: Serialize>(event: &str, data: &T) {
    gloo_console::log!(format_event(event, data));
}

fn format_event<T: Serialize>(event: &str, data: &T) -> String {
    match serde_json::to_string(data) {
        Ok(payload) => format!("Analytics: {event} {payload}"),
        Err(_) => format!("Analytics: {event}"),
    }
}

#[cfg(test)]
mod tests {
    use super::format_event;
    use serde::ser::Error;
    use serde::{Serialize, Serializer};
    use serde_json::json;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("always fails"))
        }
    }

    #[test]
    fn payloads_are_shaped_as_json() {
        assert_eq!(
            format_event("cta_choice_click", &json!({ "type": "personal" })),
            r#"Analytics: cta_choice_click {"type":"personal"}"#
        );
    }

    #[test]
    fn unserializable_payloads_are_dropped() {
        assert_eq!(
            format_event("faq_open", &Unserializable),
            "Analytics: faq_open"
        );
    }
}
