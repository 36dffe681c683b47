//! Canonical schema constants for structured logging and events
//!
//! These constants keep log output consistent across the comparator
//! services, the canonicalization stage and the conformance harness.

// Canonical field keys lifted out of every operation event
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_MISMATCH: &str = "mismatch";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_EVENT.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        let events = [EVENT_START, EVENT_END, EVENT_END_ERROR, EVENT_MISMATCH];
        for (i, a) in events.iter().enumerate() {
            for b in &events[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_field_keys_are_distinct() {
        assert_ne!(FIELD_COMPONENT, FIELD_OP);
        assert_ne!(FIELD_OP, FIELD_EVENT);
        assert_ne!(FIELD_COMPONENT, FIELD_EVENT);
    }
}
