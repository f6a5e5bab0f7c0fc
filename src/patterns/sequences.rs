// src/patterns/sequences.rs — Sliding-window action sequences (n-grams)

use crate::events::EventRecord;

/// Separator between action names in a canonical sequence string.
pub const SEQUENCE_SEPARATOR: &str = " → ";

/// Action names of the actionable events, in stream order.
pub fn action_stream<'a>(events: &'a [EventRecord], action_field: &str) -> Vec<&'a str> {
    events
        .iter()
        .filter_map(|e| e.action(action_field))
        .collect()
}

/// Every contiguous run of `n` actions, joined into its canonical form.
///
/// Windows overlap (step 1): a stream of length L yields `L - n + 1`
/// sequences, or none when `n > L` or `n == 0`.
pub fn extract_sequences(events: &[EventRecord], action_field: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    action_stream(events, action_field)
        .windows(n)
        .map(|window| window.join(SEQUENCE_SEPARATOR))
        .collect()
}
