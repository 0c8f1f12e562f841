//! Record-set transformations.

use std::collections::HashSet;

use tracing::debug;

use crate::{Message, RecordSet};

/// Attributes every message sent by one of `senders` to `new_name`.
///
/// Used to fold aliases of one person (a phone number and a saved contact
/// name, say) into a single participant before aggregating. Matching is exact
/// and case-sensitive. The input is left untouched; other messages are copied
/// over unchanged and order is preserved.
///
/// # Example
/// Input:  `[("Al", "Hi"), ("Bob", "Yo"), ("Alice", "Hey")]`, senders `["Al", "Alice"]`, new name `"Alice"`
/// Output: `[("Alice", "Hi"), ("Bob", "Yo"), ("Alice", "Hey")]`
pub fn combine_senders<S: AsRef<str>>(
    messages: &[Message],
    senders: &[S],
    new_name: &str,
) -> RecordSet {
    let selection: HashSet<&str> = senders.iter().map(AsRef::as_ref).collect();
    let mut renamed = 0usize;

    let combined: RecordSet = messages
        .iter()
        .map(|msg| {
            if selection.contains(msg.sender()) {
                renamed += 1;
                msg.with_sender(new_name)
            } else {
                msg.clone()
            }
        })
        .collect();

    debug!(renamed, into = new_name, "combined senders");
    combined
}
