//! Monotonic fetch sequencing for re-derived collections.
//!
//! DESIGN
//! ======
//! Pages re-request their collection on every filter edit without cancelling
//! the previous request, so responses can arrive out of order. Each fetch takes
//! a ticket; only the newest ticket may apply its outcome.

#[cfg(test)]
#[path = "fetch_seq_test.rs"]
mod fetch_seq_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchSeq {
    latest: u64,
}

impl FetchSeq {
    /// Issue the next ticket, superseding every earlier one.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether `seq` is the newest issued ticket.
    #[must_use]
    pub fn is_current(&self, seq: u64) -> bool {
        seq != 0 && seq == self.latest
    }
}

/// Whether `ticket` may still apply its outcome once its request resolves.
///
/// False when a newer ticket exists or when the owning page has been
/// disposed while the request was in flight.
#[must_use]
pub fn still_current(seq: RwSignal<FetchSeq>, ticket: u64) -> bool {
    seq.try_with_untracked(|s| s.is_current(ticket)) == Some(true)
}
