#![allow(clippy::non_canonical_partial_ord_impl)]

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::time::Time;

use super::event::Event;

/// The pending-event store. Pop order is strictly (due time, sequence):
/// among events due at the same instant, the one pushed earlier runs first,
/// which makes runs deterministic for a fixed seed.
#[derive(Debug, Default)]
pub(crate) struct Schedule {
    inner: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Schedule {
    pub(crate) fn push(&mut self, ev: Event) {
        let key = Reverse((ev.time(), self.next_seq));
        self.next_seq += 1;
        self.inner.push(Entry { key, ev });
    }

    pub(crate) fn pop(&mut self) -> Option<Event> {
        self.inner.pop().map(|entry| entry.ev)
    }

    /// Due time of the earliest pending event, if any.
    pub(crate) fn next_due(&self) -> Option<Time> {
        self.inner.peek().map(|entry| entry.key.0 .0)
    }
}

#[derive(Debug, derivative::Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    key: Reverse<(Time, u64)>,
    #[derivative(PartialEq = "ignore", PartialOrd = "ignore", Ord = "ignore")]
    ev: Event,
}
