use smallvec::SmallVec;

use crate::time::Time;

use super::Command;

// Most handlers will not yield very many events
pub(crate) type EventList = SmallVec<[Event; 4]>;

/// A pending wake-up: resume whoever handles `cmd` at `time`. Ordering among
/// events lives in the schedule, which pairs each event with a sequence
/// number at insertion.
#[derive(Debug)]
pub(crate) struct Event {
    time: Time,
    pub(crate) cmd: Command,
}

impl Event {
    pub(crate) fn new(time: Time, cmd: impl Into<Command>) -> Self {
        Self {
            time,
            cmd: cmd.into(),
        }
    }

    pub(crate) fn time(&self) -> Time {
        self.time
    }
}
