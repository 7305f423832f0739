use smallvec::SmallVec;

use crate::{error::Error, queue::WaitQ, units::Liters};

// Waiters granted by a single put, in FIFO order
pub(crate) type Granted<T> = SmallVec<[T; 2]>;

/// A bounded continuous quantity supporting blocking withdrawal and
/// immediate deposit.
///
/// Withdrawals are all-or-nothing: a `get` either takes the full amount or
/// waits until a deposit makes the full amount available. Queued requests are
/// served in strict FIFO order, so a later, smaller request waits behind an
/// earlier one that cannot yet be satisfied.
#[derive(Debug)]
pub(crate) struct Container<T> {
    capacity: Liters,
    level: Liters,
    waiters: WaitQ<(Liters, T)>,
}

impl<T> Container<T> {
    pub(crate) fn new(capacity: Liters, level: Liters) -> Self {
        assert!(capacity > Liters::ZERO);
        assert!(level <= capacity);
        Self {
            capacity,
            level,
            waiters: WaitQ::new(),
        }
    }

    pub(crate) fn level(&self) -> Liters {
        self.level
    }

    pub(crate) fn capacity(&self) -> Liters {
        self.capacity
    }

    /// Withdraws `amount` if it is available and nobody else is queued;
    /// otherwise the waiter joins the queue. An amount above the container's
    /// capacity can never be satisfied and fails up front.
    pub(crate) fn get(&mut self, amount: Liters, waiter: T) -> Result<Option<T>, Error> {
        if amount > self.capacity {
            return Err(Error::InvalidAmount {
                requested: amount,
                capacity: self.capacity,
            });
        }
        if amount <= self.level && self.waiters.is_empty() {
            self.level -= amount;
            Ok(Some(waiter))
        } else {
            self.waiters.enqueue((amount, waiter));
            Ok(None)
        }
    }

    /// Deposits `amount`, then drains the wait queue in FIFO order until the
    /// head request can no longer be fully satisfied. The drain runs to a
    /// fixed point: one deposit may resume several waiters.
    pub(crate) fn put(&mut self, amount: Liters) -> Result<Granted<T>, Error> {
        if self.level + amount > self.capacity {
            return Err(Error::Overfill {
                amount,
                level: self.level,
                capacity: self.capacity,
            });
        }
        self.level += amount;
        let mut granted = Granted::new();
        while let Some(&(head, _)) = self.waiters.peek() {
            if head > self.level {
                break;
            }
            let (head, waiter) = self.waiters.dequeue().expect("peeked waiter");
            self.level -= head;
            granted.push(waiter);
        }
        Ok(granted)
    }

    /// Detaches a queued request without granting it.
    #[allow(unused)]
    pub(crate) fn cancel(&mut self, mut pred: impl FnMut(&T) -> bool) -> Option<T> {
        self.waiters
            .remove_where(|(_, waiter)| pred(waiter))
            .map(|(_, waiter)| waiter)
    }
}
