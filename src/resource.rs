use crate::queue::WaitQ;

/// A capacity-limited pool of interchangeable slots with FIFO waiters.
///
/// Waiters are opaque to the pool; the caller hands in whatever it needs to
/// resume a suspended requester (here, a scheduler command) and gets it back
/// at grant time.
#[derive(Debug)]
pub(crate) struct Resource<T> {
    capacity: usize,
    held: usize,
    waiters: WaitQ<T>,
}

impl<T> Resource<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        assert!(capacity > 0);
        Self {
            capacity,
            held: 0,
            waiters: WaitQ::new(),
        }
    }

    /// Requests a slot. Returns the waiter back if the request is granted
    /// immediately; otherwise the waiter joins the queue. A newcomer never
    /// overtakes a queued waiter, even when a slot is free.
    #[must_use]
    pub(crate) fn acquire(&mut self, waiter: T) -> Option<T> {
        if self.held < self.capacity && self.waiters.is_empty() {
            self.held += 1;
            Some(waiter)
        } else {
            self.waiters.enqueue(waiter);
            None
        }
    }

    /// Releases a held slot. Always succeeds; if anyone is waiting, the slot
    /// is immediately re-taken for the head waiter, which is returned so the
    /// caller can resume it at the current time.
    pub(crate) fn release(&mut self) -> Option<T> {
        assert!(self.held > 0, "release without a held slot");
        self.held -= 1;
        match self.waiters.dequeue() {
            Some(waiter) => {
                self.held += 1;
                Some(waiter)
            }
            None => None,
        }
    }

    /// Detaches a queued waiter without granting it a slot.
    #[allow(unused)]
    pub(crate) fn cancel(&mut self, pred: impl FnMut(&T) -> bool) -> Option<T> {
        self.waiters.remove_where(pred)
    }

    pub(crate) fn held(&self) -> usize {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grants_immediately_under_capacity() {
        let mut pool = Resource::new(2);
        assert_eq!(pool.acquire(1), Some(1));
        assert_eq!(pool.acquire(2), Some(2));
        assert_eq!(pool.held(), 2);
    }

    #[test]
    fn queues_when_full() {
        let mut pool = Resource::new(1);
        assert_eq!(pool.acquire(1), Some(1));
        assert_eq!(pool.acquire(2), None);
        assert_eq!(pool.held(), 1);
    }

    #[test]
    fn release_regrants_in_fifo_order() {
        let mut pool = Resource::new(2);
        let _ = pool.acquire(1);
        let _ = pool.acquire(2);
        assert_eq!(pool.acquire(3), None);
        assert_eq!(pool.acquire(4), None);
        assert_eq!(pool.release(), Some(3));
        assert_eq!(pool.held(), 2);
        assert_eq!(pool.release(), Some(4));
        assert_eq!(pool.release(), None);
        assert_eq!(pool.held(), 1);
    }

    #[test]
    fn newcomer_waits_behind_queued_waiters() {
        let mut pool = Resource::new(1);
        let _ = pool.acquire(1);
        assert_eq!(pool.acquire(2), None);
        // The slot frees up and is re-taken for waiter 2 in the same call,
        // so waiter 3 still has to queue.
        assert_eq!(pool.release(), Some(2));
        assert_eq!(pool.acquire(3), None);
    }

    #[test]
    fn cancel_detaches_without_granting() {
        let mut pool = Resource::new(1);
        let _ = pool.acquire(1);
        assert_eq!(pool.acquire(2), None);
        assert_eq!(pool.acquire(3), None);
        assert_eq!(pool.cancel(|&w| w == 2), Some(2));
        assert_eq!(pool.release(), Some(3));
    }

    #[test]
    fn held_never_exceeds_capacity() {
        let mut pool = Resource::new(2);
        for waiter in 0..10 {
            let _ = pool.acquire(waiter);
            assert!(pool.held() <= 2);
        }
    }
}
