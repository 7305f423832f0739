use std::collections::VecDeque;

/// FIFO wait queue for suspended requesters.
#[derive(Debug, derive_new::new)]
pub(crate) struct WaitQ<T> {
    #[new(default)]
    inner: VecDeque<T>,
}

impl<T> WaitQ<T> {
    delegate::delegate! {
        to self.inner {
            #[call(push_back)]
            pub(crate) fn enqueue(&mut self, waiter: T);

            #[call(pop_front)]
            pub(crate) fn dequeue(&mut self) -> Option<T>;

            #[call(front)]
            pub(crate) fn peek(&self) -> Option<&T>;

            pub(crate) fn is_empty(&self) -> bool;
        }
    }

    /// Detaches the first waiter matching `pred`, leaving the rest in order.
    pub(crate) fn remove_where(&mut self, pred: impl FnMut(&T) -> bool) -> Option<T> {
        let idx = self.inner.iter().position(pred)?;
        self.inner.remove(idx)
    }
}
