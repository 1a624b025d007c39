use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A future that stays pending for a fixed number of polls, then yields its
/// output.
///
/// Self-wakes on every pending poll, alternating between waking a clone and
/// waking by reference to exercise both waker paths. Handy for pinning down
/// completion order without timers: the slot with the smallest poll count
/// settles first.
pub struct PendingN<T> {
    remaining: usize,
    output: Option<T>,
}

impl<T> PendingN<T> {
    pub fn new(polls: usize, output: T) -> Self {
        Self {
            remaining: polls,
            output: Some(output),
        }
    }
}

// Holds no pinned data.
impl<T> Unpin for PendingN<T> {}

impl<T> Future for PendingN<T> {
    type Output = T;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        if self.remaining == 0 {
            return Poll::Ready(
                self.output
                    .take()
                    .expect("PendingN polled after completion"),
            );
        }
        self.remaining -= 1;
        if self.remaining & 1 == 0 {
            cx.waker().wake_by_ref();
        } else {
            cx.waker().clone().wake();
        }
        Poll::Pending
    }
}
