use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::error::{JoinError, JoinResult};
use crate::settlement::Settlement;

/// Run a set of independent fallible operations concurrently.
///
/// Resolves to `Ok` with one value per operation, in input order regardless
/// of completion order, once every operation fulfills. Fails fast: the first
/// rejection observed resolves the join to `Err` without waiting for the
/// rest, and the still-pending operations are dropped. If several rejections
/// become observable on the same wake, the lowest index wins.
///
/// An empty input resolves to `Ok(vec![])` on the first poll.
///
/// # Examples
///
/// ```
/// use conjoin::{block_on, concurrent_join};
///
/// let joined = concurrent_join((1..=3).map(|i| async move { Ok::<_, &str>(i * 10) }));
/// assert_eq!(block_on(joined), Ok(vec![10, 20, 30]));
/// ```
pub fn concurrent_join<I, F, T, E>(operations: I) -> ConcurrentJoin<F, T>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    ConcurrentJoin {
        slots: operations.into_iter().map(Settlement::Pending).collect(),
        settled: 0,
        completed: false,
    }
}

/// Like [`concurrent_join`], but from deferred producers.
///
/// Each producer is invoked exactly once, here, in input order; the futures
/// it yields then run concurrently. A producer that fails immediately simply
/// yields an already-rejected future, which takes the same path as any other
/// rejection.
pub fn join_producers<I, P, F, T, E>(producers: I) -> ConcurrentJoin<F, T>
where
    I: IntoIterator<Item = P>,
    P: FnOnce() -> F,
    F: Future<Output = Result<T, E>>,
{
    concurrent_join(producers.into_iter().map(|produce| produce()))
}

/// Future returned by [`concurrent_join`] and [`join_producers`].
///
/// Resolves exactly once. Polling it again after it has resolved is a
/// programming error and panics.
pub struct ConcurrentJoin<F, T> {
    slots: Vec<Settlement<F, T>>,
    settled: usize,
    completed: bool,
}

impl<F, T, E> Future for ConcurrentJoin<F, T>
where
    F: Future<Output = Result<T, E>>,
{
    type Output = JoinResult<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        // Moving `self` only moves the Vec header; the slots live on the heap,
        // the Vec never grows after construction, and terminal cleanup drops
        // them in place. So the per-slot pins below stay valid.
        let this = unsafe { self.get_unchecked_mut() };
        assert!(!this.completed, "ConcurrentJoin polled after completion");

        // Index order, so that of several rejections observable on the same
        // wake the lowest index is the one reported.
        for index in 0..this.slots.len() {
            let slot = &mut this.slots[index];
            if !slot.is_pending() {
                continue;
            }
            match unsafe { Pin::new_unchecked(slot) }.poll_settle(cx) {
                Poll::Ready(Ok(())) => this.settled += 1,
                Poll::Ready(Err(error)) => {
                    this.completed = true;
                    // Fail fast: drop the in-flight operations in place.
                    this.slots.clear();
                    return Poll::Ready(Err(JoinError::new(index, error)));
                }
                Poll::Pending => (),
            }
        }

        if this.settled == this.slots.len() {
            this.completed = true;
            let values = this
                .slots
                .iter_mut()
                .map(|slot| slot.take_value().expect("fulfilled slot already taken"))
                .collect();
            this.slots.clear();
            return Poll::Ready(Ok(values));
        }
        Poll::Pending
    }
}

impl<F, T> fmt::Debug for ConcurrentJoin<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentJoin")
            .field("operations", &self.slots.len())
            .field("settled", &self.settled)
            .field("completed", &self.completed)
            .finish()
    }
}
