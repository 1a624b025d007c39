use std::future::Future;
use std::mem;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

/// The state of a single operation inside a join.
///
/// `Pending` still holds the operation's future. A fulfilled value is stored
/// in place at its slot; a rejection is handed to the caller immediately and
/// the slot becomes `Taken`.
pub(crate) enum Settlement<F, T> {
    Pending(F),
    Fulfilled(T),
    Taken,
}

impl<F, T> Settlement<F, T> {
    #[inline]
    pub(crate) fn is_pending(&self) -> bool {
        matches!(*self, Self::Pending(_))
    }

    /// Move a fulfilled value out, leaving the slot `Taken`.
    ///
    /// Does not disturb any pinned future: both variants touched here are
    /// plain values.
    pub(crate) fn take_value(&mut self) -> Option<T> {
        match *self {
            Self::Fulfilled(_) => match mem::replace(self, Self::Taken) {
                Self::Fulfilled(value) => Some(value),
                _ => unreachable!(),
            },
            _ => None,
        }
    }
}

impl<F, T, E> Settlement<F, T>
where
    F: Future<Output = Result<T, E>>,
{
    /// Drive the operation one step.
    ///
    /// `Ready(Ok(()))` means the slot now holds a fulfilled value;
    /// `Ready(Err(_))` surfaces the rejection and empties the slot.
    pub(crate) fn poll_settle(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Result<(), E>> {
        unsafe {
            match *self.as_mut().get_unchecked_mut() {
                Self::Pending(ref mut future) => {
                    match ready!(Pin::new_unchecked(future).poll(cx)) {
                        Ok(value) => {
                            self.set(Self::Fulfilled(value));
                            Poll::Ready(Ok(()))
                        }
                        Err(error) => {
                            self.set(Self::Taken);
                            Poll::Ready(Err(error))
                        }
                    }
                }
                Self::Fulfilled(_) => Poll::Ready(Ok(())),
                Self::Taken => unreachable!("settlement polled after it was consumed"),
            }
        }
    }
}
