use std::future::Future;
use std::pin;
use std::sync::Arc;
use std::task::{Context, Poll, Wake, Waker};
use std::thread::{self, Thread};

/// Unparks the thread that built it.
struct ThreadWaker(Thread);

impl Wake for ThreadWaker {
    fn wake(self: Arc<Self>) {
        self.0.unpark();
    }

    fn wake_by_ref(self: &Arc<Self>) {
        self.0.unpark();
    }
}

/// Drive a future to completion on the calling thread.
///
/// Parks between polls; any waker clone handed to the future unparks us,
/// including wakes arriving from other threads. Spurious unparks just cost
/// one extra poll.
pub fn block_on<F: Future>(future: F) -> F::Output {
    let waker = Waker::from(Arc::new(ThreadWaker(thread::current())));
    let mut cx = Context::from_waker(&waker);
    let mut future = pin::pin!(future);
    loop {
        match future.as_mut().poll(&mut cx) {
            Poll::Pending => thread::park(),
            Poll::Ready(output) => return output,
        }
    }
}
