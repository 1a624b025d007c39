/// Run a hook when this guard goes out of scope.
///
/// The hook may move its captures, so cancellation tests can hand ownership
/// of a flag or channel into it.
pub struct CallOnDrop<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> CallOnDrop<F> {
    pub fn new(hook: F) -> Self {
        Self(Some(hook))
    }
}

impl<F: FnOnce()> Drop for CallOnDrop<F> {
    fn drop(&mut self) {
        if let Some(hook) = self.0.take() {
            hook();
        }
    }
}
