use thiserror::Error;

/// The outcome of a join: every value in input order, or the first observed
/// failure.
pub type JoinResult<T, E> = Result<Vec<T>, JoinError<E>>;

/// The first rejection observed by a failed join, attributed to the operation
/// that raised it.
///
/// The underlying error passes through unmodified; the join never retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operation {index} failed: {error}")]
pub struct JoinError<E> {
    index: usize,
    error: E,
}

impl<E> JoinError<E> {
    pub(crate) fn new(index: usize, error: E) -> Self {
        Self { index, error }
    }

    /// Input index of the operation that failed.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Recover the underlying operation error.
    #[inline]
    pub fn into_error(self) -> E {
        self.error
    }
}
