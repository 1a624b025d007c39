//! Small futures for exercising join behavior in tests.

mod call_on_drop;
pub use call_on_drop::CallOnDrop;

mod pending_n;
pub use pending_n::PendingN;
