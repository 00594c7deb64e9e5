//! Debounced product search

mod debouncer;

pub use debouncer::{SearchDebouncer, SearchOutcome};
