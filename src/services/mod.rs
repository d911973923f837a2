//! Background services for work that must not block the event loop.

mod fetch;

pub use fetch::{FetchHandle, FetchService};
