//! Session state threaded through the two-screen flow.

mod session;

pub use session::UserSession;
