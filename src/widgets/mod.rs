//! Reusable widgets shared by the screens.

mod dialog;
mod spinner;

pub use dialog::{Dialog, DialogVariant};
pub use spinner::Spinner;
