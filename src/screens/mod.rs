//! Screen controllers for the two-screen flow.
//!
//! Screens own their state and return a [`ScreenAction`] from event
//! handling instead of mutating app state directly; the app applies the
//! action (navigation, quit) after the screen is done with the event.

mod home;
mod user_detail;

pub use home::{FetchState, HomeScreen, FETCH_FAILED_MESSAGE};
pub use user_detail::{UserDetailScreen, NO_DATA_MESSAGE};

use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use tokio::runtime::Runtime;

use crate::api::UserApiClient;
use crate::state::UserSession;

/// Context provided to screens for event handling.
///
/// Gives read access to the shared resources a screen needs to start
/// background work (the runtime and the API client).
pub struct ScreenContext<'a> {
    pub runtime: &'a Runtime,
    pub client: &'a UserApiClient,
    pub batch_size: u64,
}

/// Actions a screen can return after handling an event.
#[derive(Debug)]
pub enum ScreenAction {
    /// No action needed, stay on the current screen.
    None,
    /// Return to the entry screen, discarding the session and refetching.
    GoHome,
    /// Open the user detail screen with a freshly fetched batch.
    OpenPager(UserSession),
    /// Request to quit the application.
    Quit,
}

/// Trait for screen controllers.
pub trait Screen {
    /// Render the screen.
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;

    /// Handle an input event and return the resulting action.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Called when the screen is entered (navigated to).
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
