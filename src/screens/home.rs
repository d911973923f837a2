//! Entry screen: fetch the user batch and hand off to the pager.
//!
//! The fetch starts exactly once per screen entry (not per redraw) and runs
//! on the tokio runtime while this screen draws the loading indicator. The
//! screen has no header chrome; it is either a centered spinner or a
//! centered error dialog with a retry affordance.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::Frame;
use tracing::{error, info};

use crate::api::UserRecord;
use crate::screens::{Screen, ScreenAction, ScreenContext};
use crate::services::{FetchHandle, FetchService};
use crate::state::UserSession;
use crate::widgets::{Dialog, DialogVariant, Spinner};

/// User-visible message for any fetch failure, regardless of cause.
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to load user data. Please check your internet connection.";

/// Fetch progress as a single tagged value.
///
/// One value, one state: loading, loaded, and failed cannot overlap the
/// way independent boolean/nullable flags can.
#[derive(Debug)]
pub enum FetchState {
    Loading,
    Loaded(Vec<UserRecord>),
    Failed(String),
}

/// Entry screen controller.
pub struct HomeScreen {
    fetch_state: FetchState,
    fetch_handle: Option<FetchHandle>,
    spinner_frame: usize,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            fetch_state: FetchState::Loading,
            fetch_handle: None,
            spinner_frame: 0,
        }
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch_state
    }

    /// Start a fresh fetch, replacing any previous state.
    ///
    /// A handle already in flight is dropped; its eventual result is
    /// simply never observed.
    fn start_fetch(&mut self, ctx: &ScreenContext) {
        info!("Fetching user data...");
        self.fetch_state = FetchState::Loading;
        self.fetch_handle = Some(FetchService::start(
            ctx.runtime,
            ctx.client.clone(),
            ctx.batch_size,
        ));
    }

    /// Advance the spinner and poll the in-flight fetch.
    ///
    /// Called once per event-loop tick. Returns the session to open when
    /// the fetch has completed successfully.
    pub fn tick(&mut self) -> Option<UserSession> {
        self.spinner_frame = (self.spinner_frame + 1) % Spinner::frame_count();

        let handle = self.fetch_handle.as_mut()?;
        match handle.try_recv()? {
            Ok(users) => {
                self.fetch_handle = None;
                self.fetch_state = FetchState::Loaded(users.clone());
                Some(UserSession::new(users))
            }
            Err(err) => {
                self.fetch_handle = None;
                error!("Error fetching users: {}", err);
                self.fetch_state = FetchState::Failed(FETCH_FAILED_MESSAGE.to_string());
                None
            }
        }
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match &self.fetch_state {
            FetchState::Loading | FetchState::Loaded(_) => {
                frame.render_widget(Spinner::new("Loading users...", self.spinner_frame), area);
            }
            FetchState::Failed(message) => {
                let dialog = Dialog::new("Something went wrong", message)
                    .variant(DialogVariant::Error)
                    .footer("r: Retry   q: Quit");
                frame.render_widget(dialog, area);
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(ScreenAction::Quit);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Ok(ScreenAction::Quit),
            KeyCode::Char('r') | KeyCode::Enter
                if matches!(self.fetch_state, FetchState::Failed(_)) =>
            {
                self.start_fetch(ctx);
                Ok(ScreenAction::None)
            }
            _ => Ok(ScreenAction::None),
        }
    }

    fn on_enter(&mut self, ctx: &ScreenContext) -> Result<()> {
        self.start_fetch(ctx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UserApiClient;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tokio::runtime::Runtime;

    fn test_ctx<'a>(runtime: &'a Runtime, client: &'a UserApiClient) -> ScreenContext<'a> {
        ScreenContext {
            runtime,
            client,
            batch_size: 3,
        }
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn entering_the_screen_starts_a_fetch() {
        let runtime = Runtime::new().unwrap();
        let client = UserApiClient::new("http://127.0.0.1:1/users");
        let mut screen = HomeScreen::new();

        screen.on_enter(&test_ctx(&runtime, &client)).unwrap();
        assert!(matches!(screen.fetch_state(), FetchState::Loading));
        assert!(screen.fetch_handle.is_some());
    }

    #[test]
    fn failed_fetch_transitions_to_failed_state() {
        let runtime = Runtime::new().unwrap();
        // Port 1 is never listening, so the transport error arrives fast
        let client = UserApiClient::new("http://127.0.0.1:1/users");
        let mut screen = HomeScreen::new();
        screen.on_enter(&test_ctx(&runtime, &client)).unwrap();

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(10);
        loop {
            let _ = screen.tick();
            match screen.fetch_state() {
                FetchState::Failed(message) => {
                    assert_eq!(message.as_str(), FETCH_FAILED_MESSAGE);
                    break;
                }
                _ if std::time::Instant::now() > deadline => {
                    panic!("fetch against unreachable endpoint never failed")
                }
                _ => std::thread::sleep(std::time::Duration::from_millis(25)),
            }
        }
        assert!(screen.fetch_handle.is_none());
    }

    #[test]
    fn retry_from_failure_reissues_the_fetch() {
        let runtime = Runtime::new().unwrap();
        let client = UserApiClient::new("http://127.0.0.1:1/users");
        let mut screen = HomeScreen::new();
        screen.fetch_state = FetchState::Failed(FETCH_FAILED_MESSAGE.to_string());

        let action = screen
            .handle_event(press(KeyCode::Char('r')), &test_ctx(&runtime, &client))
            .unwrap();

        assert!(matches!(action, ScreenAction::None));
        assert!(matches!(screen.fetch_state(), FetchState::Loading));
        assert!(screen.fetch_handle.is_some());
    }

    #[test]
    fn retry_is_ignored_while_loading() {
        let runtime = Runtime::new().unwrap();
        let client = UserApiClient::new("http://127.0.0.1:1/users");
        let mut screen = HomeScreen::new();

        let action = screen
            .handle_event(press(KeyCode::Char('r')), &test_ctx(&runtime, &client))
            .unwrap();

        assert!(matches!(action, ScreenAction::None));
        assert!(screen.fetch_handle.is_none());
    }

    #[test]
    fn quit_key_requests_quit() {
        let runtime = Runtime::new().unwrap();
        let client = UserApiClient::new("http://127.0.0.1:1/users");
        let mut screen = HomeScreen::new();

        let action = screen
            .handle_event(press(KeyCode::Char('q')), &test_ctx(&runtime, &client))
            .unwrap();
        assert!(matches!(action, ScreenAction::Quit));
    }
}
