//! Application composition root.
//!
//! Owns the terminal, the tokio runtime, the API client, and the active
//! screen, and routes the actions screens return from event handling. This
//! is the only place that knows there are exactly two destinations: the
//! entry (Home) screen and the detail (User) screen.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tracing::info;

use crate::api::UserApiClient;
use crate::cli::Cli;
use crate::screens::{HomeScreen, Screen, ScreenAction, ScreenContext, UserDetailScreen};
use crate::state::UserSession;
use crate::tui::Tui;

/// The currently mounted screen.
///
/// Navigation replaces this value wholesale, so screen state never
/// outlives the screen it belongs to.
enum ActiveScreen {
    Home(HomeScreen),
    UserDetail(UserDetailScreen),
}

/// Main application state
pub struct App {
    tui: Tui,
    runtime: Runtime,
    client: UserApiClient,
    batch_size: u64,
    screen: ActiveScreen,
    should_quit: bool,
}

impl App {
    pub fn new(cli: &Cli) -> Result<Self> {
        let tui = Tui::new()?;
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let client = UserApiClient::new(cli.endpoint.clone());

        Ok(Self {
            tui,
            runtime,
            client,
            batch_size: cli.size,
            screen: ActiveScreen::Home(HomeScreen::new()),
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        // Mount the entry screen, which triggers the first fetch
        let ctx = ScreenContext {
            runtime: &self.runtime,
            client: &self.client,
            batch_size: self.batch_size,
        };
        if let ActiveScreen::Home(home) = &mut self.screen {
            home.on_enter(&ctx)?;
        }

        // Main event loop
        loop {
            self.tick();
            self.draw()?;

            if self.should_quit {
                break;
            }

            // Poll for events with 250ms timeout; the timeout is the tick
            if let Some(event) = self.tui.poll_event(Duration::from_millis(250))? {
                let ctx = ScreenContext {
                    runtime: &self.runtime,
                    client: &self.client,
                    batch_size: self.batch_size,
                };
                let action = match &mut self.screen {
                    ActiveScreen::Home(home) => home.handle_event(event, &ctx)?,
                    ActiveScreen::UserDetail(detail) => detail.handle_event(event, &ctx)?,
                };
                self.apply_action(action)?;
            }
        }

        self.tui.exit()?;
        Ok(())
    }

    /// Advance animations and poll background work.
    fn tick(&mut self) {
        let session = match &mut self.screen {
            ActiveScreen::Home(home) => home.tick(),
            ActiveScreen::UserDetail(_) => None,
        };
        // The fetch came back with records; open the pager at index 0
        if let Some(session) = session {
            if let Err(e) = self.apply_action(ScreenAction::OpenPager(session)) {
                tracing::error!("Failed to open user screen: {}", e);
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let screen = &mut self.screen;
        self.tui.terminal_mut().draw(|frame| {
            let area = frame.area();
            let result = match screen {
                ActiveScreen::Home(home) => home.render(frame, area),
                ActiveScreen::UserDetail(detail) => detail.render(frame, area),
            };
            if let Err(e) = result {
                tracing::error!("Render error: {}", e);
            }
        })?;
        Ok(())
    }

    fn apply_action(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => {}
            ScreenAction::GoHome => self.go_home()?,
            ScreenAction::OpenPager(session) => self.open_pager(session)?,
            ScreenAction::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
        Ok(())
    }

    /// Re-enter the entry screen, discarding the session and refetching.
    fn go_home(&mut self) -> Result<()> {
        let mut home = HomeScreen::new();
        let ctx = ScreenContext {
            runtime: &self.runtime,
            client: &self.client,
            batch_size: self.batch_size,
        };
        home.on_enter(&ctx)?;
        self.screen = ActiveScreen::Home(home);
        Ok(())
    }

    /// Open the detail screen over the given session.
    fn open_pager(&mut self, session: UserSession) -> Result<()> {
        let mut detail = UserDetailScreen::new(session);
        let ctx = ScreenContext {
            runtime: &self.runtime,
            client: &self.client,
            batch_size: self.batch_size,
        };
        detail.on_enter(&ctx)?;
        self.screen = ActiveScreen::UserDetail(detail);
        Ok(())
    }
}
