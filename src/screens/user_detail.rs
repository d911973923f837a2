//! Detail screen: render one record at a time with bounded step navigation.
//!
//! Owns the session for the current batch. Left/Right (or p/n) move the
//! index within bounds; disabled directions are rendered muted. An empty
//! session renders the NoData dialog with a Go Back affordance instead.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tracing::info;

use crate::api::{display_or_default, UserRecord};
use crate::screens::{Screen, ScreenAction, ScreenContext};
use crate::state::UserSession;
use crate::styles::theme;
use crate::widgets::{Dialog, DialogVariant};

/// Shown when the screen is entered without any records to display.
pub const NO_DATA_MESSAGE: &str = "Oops! No user data available.";

/// Detail screen controller.
pub struct UserDetailScreen {
    session: UserSession,
}

impl UserDetailScreen {
    pub fn new(session: UserSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &UserSession {
        &self.session
    }

    fn field_line<'a>(label: &'a str, value: String) -> Line<'a> {
        let t = theme();
        Line::from(vec![
            Span::styled(format!("{label:>12}  "), t.muted_style()),
            Span::styled(value, t.text_style()),
        ])
    }

    fn nav_footer(&self) -> Line<'static> {
        let t = theme();
        let prev_style = if self.session.has_previous() {
            t.emphasis_style()
        } else {
            t.disabled_style()
        };
        let next_style = if self.session.has_next() {
            t.emphasis_style()
        } else {
            t.disabled_style()
        };

        Line::from(vec![
            Span::styled("← Previous", prev_style),
            Span::styled("   ", t.text_style()),
            Span::styled("Next →", next_style),
            Span::styled("      Esc: Home   q: Quit", t.muted_style()),
        ])
    }

    fn render_record(&self, frame: &mut Frame, area: Rect, record: &UserRecord) {
        let t = theme();

        // Default header chrome: a titled border around the whole screen
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style())
            .title(Line::styled(" User ", t.title_style()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [position_area, _, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .areas(inner);

        let position = format!(
            "User {} of {}",
            self.session.index() + 1,
            self.session.len()
        );
        frame.render_widget(
            Paragraph::new(Line::styled(position, t.title_style())).alignment(Alignment::Center),
            position_area,
        );

        // Avatar is a remote image; the terminal gets the URI as a link
        // line and resolving it is not this screen's concern.
        let avatar = Self::field_line("Avatar:", display_or_default(record.avatar.as_deref()));

        let lines = vec![
            avatar,
            Line::raw(""),
            Self::field_line("ID:", record.id_display()),
            Self::field_line("First Name:", display_or_default(record.first_name.as_deref())),
            Self::field_line("Last Name:", display_or_default(record.last_name.as_deref())),
            Self::field_line("Username:", display_or_default(record.username.as_deref())),
            Self::field_line("Email:", display_or_default(record.email.as_deref())),
            Self::field_line("Password:", display_or_default(record.password.as_deref())),
        ];
        frame.render_widget(Paragraph::new(lines), body_area);

        frame.render_widget(
            Paragraph::new(self.nav_footer()).alignment(Alignment::Center),
            footer_area,
        );
    }
}

impl Screen for UserDetailScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.session.current() {
            Some(record) => self.render_record(frame, area, record),
            None => {
                // Defensive guard for an empty or out-of-range session
                let dialog = Dialog::new("No Data", NO_DATA_MESSAGE)
                    .variant(DialogVariant::Error)
                    .footer("g: Go Back   q: Quit");
                frame.render_widget(dialog, area);
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event, _ctx: &ScreenContext) -> Result<ScreenAction> {
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
            KeyCode::Char('q') => Ok(ScreenAction::Quit),
            KeyCode::Esc | KeyCode::Char('g') => Ok(ScreenAction::GoHome),
            KeyCode::Right | KeyCode::Char('n') => {
                if self.session.step_forward() {
                    info!(
                        "Displaying user {} of {}",
                        self.session.index() + 1,
                        self.session.len()
                    );
                }
                Ok(ScreenAction::None)
            }
            KeyCode::Left | KeyCode::Char('p') => {
                if self.session.step_backward() {
                    info!(
                        "Displaying user {} of {}",
                        self.session.index() + 1,
                        self.session.len()
                    );
                }
                Ok(ScreenAction::None)
            }
            _ => Ok(ScreenAction::None),
        }
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        if self.session.is_empty() {
            tracing::warn!("User data is missing, showing error message.");
        } else {
            info!(
                "Displaying user {} of {}",
                self.session.index() + 1,
                self.session.len()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UserApiClient;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tokio::runtime::Runtime;

    fn press(screen: &mut UserDetailScreen, code: KeyCode) -> ScreenAction {
        let runtime = Runtime::new().unwrap();
        let client = UserApiClient::new("http://127.0.0.1:1/users");
        let ctx = ScreenContext {
            runtime: &runtime,
            client: &client,
            batch_size: 3,
        };
        screen
            .handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), &ctx)
            .unwrap()
    }

    fn screen_of(n: usize) -> UserDetailScreen {
        UserDetailScreen::new(UserSession::new(vec![UserRecord::default(); n]))
    }

    #[test]
    fn arrow_keys_step_within_bounds() {
        let mut screen = screen_of(3);

        assert!(matches!(press(&mut screen, KeyCode::Right), ScreenAction::None));
        assert_eq!(screen.session().index(), 1);

        assert!(matches!(press(&mut screen, KeyCode::Left), ScreenAction::None));
        assert_eq!(screen.session().index(), 0);

        // Backward at the first record is a no-op
        press(&mut screen, KeyCode::Left);
        assert_eq!(screen.session().index(), 0);
    }

    #[test]
    fn forward_is_a_noop_at_the_last_record() {
        let mut screen = screen_of(2);
        press(&mut screen, KeyCode::Right);
        assert_eq!(screen.session().index(), 1);

        press(&mut screen, KeyCode::Right);
        assert_eq!(screen.session().index(), 1);
    }

    #[test]
    fn go_back_returns_to_the_entry_screen() {
        let mut screen = screen_of(0);
        assert!(screen.session().is_empty());
        assert!(matches!(press(&mut screen, KeyCode::Char('g')), ScreenAction::GoHome));

        let mut viewing = screen_of(2);
        assert!(matches!(press(&mut viewing, KeyCode::Esc), ScreenAction::GoHome));
    }

    #[test]
    fn quit_key_requests_quit() {
        let mut screen = screen_of(2);
        assert!(matches!(press(&mut screen, KeyCode::Char('q')), ScreenAction::Quit));
    }
}
