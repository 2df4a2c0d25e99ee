//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use datxb_core::session::{Screen, SessionState};
use datxb_core::status::StatusKind;
use ratatui::Frame;

use crate::state::AppState;
use crate::{dashboard, login, signup, status, toast, welcome};

/// Renders the active screen and the toast stack on top of it.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    match app.session.state() {
        SessionState::Welcome => welcome::render(frame, area),
        SessionState::Login => {
            login::render(frame, area, &app.login, app.is_pending(Screen::Login));
        }
        SessionState::Signup => {
            signup::render(frame, area, &app.signup, app.is_pending(Screen::Signup));
        }
        SessionState::Verification | SessionState::Pending | SessionState::Approved => {
            if let Some(kind) = StatusKind::from_screen(app.screen()) {
                status::render(frame, area, kind);
            }
        }
        SessionState::Dashboard { user } => dashboard::render(frame, area, &app.dashboard, user),
    }

    toast::render(frame, area, &app.toasts);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use datxb_core::config::Config;
    use datxb_core::notify::Notification;
    use datxb_core::session::Session;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("terminal");
        terminal.draw(|frame| render(app, frame)).expect("draw");

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn session_at(events: &[datxb_core::SessionEvent]) -> Session {
        let mut session = Session::new();
        for event in events {
            session.apply(*event).expect("valid transition");
        }
        session
    }

    #[test]
    fn welcome_screen_shows_call_to_action() {
        let app = AppState::new(Config::default());
        let screen = draw(&app);
        assert!(screen.contains("Welcome to datXB"));
        assert!(screen.contains("Get Started"));
        assert!(screen.contains("Role-Based Access"));
    }

    #[test]
    fn signup_checklist_appears_once_password_is_typed() {
        use datxb_core::SessionEvent::{GetStarted, SwitchToSignup};

        let mut app = AppState::new(Config::default());
        app.session = session_at(&[GetStarted, SwitchToSignup]);
        assert!(!draw(&app).contains("Uppercase letter"));

        app.signup.password.insert_str("abc");
        let screen = draw(&app);
        assert!(screen.contains("Uppercase letter"));
        assert!(screen.contains("8+ characters"));
        assert!(!screen.contains("abc"));
    }

    #[test]
    fn dashboard_lists_every_card_with_audience() {
        use datxb_core::SessionEvent::{GetStarted, LoginSucceeded};

        let mut app = AppState::new(Config::default());
        app.session = session_at(&[GetStarted, LoginSucceeded]);
        let screen = draw(&app);
        assert!(screen.contains("demo_user"));
        assert!(screen.contains("System Settings"));
        assert!(screen.contains("Available for: Admin only"));
    }

    #[test]
    fn verification_screen_and_toast_render_together() {
        use datxb_core::SessionEvent::{GetStarted, SignupSucceeded, SwitchToSignup};

        let mut app = AppState::new(Config::default());
        app.session = session_at(&[GetStarted, SwitchToSignup, SignupSucceeded]);
        app.toasts
            .push(Notification::success("Account created successfully!", ""), Instant::now());

        let screen = draw(&app);
        assert!(screen.contains("Check Your Email"));
        assert!(screen.contains("Back to Sign In"));
        assert!(screen.contains("Account created successfully!"));
    }
}
