use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use super::state::{LoginFocus, LoginState};
use crate::common::render_utils::{
    InputHint, render_auth_layout, render_button, render_hints, render_link, render_text_field,
};

const BODY_HEIGHT: u16 = 10;

pub fn render(frame: &mut Frame, area: Rect, state: &LoginState, pending: bool) {
    let body = render_auth_layout(
        frame,
        area,
        "Sign In",
        "Access your datXB account",
        BODY_HEIGHT,
    );

    let [email, password, _, button, _, link] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(body);

    render_text_field(
        frame,
        email,
        "Email",
        "Enter your email",
        &state.email,
        state.focus == LoginFocus::Email,
    );
    render_text_field(
        frame,
        password,
        "Password",
        "Enter your password",
        &state.password,
        state.focus == LoginFocus::Password,
    );

    let label = if pending { "Signing In..." } else { "Sign In" };
    render_button(
        frame,
        button,
        label,
        state.focus == LoginFocus::Submit,
        !pending,
    );
    render_link(
        frame,
        link,
        "Don't have an account? ",
        "Sign up",
        state.focus == LoginFocus::SignupLink,
    );

    render_hints(
        frame,
        area,
        &[
            InputHint::new("Tab", "next"),
            InputHint::new("Enter", "submit"),
            InputHint::new("Ctrl+C", "quit"),
        ],
    );
}
