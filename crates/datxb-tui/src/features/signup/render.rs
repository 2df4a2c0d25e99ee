use datxb_core::policy::Requirement;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{SignupFocus, SignupState};
use super::update::can_submit;
use crate::common::render_utils::{
    ACCENT, ERROR, InputHint, MUTED, SUCCESS, render_auth_layout, render_button, render_hints,
    render_link, render_text_field,
};

const BODY_HEIGHT: u16 = 18;

pub fn render(frame: &mut Frame, area: Rect, state: &SignupState, pending: bool) {
    let body = render_auth_layout(
        frame,
        area,
        "Create Account",
        "Join the datXB platform",
        BODY_HEIGHT,
    );

    let [username, email, password, checklist, user_type, _, button, _, link] =
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(body);

    render_text_field(
        frame,
        username,
        "Username",
        "Enter your username",
        &state.username,
        state.focus == SignupFocus::Username,
    );
    render_text_field(
        frame,
        email,
        "Email",
        "Enter your email",
        &state.email,
        state.focus == SignupFocus::Email,
    );
    render_text_field(
        frame,
        password,
        "Password",
        "Create a password",
        &state.password,
        state.focus == SignupFocus::Password,
    );

    if !state.password.is_empty() {
        render_checklist(frame, checklist, state);
    }

    render_user_type(frame, user_type, state);

    let label = if pending {
        "Creating Account..."
    } else {
        "Create Account"
    };
    render_button(
        frame,
        button,
        label,
        state.focus == SignupFocus::Submit,
        can_submit(state, pending),
    );
    render_link(
        frame,
        link,
        "Already have an account? ",
        "Sign in",
        state.focus == SignupFocus::LoginLink,
    );

    render_hints(
        frame,
        area,
        &[
            InputHint::new("Tab", "next"),
            InputHint::new("←/→", "user type"),
            InputHint::new("Enter", "submit"),
            InputHint::new("Esc", "sign in"),
        ],
    );
}

/// Two rows of two requirements each, in display order.
fn render_checklist(frame: &mut Frame, area: Rect, state: &SignupState) {
    let checks: Vec<(Requirement, bool)> = state.password_requirements().checks().collect();
    let col_width = (area.width / 2) as usize;

    let lines: Vec<Line<'_>> = checks
        .chunks(2)
        .map(|row| {
            let spans = row
                .iter()
                .flat_map(|(requirement, met)| {
                    let (mark, color) = if *met { ("✓", SUCCESS) } else { ("✗", ERROR) };
                    let label_color = if *met { SUCCESS } else { MUTED };
                    let width = col_width.saturating_sub(2);
                    [
                        Span::styled(format!("{mark} "), Style::default().fg(color)),
                        Span::styled(
                            format!("{:<width$}", requirement.label()),
                            Style::default().fg(label_color),
                        ),
                    ]
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_user_type(frame: &mut Frame, area: Rect, state: &SignupState) {
    let focused = state.focus == SignupFocus::UserType;
    let border = if focused { ACCENT } else { MUTED };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" User Type ");

    let value = match state.user_type {
        Some(user_type) => Span::raw(user_type.display_name()),
        None => Span::styled("Select user type", Style::default().fg(MUTED)),
    };
    let line = if focused {
        Line::from(vec![
            Span::styled("◂ ", Style::default().fg(ACCENT)),
            value,
            Span::styled(" ▸", Style::default().fg(ACCENT)),
        ])
    } else {
        Line::from(vec![Span::raw("  "), value])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
