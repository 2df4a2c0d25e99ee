//! Verification, pending and approved screens.
//!
//! All three share one layout. The only way out is back to sign-in.

use crossterm::event::{KeyCode, KeyEvent};
use datxb_core::brand::ADMIN_EMAIL;
use datxb_core::session::SessionEvent;
use datxb_core::status::{SPAM_HINT, StatusKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::common::render_utils::{
    ACCENT, InputHint, MUTED, SUCCESS, brand_lines, centered_area, render_button, render_hints,
    render_panel,
};
use crate::effects::UiEffect;
use crate::features::ScreenUpdate;
use crate::mutations::StateMutation;

const PANEL_WIDTH: u16 = 64;
const PANEL_HEIGHT: u16 = 18;

pub fn handle_key(key: KeyEvent) -> ScreenUpdate {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            ScreenUpdate::mutation(StateMutation::Session(SessionEvent::BackToLogin))
        }
        KeyCode::Char('q') => ScreenUpdate::effect(UiEffect::Quit),
        _ => ScreenUpdate::none(),
    }
}

pub fn render(frame: &mut Frame, area: Rect, kind: StatusKind) {
    let outer = centered_area(area, PANEL_WIDTH, PANEL_HEIGHT + 4);
    let [brand, _, panel] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(outer);
    frame.render_widget(
        Paragraph::new(brand_lines()).alignment(Alignment::Center),
        brand,
    );

    let border = if kind == StatusKind::Approved {
        SUCCESS
    } else {
        ACCENT
    };
    let inner = render_panel(frame, panel, kind.title(), border);
    let inner = Rect::new(
        inner.x + 1,
        inner.y + 1,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(1),
    );

    let [text, button] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(inner);

    let mut lines = vec![
        Line::from(kind.description()),
        Line::from(""),
        Line::from(Span::styled(kind.details(), Style::default().fg(MUTED))),
    ];
    if kind.shows_spam_hint() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(SPAM_HINT, Style::default().fg(MUTED))));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Admin contact: ", Style::default().fg(MUTED)),
        Span::styled(ADMIN_EMAIL, Style::default().add_modifier(Modifier::BOLD)),
    ]));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        text,
    );
    render_button(frame, button, kind.button_label(), true, true);

    render_hints(
        frame,
        area,
        &[
            InputHint::new("Enter", kind.button_label()),
            InputHint::new("q", "quit"),
        ],
    );
}
