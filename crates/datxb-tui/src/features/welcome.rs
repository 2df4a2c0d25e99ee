//! Landing screen.

use crossterm::event::{KeyCode, KeyEvent};
use datxb_core::brand::{ADMIN_EMAIL, SITE_URL, TAGLINE};
use datxb_core::session::SessionEvent;
use datxb_core::welcome::{CALL_TO_ACTION, CALL_TO_ACTION_HINT, HEADLINE, HIGHLIGHTS};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::common::render_utils::{ACCENT, InputHint, MUTED, render_button, render_hints};
use crate::effects::UiEffect;
use crate::features::ScreenUpdate;
use crate::mutations::StateMutation;

pub fn handle_key(key: KeyEvent) -> ScreenUpdate {
    match key.code {
        KeyCode::Enter => ScreenUpdate::mutation(StateMutation::Session(SessionEvent::GetStarted)),
        KeyCode::Char('o') => ScreenUpdate::effect(UiEffect::OpenBrowser {
            url: SITE_URL.to_string(),
        }),
        KeyCode::Esc | KeyCode::Char('q') => ScreenUpdate::effect(UiEffect::Quit),
        _ => ScreenUpdate::none(),
    }
}

pub fn render(frame: &mut Frame, area: Rect) {
    let [_, hero, _, highlights, _, action, hint, _, footer, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(area);

    let hero_lines = vec![
        Line::from(Span::styled(
            HEADLINE,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(MUTED))),
        Line::from(""),
        Line::from(Span::styled(SITE_URL, Style::default().fg(ACCENT))),
    ];
    frame.render_widget(
        Paragraph::new(hero_lines).alignment(Alignment::Center),
        hero,
    );

    let cols = Layout::horizontal([Constraint::Ratio(1, 3); 3])
        .horizontal_margin(2)
        .spacing(1)
        .split(highlights);
    for (highlight, col) in HIGHLIGHTS.iter().zip(cols.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(Span::styled(
                format!(" {} ", highlight.title),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(
            Paragraph::new(highlight.description)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            *col,
        );
    }

    render_button(frame, action, CALL_TO_ACTION, true, true);
    frame.render_widget(
        Paragraph::new(Span::styled(CALL_TO_ACTION_HINT, Style::default().fg(MUTED)))
            .alignment(Alignment::Center),
        hint,
    );

    let footer_line = Line::from(vec![
        Span::styled("✉ Admin approval required: ", Style::default().fg(MUTED)),
        Span::styled(ADMIN_EMAIL, Style::default().fg(ACCENT)),
    ]);
    frame.render_widget(
        Paragraph::new(footer_line).alignment(Alignment::Center),
        footer,
    );

    render_hints(
        frame,
        area,
        &[
            InputHint::new("Enter", CALL_TO_ACTION),
            InputHint::new("o", "open site"),
            InputHint::new("q", "quit"),
        ],
    );
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    #[test]
    fn enter_starts_the_flow() {
        let update = handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(
            update.mutations,
            vec![StateMutation::Session(SessionEvent::GetStarted)]
        );
    }

    #[test]
    fn o_opens_the_site() {
        let update = handle_key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE));
        match update.effects.as_slice() {
            [UiEffect::OpenBrowser { url }] => assert_eq!(url, SITE_URL),
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn q_quits() {
        let update = handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(matches!(update.effects.as_slice(), [UiEffect::Quit]));
    }
}
