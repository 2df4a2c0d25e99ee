use datxb_core::brand::{PRODUCT_NAME, SITE_HOST, SITE_URL, TAGLINE};
use datxb_core::dashboard::{FEATURE_CARDS, FeatureCard};
use datxb_core::user::User;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::state::{DashboardItem, DashboardState};
use crate::common::render_utils::{ACCENT, InputHint, MUTED, render_button, render_hints};

const CARD_HEIGHT: u16 = 6;

pub fn render(frame: &mut Frame, area: Rect, state: &DashboardState, user: &User) {
    let [header, _, greeting, cards, status, logout, _] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(CARD_HEIGHT * 2),
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(area);

    render_header(frame, header, user);
    render_greeting(frame, greeting, user);
    render_cards(frame, cards, state, user);
    render_platform_status(frame, status, user);
    render_button(
        frame,
        logout,
        "Logout",
        state.selected == DashboardItem::Logout,
        true,
    );

    render_hints(
        frame,
        area,
        &[
            InputHint::new("Tab/Arrows", "move"),
            InputHint::new("Enter", "select"),
            InputHint::new("o", "open site"),
            InputHint::new("q", "quit"),
        ],
    );
}

fn render_header(frame: &mut Frame, area: Rect, user: &User) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(MUTED));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(24)]).areas(inner);

    let brand = vec![
        Line::from(vec![
            Span::styled(
                PRODUCT_NAME,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  🌐 {SITE_HOST}"), Style::default().fg(ACCENT)),
        ]),
        Line::from(Span::styled(TAGLINE, Style::default().fg(MUTED))),
    ];
    frame.render_widget(Paragraph::new(brand), left);

    let identity = vec![
        Line::from(Span::styled(
            user.username.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            user.user_type.short_name(),
            Style::default().fg(MUTED),
        )),
    ];
    frame.render_widget(
        Paragraph::new(identity).alignment(Alignment::Right),
        right,
    );
}

fn render_greeting(frame: &mut Frame, area: Rect, user: &User) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Welcome back, {}!", user.username),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("You are logged in as a ", Style::default().fg(MUTED)),
            Span::styled(
                user.user_type.short_name(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                ". Access your data management tools below.",
                Style::default().fg(MUTED),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Two-by-two grid in catalogue order.
fn render_cards(frame: &mut Frame, area: Rect, state: &DashboardState, user: &User) {
    let rows = Layout::vertical([Constraint::Length(CARD_HEIGHT); 2]).split(area);
    for (row_idx, row) in rows.iter().enumerate() {
        let cols = Layout::horizontal([Constraint::Percentage(50); 2]).split(*row);
        for (col_idx, cell) in cols.iter().enumerate() {
            let idx = row_idx * 2 + col_idx;
            if let Some(card) = FEATURE_CARDS.get(idx) {
                let selected = state.selected == DashboardItem::Card(idx);
                render_card(frame, *cell, card, selected, card.available_to(user.user_type));
            }
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &FeatureCard, selected: bool, available: bool) {
    let border_style = if selected {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    };
    let title_style = if available {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", card.title), title_style));

    let lines = vec![
        Line::from(card.description),
        Line::from(""),
        Line::from(Span::styled(card.audience_label(), Style::default().fg(MUTED))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_platform_status(frame: &mut Frame, area: Rect, user: &User) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" Platform Status ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [summary, columns] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Your account is fully verified and approved",
            Style::default().fg(MUTED),
        )),
        summary,
    );

    let entries = [
        ("Account Status", "Active & Verified"),
        ("User Type", user.user_type.short_name()),
        ("Site Access", SITE_URL),
    ];
    let cols = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(columns);
    for ((label, value), col) in entries.into_iter().zip(cols.iter()) {
        let lines = vec![
            Line::from(Span::styled(label, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(value, Style::default().fg(MUTED))),
        ];
        frame.render_widget(Paragraph::new(lines), *col);
    }
}
