use datxb_core::brand::{PRODUCT_NAME, SITE_HOST, TAGLINE};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::common::TextField;

pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::DarkGray;
pub const SUCCESS: Color = Color::Green;
pub const ERROR: Color = Color::Red;

/// Returns a `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Draws a bordered, titled panel and returns its inner area.
pub fn render_panel(frame: &mut Frame, area: Rect, title: &str, border_color: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Width of the sign-in and sign-up cards.
pub const AUTH_CARD_WIDTH: u16 = 56;

/// Brand name, tagline and site host stacked and centered.
pub fn brand_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            PRODUCT_NAME,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(MUTED))),
        Line::from(Span::styled(SITE_HOST, Style::default().fg(ACCENT))),
    ]
}

/// Draws the brand header above a titled card and returns the card body.
///
/// `body_height` is the number of rows the caller needs inside the card,
/// below the description line.
pub fn render_auth_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    description: &str,
    body_height: u16,
) -> Rect {
    let brand_height = 3;
    // Borders, description and a spacer row.
    let card_height = body_height + 4;
    let outer = centered_area(area, AUTH_CARD_WIDTH, brand_height + 1 + card_height);

    let [brand, _, card] = Layout::vertical([
        Constraint::Length(brand_height),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(outer);

    frame.render_widget(
        Paragraph::new(brand_lines()).alignment(Alignment::Center),
        brand,
    );

    let inner = render_panel(frame, card, title, ACCENT);
    let [desc, _, body] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            description.to_string(),
            Style::default().fg(MUTED),
        ))
        .alignment(Alignment::Center),
        desc,
    );

    Rect::new(
        body.x + 1,
        body.y,
        body.width.saturating_sub(2),
        body.height,
    )
}

/// Helper struct for keyboard hints.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Renders a line of keyboard hints on the last row of `area`.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint<'_>]) {
    if area.height == 0 {
        return;
    }
    let hints_y = area.y + area.height - 1;
    let hints_area = Rect::new(area.x, hints_y, area.width, 1);

    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(MUTED)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(ACCENT)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(MUTED),
        ));
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, hints_area);
}

/// Renders a labelled text field into a 3-row area and positions the
/// terminal cursor when the field has focus.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    placeholder: &str,
    field: &TextField,
    focused: bool,
) {
    let border = if focused { ACCENT } else { MUTED };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {label} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if field.is_empty() {
        Line::from(Span::styled(placeholder, Style::default().fg(MUTED)))
    } else {
        Line::from(field.display())
    };

    // Keep the cursor visible by scrolling long values horizontally.
    let cursor_col = field.display_cursor_col();
    let scroll = cursor_col.saturating_sub(inner.width.saturating_sub(1));
    frame.render_widget(Paragraph::new(line).scroll((0, scroll)), inner);

    if focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((inner.x + cursor_col - scroll, inner.y));
    }
}

/// Renders a single-row button.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool, enabled: bool) {
    let style = match (enabled, focused) {
        (false, _) => Style::default().fg(MUTED),
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(ACCENT),
    };
    let text = if focused {
        format!("▸ {label} ◂")
    } else {
        format!("  {label}  ")
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Center),
        area,
    );
}

/// Renders a single-row text link, underlined when focused.
pub fn render_link(frame: &mut Frame, area: Rect, prefix: &str, label: &str, focused: bool) {
    let mut link_style = Style::default().fg(ACCENT);
    if focused {
        link_style = link_style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
    }
    let line = Line::from(vec![
        Span::styled(prefix.to_string(), Style::default().fg(MUTED)),
        Span::styled(label.to_string(), link_style),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
