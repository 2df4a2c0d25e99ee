//! Transient notifications drawn over the active screen.
//!
//! Toasts are pushed by the reducer and pruned on every tick once their
//! lifetime has elapsed. The newest toast is drawn on top.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use datxb_core::notify::{Notification, NotificationKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::common::render_utils::{ERROR, SUCCESS};

/// Toasts kept at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 3;

const TOAST_WIDTH: u16 = 44;

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    toasts: VecDeque<Toast>,
    lifetime: Duration,
}

impl ToastState {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: VecDeque::with_capacity(MAX_TOASTS),
            lifetime,
        }
    }

    pub fn push(&mut self, notification: Notification, now: Instant) {
        tracing::debug!(title = %notification.title, kind = ?notification.kind, "toast");
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            notification,
            expires_at: now + self.lifetime,
        });
    }

    /// Drops expired toasts. Returns true if anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        self.toasts.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }
}

/// Stacks toasts in the top-right corner, newest first.
pub fn render(frame: &mut Frame, area: Rect, toasts: &ToastState) {
    let width = TOAST_WIDTH.min(area.width);
    let inner_width = width.saturating_sub(2).max(1);
    let x = area.x + area.width - width;
    let mut y = area.y + 1;

    for toast in toasts.iter().rev() {
        let height = toast_height(&toast.notification, inner_width);
        if y + height > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, height);
        render_toast(frame, rect, &toast.notification);
        y += height;
    }
}

fn toast_height(notification: &Notification, inner_width: u16) -> u16 {
    let desc_width = notification.description.width() as u16;
    let desc_lines = desc_width.div_ceil(inner_width).max(1);
    // Borders plus the title row.
    desc_lines + 3
}

fn render_toast(frame: &mut Frame, area: Rect, notification: &Notification) {
    let color = match notification.kind {
        NotificationKind::Success => SUCCESS,
        NotificationKind::Error => ERROR,
    };

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let lines = vec![
        Line::from(Span::styled(
            notification.title.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(notification.description.clone()),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
