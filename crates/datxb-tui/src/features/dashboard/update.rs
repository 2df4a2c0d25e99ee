use crossterm::event::{KeyCode, KeyEvent};
use datxb_core::brand::SITE_URL;
use datxb_core::dashboard::logout_notification;
use datxb_core::session::SessionEvent;
use datxb_core::user::User;

use super::state::DashboardState;
use crate::effects::UiEffect;
use crate::features::ScreenUpdate;
use crate::mutations::StateMutation;

pub fn handle_key(state: &mut DashboardState, user: &User, key: KeyEvent) -> ScreenUpdate {
    match key.code {
        KeyCode::Tab | KeyCode::Right => {
            state.select_next();
            ScreenUpdate::none()
        }
        KeyCode::BackTab | KeyCode::Left => {
            state.select_prev();
            ScreenUpdate::none()
        }
        KeyCode::Down => {
            state.select_down();
            ScreenUpdate::none()
        }
        KeyCode::Up => {
            state.select_up();
            ScreenUpdate::none()
        }
        KeyCode::Enter => match state.selected_card() {
            Some(card) => {
                tracing::debug!(card = card.title, user_type = %user.user_type, "feature card selected");
                ScreenUpdate::mutation(StateMutation::Notify(card.selected_notification(user)))
            }
            None => ScreenUpdate::mutation(StateMutation::Notify(logout_notification()))
                .with_mutation(StateMutation::Session(SessionEvent::Logout)),
        },
        KeyCode::Char('o') => ScreenUpdate::effect(UiEffect::OpenBrowser {
            url: SITE_URL.to_string(),
        }),
        KeyCode::Char('q') => ScreenUpdate::effect(UiEffect::Quit),
        _ => ScreenUpdate::none(),
    }
}
