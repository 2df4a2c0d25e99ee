use crossterm::event::{KeyCode, KeyEvent};
use datxb_core::auth::{LoginResult, login_notification};
use datxb_core::session::SessionEvent;

use super::state::{LoginFocus, LoginState};
use crate::effects::UiEffect;
use crate::features::ScreenUpdate;
use crate::mutations::StateMutation;

/// Handles a key press on the sign-in screen.
///
/// `pending` is true while a submission is in flight; submitting again or
/// leaving the screen is ignored until it resolves.
pub fn handle_key(state: &mut LoginState, key: KeyEvent, pending: bool) -> ScreenUpdate {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.focus = state.focus.next();
            ScreenUpdate::none()
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus = state.focus.prev();
            ScreenUpdate::none()
        }
        KeyCode::Enter if pending => {
            tracing::debug!("login submission already pending");
            ScreenUpdate::none()
        }
        KeyCode::Enter => match state.focus {
            LoginFocus::SignupLink => {
                ScreenUpdate::mutation(StateMutation::Session(SessionEvent::SwitchToSignup))
            }
            LoginFocus::Email | LoginFocus::Password | LoginFocus::Submit => {
                ScreenUpdate::effect(UiEffect::SubmitLogin {
                    task: None,
                    request: state.request(),
                })
            }
        },
        _ => {
            if let Some(field) = state.focused_field_mut() {
                field.input(key);
            }
            ScreenUpdate::none()
        }
    }
}

pub fn handle_paste(state: &mut LoginState, text: &str) {
    if let Some(field) = state.focused_field_mut() {
        field.insert_str(text);
    }
}

/// Turns a finished submission into a toast and, on success, the dashboard.
///
/// Field values are left alone so a failed attempt can be corrected.
pub fn handle_submitted(result: &LoginResult) -> Vec<StateMutation> {
    let mut mutations = vec![StateMutation::Notify(login_notification(result))];
    if result.is_ok() {
        mutations.push(StateMutation::Session(SessionEvent::LoginSucceeded));
    }
    mutations
}
