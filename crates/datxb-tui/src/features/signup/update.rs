use crossterm::event::{KeyCode, KeyEvent};
use datxb_core::auth::{SignupResult, signup_notification};
use datxb_core::session::SessionEvent;

use super::state::{SignupFocus, SignupState};
use crate::effects::UiEffect;
use crate::features::ScreenUpdate;
use crate::mutations::StateMutation;

/// Submit is enabled only when idle and the password satisfies the policy.
pub fn can_submit(state: &SignupState, pending: bool) -> bool {
    !pending && state.password_requirements().is_satisfied()
}

/// Handles a key press on the sign-up screen.
pub fn handle_key(state: &mut SignupState, key: KeyEvent, pending: bool) -> ScreenUpdate {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.focus = state.focus.next();
            ScreenUpdate::none()
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus = state.focus.prev();
            ScreenUpdate::none()
        }
        KeyCode::Esc if !pending => {
            ScreenUpdate::mutation(StateMutation::Session(SessionEvent::SwitchToLogin))
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
            if state.focus == SignupFocus::UserType =>
        {
            state.cycle_user_type(key.code != KeyCode::Left);
            ScreenUpdate::none()
        }
        KeyCode::Enter => match state.focus {
            SignupFocus::LoginLink if !pending => {
                ScreenUpdate::mutation(StateMutation::Session(SessionEvent::SwitchToLogin))
            }
            SignupFocus::LoginLink => ScreenUpdate::none(),
            _ if can_submit(state, pending) => ScreenUpdate::effect(UiEffect::SubmitSignup {
                task: None,
                request: state.request(),
            }),
            _ => {
                tracing::debug!(pending, "signup submit disabled");
                ScreenUpdate::none()
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

pub fn handle_paste(state: &mut SignupState, text: &str) {
    if let Some(field) = state.focused_field_mut() {
        field.insert_str(text);
    }
}

/// Turns a finished submission into a toast and, on success, the
/// verification screen.
pub fn handle_submitted(result: &SignupResult) -> Vec<StateMutation> {
    let mut mutations = vec![StateMutation::Notify(signup_notification(result))];
    if result.is_ok() {
        mutations.push(StateMutation::Session(SessionEvent::SignupSucceeded));
    }
    mutations
}
