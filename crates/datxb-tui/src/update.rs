//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use datxb_core::session::SessionState;

use crate::common::{TaskId, TaskKind};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::ScreenUpdate;
use crate::mutations::StateMutation;
use crate::state::AppState;
use crate::{dashboard, login, signup, status, welcome};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.toasts.prune(Instant::now());
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::LoginSubmitted(result) => {
            apply_mutations(app, login::handle_submitted(&result));
            vec![]
        }
        UiEvent::SignupSubmitted(result) => {
            apply_mutations(app, signup::handle_submitted(&result));
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if app.tasks.state_mut(kind).finish_if_active(completed.id) {
                update(app, *completed.result)
            } else {
                tracing::debug!(?kind, id = completed.id.0, "dropping stale task result");
                vec![]
            }
        }
    }
}

// ============================================================================
// StateMutation Dispatcher
// ============================================================================

fn apply_mutations(app: &mut AppState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::Session(event) => {
                // Rejected transitions are logged by the session and leave
                // every slice untouched.
                if let Ok(screen) = app.session.apply(event).map(SessionState::screen) {
                    app.enter_screen(screen);
                }
            }
            StateMutation::Notify(notification) => {
                app.toasts.push(notification, Instant::now());
            }
        }
    }
}

fn apply_screen_update(app: &mut AppState, update: ScreenUpdate) -> Vec<UiEffect> {
    apply_mutations(app, update.mutations);
    update
        .effects
        .into_iter()
        .map(|effect| assign_task(app, effect))
        .collect()
}

/// Gives submission effects a fresh task id and marks the task running.
fn assign_task(app: &mut AppState, effect: UiEffect) -> UiEffect {
    match effect {
        UiEffect::SubmitLogin {
            task: None,
            request,
        } => UiEffect::SubmitLogin {
            task: Some(start_task(app, TaskKind::LoginSubmit)),
            request,
        },
        UiEffect::SubmitSignup {
            task: None,
            request,
        } => UiEffect::SubmitSignup {
            task: Some(start_task(app, TaskKind::SignupSubmit)),
            request,
        },
        other => other,
    }
}

fn start_task(app: &mut AppState, kind: TaskKind) -> TaskId {
    let id = app.task_seq.next_id();
    app.tasks.state_mut(kind).start(id);
    id
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Paste(text) => {
            handle_paste(app, &text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if matches!(key.kind, KeyEventKind::Release) {
        return vec![];
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    let pending = app.is_pending(app.screen());
    let update = match app.session.state() {
        SessionState::Welcome => welcome::handle_key(key),
        SessionState::Login => login::handle_key(&mut app.login, key, pending),
        SessionState::Signup => signup::handle_key(&mut app.signup, key, pending),
        SessionState::Verification | SessionState::Pending | SessionState::Approved => {
            status::handle_key(key)
        }
        SessionState::Dashboard { user } => dashboard::handle_key(&mut app.dashboard, user, key),
    };
    apply_screen_update(app, update)
}

fn handle_paste(app: &mut AppState, text: &str) {
    match app.session.state() {
        SessionState::Login => login::handle_paste(&mut app.login, text),
        SessionState::Signup => signup::handle_paste(&mut app.signup, text),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use datxb_core::config::Config;
    use datxb_core::delay::{Delay, NoDelay};
    use datxb_core::session::Screen;
    use datxb_core::user::User;

    use super::*;
    use crate::common::TaskCompleted;
    use crate::runtime::handlers;

    fn app() -> AppState {
        AppState::new(Config::default())
    }

    fn key(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_text(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            key(app, KeyCode::Char(ch));
        }
    }

    fn toast_titles(app: &AppState) -> Vec<String> {
        app.toasts
            .iter()
            .map(|t| t.notification.title.clone())
            .collect()
    }

    /// Runs a submission effect the way the runtime would, without latency,
    /// and feeds its completion back through the reducer.
    async fn complete(app: &mut AppState, effect: UiEffect) -> Vec<UiEffect> {
        let delay: Arc<dyn Delay> = Arc::new(NoDelay);
        let (kind, id, event) = match effect {
            UiEffect::SubmitLogin {
                task: Some(id),
                request,
            } => (
                TaskKind::LoginSubmit,
                id,
                handlers::login_submit(delay, Duration::ZERO, request).await,
            ),
            UiEffect::SubmitSignup {
                task: Some(id),
                request,
            } => (
                TaskKind::SignupSubmit,
                id,
                handlers::signup_submit(delay, Duration::ZERO, request).await,
            ),
            other => panic!("not a submission: {other:?}"),
        };
        update(
            app,
            UiEvent::TaskCompleted {
                kind,
                completed: TaskCompleted {
                    id,
                    result: Box::new(event),
                },
            },
        )
    }

    fn single(mut effects: Vec<UiEffect>) -> UiEffect {
        assert_eq!(effects.len(), 1, "expected one effect: {effects:?}");
        effects.remove(0)
    }

    fn open_signup(app: &mut AppState) {
        key(app, KeyCode::Enter);
        key(app, KeyCode::BackTab);
        key(app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Signup);
    }

    fn fill_signup(app: &mut AppState, email: &str, password: &str) {
        type_text(app, "ravi");
        key(app, KeyCode::Tab);
        type_text(app, email);
        key(app, KeyCode::Tab);
        type_text(app, password);
        key(app, KeyCode::Tab);
        key(app, KeyCode::Right);
    }

    #[tokio::test]
    async fn login_reaches_dashboard_with_demo_user() {
        let mut app = app();
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Login);

        type_text(&mut app, "ravi@example.com");
        key(&mut app, KeyCode::Tab);
        type_text(&mut app, "anything");
        let effect = single(key(&mut app, KeyCode::Enter));
        assert!(app.is_pending(Screen::Login));

        // A second Enter while pending does nothing.
        assert!(key(&mut app, KeyCode::Enter).is_empty());

        complete(&mut app, effect).await;
        assert_eq!(app.screen(), Screen::Dashboard);
        assert_eq!(app.session.user(), Some(&User::demo()));
        assert!(!app.tasks.is_any_running());
        assert_eq!(toast_titles(&app), ["Login successful"]);
    }

    #[tokio::test]
    async fn empty_login_password_stays_on_form() {
        let mut app = app();
        key(&mut app, KeyCode::Enter);
        type_text(&mut app, "ravi@example.com");

        let effect = single(key(&mut app, KeyCode::Enter));
        complete(&mut app, effect).await;

        assert_eq!(app.screen(), Screen::Login);
        assert!(app.session.user().is_none());
        assert_eq!(app.login.email.text(), "ravi@example.com");
        let toast = app.toasts.iter().last().map(|t| &t.notification);
        assert!(toast.is_some_and(|n| n.is_error() && n.description == "Please fill in all fields"));
    }

    #[tokio::test]
    async fn signup_reaches_verification_then_back_to_login() {
        let mut app = app();
        open_signup(&mut app);
        fill_signup(&mut app, "ravi@example.com", "Abcdef1!");

        let effect = single(key(&mut app, KeyCode::Enter));
        assert!(app.is_pending(Screen::Signup));
        complete(&mut app, effect).await;

        assert_eq!(app.screen(), Screen::Verification);
        assert_eq!(toast_titles(&app), ["Account created successfully!"]);

        key(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Login);
        assert!(app.login.email.is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_keeps_signup_form() {
        let mut app = app();
        open_signup(&mut app);
        fill_signup(&mut app, "test@example.com", "Abcdef1!");

        let effect = single(key(&mut app, KeyCode::Enter));
        complete(&mut app, effect).await;

        assert_eq!(app.screen(), Screen::Signup);
        assert_eq!(app.signup.email.text(), "test@example.com");
        let last = app.toasts.iter().last().map(|t| t.notification.description.clone());
        assert_eq!(last.as_deref(), Some("Email already in use"));
    }

    #[test]
    fn weak_signup_password_never_submits() {
        let mut app = app();
        open_signup(&mut app);
        fill_signup(&mut app, "ravi@example.com", "abcdefgh");

        assert!(key(&mut app, KeyCode::Enter).is_empty());
        assert!(!app.tasks.is_any_running());
    }

    #[test]
    fn stale_task_result_is_dropped() {
        let mut app = app();
        key(&mut app, KeyCode::Enter);

        let effects = update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: TaskKind::LoginSubmit,
                completed: TaskCompleted {
                    id: TaskId(42),
                    result: Box::new(UiEvent::LoginSubmitted(Ok(()))),
                },
            },
        );
        assert!(effects.is_empty());
        assert_eq!(app.screen(), Screen::Login);
        assert!(app.toasts.is_empty());
    }

    #[tokio::test]
    async fn logout_returns_to_welcome_and_clears_user() {
        let mut app = app();
        key(&mut app, KeyCode::Enter);
        type_text(&mut app, "a@b.co");
        key(&mut app, KeyCode::Tab);
        type_text(&mut app, "pw");
        let effect = single(key(&mut app, KeyCode::Enter));
        complete(&mut app, effect).await;
        assert_eq!(app.screen(), Screen::Dashboard);

        key(&mut app, KeyCode::BackTab);
        key(&mut app, KeyCode::Enter);

        assert_eq!(app.screen(), Screen::Welcome);
        assert!(app.session.user().is_none());
        assert_eq!(
            toast_titles(&app),
            ["Login successful", "Logged out successfully"]
        );
    }

    #[test]
    fn ctrl_c_quits_from_any_screen() {
        let mut app = app();
        key(&mut app, KeyCode::Enter);
        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
        assert!(app.login.email.is_empty());
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = app();
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        update(&mut app, UiEvent::Terminal(Event::Key(release)));
        assert_eq!(app.screen(), Screen::Welcome);
    }

    #[test]
    fn paste_goes_to_focused_field() {
        let mut app = app();
        key(&mut app, KeyCode::Enter);
        update(
            &mut app,
            UiEvent::Terminal(Event::Paste("ravi@example.com\n".to_string())),
        );
        assert_eq!(app.login.email.text(), "ravi@example.com");
    }

    #[test]
    fn reentering_signup_resets_the_form() {
        let mut app = app();
        open_signup(&mut app);
        type_text(&mut app, "ravi");
        key(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Login);

        key(&mut app, KeyCode::BackTab);
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Signup);
        assert!(app.signup.username.is_empty());
    }
}
