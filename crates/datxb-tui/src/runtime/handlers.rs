//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that return a `UiEvent`. They do not
//! touch state; the runtime spawns them and delivers the result through
//! the inbox.

use std::sync::Arc;
use std::time::Duration;

use datxb_core::auth;
use datxb_core::delay::Delay;
use datxb_core::forms::{LoginRequest, SignupRequest};

use crate::events::UiEvent;

pub async fn login_submit(
    delay: Arc<dyn Delay>,
    latency: Duration,
    request: LoginRequest,
) -> UiEvent {
    UiEvent::LoginSubmitted(auth::submit_login(delay.as_ref(), latency, request).await)
}

pub async fn signup_submit(
    delay: Arc<dyn Delay>,
    latency: Duration,
    request: SignupRequest,
) -> UiEvent {
    UiEvent::SignupSubmitted(auth::submit_signup(delay.as_ref(), latency, request).await)
}

#[cfg(test)]
mod tests {
    use datxb_core::AuthError;
    use datxb_core::delay::TokioDelay;
    use datxb_core::user::UserType;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn login_waits_out_the_configured_latency() {
        let started = tokio::time::Instant::now();
        let event = login_submit(
            Arc::new(TokioDelay),
            Duration::from_millis(1000),
            LoginRequest::new("a@b.co", "pw"),
        )
        .await;

        assert!(matches!(event, UiEvent::LoginSubmitted(Ok(()))));
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_signup_fails_without_waiting() {
        let started = tokio::time::Instant::now();
        let request = SignupRequest {
            username: "ravi".into(),
            email: "ravi@example.com".into(),
            password: "short".into(),
            user_type: Some(UserType::Viewer),
        };
        let event = signup_submit(Arc::new(TokioDelay), Duration::from_millis(1500), request).await;

        assert!(matches!(
            event,
            UiEvent::SignupSubmitted(Err(AuthError::PasswordPolicy))
        ));
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
