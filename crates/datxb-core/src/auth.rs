//! Simulated auth backend.
//!
//! Both submissions validate first and fail immediately; valid input waits
//! out a fixed latency and then always succeeds. Nothing leaves the process.

use std::time::Duration;

use crate::brand::{ADMIN_EMAIL, SITE_URL};
use crate::delay::Delay;
use crate::error::AuthError;
use crate::forms::{LoginRequest, SignupRequest};
use crate::notify::Notification;
use crate::user::{User, UserType};

pub type LoginResult = Result<(), AuthError>;
pub type SignupResult = Result<SignupOutcome, AuthError>;

/// Approval request that would be sent to the administrator.
///
/// Built on every successful signup and logged; never transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalRequest {
    pub user_email: String,
    pub admin_email: String,
    pub user: User,
    pub site_link: String,
    pub message: String,
}

impl ApprovalRequest {
    fn for_signup(username: &str, email: &str, user_type: UserType) -> Self {
        let message = format!(
            "New user signup requires approval:\n\
             - Username: {username}\n\
             - Email: {email}\n\
             - User Type: {user_type}\n\
             - Site: {SITE_URL}\n\n\
             Please review and approve this account."
        );
        Self {
            user_email: email.to_string(),
            admin_email: ADMIN_EMAIL.to_string(),
            user: User {
                username: username.to_string(),
                email: email.to_string(),
                user_type,
            },
            site_link: SITE_URL.to_string(),
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupOutcome {
    pub approval: ApprovalRequest,
}

/// Submits the login form.
///
/// # Errors
/// [`AuthError::Validation`] when a field is empty; returned without waiting.
pub async fn submit_login(
    delay: &dyn Delay,
    latency: Duration,
    request: LoginRequest,
) -> LoginResult {
    request.validate()?;
    tracing::info!(email = %request.email, "login submitted");
    delay.sleep(latency).await;
    Ok(())
}

/// Submits the signup form.
///
/// # Errors
/// The first failing check from [`SignupRequest::validate`]; returned
/// without waiting.
pub async fn submit_signup(
    delay: &dyn Delay,
    latency: Duration,
    request: SignupRequest,
) -> SignupResult {
    let user_type = request.validate()?;
    tracing::info!(email = %request.email, %user_type, "signup submitted");
    delay.sleep(latency).await;

    let approval = ApprovalRequest::for_signup(&request.username, &request.email, user_type);
    tracing::debug!(
        admin = %approval.admin_email,
        message = %approval.message,
        "approval request prepared (not sent)"
    );
    Ok(SignupOutcome { approval })
}

pub fn login_notification(result: &LoginResult) -> Notification {
    match result {
        Ok(()) => Notification::success("Login successful", "Welcome back to datXB!"),
        Err(err) => Notification::error("Login failed", err.to_string()),
    }
}

pub fn signup_notification(result: &SignupResult) -> Notification {
    match result {
        Ok(_) => Notification::success(
            "Account created successfully!",
            "A verification link has been sent to your email. Admin approval is required.",
        ),
        Err(err) => Notification::error("Signup failed", err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use futures_util::future::BoxFuture;

    use super::*;
    use crate::delay::{NoDelay, TokioDelay};
    use crate::notify::NotificationKind;

    #[derive(Default)]
    struct RecordingDelay {
        calls: Mutex<Vec<Duration>>,
    }

    impl Delay for RecordingDelay {
        fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()> {
            self.calls.lock().unwrap().push(duration);
            Box::pin(std::future::ready(()))
        }
    }

    fn valid_signup() -> SignupRequest {
        SignupRequest {
            username: "grace".to_string(),
            email: "grace@navy.mil".to_string(),
            password: "Cobol#1959".to_string(),
            user_type: Some(UserType::Admin),
        }
    }

    #[tokio::test]
    async fn login_waits_then_succeeds() {
        let delay = RecordingDelay::default();
        let result = submit_login(
            &delay,
            Duration::from_millis(1000),
            LoginRequest::new("a@b.c", "pw"),
        )
        .await;
        assert_eq!(result, Ok(()));
        assert_eq!(*delay.calls.lock().unwrap(), [Duration::from_millis(1000)]);
    }

    #[tokio::test]
    async fn login_validation_fails_without_waiting() {
        let delay = RecordingDelay::default();
        let result = submit_login(
            &delay,
            Duration::from_millis(1000),
            LoginRequest::new("a@b.c", ""),
        )
        .await;
        assert_eq!(result, Err(AuthError::Validation));
        assert!(delay.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn login_honours_real_latency() {
        tokio::time::pause();
        let start = tokio::time::Instant::now();
        submit_login(
            &TokioDelay,
            Duration::from_millis(1000),
            LoginRequest::new("a@b.c", "pw"),
        )
        .await
        .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn signup_builds_approval_request() {
        let outcome = submit_signup(&NoDelay, Duration::from_millis(1500), valid_signup())
            .await
            .unwrap();
        let approval = outcome.approval;
        assert_eq!(approval.user_email, "grace@navy.mil");
        assert_eq!(approval.admin_email, ADMIN_EMAIL);
        assert_eq!(approval.site_link, SITE_URL);
        assert_eq!(approval.user.user_type, UserType::Admin);
        assert!(approval.message.contains("- Username: grace"));
        assert!(approval.message.contains("- User Type: admin"));
    }

    #[tokio::test]
    async fn signup_duplicate_email_fails_without_waiting() {
        let delay = RecordingDelay::default();
        let request = SignupRequest {
            email: "test@example.com".to_string(),
            ..valid_signup()
        };
        let result = submit_signup(&delay, Duration::from_millis(1500), request).await;
        assert_eq!(result, Err(AuthError::DuplicateEmail));
        assert!(delay.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn notifications_carry_error_messages() {
        let failed = login_notification(&Err(AuthError::Validation));
        assert_eq!(failed.kind, NotificationKind::Error);
        assert_eq!(failed.title, "Login failed");
        assert_eq!(failed.description, "Please fill in all fields");

        let failed = signup_notification(&Err(AuthError::PasswordPolicy));
        assert_eq!(failed.title, "Signup failed");
        assert_eq!(failed.description, "Password must meet all requirements");

        let ok = login_notification(&Ok(()));
        assert_eq!(ok.kind, NotificationKind::Success);
        assert_eq!(ok.description, "Welcome back to datXB!");
    }
}
