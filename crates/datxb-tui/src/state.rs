//! Application state.
//!
//! ```text
//! AppState
//! ├── session: Session       (screen + authenticated user)
//! ├── login / signup         (form slices, reset on entry)
//! ├── dashboard              (card selection, reset on entry)
//! ├── toasts: ToastState
//! ├── task_seq / tasks       (in-flight submissions)
//! └── config: Config
//! ```

use datxb_core::config::Config;
use datxb_core::session::{Screen, Session};

use crate::common::{TaskKind, TaskSeq, Tasks};
use crate::dashboard::DashboardState;
use crate::login::LoginState;
use crate::signup::SignupState;
use crate::toast::ToastState;

pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    pub config: Config,
    /// Single source of truth for the active screen.
    pub session: Session,
    pub login: LoginState,
    pub signup: SignupState,
    pub dashboard: DashboardState,
    pub toasts: ToastState,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let toasts = ToastState::new(config.toast_duration());
        Self {
            should_quit: false,
            config,
            session: Session::new(),
            login: LoginState::new(),
            signup: SignupState::new(),
            dashboard: DashboardState::default(),
            toasts,
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    /// True while the form on `screen` has a submission in flight.
    pub fn is_pending(&self, screen: Screen) -> bool {
        match screen {
            Screen::Login => self.tasks.state(TaskKind::LoginSubmit).is_running(),
            Screen::Signup => self.tasks.state(TaskKind::SignupSubmit).is_running(),
            _ => false,
        }
    }

    /// Resets the local state of a screen that was just entered.
    pub fn enter_screen(&mut self, screen: Screen) {
        match screen {
            Screen::Login => self.login = LoginState::new(),
            Screen::Signup => self.signup = SignupState::new(),
            Screen::Dashboard => self.dashboard = DashboardState::default(),
            Screen::Welcome | Screen::Verification | Screen::Pending | Screen::Approved => {}
        }
    }
}
