//! Dashboard shown after sign-in.
//!
//! Lists the feature catalogue with its role annotations and a logout
//! action. Cards are informational: activating one only raises a toast.

mod render;
mod state;
mod update;

pub use render::render;
pub use state::{DashboardItem, DashboardState};
pub use update::handle_key;
