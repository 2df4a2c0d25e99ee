//! Shared building blocks used by several screens.

pub mod focus;
pub mod render_utils;
pub mod task;
pub mod text_field;

pub use focus::cycle;
pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskState, Tasks};
pub use text_field::TextField;
