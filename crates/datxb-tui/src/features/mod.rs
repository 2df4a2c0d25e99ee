//! Feature slices for the TUI (state/update/render per screen).

pub mod dashboard;
pub mod login;
pub mod signup;
pub mod status;
pub mod toast;
pub mod welcome;

use crate::effects::UiEffect;
use crate::mutations::StateMutation;

/// Result of a screen key handler.
///
/// Screens mutate their own slice directly and hand back everything else:
/// shared-state changes as mutations, I/O as effects.
#[derive(Debug, Default)]
pub struct ScreenUpdate {
    pub mutations: Vec<StateMutation>,
    pub effects: Vec<UiEffect>,
}

impl ScreenUpdate {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn mutation(mutation: StateMutation) -> Self {
        Self::none().with_mutation(mutation)
    }

    pub fn effect(effect: UiEffect) -> Self {
        Self::none().with_effect(effect)
    }

    #[must_use]
    pub fn with_mutation(mut self, mutation: StateMutation) -> Self {
        self.mutations.push(mutation);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: UiEffect) -> Self {
        self.effects.push(effect);
        self
    }
}
