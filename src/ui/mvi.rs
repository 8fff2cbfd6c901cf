//! Model-View-Intent (MVI) primitives.
//!
//! Base traits for unidirectional data flow: the view renders from owned
//! state, user actions and timer/worker results arrive as intents, and a
//! pure reducer is the only place state transitions happen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

/// Marker trait for UI state objects.
///
/// States are cloneable values: a reduction consumes the old state and
/// produces the next one, and `PartialEq` lets callers detect no-ops.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents.
///
/// Intents carry user actions (key presses) and system events (worker
/// results, elapsed timers) into the reducer.
pub trait Intent: Send + 'static {}

/// Transforms state based on intents.
///
/// `reduce` must be a pure function: `(State, Intent) -> State`, no side
/// effects. Everything effectful (generation, clipboard, timers) happens
/// around it in the app layer.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
