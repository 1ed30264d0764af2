//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//! - Keymap: Which key means which action
//! - Services: Side effects the reducer asks for (gate check, mail hand-off)

pub mod actions;
pub mod event;
pub mod keymap;
pub mod reducer;
pub mod services;
pub mod state;

pub use actions::Action;
pub use keymap::map_key;
pub use reducer::reduce;
pub use services::ServiceHandle;
pub use state::{AppState, FocusItem, StatusBarState, UiConfig};
