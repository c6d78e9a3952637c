//! User interface
//!
//! Split the way the rest of the app thinks about it: `draw` renders the
//! current [`crate::state::AppState`] and never mutates it, `events`
//! translates key presses into state changes and hands dispatch-requiring
//! actions back to the run loop.

pub mod draw;
pub mod events;

pub use events::EventHandler;
