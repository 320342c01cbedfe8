//! Session state
//!
//! One explicitly constructed `Session` per run. Every mutation goes through a
//! named operation that ends in exactly one notification to the registered
//! listeners, or in none at all when a guard turns it into a no-op.

pub mod snapshot;
pub mod state;

pub use snapshot::SessionSnapshot;
pub use state::{BallSelection, DisplayToggle, DragTarget, Listener, ListenerId, Session};
