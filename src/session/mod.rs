//! Simulated login session.
//!
//! There is no real authentication: whoever logs in is taken at their word,
//! exactly like the mock login screen this replaces. The session is explicit
//! application context loaded at startup and torn down on logout, never
//! ambient global state.

mod context;
mod store;

pub use context::{Role, SessionContext};
pub use store::SessionStore;
