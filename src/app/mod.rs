//! Command handling: routing, interactive flows, and screen rendering.

pub mod compose;
pub mod dispatch;
pub mod render;
