//! Command implementations for maze

pub mod check;
pub mod dispatch;
pub mod render;
pub mod solve;
