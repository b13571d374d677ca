//! CLI library components for the table preview tool.

pub mod config;
pub mod input;
pub mod logging;
pub mod render;
