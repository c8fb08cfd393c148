//! Command implementations for the zohmg-install CLI

pub mod completions;
pub mod fallback;
pub mod helpers;
pub mod install;
pub mod version;
