//! Shared helpers used across the installer steps

pub mod fs;
