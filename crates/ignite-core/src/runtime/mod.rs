//! Runtime detection and process execution
//!
//! This module provides:
//! - Node.js and package-manager detection
//! - A streaming process runner with retry for the installers

pub mod check;
pub mod command;

pub use check::{check_node, check_package_manager, ensure_node, RuntimeInfo, MIN_NODE_VERSION};
pub use command::{retry, CommandSpec, RetryPolicy};
