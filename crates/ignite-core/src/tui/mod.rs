//! CLI prompts using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

mod clack;
mod prompts;

pub use clack::ClackPrompter;
pub use prompts::{run, CreateArgs};
