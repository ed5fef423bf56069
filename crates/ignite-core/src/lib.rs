//! Ignite Core - project generation behind the `create-ignite` CLI
//!
//! This library turns a handful of interactive answers into a ready-to-run
//! JavaScript/TypeScript project: a frontend (React, Vue, Next.js, Nuxt), a
//! backend (Express, Fastify) or a fullstack monorepo.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Rules** - Option enums, compatibility rules, dependency
//!   selection and the saved-configuration store; all pure or injected
//! - **Layer 2: Resolution & Orchestration** - `ConfigResolver` walks the
//!   question tree over a `Prompter`; `Orchestrator` runs the generation steps
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use ignite_core::{deps, ConfigResolver, MemoryStore, ProjectName};
//!
//! let mut resolver = ConfigResolver::new(my_prompter, MemoryStore::new());
//! if let Outcome::Completed(config) = resolver.resolve(ProjectName::parse("my-app")?)? {
//!     let manifest = deps::select(&config);
//!     println!("{:?}", manifest.dependencies);
//! }
//! ```

pub mod config;
pub mod deps;
pub mod error;
pub mod messages;
pub mod prompt;
pub mod resolver;
pub mod rules;
pub mod runtime;
pub mod scaffold;
pub mod store;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{ProjectConfiguration, ProjectName};
pub use deps::DependencyManifest;
pub use error::{IgniteError, Outcome, Result};
pub use prompt::Prompter;
pub use resolver::ConfigResolver;
pub use rules::{state_choices_for, validate, Violation};
pub use scaffold::{Orchestrator, ProcessSteps, ProjectSteps};
pub use store::{ConfigStore, JsonFileStore, MemoryStore};

#[cfg(feature = "tui")]
pub use tui::run;
