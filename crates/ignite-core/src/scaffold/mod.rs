//! Project generation
//!
//! The [`Orchestrator`] drives the steps in a fixed order:
//! scaffold, install, framework setup, cleanup, git init.
//! Each step is delegated to a [`ProjectSteps`] implementation; the real one
//! is [`ProcessSteps`], which shells out to the upstream generators and
//! package managers.

pub mod cleanup;
pub mod folder;
pub mod generator;
pub mod installer;
pub mod process;
pub mod setup;

pub use folder::FolderState;
pub use generator::{GeneratedFile, ScaffoldPlan};
pub use process::ProcessSteps;

use crate::config::ProjectConfiguration;
use crate::deps::{self, DependencyManifest};
use crate::error::{IgniteError, Result};
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Scaffold,
    Install,
    FrameworkSetup,
    Cleanup,
    GitInit,
}

impl Step {
    /// Progress message shown while the step runs
    pub fn progress(&self) -> &'static str {
        match self {
            Step::Scaffold => "Creating project...",
            Step::Install => "Installing dependencies...",
            Step::FrameworkSetup => "Configuring framework...",
            Step::Cleanup => "Cleaning up unnecessary files...",
            Step::GitInit => "Initializing git repository...",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Scaffold => "Project scaffolding",
            Step::Install => "Dependency installation",
            Step::FrameworkSetup => "Framework setup",
            Step::Cleanup => "Cleanup",
            Step::GitInit => "Git initialization",
        };
        f.write_str(name)
    }
}

/// The side-effecting collaborators behind each step
#[allow(async_fn_in_trait)]
pub trait ProjectSteps {
    async fn scaffold(&mut self, config: &ProjectConfiguration) -> anyhow::Result<()>;

    async fn install(
        &mut self,
        config: &ProjectConfiguration,
        manifest: &DependencyManifest,
    ) -> anyhow::Result<()>;

    /// Returns manual follow-ups the user should know about
    async fn setup(&mut self, config: &ProjectConfiguration) -> anyhow::Result<Vec<String>>;

    async fn cleanup(&mut self, config: &ProjectConfiguration) -> anyhow::Result<()>;

    async fn git_init(&mut self, config: &ProjectConfiguration) -> anyhow::Result<()>;
}

/// A step that failed without aborting the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepWarning {
    pub step: Step,
    pub message: String,
}

/// What a successful run produced
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub manifest: DependencyManifest,
    pub notes: Vec<String>,
    pub warnings: Vec<StepWarning>,
}

pub struct Orchestrator<S> {
    steps: S,
}

impl<S: ProjectSteps> Orchestrator<S> {
    pub fn new(steps: S) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &S {
        &self.steps
    }

    /// Run every step; `on_step` is called as each one starts
    pub async fn run(
        &mut self,
        config: &ProjectConfiguration,
        mut on_step: impl FnMut(Step),
    ) -> Result<Report> {
        let manifest = deps::select(config);
        debug!(
            dependencies = ?manifest.dependencies,
            dev_dependencies = ?manifest.dev_dependencies,
            "selected packages"
        );

        let upstream = |step: Step| move |source: anyhow::Error| IgniteError::Upstream { step, source };

        on_step(Step::Scaffold);
        self.steps.scaffold(config).await.map_err(upstream(Step::Scaffold))?;

        on_step(Step::Install);
        self.steps
            .install(config, &manifest)
            .await
            .map_err(upstream(Step::Install))?;

        on_step(Step::FrameworkSetup);
        let notes = self
            .steps
            .setup(config)
            .await
            .map_err(upstream(Step::FrameworkSetup))?;

        let mut warnings = Vec::new();

        on_step(Step::Cleanup);
        if let Err(err) = self.steps.cleanup(config).await {
            warn!(error = %err, "cleanup failed");
            warnings.push(StepWarning {
                step: Step::Cleanup,
                message: "Some files could not be cleaned up".to_string(),
            });
        }

        if config.git_init {
            on_step(Step::GitInit);
            if let Err(err) = self.steps.git_init(config).await {
                warn!(error = %err, "git init failed");
                warnings.push(StepWarning {
                    step: Step::GitInit,
                    message: "Failed to initialize git repository".to_string(),
                });
            }
        }

        Ok(Report {
            manifest,
            notes,
            warnings,
        })
    }
}
