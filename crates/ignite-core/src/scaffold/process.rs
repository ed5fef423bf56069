//! Steps backed by the real filesystem and external tools

use super::generator::{self, ScaffoldPlan};
use super::{cleanup, installer, setup, ProjectSteps};
use crate::config::ProjectConfiguration;
use crate::deps::DependencyManifest;
use crate::runtime::{CommandSpec, RetryPolicy};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Creates projects as subdirectories of `parent`
#[derive(Debug, Clone)]
pub struct ProcessSteps {
    parent: PathBuf,
    retry: RetryPolicy,
}

impl ProcessSteps {
    pub fn new(parent: impl Into<PathBuf>) -> Self {
        Self {
            parent: parent.into(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn parent(&self) -> &Path {
        &self.parent
    }

    pub fn project_dir(&self, config: &ProjectConfiguration) -> PathBuf {
        self.parent.join(config.project_name.as_str())
    }
}

impl ProjectSteps for ProcessSteps {
    async fn scaffold(&mut self, config: &ProjectConfiguration) -> Result<()> {
        match generator::plan(config, &self.parent) {
            ScaffoldPlan::External(spec) => spec.run().await,
            ScaffoldPlan::Files { directories, files } => {
                generator::write_files(&self.project_dir(config), &directories, &files)
            }
        }
    }

    async fn install(
        &mut self,
        config: &ProjectConfiguration,
        manifest: &DependencyManifest,
    ) -> Result<()> {
        let commands = installer::commands(config, manifest, &self.project_dir(config));
        installer::run(&commands, self.retry).await
    }

    async fn setup(&mut self, config: &ProjectConfiguration) -> Result<Vec<String>> {
        setup::apply(config, &self.project_dir(config))
    }

    async fn cleanup(&mut self, config: &ProjectConfiguration) -> Result<()> {
        cleanup::run(config, &self.project_dir(config))
    }

    async fn git_init(&mut self, config: &ProjectConfiguration) -> Result<()> {
        CommandSpec::new("git")
            .arg("init")
            .current_dir(self.project_dir(config))
            .run()
            .await
    }
}
