//! Removal of generator boilerplate

use crate::config::{Framework, ProjectConfiguration};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// What to remove for one framework, relative to the project root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupPlan {
    pub files: Vec<PathBuf>,
    /// Directories that are kept but emptied
    pub emptied_dirs: Vec<PathBuf>,
}

pub fn plan(config: &ProjectConfiguration) -> CleanupPlan {
    let paths = |items: &[&str]| items.iter().map(PathBuf::from).collect::<Vec<_>>();

    match config.framework {
        Framework::React | Framework::Vue => CleanupPlan {
            files: paths(&["src/App.css", "src/logo.svg", "public/vite.svg"]),
            emptied_dirs: paths(&["src/assets", "public"]),
        },
        Framework::NextJs => CleanupPlan {
            files: paths(&["public/vercel.svg", "public/next.svg"]),
            emptied_dirs: Vec::new(),
        },
        Framework::Nuxt => CleanupPlan {
            files: Vec::new(),
            emptied_dirs: paths(&["public"]),
        },
        Framework::Express | Framework::Fastify | Framework::Fullstack => CleanupPlan::default(),
    }
}

fn remove(path: &Path) -> Result<()> {
    let result = if path.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    };
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
    }
}

/// Delete everything inside `dir`, keeping `dir` itself; a missing dir is fine
pub fn empty_dir(dir: &Path) -> Result<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }

    let entries: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .collect();

    for entry in &entries {
        remove(entry)?;
    }
    Ok(entries.len())
}

/// Apply the plan under `root`
pub fn run(config: &ProjectConfiguration, root: &Path) -> Result<()> {
    let plan = plan(config);

    for file in &plan.files {
        remove(&root.join(file))?;
    }
    for dir in &plan.emptied_dirs {
        let removed = empty_dir(&root.join(dir))?;
        debug!(dir = %dir.display(), removed, "emptied");
    }

    Ok(())
}
