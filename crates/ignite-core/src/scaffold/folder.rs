//! Target folder inspection and conflict handling

use crate::config::{Choice, ProjectName};
use crate::error::Outcome;
use crate::prompt::{try_answer, ConfirmQuestion, InputQuestion, Prompter, SelectQuestion};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderState {
    Missing,
    Empty,
    Occupied { entries: usize },
}

impl FolderState {
    /// Whether the project can be created without touching existing files
    pub fn is_free(&self) -> bool {
        !matches!(self, FolderState::Occupied { .. })
    }
}

pub fn inspect(path: &Path) -> Result<FolderState> {
    if !path.exists() {
        return Ok(FolderState::Missing);
    }

    let entries = std::fs::read_dir(path)
        .with_context(|| format!("Failed to read {}", path.display()))?
        .count();

    Ok(if entries == 0 {
        FolderState::Empty
    } else {
        FolderState::Occupied { entries }
    })
}

/// Remove everything in `path`.
///
/// The current working directory is emptied in place; any other folder is
/// deleted and recreated.
pub fn clear(path: &Path) -> Result<()> {
    let is_cwd = match (std::env::current_dir(), path.canonicalize()) {
        (Ok(cwd), Ok(target)) => cwd.canonicalize().map(|c| c == target).unwrap_or(false),
        _ => false,
    };

    if is_cwd {
        super::cleanup::empty_dir(path)?;
    } else {
        std::fs::remove_dir_all(path)
            .with_context(|| format!("Failed to delete {}", path.display()))?;
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to recreate {}", path.display()))?;
    }
    Ok(())
}

/// What to do when the target folder already has files in it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderAction {
    Cancel,
    Delete,
    Rename,
}

impl Choice for FolderAction {
    fn id(&self) -> &'static str {
        match self {
            FolderAction::Cancel => "cancel",
            FolderAction::Delete => "delete",
            FolderAction::Rename => "rename",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FolderAction::Cancel => "Cancel operation",
            FolderAction::Delete => "Delete existing files and continue",
            FolderAction::Rename => "Choose a different name",
        }
    }
}

/// Make sure `parent/name` can hold a new project, asking the user when it
/// is already occupied. Returns the name to create, which may differ from
/// `name` after a rename.
pub fn confirm_target<P: Prompter>(
    prompter: &mut P,
    parent: &Path,
    mut name: ProjectName,
) -> Result<Outcome<ProjectName>> {
    loop {
        let target = parent.join(name.as_str());
        let entries = match inspect(&target)? {
            FolderState::Occupied { entries } => entries,
            FolderState::Missing | FolderState::Empty => return Ok(Outcome::Completed(name)),
        };

        prompter.warn(&format!(
            "Folder \"{}\" already exists and contains {} file(s)",
            name, entries
        ))?;

        let question = SelectQuestion::new(
            "How would you like to proceed?",
            [FolderAction::Cancel, FolderAction::Delete, FolderAction::Rename],
        );
        match try_answer!(prompter.select(&question)) {
            FolderAction::Cancel => return Ok(Outcome::Cancelled),
            FolderAction::Delete => {
                let sure =
                    ConfirmQuestion::new("Are you absolutely sure? This cannot be undone!", false);
                if !try_answer!(prompter.confirm(&sure)) {
                    return Ok(Outcome::Cancelled);
                }
                clear(&target)?;
                debug!(path = %target.display(), "cleared existing folder");
                return Ok(Outcome::Completed(name));
            }
            FolderAction::Rename => {
                let question = InputQuestion::new("Enter new project name:")
                    .placeholder(format!("{}-new", name))
                    .validate(ProjectName::check);
                name = ProjectName::parse(try_answer!(prompter.input(&question)))?;
            }
        }
    }
}
