//! Package installation

use crate::config::{Framework, ProjectConfiguration};
use crate::deps::DependencyManifest;
use crate::runtime::{retry, CommandSpec, RetryPolicy};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// One package-manager invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub spec: CommandSpec,
    /// Network-bound additions are retried with backoff
    pub retry: bool,
}

/// Directories that get a plain `install` of what their package.json lists
pub fn install_dirs(config: &ProjectConfiguration, root: &Path) -> Vec<PathBuf> {
    match config.framework {
        Framework::Fullstack => vec![
            root.to_path_buf(),
            root.join("apps").join("frontend"),
            root.join("apps").join("backend"),
        ],
        _ => vec![root.to_path_buf()],
    }
}

/// Directory the selected packages are added to
pub fn target_dir(config: &ProjectConfiguration, root: &Path) -> PathBuf {
    match config.framework {
        Framework::Fullstack => root.join("apps").join("frontend"),
        _ => root.to_path_buf(),
    }
}

/// Every command the install step runs, in order
pub fn commands(
    config: &ProjectConfiguration,
    manifest: &DependencyManifest,
    root: &Path,
) -> Vec<InstallCommand> {
    let pm = config.package_manager;

    let mut commands: Vec<InstallCommand> = install_dirs(config, root)
        .into_iter()
        .map(|dir| InstallCommand {
            spec: CommandSpec::new(pm.command())
                .args(pm.install_args())
                .current_dir(dir),
            retry: false,
        })
        .collect();

    let target = target_dir(config, root);
    for (packages, dev) in [
        (&manifest.dependencies, false),
        (&manifest.dev_dependencies, true),
    ] {
        if packages.is_empty() {
            continue;
        }
        commands.push(InstallCommand {
            spec: CommandSpec::new(pm.command())
                .args(pm.add_args(packages, dev))
                .current_dir(&target),
            retry: true,
        });
    }

    commands
}

/// Run the commands in order, stopping at the first failure
pub async fn run(commands: &[InstallCommand], policy: RetryPolicy) -> Result<()> {
    for command in commands {
        let spec = &command.spec;
        if command.retry {
            retry(policy, move |_| spec.run()).await?;
        } else {
            spec.run().await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fixtures::config;
    use crate::config::{CssFramework, PackageManager, StateManagement};
    use crate::deps;

    fn rendered(commands: &[InstallCommand]) -> Vec<String> {
        commands.iter().map(|c| c.spec.display()).collect()
    }

    #[test]
    fn test_npm_commands() {
        let mut cfg = config(Framework::React);
        cfg.css_framework = CssFramework::Tailwind;
        cfg.state_management = StateManagement::Zustand;
        let manifest = deps::select(&cfg);

        let commands = commands(&cfg, &manifest, Path::new("/p"));
        assert_eq!(
            rendered(&commands),
            vec![
                "npm install",
                "npm install zustand",
                "npm install --save-dev tailwindcss @tailwindcss/vite typescript @types/react @types/react-dom",
            ]
        );
        assert!(!commands[0].retry);
        assert!(commands[1].retry && commands[2].retry);
        assert!(commands
            .iter()
            .all(|c| c.spec.cwd.as_deref() == Some(Path::new("/p"))));
    }

    #[test]
    fn test_installs_are_not_time_limited() {
        let mut cfg = config(Framework::Fullstack);
        cfg.state_management = StateManagement::Redux;
        let commands = commands(&cfg, &deps::select(&cfg), Path::new("/p"));
        assert!(commands.len() > 3);
        assert!(commands.iter().all(|c| c.spec.timeout.is_none()));
    }

    #[test]
    fn test_yarn_and_pnpm_use_add() {
        let mut cfg = config(Framework::Express);
        for (pm, expected) in [
            (PackageManager::Yarn, "yarn add -D"),
            (PackageManager::Pnpm, "pnpm add -D"),
        ] {
            cfg.package_manager = pm;
            let commands = commands(&cfg, &deps::select(&cfg), Path::new("."));
            assert!(rendered(&commands)[1].starts_with(&format!("{} add express", pm.command())));
            assert!(rendered(&commands)[2].starts_with(expected));
        }
    }

    #[test]
    fn test_empty_manifest_only_installs() {
        let mut cfg = config(Framework::Nuxt);
        cfg.language = crate::config::Language::JavaScript;
        let manifest = deps::select(&cfg);
        assert!(manifest.is_empty());

        let commands = commands(&cfg, &manifest, Path::new("."));
        assert_eq!(rendered(&commands), vec!["npm install"]);
    }

    #[test]
    fn test_fullstack_installs_every_app() {
        let mut cfg = config(Framework::Fullstack);
        cfg.install_axios = true;
        let root = Path::new("/p");
        let commands = commands(&cfg, &deps::select(&cfg), root);

        let dirs: Vec<_> = commands.iter().filter_map(|c| c.spec.cwd.clone()).collect();
        assert_eq!(dirs[0], root);
        assert_eq!(dirs[1], root.join("apps/frontend"));
        assert_eq!(dirs[2], root.join("apps/backend"));
        assert_eq!(dirs[3], root.join("apps/frontend"));
        assert_eq!(commands[3].spec.display(), "npm install axios");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_stops_at_first_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        let commands = vec![
            InstallCommand {
                spec: CommandSpec::new("sh").args(["-c", "exit 1"]),
                retry: true,
            },
            InstallCommand {
                spec: CommandSpec::new("sh")
                    .args(["-c", "touch reached"])
                    .current_dir(dir.path()),
                retry: false,
            },
        ];
        let policy = RetryPolicy {
            attempts: 2,
            initial_delay: std::time::Duration::ZERO,
        };

        let err = run(&commands, policy).await.unwrap_err();
        assert!(err.to_string().contains("2 attempts"));
        assert!(!dir.path().join("reached").exists());
    }
}
