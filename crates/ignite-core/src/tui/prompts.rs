//! Charm-style CLI flow using cliclack

use super::ClackPrompter;
use crate::config::{Choice, ProjectConfiguration, ProjectName};
use crate::error::Outcome;
use crate::messages;
use crate::prompt::{try_answer, ConfirmQuestion, InputQuestion, PromptError, Prompter};
use crate::resolver::ConfigResolver;
use crate::runtime::{self, CommandSpec};
use crate::scaffold::{folder, Orchestrator, ProcessSteps, Report};
use crate::store::JsonFileStore;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use tracing::debug;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Name of the project folder; asked interactively when absent
    pub project_name: Option<String>,
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs) -> Result<Outcome<()>> {
    cliclack::intro(style(" create-ignite ").on_cyan().black())?;

    check_node()?;

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let outcome = create(&mut ClackPrompter::new(), args, &cwd).await?;

    if outcome.is_cancelled() {
        cliclack::outro_cancel("Setup cancelled")?;
    }
    Ok(outcome)
}

async fn create(
    prompter: &mut ClackPrompter,
    args: CreateArgs,
    cwd: &Path,
) -> Result<Outcome<()>> {
    // Step 1: Project name
    let name = match args.project_name {
        Some(name) => {
            let name = ProjectName::parse(name)?;
            cliclack::log::info(format!("Project name: {}", name))?;
            name
        }
        None => {
            let question = InputQuestion::new("Project name:")
                .placeholder("my-app")
                .validate(ProjectName::check);
            ProjectName::parse(try_answer!(prompter.input(&question)))?
        }
    };

    // Step 2: Target folder
    let name = match folder::confirm_target(prompter, cwd, name)? {
        Outcome::Completed(name) => name,
        Outcome::Cancelled => return Ok(Outcome::Cancelled),
    };

    // Step 3: Configuration
    let mut resolver = ConfigResolver::new(*prompter, JsonFileStore::from_env());
    let config = match resolver.resolve(name)? {
        Outcome::Completed(config) => config,
        Outcome::Cancelled => return Ok(Outcome::Cancelled),
    };
    debug!(?config, "resolved configuration");

    // Step 4: Package manager advisory
    check_package_manager(&config)?;

    // Step 5: Create project
    let steps = ProcessSteps::new(cwd);
    let project_dir = steps.project_dir(&config);
    let report = create_project(steps, &config).await?;
    print_report(&report)?;

    // Step 6: Summary
    print_summary(&config)?;

    // Step 7: Optional dev server
    start_dev_server(prompter, &config, &project_dir).await?;

    cliclack::outro("Happy coding!")?;
    Ok(Outcome::Completed(()))
}

fn check_node() -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking Node.js...");

    match runtime::ensure_node() {
        Ok(node) => {
            spinner.stop(format!(
                "Node.js {}",
                node.version.as_deref().unwrap_or("unknown")
            ));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Node.js check failed");
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!(
                "Please install Node.js {} or newer and try again.",
                runtime::MIN_NODE_VERSION
            );
        }
    }
}

fn check_package_manager(config: &ProjectConfiguration) -> Result<()> {
    let pm = runtime::check_package_manager(config.package_manager);
    if pm.available {
        cliclack::log::success(format!(
            "{} installed ({})",
            pm.name,
            pm.version.as_deref().unwrap_or("unknown")
        ))?;
    } else {
        cliclack::log::warning(format!(
            "{} is not installed. Install it or the installation step will fail.",
            pm.name
        ))?;
    }
    Ok(())
}

async fn create_project(steps: ProcessSteps, config: &ProjectConfiguration) -> Result<Report> {
    cliclack::log::step(format!(
        "Creating {} project {}",
        config.framework.label(),
        style(&config.project_name).bold()
    ))?;

    let mut orchestrator = Orchestrator::new(steps);
    let report = orchestrator
        .run(config, |step| {
            let _ = cliclack::log::step(step.progress());
        })
        .await?;

    Ok(report)
}

fn print_report(report: &Report) -> Result<()> {
    for note in &report.notes {
        cliclack::log::info(note)?;
    }
    for warning in &report.warnings {
        cliclack::log::warning(format!("{}: {}", warning.step, warning.message))?;
    }
    cliclack::log::success("Project created successfully")?;
    Ok(())
}

fn print_summary(config: &ProjectConfiguration) -> Result<()> {
    cliclack::note("Project", messages::project_info(config).join("\n"))?;
    cliclack::note("Next steps", messages::next_steps(config).join("\n"))?;
    cliclack::note(
        "Available commands",
        messages::available_commands(config).join("\n"),
    )?;

    let links: Vec<String> = messages::doc_links(config)
        .iter()
        .map(|link| format!("{:<14} {}", link.name, style(link.url).cyan()))
        .collect();
    cliclack::note("Documentation", links.join("\n"))?;

    cliclack::note("Tips", messages::tips(config).join("\n"))?;
    Ok(())
}

async fn start_dev_server<P: Prompter>(
    prompter: &mut P,
    config: &ProjectConfiguration,
    project_dir: &Path,
) -> Result<()> {
    let question =
        ConfirmQuestion::new("Would you like to start the development server now?", true);
    let start = match prompter.confirm(&question) {
        Ok(start) => start,
        Err(PromptError::Cancelled) => false,
        Err(PromptError::Io(e)) => return Err(e.into()),
    };
    if !start {
        return Ok(());
    }

    let pm = config.package_manager;
    let spec = CommandSpec::new(pm.command())
        .args(pm.run_args("dev"))
        .current_dir(project_dir)
        .interactive();

    if let Err(e) = spec.run().await {
        cliclack::log::error(format!("Failed to start development server: {}", e))?;
        cliclack::log::info(format!(
            "Start it manually with: cd {} && {}",
            config.project_name,
            pm.run_script("dev")
        ))?;
    }
    Ok(())
}
