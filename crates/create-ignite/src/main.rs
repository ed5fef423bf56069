//! create-ignite - Interactive scaffolding for JavaScript/TypeScript projects

use clap::Parser;
use ignite_core::tui::CreateArgs;
use ignite_core::Outcome;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "create-ignite")]
#[command(about = "Scaffold React, Vue, Next.js, Nuxt, Express, Fastify and fullstack projects")]
#[command(version)]
pub struct Args {
    /// Name of the project folder to create
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            project_name: args.project_name,
        }
    }
}

/// Whether a `DEBUG` value asks for verbose output
fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn debug_enabled() -> bool {
    std::env::var("DEBUG").is_ok_and(|value| is_truthy(&value))
}

fn init_logging() {
    let default = if debug_enabled() { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        eprintln!("\nOperation cancelled");
        std::process::exit(0);
    })
    .ok();

    let args = Args::parse();
    init_logging();
    tracing::debug!(?args, "parsed arguments");

    let result = ignite_core::run(args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(Outcome::Completed(())) | Ok(Outcome::Cancelled) => ExitCode::SUCCESS,
        Err(e) => {
            if debug_enabled() {
                eprintln!("Error: {e:?}");
            } else {
                eprintln!("Error: {e:#}");
                eprintln!("Run with DEBUG=true for detailed error information");
            }
            ExitCode::FAILURE
        }
    }
}
