//! External process execution
//!
//! Scaffolders and package managers are driven through [`CommandSpec`]; their
//! output is streamed to the terminal and only the exit status is inspected.

use anyhow::{Context, Result};
use colored::Colorize;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;
use tracing::{debug, warn};

/// A program invocation, described before it is run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    /// Inherit the terminal instead of streaming, for tools that ask questions
    pub interactive: bool,
    pub timeout: Option<Duration>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            interactive: false,
            timeout: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    pub fn timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    /// Shell-like rendering for messages
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn command(&self) -> TokioCommand {
        let mut command = TokioCommand::new(&self.program);
        command.args(&self.args);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        command
    }

    /// Run to completion, failing on a non-zero exit status
    pub async fn run(&self) -> Result<()> {
        let cmd = self.display();
        println!();
        println!("{} {}", "Running:".dimmed(), cmd.yellow());
        debug!(command = %cmd, cwd = ?self.cwd, "spawning");

        let execution = async {
            if self.interactive {
                self.command()
                    .status()
                    .await
                    .with_context(|| format!("Failed to start {}", self.program))
            } else {
                self.stream().await
            }
        };

        let status = match self.timeout {
            Some(limit) => match timeout(limit, execution).await {
                Ok(status) => status?,
                Err(_) => anyhow::bail!(
                    "`{}` timed out after {} seconds",
                    cmd,
                    limit.as_secs()
                ),
            },
            None => execution.await?,
        };

        println!();
        check_status(&cmd, status)
    }

    async fn stream(&self) -> Result<ExitStatus> {
        let mut child = self
            .command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("Failed to start {}", self.program))?;

        let stdout = child.stdout.take().context("Failed to capture stdout")?;
        let stderr = child.stderr.take().context("Failed to capture stderr")?;

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();
        let mut stdout_open = true;
        let mut stderr_open = true;

        while stdout_open || stderr_open {
            tokio::select! {
                line = stdout_reader.next_line(), if stdout_open => {
                    match line {
                        Ok(Some(line)) => println!("  {}", line),
                        Ok(None) => stdout_open = false,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stdout:".red(), e);
                            stdout_open = false;
                        }
                    }
                }
                line = stderr_reader.next_line(), if stderr_open => {
                    match line {
                        Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                        Ok(None) => stderr_open = false,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stderr:".red(), e);
                            stderr_open = false;
                        }
                    }
                }
            }
        }

        child
            .wait()
            .await
            .with_context(|| format!("Failed to wait for {}", self.program))
    }
}

fn check_status(cmd: &str, status: ExitStatus) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        anyhow::bail!(
            "`{}` failed with exit code: {}",
            cmd,
            status.code().unwrap_or(-1)
        )
    }
}

/// Exponential backoff for flaky network operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            initial_delay: Duration::from_millis(2000),
        }
    }
}

/// Run `op` until it succeeds or the policy's attempts are used up,
/// doubling the delay after every failure. `op` receives the 1-based attempt.
pub async fn retry<T, F, Fut>(policy: RetryPolicy, mut op: F) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let attempts = policy.attempts.max(1);
    let mut delay = policy.initial_delay;
    let mut attempt = 1;

    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < attempts => {
                warn!(attempt, error = %err, "attempt failed, retrying in {:?}", delay);
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
            Err(err) => {
                return Err(err.context(format!("Gave up after {} attempts", attempts)));
            }
        }
    }
}
