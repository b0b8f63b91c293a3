//! Post-generation steps: editor, git, dependency install and dev server.
//!
//! Every step is best effort. A failing command is logged as a warning and the
//! next step runs; nothing here touches the generated files.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use colored::Colorize;
use log::{debug, warn};

use crate::constants::{DEV_BRANCH, FIRST_COMMIT_MESSAGE, INSTALL_ENV, PACKAGE_MANAGER};
use crate::error::{Error, Result};

/// How a spawned command's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Streams {
    /// Shares the terminal with scaffold.
    Inherit,
    /// Discards output and reads nothing.
    Quiet,
}

/// A command to spawn in an explicit working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub envs: Vec<(String, String)>,
    pub streams: Streams,
}

impl ShellCommand {
    pub fn new<I, S>(program: &str, args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.to_path_buf(),
            envs: Vec::new(),
            streams: Streams::Inherit,
        }
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn quiet(mut self) -> Self {
        self.streams = Streams::Quiet;
        self
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Trait for spawning commands, so the steps can run against a recorder in tests.
pub trait CommandRunner {
    /// Runs `command` to completion.
    ///
    /// # Errors
    /// * `Error::SubprocessError` if the command cannot be spawned or exits unsuccessfully
    fn run(&self, command: &ShellCommand) -> Result<()>;
}

/// Runs commands as child processes of scaffold.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ShellCommand) -> Result<()> {
        debug!("Running '{}' in '{}'.", command, command.cwd.display());

        let mut process = Command::new(&command.program);
        process
            .args(&command.args)
            .current_dir(&command.cwd)
            .envs(command.envs.iter().map(|(k, v)| (k, v)));
        match command.streams {
            Streams::Inherit => process
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit()),
            Streams::Quiet => process.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null()),
        };

        let status = process.status().map_err(|e| Error::SubprocessError {
            command: command.to_string(),
            reason: e.to_string(),
        })?;

        if !status.success() {
            return Err(Error::SubprocessError {
                command: command.to_string(),
                reason: format!("exited with {status}"),
            });
        }
        Ok(())
    }
}

/// Post-generation steps in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Editor,
    Vcs,
    Install,
    DevServer,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Editor, Step::Vcs, Step::Install, Step::DevServer];
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Editor => "editor",
            Step::Vcs => "git",
            Step::Install => "install",
            Step::DevServer => "dev server",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Skipped,
    Failed(String),
}

/// Which steps to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOptions {
    /// Editor executable; `None` skips the editor step.
    pub editor: Option<&'static str>,
    pub git: bool,
    pub install: bool,
    pub dev_server: bool,
}

impl Default for StepOptions {
    fn default() -> Self {
        Self { editor: Some("code"), git: true, install: true, dev_server: true }
    }
}

/// Runs the post-generation steps for one destination.
pub struct PostGeneration<'a> {
    runner: &'a dyn CommandRunner,
    destination: &'a Path,
    in_place: bool,
    options: StepOptions,
}

impl<'a> PostGeneration<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        destination: &'a Path,
        in_place: bool,
        options: StepOptions,
    ) -> Self {
        Self { runner, destination, in_place, options }
    }

    fn command<I, S>(&self, program: &str, args: I) -> ShellCommand
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ShellCommand::new(program, args, self.destination)
    }

    fn git(&self, args: &[&str]) -> Result<()> {
        self.runner.run(&self.command("git", args.iter().copied()).quiet())
    }

    fn open_editor(&self) -> Result<StepStatus> {
        let Some(editor) = self.options.editor else {
            return Ok(StepStatus::Skipped);
        };
        self.runner.run(&self.command(editor, ["."]).quiet())?;
        Ok(StepStatus::Done)
    }

    /// An existing repository gets a `dev` branch; otherwise a fresh repository
    /// is created with a first commit before branching.
    fn init_vcs(&self) -> Result<StepStatus> {
        if self.in_place || !self.options.git {
            return Ok(StepStatus::Skipped);
        }

        if self.git(&["status"]).is_ok() {
            debug!("'{}' is already inside a git repository.", self.destination.display());
            self.git(&["checkout", "-b", DEV_BRANCH])?;
            if let Err(e) = self.git(&["push", "-u", "origin", DEV_BRANCH]) {
                warn!("Could not push '{DEV_BRANCH}': {e}");
            }
        } else {
            self.git(&["init"])?;
            self.git(&["add", "."])?;
            self.git(&["commit", "-m", FIRST_COMMIT_MESSAGE])?;
            self.git(&["checkout", "-b", DEV_BRANCH])?;
        }
        Ok(StepStatus::Done)
    }

    fn install(&self) -> Result<StepStatus> {
        if !self.options.install {
            return Ok(StepStatus::Skipped);
        }
        println!("Installing packages. This might take a couple of minutes.");
        println!();

        let command = INSTALL_ENV
            .iter()
            .fold(self.command(PACKAGE_MANAGER, ["install"]), |command, (k, v)| {
                command.env(k, v)
            });
        self.runner.run(&command)?;

        println!();
        println!("{} App installed successfully.", "Success!".green());
        Ok(StepStatus::Done)
    }

    fn start_dev_server(&self) -> Result<StepStatus> {
        if !self.options.dev_server {
            return Ok(StepStatus::Skipped);
        }
        println!("{}", "Initializing the development server...".cyan());
        self.runner.run(&self.command(PACKAGE_MANAGER, ["dev"]))?;
        Ok(StepStatus::Done)
    }

    /// Runs a single step, turning its failure into a warning.
    pub fn run_step(&self, step: Step) -> StepStatus {
        let result = match step {
            Step::Editor => self.open_editor(),
            Step::Vcs => self.init_vcs(),
            Step::Install => self.install(),
            Step::DevServer => self.start_dev_server(),
        };
        match result {
            Ok(status) => {
                if status == StepStatus::Skipped {
                    debug!("Skipping {step} step.");
                }
                status
            }
            Err(e) => {
                warn!("{step} step failed: {e}");
                StepStatus::Failed(e.to_string())
            }
        }
    }

    /// Runs every step in order.
    pub fn run(&self) -> Vec<(Step, StepStatus)> {
        Step::ALL.iter().map(|&step| (step, self.run_step(step))).collect()
    }
}
