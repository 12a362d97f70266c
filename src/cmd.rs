use crate::error::{Result, ToolError};
use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

pub fn ensure_in_path(bin: impl AsRef<OsStr>) -> Result<PathBuf> {
    let bin = bin.as_ref();
    which::which(bin).map_err(|_| ToolError::MissingTool(bin.to_string_lossy().into_owned()))
}

/// One external invocation in a fail-fast sequence.
#[derive(Debug, Clone)]
pub struct Step {
    pub label: String,
    pub program: OsString,
    pub args: Vec<OsString>,
    pub cwd: Option<PathBuf>,
    /// Inherit the terminal even when not verbose (login prompts).
    pub interactive: bool,
    secret: Option<String>,
}

impl Step {
    pub fn new(label: impl Into<String>, program: impl Into<OsString>) -> Self {
        Self {
            label: label.into(),
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            interactive: false,
            secret: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
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

    /// Mask `secret` wherever it shows up in `command_line()`.
    pub fn redact(mut self, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        if !secret.is_empty() {
            self.secret = Some(secret);
        }
        self
    }

    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Printable command line, safe to log.
    pub fn command_line(&self) -> String {
        let mut line = self.program_name();
        for a in &self.args {
            line.push(' ');
            line.push_str(&a.to_string_lossy());
        }
        match &self.secret {
            Some(s) => line.replace(s.as_str(), "***"),
            None => line,
        }
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn failed(&self, status: ExitStatus) -> ToolError {
        ToolError::CommandFailed {
            step: self.label.clone(),
            command: self.command_line(),
            code: status.code(),
        }
    }

    fn spawn_error(&self, source: std::io::Error) -> ToolError {
        ToolError::Spawn {
            program: self.program_name(),
            source,
        }
    }
}

/// Executes steps. Swapped out in tests to record the sequence.
pub trait Runner {
    /// Run to completion; a non-zero exit is an error.
    fn run(&mut self, step: &Step) -> Result<()>;

    /// Run and return stdout; a non-zero exit is an error.
    fn capture(&mut self, step: &Step) -> Result<String>;
}

#[derive(Debug, Default)]
pub struct SystemRunner {
    pub verbose: bool,
}

impl SystemRunner {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Runner for SystemRunner {
    fn run(&mut self, step: &Step) -> Result<()> {
        debug!(cwd = ?step.cwd, "running {}", step.command_line());
        let status = if step.interactive {
            step.to_command()
                .status()
                .map_err(|e| step.spawn_error(e))?
        } else {
            let pb = (!self.verbose).then(|| spinner(&step.label));
            let status = run_cmd(&mut step.to_command(), self.verbose);
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }
            status.map_err(|e| step.spawn_error(e))?
        };
        if status.success() {
            Ok(())
        } else {
            Err(step.failed(status))
        }
    }

    fn capture(&mut self, step: &Step) -> Result<String> {
        debug!(cwd = ?step.cwd, "capturing {}", step.command_line());
        let output = step
            .to_command()
            .stdin(Stdio::null())
            .output()
            .map_err(|e| step.spawn_error(e))?;
        if !output.status.success() {
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
            return Err(step.failed(output.status));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Verbose: stream the child's output. Quiet: buffer it, echo stderr only on failure.
pub fn run_cmd(cmd: &mut Command, verbose: bool) -> std::io::Result<ExitStatus> {
    if verbose {
        cmd.status()
    } else {
        let output = cmd.output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            eprintln!("{stderr}");
        }
        Ok(output.status)
    }
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠇⠋⠙⠸⠴⠦⠇"),
    );
    pb.set_message(format!("{msg}…"));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
