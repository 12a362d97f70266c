use crate::cmd::{Runner, Step, ensure_in_path};
use crate::constants::{BUILD_DIR, CMAKE_CONFIGURE_FLAGS, LLAMA_CPP_DIR, LLAMA_CPP_REPO, VENV_DIR_NAME};
use crate::error::{Result, ToolError};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct SetupOptions {
    pub jobs: NonZeroUsize,
    pub repo_url: String,
    pub repo_dir: PathBuf,
    pub venv_dir: PathBuf,
    /// Interpreter used to create the venv.
    pub python: String,
}

impl SetupOptions {
    pub fn new(jobs: NonZeroUsize) -> Result<Self> {
        Ok(Self {
            jobs,
            repo_url: LLAMA_CPP_REPO.to_string(),
            repo_dir: PathBuf::from(LLAMA_CPP_DIR),
            venv_dir: default_venv_dir()?,
            python: "python3".to_string(),
        })
    }

    pub fn requirements_file(&self) -> PathBuf {
        self.repo_dir.join("requirements.txt")
    }

    pub fn venv_pip(&self) -> PathBuf {
        venv_bin(&self.venv_dir, "pip")
    }

    pub fn activate_hint(&self) -> String {
        if cfg!(windows) {
            format!("{}", self.venv_dir.join("Scripts").join("activate").display())
        } else {
            format!("source {}", self.venv_dir.join("bin").join("activate").display())
        }
    }

    pub fn clone_step(&self) -> Step {
        Step::new("Git clone", "git")
            .arg("clone")
            .arg(&self.repo_url)
            .arg(&self.repo_dir)
    }

    pub fn submodule_step(&self) -> Step {
        Step::new("Submodule update", "git")
            .args(["submodule", "update", "--init", "--recursive"])
            .current_dir(&self.repo_dir)
    }

    pub fn configure_step(&self) -> Step {
        Step::new("CMake configuration", "cmake")
            .args(["-S", ".", "-B", BUILD_DIR, "-G", "Ninja"])
            .args(CMAKE_CONFIGURE_FLAGS.iter().copied())
            .current_dir(&self.repo_dir)
    }

    pub fn build_step(&self) -> Step {
        Step::new("Build", "cmake")
            .args(["--build", BUILD_DIR, "--config", "Release"])
            .arg(format!("-j{}", self.jobs))
            .current_dir(&self.repo_dir)
    }

    pub fn venv_steps(&self) -> [Step; 2] {
        [
            Step::new("Virtual environment", &self.python)
                .args(["-m", "venv"])
                .arg(&self.venv_dir),
            Step::new("Python requirements", self.venv_pip())
                .args(["install", "-r"])
                .arg(self.requirements_file()),
        ]
    }

    /// Programs the sequence needs before anything is started.
    pub fn required_tools(&self) -> [&str; 4] {
        ["git", "cmake", "ninja", self.python.as_str()]
    }
}

pub fn default_venv_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ToolError::invalid("Cannot determine home directory for the venv"))?;
    Ok(home.join(VENV_DIR_NAME))
}

fn venv_bin(venv: &Path, tool: &str) -> PathBuf {
    if cfg!(windows) {
        venv.join("Scripts").join(format!("{tool}.exe"))
    } else {
        venv.join("bin").join(tool)
    }
}

pub fn check_prerequisites(opts: &SetupOptions) -> Result<()> {
    for tool in opts.required_tools() {
        ensure_in_path(tool)?;
    }
    Ok(())
}

pub fn setup_llama(runner: &mut impl Runner, opts: &SetupOptions) -> Result<()> {
    if opts.repo_dir.exists() {
        println!("Repository already exists, skipping clone.");
    } else {
        info!("cloning {} into {}", opts.repo_url, opts.repo_dir.display());
        runner.run(&opts.clone_step())?;
        println!("Repository cloned.");
    }

    runner.run(&opts.submodule_step())?;
    println!("Submodules initialized.");

    runner.run(&opts.configure_step())?;
    println!("CMake configuration completed.");

    runner.run(&opts.build_step())?;
    println!("Build completed with -j{}.", opts.jobs);

    for step in opts.venv_steps() {
        runner.run(&step)?;
    }
    println!("Virtual environment created and requirements installed.");

    println!("Setup completed successfully.");
    println!("Run the following command to activate the virtual environment:");
    println!("{}", opts.activate_hint());
    Ok(())
}
