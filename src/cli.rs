use crate::constants::{
    DEFAULT_LOCAL_REPO_DIR, DEFAULT_QUANT_ALGO, HF_ENDPOINT, LLAMA_CPP_DIR, LLAMA_CPP_REPO,
};
use clap::{Args, Parser, Subcommand, ValueHint};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "llama-tools", version, about = "Build llama.cpp, convert HF models to GGUF and push them to the Hub")]
pub struct Cli {
    /// Stream output from git/cmake/python instead of showing a spinner
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert HF model to GGUF, optionally quantize
    Convert(ConvertArgs),
    /// Clone and build llama.cpp, then set up its Python environment
    Setup(SetupArgs),
    /// Upload a GGUF model to Hugging Face Hub
    Push(PushArgs),
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// HuggingFace model path or ID
    #[arg(long, value_hint = ValueHint::AnyPath, required_unless_present = "list_quant_types")]
    pub hf_model: Option<String>,

    /// Path to save the GGUF file
    #[arg(long, value_hint = ValueHint::FilePath, required_unless_present = "list_quant_types")]
    pub gguf_output: Option<PathBuf>,

    /// Path to save quantized GGUF file (if quantizing)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub quantized_output: Option<PathBuf>,

    /// Quantization type (e.g. Q8_0). Leave empty to skip quantization
    #[arg(long)]
    pub quant_type: Option<String>,

    /// Quantization algorithm parameter passed through to llama-quantize
    #[arg(long, default_value = DEFAULT_QUANT_ALGO)]
    pub quant_algo: String,

    /// llama.cpp checkout containing convert_hf_to_gguf.py and build/
    #[arg(long, env = "LLAMA_CPP_DIR", default_value = LLAMA_CPP_DIR, value_hint = ValueHint::DirPath)]
    pub llama_dir: PathBuf,

    /// Python interpreter used to run the convert script
    #[arg(long, default_value = "python")]
    pub python: String,

    /// List quantization types known to llama-quantize and exit
    #[arg(long)]
    pub list_quant_types: bool,
}

#[derive(Debug, Args)]
pub struct SetupArgs {
    /// Number of parallel build jobs
    #[arg(short, long)]
    pub jobs: NonZeroUsize,

    /// Git URL of llama.cpp
    #[arg(long, default_value = LLAMA_CPP_REPO, value_hint = ValueHint::Url)]
    pub repo_url: String,

    /// Where to clone llama.cpp
    #[arg(long, env = "LLAMA_CPP_DIR", default_value = LLAMA_CPP_DIR, value_hint = ValueHint::DirPath)]
    pub repo_dir: PathBuf,

    /// Virtual environment location. Defaults to ~/llama-cpp-venv
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub venv_dir: Option<PathBuf>,

    /// Python interpreter used to create the venv
    #[arg(long, default_value = "python3")]
    pub python: String,
}

#[derive(Debug, Args)]
pub struct PushArgs {
    /// Hugging Face repo ID (e.g. username/model-name)
    #[arg(long)]
    pub repo_id: String,

    /// Path to .gguf file to upload
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub gguf_path: PathBuf,

    /// Path to local clone of the repo
    #[arg(long, default_value = DEFAULT_LOCAL_REPO_DIR, value_hint = ValueHint::DirPath)]
    pub local_repo_dir: PathBuf,

    /// Hub endpoint
    #[arg(long, env = "HF_ENDPOINT", default_value = HF_ENDPOINT, value_hint = ValueHint::Url)]
    pub endpoint: String,
}
