use crate::cmd::{Runner, Step, ensure_in_path};
use crate::constants::{
    BUILD_DIR, CONVERT_SCRIPT, DEFAULT_QUANT_ALGO, LLAMA_CPP_DIR, QUANTIZE_BIN,
};
use crate::error::{Result, ToolError};
use crate::fs_utils::find_binary;
use crate::quant::{is_known_quant_type, is_numeric_quant_id};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// HF model directory or hub id.
    pub hf_model: String,
    pub gguf_output: PathBuf,
    pub quantized_output: Option<PathBuf>,
    pub quant_type: Option<String>,
    pub quant_algo: String,
    /// llama.cpp checkout holding the convert script and build tree.
    pub llama_dir: PathBuf,
    pub python: String,
}

impl ConvertOptions {
    pub fn new(hf_model: impl Into<String>, gguf_output: impl Into<PathBuf>) -> Self {
        Self {
            hf_model: hf_model.into(),
            gguf_output: gguf_output.into(),
            quantized_output: None,
            quant_type: None,
            quant_algo: DEFAULT_QUANT_ALGO.to_string(),
            llama_dir: PathBuf::from(LLAMA_CPP_DIR),
            python: "python".to_string(),
        }
    }

    pub fn with_quantization(mut self, quant_type: impl Into<String>, out: impl Into<PathBuf>) -> Self {
        self.quant_type = Some(quant_type.into());
        self.quantized_output = Some(out.into());
        self
    }

    /// Quantization runs only when both a type and a destination are given.
    pub fn quantize_plan(&self) -> Option<(&str, &Path)> {
        let quant_type = self.quant_type.as_deref().filter(|t| !t.trim().is_empty())?;
        let out = self
            .quantized_output
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())?;
        Some((quant_type, out))
    }

    pub fn convert_script(&self) -> PathBuf {
        self.llama_dir.join(CONVERT_SCRIPT)
    }

    /// `build/bin/llama-quantize`, or whatever the build tree actually produced.
    pub fn quantize_binary(&self) -> PathBuf {
        let build = self.llama_dir.join(BUILD_DIR);
        let canonical = build.join("bin").join(QUANTIZE_BIN);
        if canonical.exists() {
            return canonical;
        }
        match find_binary(&build, QUANTIZE_BIN) {
            Some(found) => {
                debug!("using {} found in build tree", found.display());
                found
            }
            None => canonical,
        }
    }

    pub fn convert_step(&self) -> Step {
        Step::new("Conversion", &self.python)
            .arg(self.convert_script())
            .arg(&self.hf_model)
            .arg("--outfile")
            .arg(&self.gguf_output)
    }

    pub fn quantize_step(&self, quant_type: &str, out: &Path) -> Step {
        Step::new("Quantization", self.quantize_binary())
            .arg(&self.gguf_output)
            .arg(out)
            .arg(quant_type)
            .arg(&self.quant_algo)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertOutcome {
    Converted { gguf: PathBuf },
    Quantized { gguf: PathBuf, quantized: PathBuf },
}

impl ConvertOutcome {
    /// The file a caller would ship.
    pub fn final_path(&self) -> &Path {
        match self {
            Self::Converted { gguf } => gguf,
            Self::Quantized { quantized, .. } => quantized,
        }
    }
}

/// Fail before a long conversion when a later step could never start.
pub fn check_prerequisites(opts: &ConvertOptions) -> Result<()> {
    let script = opts.convert_script();
    if !script.is_file() {
        return Err(ToolError::MissingTool(script.display().to_string()));
    }
    if opts.quantize_plan().is_some() {
        let quantize = opts.quantize_binary();
        if !quantize.is_file() {
            return Err(ToolError::MissingTool(quantize.display().to_string()));
        }
    }
    ensure_in_path(&opts.python)?;
    Ok(())
}

pub fn convert_model(runner: &mut impl Runner, opts: &ConvertOptions) -> Result<ConvertOutcome> {
    if opts.hf_model.trim().is_empty() {
        return Err(ToolError::invalid("HF model path or id must not be empty"));
    }

    let plan = opts.quantize_plan();
    if let Some((quant_type, _)) = plan {
        if !is_known_quant_type(quant_type) && !is_numeric_quant_id(quant_type) {
            warn!("'{quant_type}' is not a known llama-quantize type; passing it through anyway");
        }
    }

    println!("Converting HuggingFace model to GGUF...");
    runner.run(&opts.convert_step())?;
    info!("GGUF written to {}", opts.gguf_output.display());

    let outcome = match plan {
        Some((quant_type, out)) => {
            println!("Quantizing GGUF using {quant_type}...");
            runner.run(&opts.quantize_step(quant_type, out))?;
            ConvertOutcome::Quantized {
                gguf: opts.gguf_output.clone(),
                quantized: out.to_path_buf(),
            }
        }
        None => {
            println!("Quantization skipped; raw GGUF saved.");
            ConvertOutcome::Converted {
                gguf: opts.gguf_output.clone(),
            }
        }
    };

    println!("Conversion completed.");
    Ok(outcome)
}
