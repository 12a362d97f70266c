use crate::cli::{Cli, Command, ConvertArgs, PushArgs, SetupArgs};
use crate::cmd::{SystemRunner, ensure_in_path};
use crate::convert::{self, ConvertOptions, ConvertOutcome, convert_model};
use crate::hub::{PushOptions, PushOutcome, push_gguf};
use crate::logger::init_cli_logger;
use crate::quant::format_quant_types;
use crate::setup::{self, SetupOptions, setup_llama};
use anyhow::{Context, Result, anyhow};
use clap::Parser;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);
    let mut runner = SystemRunner::new(cli.verbose);

    match cli.command {
        Command::Convert(args) => convert(&mut runner, args),
        Command::Setup(args) => setup(&mut runner, args),
        Command::Push(args) => push(&mut runner, args),
    }
}

fn convert(runner: &mut SystemRunner, args: ConvertArgs) -> Result<()> {
    if args.list_quant_types {
        println!("Quantization types:");
        for line in format_quant_types() {
            println!("{line}");
        }
        return Ok(());
    }

    let hf_model = args
        .hf_model
        .ok_or_else(|| anyhow!("--hf-model is required"))?;
    let gguf_output = args
        .gguf_output
        .ok_or_else(|| anyhow!("--gguf-output is required"))?;

    let opts = ConvertOptions {
        hf_model,
        gguf_output,
        quantized_output: args.quantized_output,
        quant_type: args.quant_type,
        quant_algo: args.quant_algo,
        llama_dir: args.llama_dir,
        python: args.python,
    };

    convert::check_prerequisites(&opts).context(
        "llama.cpp is incomplete; run `llama-tools setup` first or pass --llama-dir",
    )?;

    let outcome = convert_model(runner, &opts).context("Model conversion failed")?;
    println!("✅ Done! GGUF: {}", outcome.final_path().display());
    if let ConvertOutcome::Quantized { gguf, .. } = &outcome {
        println!("Unquantized GGUF kept at: {}", gguf.display());
    }
    Ok(())
}

fn setup(runner: &mut SystemRunner, args: SetupArgs) -> Result<()> {
    let mut opts = SetupOptions::new(args.jobs)?;
    opts.repo_url = args.repo_url;
    opts.repo_dir = args.repo_dir;
    opts.python = args.python;
    if let Some(venv_dir) = args.venv_dir {
        opts.venv_dir = venv_dir;
    }

    setup::check_prerequisites(&opts)?;
    setup_llama(runner, &opts).context("llama.cpp setup failed")?;
    Ok(())
}

fn push(runner: &mut SystemRunner, args: PushArgs) -> Result<()> {
    ensure_in_path("git")?;
    let opts = PushOptions {
        repo_id: args.repo_id,
        gguf_path: args.gguf_path,
        local_repo_dir: args.local_repo_dir,
        endpoint: args.endpoint,
    };

    let outcome = push_gguf(runner, &opts)
        .with_context(|| format!("Upload to {} failed", opts.repo_id))?;
    if let PushOutcome::Unchanged { filename } = outcome {
        println!("⚠️ {filename} was already up to date in {}; nothing new committed", opts.repo_id);
    }
    Ok(())
}
