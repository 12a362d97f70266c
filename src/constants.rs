// llama.cpp upstream + local layout
pub const LLAMA_CPP_REPO: &str = "https://github.com/ggerganov/llama.cpp.git";
pub const LLAMA_CPP_DIR: &str = "llama.cpp";
pub const CONVERT_SCRIPT: &str = "convert_hf_to_gguf.py";
pub const QUANTIZE_BIN: &str = "llama-quantize";
pub const BUILD_DIR: &str = "build";
pub const DEFAULT_QUANT_ALGO: &str = "8";
pub const VENV_DIR_NAME: &str = "llama-cpp-venv";

pub const CMAKE_CONFIGURE_FLAGS: &[&str] = &[
    "-DCMAKE_BUILD_TYPE=Release",
    "-DLLAMA_BUILD_TESTS=OFF",
    "-DLLAMA_BUILD_EXAMPLES=ON",
    "-DLLAMA_BUILD_SERVER=ON",
    "-DLLAMA_CURL=OFF",
];

// Hugging Face Hub
pub const HF_ENDPOINT: &str = "https://huggingface.co";
pub const HF_WHOAMI_PATH: &str = "api/whoami-v2";
pub const HF_TOKEN_ENV: &str = "HF_TOKEN";
pub const HF_HOME_ENV: &str = "HF_HOME";
pub const HF_LOGIN_CLI: &str = "huggingface-cli";
pub const DEFAULT_LOCAL_REPO_DIR: &str = "./hf_tmp_repo";

/// Types understood by `llama-quantize` (see `llama-quantize --help`).
pub const KNOWN_QUANT_TYPES: &[(&str, &str)] = &[
    ("Q4_0", "4.34G, +0.4685 ppl @ Llama-3-8B"),
    ("Q4_1", "4.78G, +0.4511 ppl @ Llama-3-8B"),
    ("Q5_0", "5.21G, +0.1316 ppl @ Llama-3-8B"),
    ("Q5_1", "5.65G, +0.1062 ppl @ Llama-3-8B"),
    ("IQ2_XXS", "2.06 bpw quantization"),
    ("IQ2_XS", "2.31 bpw quantization"),
    ("IQ2_S", "2.5  bpw quantization"),
    ("IQ2_M", "2.7  bpw quantization"),
    ("IQ1_S", "1.56 bpw quantization"),
    ("IQ1_M", "1.75 bpw quantization"),
    ("Q2_K", "2.96G, +3.5199 ppl @ Llama-3-8B"),
    ("Q2_K_S", "2.96G, +3.1836 ppl @ Llama-3-8B"),
    ("IQ3_XXS", "3.06 bpw quantization"),
    ("IQ3_S", "3.44 bpw quantization"),
    ("IQ3_M", "3.66 bpw quantization mix"),
    ("Q3_K_S", "3.41G, +1.6321 ppl @ Llama-3-8B"),
    ("Q3_K_M", "3.74G, +0.6569 ppl @ Llama-3-8B"),
    ("Q3_K_L", "4.03G, +0.5562 ppl @ Llama-3-8B"),
    ("IQ4_NL", "4.50 bpw non-linear quantization"),
    ("IQ4_XS", "4.25 bpw non-linear quantization"),
    ("Q4_K_S", "4.37G, +0.2689 ppl @ Llama-3-8B"),
    ("Q4_K_M", "4.58G, +0.1754 ppl @ Llama-3-8B"),
    ("Q5_K_S", "5.21G, +0.1049 ppl @ Llama-3-8B"),
    ("Q5_K_M", "5.33G, +0.0569 ppl @ Llama-3-8B"),
    ("Q6_K", "6.14G, +0.0217 ppl @ Llama-3-8B"),
    ("Q8_0", "7.96G, +0.0026 ppl @ Llama-3-8B"),
    ("F16", "14.00G, +0.0020 ppl @ Mistral-7B"),
    ("BF16", "14.00G, -0.0050 ppl @ Mistral-7B"),
    ("F32", "26.00G @ 7B"),
    ("COPY", "only copy tensors, no quantizing"),
];
