use crate::constants::KNOWN_QUANT_TYPES;

pub fn is_known_quant_type(name: &str) -> bool {
    KNOWN_QUANT_TYPES
        .iter()
        .any(|(t, _)| t.eq_ignore_ascii_case(name))
}

/// `llama-quantize` also takes numeric type ids.
pub fn is_numeric_quant_id(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

pub fn format_quant_types() -> Vec<String> {
    let width = KNOWN_QUANT_TYPES
        .iter()
        .map(|(t, _)| t.len())
        .max()
        .unwrap_or(0);
    KNOWN_QUANT_TYPES
        .iter()
        .map(|(t, desc)| format!("- {t:<width$}  {desc}"))
        .collect()
}
