//! Model-family knowledge, kept as data.
//!
//! New families get supported by extending these tables, not by adding
//! branches elsewhere.

/// Families whose reference implementations use RMSNorm.
pub const RMS_NORM_FAMILIES: &[&str] = &[
    "llama",
    "mistral",
    "mixtral",
    "qwen2",
    "qwen2_moe",
    "gemma",
    "gemma2",
    "phi3",
    "deepseek_v2",
];

/// Activation names that imply a gated linear unit (SwiGLU-style FFN with a
/// third gate projection).
pub const GATED_ACTIVATIONS: &[&str] = &["silu", "swiglu", "gelu_pytorch_tanh"];

/// Families that use gated FFNs even when the activation name alone does not
/// say so.
pub const GATED_FAMILIES: &[&str] = &[
    "llama",
    "mistral",
    "mixtral",
    "qwen2",
    "qwen2_moe",
    "gemma",
    "gemma2",
    "phi3",
    "deepseek_v2",
];

/// Whether a family defaults to RMSNorm.
pub fn is_rms_norm_family(model_type: &str) -> bool {
    RMS_NORM_FAMILIES.contains(&model_type)
}

/// Whether the FFN is a gated linear unit, judged from activation name or
/// model family.
pub fn is_gated(activation: &str, model_type: &str) -> bool {
    GATED_ACTIVATIONS.contains(&activation) || GATED_FAMILIES.contains(&model_type)
}
