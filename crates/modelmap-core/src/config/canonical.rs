//! Canonical model configuration.

use serde::{Deserialize, Serialize};

/// Normalization layer kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormType {
    /// Standard LayerNorm (GPT-2 lineage).
    LayerNorm,
    /// RMSNorm (Llama lineage).
    RmsNorm,
}

impl NormType {
    /// Display label used on norm nodes.
    pub fn label(&self) -> &'static str {
        match self {
            NormType::LayerNorm => "LayerNorm",
            NormType::RmsNorm => "RMSNorm",
        }
    }

    /// Serialized name (`layer_norm` / `rms_norm`).
    pub fn as_str(&self) -> &'static str {
        match self {
            NormType::LayerNorm => "layer_norm",
            NormType::RmsNorm => "rms_norm",
        }
    }
}

/// Normalized, family-agnostic description of a transformer model.
///
/// Every numeric field is resolved at construction time; there is no absent
/// or NaN state. Built once per load by [`normalize`](super::normalize) and
/// immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalConfig {
    /// Model family tag (`llama`, `gpt2`, `mixtral`, ...).
    pub model_type: String,
    /// Architecture class names, as declared by the config.
    pub architectures: Vec<String>,
    /// Hidden dimension.
    pub hidden_size: u64,
    /// Intermediate (feed-forward) dimension.
    pub intermediate_size: u64,
    /// Number of transformer layers.
    pub num_hidden_layers: u64,
    /// Number of attention heads.
    pub num_attention_heads: u64,
    /// Number of KV heads (< attention heads for GQA, 1 for MQA).
    pub num_key_value_heads: u64,
    /// Vocabulary size.
    pub vocab_size: u64,
    /// Maximum sequence length.
    pub max_position_embeddings: u64,
    /// Normalization layer kind.
    pub norm_type: NormType,
    /// Activation function name.
    pub activation_function: String,
    /// Whether input and output embeddings share weights.
    pub tie_word_embeddings: bool,
    /// Whether the feed-forward blocks are mixture-of-experts.
    pub is_moe: bool,
    /// Number of experts (0 for dense models).
    pub num_experts: u64,
    /// Experts activated per token (0 for dense models).
    pub num_experts_per_token: u64,
    /// Explicit head dimension, when the config declares one.
    pub head_dim: Option<u64>,
    /// Rotary embedding base, when present.
    pub rope_theta: Option<f64>,
    /// Sliding attention window, when present.
    pub sliding_window: Option<u64>,
    /// Original raw config, retained for inspector display only.
    pub raw: serde_json::Value,
}

impl CanonicalConfig {
    /// Effective head dimension: the explicit value if declared, otherwise
    /// `hidden_size / num_attention_heads` floored.
    pub fn head_dim(&self) -> u64 {
        match self.head_dim {
            Some(d) if d > 0 => d,
            _ => self.hidden_size / self.num_attention_heads.max(1),
        }
    }

    /// Whether key/value heads are grouped (GQA), i.e. fewer KV heads than
    /// query heads but more than one.
    pub fn is_gqa(&self) -> bool {
        self.num_key_value_heads > 1 && self.num_key_value_heads < self.num_attention_heads
    }

    /// Whether attention is multi-query (a single KV head).
    pub fn is_mqa(&self) -> bool {
        self.num_key_value_heads == 1
    }

    /// Whether the feed-forward block uses a gated linear unit, judged from
    /// the activation name or the model family.
    pub fn is_gated(&self) -> bool {
        super::families::is_gated(&self.activation_function, &self.model_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(hidden: u64, heads: u64, kv: u64, head_dim: Option<u64>) -> CanonicalConfig {
        CanonicalConfig {
            model_type: "llama".to_string(),
            architectures: Vec::new(),
            hidden_size: hidden,
            intermediate_size: hidden * 4,
            num_hidden_layers: 2,
            num_attention_heads: heads,
            num_key_value_heads: kv,
            vocab_size: 32000,
            max_position_embeddings: 2048,
            norm_type: NormType::RmsNorm,
            activation_function: "silu".to_string(),
            tie_word_embeddings: false,
            is_moe: false,
            num_experts: 0,
            num_experts_per_token: 0,
            head_dim,
            rope_theta: None,
            sliding_window: None,
            raw: serde_json::Value::Null,
        }
    }

    #[test]
    fn head_dim_derives_from_hidden_size() {
        assert_eq!(config(4096, 32, 32, None).head_dim(), 128);
        // 770 / 12 floors
        assert_eq!(config(770, 12, 12, None).head_dim(), 64);
    }

    #[test]
    fn explicit_head_dim_wins() {
        assert_eq!(config(3072, 16, 16, Some(256)).head_dim(), 256);
    }

    #[test]
    fn gqa_and_mqa_classification() {
        assert!(config(4096, 32, 8, None).is_gqa());
        assert!(!config(4096, 32, 8, None).is_mqa());
        assert!(config(4096, 32, 1, None).is_mqa());
        assert!(!config(4096, 32, 1, None).is_gqa());
        assert!(!config(4096, 32, 32, None).is_gqa());
    }
}
