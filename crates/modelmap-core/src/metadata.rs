//! Display-facing model summary.

use crate::config::CanonicalConfig;
use crate::params::{estimate_parameters, format_params};
use serde::{Deserialize, Serialize};

/// Read-only summary shown alongside the diagram.
///
/// Derived once from a canonical config plus a display name, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Display name (repo id or user-supplied).
    pub name: String,
    /// Model family tag.
    pub model_type: String,
    /// Formatted parameter estimate ("~124M").
    pub estimated_params: String,
    /// Vocabulary size.
    pub vocab_size: u64,
    /// Hidden dimension.
    pub hidden_size: u64,
    /// Layer count.
    pub num_layers: u64,
    /// Attention head count.
    pub num_heads: u64,
    /// KV head count.
    pub num_kv_heads: u64,
    /// Feed-forward dimension.
    pub intermediate_size: u64,
    /// Maximum sequence length.
    pub max_seq_len: u64,
    /// Normalization kind name.
    pub norm_type: String,
    /// Activation function name.
    pub activation: String,
    /// Whether the model is mixture-of-experts.
    pub is_moe: bool,
    /// Expert count, for MoE models.
    pub num_experts: Option<u64>,
    /// Experts per token, for MoE models.
    pub num_experts_per_token: Option<u64>,
}

impl ModelMetadata {
    /// Build the summary for a config.
    pub fn from_config(config: &CanonicalConfig, name: impl Into<String>) -> Self {
        let params = estimate_parameters(config);
        Self {
            name: name.into(),
            model_type: config.model_type.clone(),
            estimated_params: format!("~{}", format_params(params)),
            vocab_size: config.vocab_size,
            hidden_size: config.hidden_size,
            num_layers: config.num_hidden_layers,
            num_heads: config.num_attention_heads,
            num_kv_heads: config.num_key_value_heads,
            intermediate_size: config.intermediate_size,
            max_seq_len: config.max_position_embeddings,
            norm_type: config.norm_type.as_str().to_string(),
            activation: config.activation_function.clone(),
            is_moe: config.is_moe,
            num_experts: (config.num_experts > 0).then_some(config.num_experts),
            num_experts_per_token: (config.num_experts_per_token > 0)
                .then_some(config.num_experts_per_token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::normalize;
    use serde_json::json;

    #[test]
    fn gpt2_small_summary() {
        let config = normalize(&json!({
            "model_type": "gpt2",
            "n_embd": 768,
            "n_inner": 3072,
            "n_layer": 12,
            "n_head": 12,
            "vocab_size": 50257,
            "activation_function": "gelu_new",
        }));
        let meta = ModelMetadata::from_config(&config, "openai-community/gpt2");
        assert_eq!(meta.estimated_params, "~124M");
        assert_eq!(meta.norm_type, "layer_norm");
        assert_eq!(meta.num_experts, None);
        assert!(!meta.is_moe);
    }

    #[test]
    fn moe_fields_surface_when_present() {
        let config = normalize(&json!({
            "model_type": "mixtral",
            "num_local_experts": 8,
            "num_experts_per_tok": 2,
        }));
        let meta = ModelMetadata::from_config(&config, "mixtral");
        assert!(meta.is_moe);
        assert_eq!(meta.num_experts, Some(8));
        assert_eq!(meta.num_experts_per_token, Some(2));
    }
}
