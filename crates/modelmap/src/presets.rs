//! Canned model configs for demos and tests.
//!
//! Mirrors the published `config.json` of each model, so presets exercise
//! the same normalization paths as fetched configs.

use serde_json::{json, Value};

/// A named preset config.
#[derive(Debug, Clone)]
pub struct Preset {
    /// Display name.
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Raw config, as it would arrive from the hub.
    pub config: Value,
}

/// GPT-2 small (124M, GPT-2-style field names).
pub fn gpt2_small() -> Preset {
    Preset {
        name: "GPT-2",
        description: "GPT-2 small: 12 layers, LayerNorm, tied embeddings",
        config: json!({
            "model_type": "gpt2",
            "architectures": ["GPT2LMHeadModel"],
            "n_embd": 768,
            "n_layer": 12,
            "n_head": 12,
            "n_positions": 1024,
            "vocab_size": 50257,
            "activation_function": "gelu_new",
        }),
    }
}

/// Llama 3 8B (GQA, RMSNorm, SwiGLU).
pub fn llama3_8b() -> Preset {
    Preset {
        name: "Llama 3 8B",
        description: "Llama 3 8B: grouped-query attention, RMSNorm, gated FFN",
        config: json!({
            "model_type": "llama",
            "architectures": ["LlamaForCausalLM"],
            "hidden_size": 4096,
            "intermediate_size": 14336,
            "num_hidden_layers": 32,
            "num_attention_heads": 32,
            "num_key_value_heads": 8,
            "vocab_size": 128256,
            "max_position_embeddings": 8192,
            "rms_norm_eps": 1e-5,
            "rope_theta": 500000.0,
            "hidden_act": "silu",
            "tie_word_embeddings": false,
        }),
    }
}

/// Mixtral 8x7B (sparse MoE, 8 experts, top-2 routing).
pub fn mixtral_8x7b() -> Preset {
    Preset {
        name: "Mixtral 8x7B",
        description: "Mixtral 8x7B: 8 experts per layer, top-2 routing",
        config: json!({
            "model_type": "mixtral",
            "architectures": ["MixtralForCausalLM"],
            "hidden_size": 4096,
            "intermediate_size": 14336,
            "num_hidden_layers": 32,
            "num_attention_heads": 32,
            "num_key_value_heads": 8,
            "vocab_size": 32000,
            "max_position_embeddings": 32768,
            "rms_norm_eps": 1e-5,
            "rope_theta": 1000000.0,
            "hidden_act": "silu",
            "tie_word_embeddings": false,
            "num_local_experts": 8,
            "num_experts_per_tok": 2,
        }),
    }
}

/// All built-in presets, in display order.
pub fn all() -> Vec<Preset> {
    vec![gpt2_small(), llama3_8b(), mixtral_8x7b()]
}
