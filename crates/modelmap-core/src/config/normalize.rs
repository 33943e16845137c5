//! Config normalization.
//!
//! Total transform from an arbitrary JSON value to a [`CanonicalConfig`]:
//! no failure path, malformed or missing fields silently take defaults.

use super::canonical::{CanonicalConfig, NormType};
use super::families;
use serde_json::Value;

/// Candidate keys for the hidden dimension, in priority order.
const HIDDEN_SIZE_KEYS: &[&str] = &["hidden_size", "n_embd", "d_model"];
/// Candidate keys for the feed-forward dimension.
const INTERMEDIATE_SIZE_KEYS: &[&str] = &["intermediate_size", "n_inner", "d_ff"];
/// Candidate keys for the layer count.
const NUM_LAYERS_KEYS: &[&str] = &["num_hidden_layers", "n_layer", "num_layers"];
/// Candidate keys for the attention head count.
const NUM_HEADS_KEYS: &[&str] = &["num_attention_heads", "n_head", "num_heads"];
/// Candidate keys for the KV head count.
const NUM_KV_HEADS_KEYS: &[&str] = &["num_key_value_heads", "n_head_kv", "num_kv_heads"];
/// Candidate keys for the context length.
const MAX_POSITIONS_KEYS: &[&str] = &["max_position_embeddings", "n_positions", "max_seq_len"];
/// Candidate keys for the activation function name.
const ACTIVATION_KEYS: &[&str] = &["hidden_act", "activation_function", "hidden_activation"];
/// Candidate keys for the expert count.
const NUM_EXPERTS_KEYS: &[&str] = &["num_local_experts", "num_experts", "n_routed_experts"];
/// Candidate keys for the experts-per-token count.
const EXPERTS_PER_TOKEN_KEYS: &[&str] = &[
    "num_experts_per_tok",
    "num_selected_experts",
    "num_experts_per_token",
];

/// Ceiling applied to every resolved count. Real hyperparameters sit far
/// below it; it keeps later size arithmetic inside u64 even for absurd
/// inputs.
const COUNT_CEILING: u64 = u32::MAX as u64;

/// Read a JSON number as a count. Integral floats are accepted (configs in
/// the wild carry `768.0`); fractional values are treated as absent.
fn count_value(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0)
            .map(|f| f as u64)
    })
}

/// First key in the chain holding a non-zero number, else the default.
/// Resolved values are clamped to [`COUNT_CEILING`].
fn resolve_num(raw: &Value, keys: &[&str], default: u64) -> u64 {
    keys.iter()
        .filter_map(|k| raw.get(k).and_then(count_value))
        .find(|&n| n > 0)
        .map(|n| n.min(COUNT_CEILING))
        .unwrap_or(default)
}

/// First key in the chain holding a non-empty string, else the default.
fn resolve_str(raw: &Value, keys: &[&str], default: &str) -> String {
    keys.iter()
        .filter_map(|k| raw.get(k).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}

fn resolve_bool(raw: &Value, key: &str, default: bool) -> bool {
    raw.get(key).and_then(Value::as_bool).unwrap_or(default)
}

/// Optional pass-through: present non-zero number or unset.
fn optional_num(raw: &Value, key: &str) -> Option<u64> {
    raw.get(key)
        .and_then(count_value)
        .filter(|&n| n > 0)
        .map(|n| n.min(COUNT_CEILING))
}

/// Normalize an arbitrary `config.json`-shaped value into a
/// [`CanonicalConfig`].
///
/// Handles field name differences across model families (GPT-2, Llama,
/// Falcon, Phi, Mixtral, ...). Never fails: every field falls back to a
/// documented default.
pub fn normalize(raw: &Value) -> CanonicalConfig {
    let model_type = resolve_str(raw, &["model_type"], "unknown");

    let architectures = raw
        .get("architectures")
        .and_then(Value::as_array)
        .map(|a| {
            a.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let hidden_size = resolve_num(raw, HIDDEN_SIZE_KEYS, 768);
    let intermediate_size = resolve_num(raw, INTERMEDIATE_SIZE_KEYS, hidden_size.saturating_mul(4));
    let num_hidden_layers = resolve_num(raw, NUM_LAYERS_KEYS, 12);
    let num_attention_heads = resolve_num(raw, NUM_HEADS_KEYS, 12);
    let num_key_value_heads = resolve_num(raw, NUM_KV_HEADS_KEYS, num_attention_heads);
    let vocab_size = resolve_num(raw, &["vocab_size"], 50257);
    let max_position_embeddings = resolve_num(raw, MAX_POSITIONS_KEYS, 2048);

    let norm_type = if raw.get("rms_norm_eps").is_some() || families::is_rms_norm_family(&model_type)
    {
        NormType::RmsNorm
    } else {
        NormType::LayerNorm
    };

    let activation_function = resolve_str(raw, ACTIVATION_KEYS, "gelu");
    let tie_word_embeddings = resolve_bool(raw, "tie_word_embeddings", true);

    let num_experts = resolve_num(raw, NUM_EXPERTS_KEYS, 0);
    let default_per_token = if num_experts > 0 { 2 } else { 0 };
    let num_experts_per_token = resolve_num(raw, EXPERTS_PER_TOKEN_KEYS, default_per_token);
    let is_moe = num_experts > 1;

    CanonicalConfig {
        model_type,
        architectures,
        hidden_size,
        intermediate_size,
        num_hidden_layers,
        num_attention_heads,
        num_key_value_heads,
        vocab_size,
        max_position_embeddings,
        norm_type,
        activation_function,
        tie_word_embeddings,
        is_moe,
        num_experts,
        num_experts_per_token,
        head_dim: optional_num(raw, "head_dim"),
        rope_theta: raw
            .get("rope_theta")
            .and_then(Value::as_f64)
            .filter(|&t| t > 0.0),
        sliding_window: optional_num(raw, "sliding_window"),
        raw: raw.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_takes_all_defaults() {
        let config = normalize(&json!({}));
        assert_eq!(config.model_type, "unknown");
        assert_eq!(config.hidden_size, 768);
        assert_eq!(config.intermediate_size, 3072);
        assert_eq!(config.num_hidden_layers, 12);
        assert_eq!(config.num_attention_heads, 12);
        assert_eq!(config.num_key_value_heads, 12);
        assert_eq!(config.vocab_size, 50257);
        assert_eq!(config.max_position_embeddings, 2048);
        assert_eq!(config.norm_type, NormType::LayerNorm);
        assert_eq!(config.activation_function, "gelu");
        assert!(config.tie_word_embeddings);
        assert!(!config.is_moe);
        assert_eq!(config.num_experts, 0);
        assert_eq!(config.num_experts_per_token, 0);
        assert_eq!(config.head_dim, None);
    }

    #[test]
    fn gpt2_style_keys_resolve() {
        let config = normalize(&json!({
            "model_type": "gpt2",
            "n_embd": 1024,
            "n_layer": 24,
            "n_head": 16,
            "n_positions": 1024,
            "n_inner": 4096,
            "activation_function": "gelu_new",
        }));
        assert_eq!(config.hidden_size, 1024);
        assert_eq!(config.num_hidden_layers, 24);
        assert_eq!(config.num_attention_heads, 16);
        assert_eq!(config.num_key_value_heads, 16);
        assert_eq!(config.max_position_embeddings, 1024);
        assert_eq!(config.intermediate_size, 4096);
        assert_eq!(config.activation_function, "gelu_new");
        assert_eq!(config.norm_type, NormType::LayerNorm);
    }

    #[test]
    fn llama_style_keys_resolve() {
        let config = normalize(&json!({
            "model_type": "llama",
            "hidden_size": 4096,
            "intermediate_size": 14336,
            "num_hidden_layers": 32,
            "num_attention_heads": 32,
            "num_key_value_heads": 8,
            "vocab_size": 128256,
            "max_position_embeddings": 8192,
            "rms_norm_eps": 1e-5,
            "hidden_act": "silu",
            "tie_word_embeddings": false,
            "rope_theta": 500000.0,
        }));
        assert_eq!(config.num_key_value_heads, 8);
        assert_eq!(config.norm_type, NormType::RmsNorm);
        assert_eq!(config.activation_function, "silu");
        assert!(!config.tie_word_embeddings);
        assert_eq!(config.rope_theta, Some(500000.0));
    }

    #[test]
    fn rms_norm_from_family_without_eps_field() {
        let config = normalize(&json!({ "model_type": "gemma2" }));
        assert_eq!(config.norm_type, NormType::RmsNorm);
    }

    #[test]
    fn wrong_typed_fields_fall_through() {
        let config = normalize(&json!({
            "hidden_size": "big",
            "num_hidden_layers": null,
            "num_attention_heads": [16],
            "tie_word_embeddings": "yes",
        }));
        assert_eq!(config.hidden_size, 768);
        assert_eq!(config.num_hidden_layers, 12);
        assert_eq!(config.num_attention_heads, 12);
        assert!(config.tie_word_embeddings);
    }

    #[test]
    fn zero_values_are_skipped_in_chains() {
        let config = normalize(&json!({ "hidden_size": 0, "n_embd": 2048 }));
        assert_eq!(config.hidden_size, 2048);
    }

    #[test]
    fn huge_numeric_values_are_clamped_not_panicked() {
        let config = normalize(&json!({
            "hidden_size": u64::MAX,
            "vocab_size": u64::MAX,
            "num_hidden_layers": u64::MAX,
        }));
        assert_eq!(config.hidden_size, u64::from(u32::MAX));
        assert_eq!(config.vocab_size, u64::from(u32::MAX));
        // The derived intermediate default saturates instead of overflowing.
        assert_eq!(
            config.intermediate_size,
            u64::from(u32::MAX).saturating_mul(4)
        );
    }

    #[test]
    fn integral_floats_are_accepted() {
        let config = normalize(&json!({
            "n_embd": 1536.0,
            "num_hidden_layers": 24.0,
            "head_dim": 128.0,
        }));
        assert_eq!(config.hidden_size, 1536);
        assert_eq!(config.num_hidden_layers, 24);
        assert_eq!(config.head_dim, Some(128));
    }

    #[test]
    fn fractional_floats_fall_through() {
        let config = normalize(&json!({ "hidden_size": 1000.5 }));
        assert_eq!(config.hidden_size, 768);
    }

    #[test]
    fn moe_fields_detected() {
        let config = normalize(&json!({
            "model_type": "mixtral",
            "num_local_experts": 8,
            "num_experts_per_tok": 2,
        }));
        assert!(config.is_moe);
        assert_eq!(config.num_experts, 8);
        assert_eq!(config.num_experts_per_token, 2);
    }

    #[test]
    fn experts_per_token_defaults_to_two_when_experts_present() {
        let config = normalize(&json!({ "num_experts": 16 }));
        assert_eq!(config.num_experts_per_token, 2);

        let dense = normalize(&json!({}));
        assert_eq!(dense.num_experts_per_token, 0);
    }

    #[test]
    fn single_expert_is_not_moe() {
        let config = normalize(&json!({ "num_experts": 1 }));
        assert!(!config.is_moe);
        assert_eq!(config.num_experts, 1);
    }

    #[test]
    fn non_object_input_takes_defaults() {
        let config = normalize(&json!(42));
        assert_eq!(config.hidden_size, 768);
        assert_eq!(config.model_type, "unknown");
    }

    #[test]
    fn raw_config_is_retained() {
        let raw = json!({ "model_type": "gpt2", "custom_field": true });
        let config = normalize(&raw);
        assert_eq!(config.raw, raw);
    }
}
