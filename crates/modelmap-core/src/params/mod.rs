//! Analytic parameter-count estimation.
//!
//! Sums the standard transformer weight matrices from the canonical config.
//! This is an estimate, not an exact count from inspecting real weights;
//! biases and family quirks are ignored, which keeps it within a fraction of
//! a percent for mainstream architectures.

use crate::config::CanonicalConfig;

/// Estimate total trainable parameter count.
///
/// Covers the embedding table, per-layer attention projections (GQA-aware
/// K/V sizing), per-layer feed-forward weights (gate projection included for
/// gated units, router plus all experts for MoE), norm vectors, and the LM
/// head when embeddings are untied.
///
/// MoE experts all count at full weight: this is a storage-size figure, not
/// an active-compute one.
///
/// All arithmetic saturates at `u64::MAX`: absurd configs produce a pinned
/// estimate, never a panic.
pub fn estimate_parameters(config: &CanonicalConfig) -> u64 {
    let h = config.hidden_size;
    let ff = config.intermediate_size;
    let layers = config.num_hidden_layers;
    let vocab = config.vocab_size;
    let head_dim = config.head_dim();

    let embedding = vocab.saturating_mul(h);

    // Q and O span all heads, K and V only the KV heads.
    let q = config.num_attention_heads.saturating_mul(head_dim).saturating_mul(h);
    let k = config.num_key_value_heads.saturating_mul(head_dim).saturating_mul(h);
    let v = k;
    let o = q;
    let attn_per_layer = q.saturating_add(k).saturating_add(v).saturating_add(o);

    let up_down = h.saturating_mul(ff).saturating_mul(2);
    let ffn_per_expert = if config.is_gated() {
        up_down.saturating_add(h.saturating_mul(ff))
    } else {
        up_down
    };

    let ffn_per_layer = if config.is_moe {
        let router = h.saturating_mul(config.num_experts);
        router.saturating_add(config.num_experts.saturating_mul(ffn_per_expert))
    } else {
        ffn_per_expert
    };

    let norms_per_layer = 2 * h;
    let final_norm = h;
    let lm_head = if config.tie_word_embeddings {
        0
    } else {
        vocab.saturating_mul(h)
    };

    let per_layer = attn_per_layer
        .saturating_add(ffn_per_layer)
        .saturating_add(norms_per_layer);
    embedding
        .saturating_add(layers.saturating_mul(per_layer))
        .saturating_add(final_norm)
        .saturating_add(lm_head)
}

/// Format a parameter count as a magnitude-suffixed string.
///
/// One decimal place for billions and trillions, whole numbers for millions
/// and thousands, the plain integer below a thousand.
pub fn format_params(count: u64) -> String {
    let n = count as f64;
    if n >= 1e12 {
        format!("{:.1}T", n / 1e12)
    } else if n >= 1e9 {
        format!("{:.1}B", n / 1e9)
    } else if n >= 1e6 {
        format!("{:.0}M", n / 1e6)
    } else if n >= 1e3 {
        format!("{:.0}K", n / 1e3)
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::normalize;
    use serde_json::json;

    #[test]
    fn gpt2_small_lands_on_124m() {
        let config = normalize(&json!({
            "model_type": "gpt2",
            "hidden_size": 768,
            "intermediate_size": 3072,
            "num_hidden_layers": 12,
            "num_attention_heads": 12,
            "vocab_size": 50257,
            "activation_function": "gelu_new",
            "tie_word_embeddings": true,
        }));
        let total = estimate_parameters(&config);
        assert_eq!(total, 123_551_232);
        assert_eq!(format_params(total), "124M");
    }

    #[test]
    fn untied_embeddings_add_an_lm_head() {
        let tied = normalize(&json!({ "tie_word_embeddings": true }));
        let untied = normalize(&json!({ "tie_word_embeddings": false }));
        let diff = estimate_parameters(&untied) - estimate_parameters(&tied);
        assert_eq!(diff, untied.vocab_size * untied.hidden_size);
    }

    #[test]
    fn gated_ffn_costs_an_extra_projection_per_layer() {
        let plain = normalize(&json!({ "hidden_act": "gelu" }));
        let gated = normalize(&json!({ "hidden_act": "silu" }));
        let diff = estimate_parameters(&gated) - estimate_parameters(&plain);
        assert_eq!(
            diff,
            plain.num_hidden_layers * plain.hidden_size * plain.intermediate_size
        );
    }

    #[test]
    fn gqa_shrinks_kv_projections() {
        let mha = normalize(&json!({
            "hidden_size": 4096,
            "num_attention_heads": 32,
            "num_key_value_heads": 32,
        }));
        let gqa = normalize(&json!({
            "hidden_size": 4096,
            "num_attention_heads": 32,
            "num_key_value_heads": 8,
        }));
        assert!(estimate_parameters(&gqa) < estimate_parameters(&mha));
    }

    #[test]
    fn moe_counts_every_expert_at_full_weight() {
        let moe = normalize(&json!({
            "model_type": "mixtral",
            "hidden_size": 1024,
            "intermediate_size": 4096,
            "num_hidden_layers": 4,
            "num_attention_heads": 16,
            "num_local_experts": 8,
            "num_experts_per_tok": 2,
            "hidden_act": "silu",
        }));
        let h = 1024u64;
        let ff = 4096u64;
        let per_expert = 3 * h * ff; // gated: up + down + gate
        let expected_ffn = h * 8 + 8 * per_expert;
        let total = estimate_parameters(&moe);
        let attn = 4 * h * h;
        let expected =
            moe.vocab_size * h + 4 * (attn + expected_ffn + 2 * h) + h;
        assert_eq!(total, expected);
    }

    #[test]
    fn absurd_config_saturates_instead_of_panicking() {
        let config = normalize(&json!({
            "hidden_size": u64::MAX,
            "intermediate_size": u64::MAX,
            "num_hidden_layers": u64::MAX,
            "num_attention_heads": u64::MAX,
            "vocab_size": u64::MAX,
            "num_local_experts": u64::MAX,
            "head_dim": u64::MAX,
            "tie_word_embeddings": false,
        }));
        let total = estimate_parameters(&config);
        assert_eq!(total, u64::MAX);
        assert_eq!(format_params(total), "18446744.1T");
    }

    #[test]
    fn magnitude_formatting() {
        assert_eq!(format_params(999), "999");
        assert_eq!(format_params(1_000), "1K");
        assert_eq!(format_params(117_000_000), "117M");
        assert_eq!(format_params(6_900_000_000), "6.9B");
        assert_eq!(format_params(1_800_000_000_000), "1.8T");
    }
}
