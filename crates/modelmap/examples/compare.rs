//! Side-by-side comparison example.
//!
//! Loads every built-in preset through one pipeline and prints a summary
//! table, the multi-model comparison flow without a UI.

use anyhow::Result;
use modelmap::prelude::*;
use modelmap::presets;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut pipeline = Pipeline::new();

    println!(
        "{:<14} {:>8} {:>7} {:>7} {:>9} {:>6}",
        "model", "params", "layers", "hidden", "attention", "moe"
    );
    for preset in presets::all() {
        let model = pipeline.load_value(&preset.config, preset.name);
        let m = &model.metadata;
        let attn = if m.num_kv_heads < m.num_heads {
            format!("{}/{}", m.num_heads, m.num_kv_heads)
        } else {
            m.num_heads.to_string()
        };
        let moe = m
            .num_experts
            .map(|e| format!("{}x", e))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<14} {:>8} {:>7} {:>7} {:>9} {:>6}",
            m.name, m.estimated_params, m.num_layers, m.hidden_size, attn, moe
        );
    }

    Ok(())
}
