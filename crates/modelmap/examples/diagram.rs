//! Diagram example.
//!
//! Loads the built-in Mixtral preset and prints the laid-out graph as an
//! ASCII outline: one line per node with its position, plus the repeat
//! groups and edges.

use anyhow::Result;
use modelmap::prelude::*;
use modelmap::presets;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let preset = presets::mixtral_8x7b();
    let mut pipeline = Pipeline::new();
    let model = pipeline.load_value(&preset.config, preset.name);

    let meta = &model.metadata;
    println!("{}: {} params", meta.name, meta.estimated_params);
    println!(
        "{} layers, hidden {}, {} heads ({} kv), {}",
        meta.num_layers, meta.hidden_size, meta.num_heads, meta.num_kv_heads, meta.norm_type
    );

    println!(
        "\ncanvas {:.0} x {:.0}",
        model.graph.total_width, model.graph.total_height
    );
    for node in &model.graph.nodes {
        let sublabel = node.sublabel.as_deref().unwrap_or("");
        println!(
            "  ({:>5.0}, {:>5.0})  {:<40} {}",
            node.x, node.y, node.label, sublabel
        );
    }

    for group in &model.graph.groups {
        println!("\n{} × {}", group.label, group.repeat_count);
    }

    println!("\n{} edges ({} residual)", model.graph.edges.len(), {
        model.graph.edges.iter().filter(|e| e.dashed).count()
    });

    Ok(())
}
