//! One-call pipeline over the core stages.

use modelmap_core::config::normalize;
use modelmap_core::error::Result;
use modelmap_core::graph::ArchitectureGraph;
use modelmap_core::layout::layout_graph;
use modelmap_core::mapper::build_graph;
use modelmap_core::metadata::ModelMetadata;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Identifier for one loaded model within a [`Pipeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelHandle(pub u64);

/// A fully processed model: laid-out graph plus summary metadata.
///
/// Loads are independent; each produces a disjoint graph object, so models
/// in a comparison view never share state.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    /// Handle assigned by the pipeline.
    pub id: ModelHandle,
    /// Laid-out architecture graph, ready to render.
    pub graph: ArchitectureGraph,
    /// Display summary.
    pub metadata: ModelMetadata,
}

/// Runs normalize → map → layout → estimate for each loaded config.
///
/// The pipeline itself only hands out model handles; all heavy lifting is
/// the core's pure functions, so repeated loads of the same config produce
/// structurally identical graphs.
#[derive(Debug, Default)]
pub struct Pipeline {
    next_model: u64,
}

impl Pipeline {
    /// Create a new pipeline.
    pub fn new() -> Self {
        Self { next_model: 0 }
    }

    /// Process an already-decoded config value. Never fails: malformed
    /// fields degrade to defaults during normalization.
    pub fn load_value(&mut self, raw: &Value, name: &str) -> LoadedModel {
        self.next_model += 1;
        let id = ModelHandle(self.next_model);

        let config = normalize(raw);
        debug!(
            model = name,
            family = %config.model_type,
            layers = config.num_hidden_layers,
            moe = config.is_moe,
            "normalized config"
        );

        let mut graph = build_graph(&config);
        layout_graph(&mut graph);
        debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            width = graph.total_width,
            height = graph.total_height,
            "graph laid out"
        );

        let metadata = ModelMetadata::from_config(&config, name);
        LoadedModel { id, graph, metadata }
    }

    /// Parse config text (pasted JSON) and process it.
    pub fn load_json(&mut self, text: &str, name: &str) -> Result<LoadedModel> {
        let raw: Value = serde_json::from_str(text)?;
        Ok(self.load_value(&raw, name))
    }

    /// Read a `config.json` file and process it.
    pub fn load_file(&mut self, path: impl AsRef<Path>, name: &str) -> Result<LoadedModel> {
        let text = std::fs::read_to_string(path)?;
        self.load_json(&text, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn load_assigns_distinct_handles() {
        let mut pipeline = Pipeline::new();
        let a = pipeline.load_value(&json!({}), "a");
        let b = pipeline.load_value(&json!({}), "b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn repeated_loads_are_structurally_identical() {
        let mut pipeline = Pipeline::new();
        let raw = json!({
            "model_type": "mixtral",
            "num_local_experts": 8,
            "num_experts_per_tok": 2,
        });
        let a = pipeline.load_value(&raw, "m");
        let b = pipeline.load_value(&raw, "m");

        assert_eq!(a.graph.nodes.len(), b.graph.nodes.len());
        assert_eq!(a.graph.edges.len(), b.graph.edges.len());
        for (x, y) in a.graph.nodes.iter().zip(&b.graph.nodes) {
            assert_eq!(x.id, y.id);
            assert_eq!((x.x, x.y), (y.x, y.y));
        }
    }

    #[test]
    fn invalid_json_is_an_error_not_a_panic() {
        let mut pipeline = Pipeline::new();
        let err = pipeline.load_json("not json {", "broken");
        assert!(err.is_err());
    }

    #[test]
    fn json_text_round_trips_through_the_pipeline() {
        let mut pipeline = Pipeline::new();
        let model = pipeline
            .load_json(r#"{ "model_type": "gpt2", "n_embd": 768 }"#, "gpt2")
            .unwrap();
        assert_eq!(model.metadata.model_type, "gpt2");
        assert!(model.graph.total_height > 0.0);
    }
}
