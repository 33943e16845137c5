//! # Modelmap
//!
//! Transformer architecture diagrams from `config.json` files.
//!
//! Modelmap turns a model configuration from any HuggingFace-style family
//! (GPT-2, Llama, Mixtral, Phi, ...) into a laid-out diagram graph plus a
//! summary of the architecture:
//! - **Normalize** heterogeneous config field names into one canonical schema
//! - **Map** the canonical config to nodes, edges, and repeat groups
//! - **Layout** the graph into collision-free 2D coordinates
//! - **Estimate** the total parameter count
//!
//! ## Quick Start
//!
//! ```rust
//! use modelmap::prelude::*;
//!
//! let mut pipeline = Pipeline::new();
//! let model = pipeline.load_json(
//!     r#"{ "model_type": "gpt2", "n_embd": 768, "n_layer": 12 }"#,
//!     "gpt2",
//! )?;
//!
//! println!("{} ({})", model.metadata.name, model.metadata.estimated_params);
//! for node in &model.graph.nodes {
//!     println!("{} at ({}, {})", node.label, node.x, node.y);
//! }
//! # Ok::<(), modelmap::ModelmapError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Re-export core crate
pub use modelmap_core::*;

mod pipeline;
pub mod presets;

pub use pipeline::{LoadedModel, ModelHandle, Pipeline};

/// Commonly used types.
pub mod prelude {
    pub use crate::pipeline::{LoadedModel, ModelHandle, Pipeline};
    pub use crate::{
        config::{normalize, CanonicalConfig, NormType},
        error::{ModelmapError, Result},
        graph::{ArchitectureGraph, GraphEdge, GraphGroup, GraphNode, NodeType},
        layout::layout_graph,
        mapper::build_graph,
        metadata::ModelMetadata,
        params::{estimate_parameters, format_params},
    };

    // Re-export useful external types
    pub use serde_json;
    pub use tracing;
}
