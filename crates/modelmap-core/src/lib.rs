//! # Modelmap Core
//!
//! Core engine for turning transformer model configurations into laid-out
//! architecture diagrams.
//!
//! This crate provides:
//! - **Config normalization** from heterogeneous `config.json` field names
//!   into one canonical schema
//! - **Parameter estimation** with human-readable magnitude formatting
//! - **Graph construction** of nodes, edges, and repeat groups for one
//!   structural pass through the network
//! - **Deterministic layout** assigning collision-free 2D coordinates
//!
//! The pipeline is pure and synchronous: raw config in, renderable graph and
//! summary metadata out. Rendering itself belongs to downstream consumers.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod graph;
pub mod layout;
pub mod mapper;
pub mod metadata;
pub mod params;

pub use error::{ModelmapError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{normalize, CanonicalConfig, NormType};
    pub use crate::error::{ModelmapError, Result};
    pub use crate::graph::{
        ArchitectureGraph, GraphEdge, GraphGroup, GraphNode, NodeType, Placement,
    };
    pub use crate::layout::layout_graph;
    pub use crate::mapper::build_graph;
    pub use crate::metadata::ModelMetadata;
    pub use crate::params::{estimate_parameters, format_params};
}
