//! Canonical model configuration and normalization.
//!
//! HuggingFace `config.json` documents spell the same hyperparameters
//! differently per model family (`hidden_size` vs `n_embd` vs `d_model`).
//! This module resolves any of them into one [`CanonicalConfig`] through
//! data-driven fallback chains, with documented defaults for anything
//! missing or malformed.

mod canonical;
pub mod families;
mod normalize;

pub use canonical::{CanonicalConfig, NormType};
pub use normalize::normalize;
