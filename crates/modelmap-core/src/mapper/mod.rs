//! Architecture graph construction.
//!
//! Synthesizes one structural pass through the network from a canonical
//! config: a linear chain of blocks with residual skip edges, a single
//! representative transformer block wrapped in a repeat group, and a
//! horizontal expert fan-out for MoE models.
//!
//! Construction is total and deterministic: ids come from a per-build
//! [`IdGen`], so identical configs produce identical graphs.

use crate::config::CanonicalConfig;
use crate::graph::{
    ArchitectureGraph, Details, GraphEdge, GraphGroup, GraphNode, IdGen, NodeId, NodeType,
    Placement,
};

/// Experts shown individually before eliding the middle of the row.
const MAX_VISIBLE_EXPERTS: u64 = 3;

/// Join dimensions into a display string ("4096 × 14336").
fn fmt_dim(dims: &[u64]) -> String {
    dims.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" × ")
}

struct GraphBuilder {
    ids: IdGen,
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    groups: Vec<GraphGroup>,
}

impl GraphBuilder {
    fn new() -> Self {
        Self {
            ids: IdGen::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            groups: Vec::new(),
        }
    }

    fn node(
        &mut self,
        node_type: NodeType,
        label: impl Into<String>,
        sublabel: Option<String>,
        details: Details,
    ) -> NodeId {
        self.place(node_type, label, sublabel, details, Placement::Stack)
    }

    fn row_node(
        &mut self,
        node_type: NodeType,
        label: impl Into<String>,
        sublabel: Option<String>,
        details: Details,
    ) -> NodeId {
        self.place(node_type, label, sublabel, details, Placement::Row)
    }

    fn place(
        &mut self,
        node_type: NodeType,
        label: impl Into<String>,
        sublabel: Option<String>,
        details: Details,
        placement: Placement,
    ) -> NodeId {
        let id = self.ids.node();
        let metrics = node_type.metrics();
        self.nodes.push(GraphNode {
            id,
            node_type,
            label: label.into(),
            sublabel,
            details,
            placement,
            x: 0.0,
            y: 0.0,
            width: metrics.width,
            height: metrics.height,
        });
        id
    }

    fn edge(&mut self, from: NodeId, to: NodeId) {
        self.edges.push(GraphEdge {
            id: self.ids.edge(),
            from,
            to,
            label: None,
            dashed: false,
        });
    }

    fn residual_edge(&mut self, from: NodeId, to: NodeId) {
        self.edges.push(GraphEdge {
            id: self.ids.edge(),
            from,
            to,
            label: Some("residual".to_string()),
            dashed: true,
        });
    }

    fn group(&mut self, label: impl Into<String>, node_ids: Vec<NodeId>, repeat_count: u64) {
        self.groups.push(GraphGroup {
            id: self.ids.group(),
            label: label.into(),
            node_ids,
            repeat_count,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        });
    }

    fn finish(self) -> ArchitectureGraph {
        ArchitectureGraph {
            nodes: self.nodes,
            edges: self.edges,
            groups: self.groups,
            total_width: 0.0,
            total_height: 0.0,
        }
    }
}

/// Build the architecture graph for a canonical config.
///
/// Positions are left at zero; run
/// [`layout_graph`](crate::layout::layout_graph) before rendering.
pub fn build_graph(config: &CanonicalConfig) -> ArchitectureGraph {
    let mut b = GraphBuilder::new();

    let h = config.hidden_size;
    let vocab = config.vocab_size;
    let n_heads = config.num_attention_heads;
    let n_kv = config.num_key_value_heads;
    let head_dim = config.head_dim();
    let norm_label = config.norm_type.label();

    let input = b.node(NodeType::Input, "Token Input", Some("token ids".into()), vec![]);

    let embedding = b.node(
        NodeType::Embedding,
        "Token Embedding",
        Some(fmt_dim(&[vocab, h])),
        vec![
            ("Vocab size".into(), vocab.into()),
            ("Embedding dim".into(), h.into()),
            ("Parameters".into(), vocab.saturating_mul(h).into()),
        ],
    );
    b.edge(input, embedding);

    // Single representative transformer block.
    let mut block_nodes: Vec<NodeId> = Vec::new();

    let norm_details = |config: &CanonicalConfig| -> Details {
        vec![
            ("Type".into(), config.norm_type.as_str().into()),
            ("Normalized shape".into(), h.into()),
        ]
    };

    let pre_attn_norm = b.node(
        NodeType::Norm,
        format!("Pre-Attention {norm_label}"),
        Some(fmt_dim(&[h])),
        norm_details(config),
    );
    block_nodes.push(pre_attn_norm);
    b.edge(embedding, pre_attn_norm);

    let attn_variant = if config.is_gqa() {
        format!(" (GQA {n_heads}/{n_kv})")
    } else if config.is_mqa() {
        " (MQA)".to_string()
    } else {
        String::new()
    };
    let attention = b.node(
        NodeType::Attention,
        format!("Multi-Head Attention{attn_variant}"),
        Some(format!("{n_heads} heads, dim {head_dim}")),
        vec![
            ("Num heads".into(), n_heads.into()),
            ("Num KV heads".into(), n_kv.into()),
            ("Head dim".into(), head_dim.into()),
            ("Q proj".into(), fmt_dim(&[h, n_heads.saturating_mul(head_dim)]).into()),
            ("K proj".into(), fmt_dim(&[h, n_kv.saturating_mul(head_dim)]).into()),
            ("V proj".into(), fmt_dim(&[h, n_kv.saturating_mul(head_dim)]).into()),
            ("O proj".into(), fmt_dim(&[n_heads.saturating_mul(head_dim), h]).into()),
        ],
    );
    block_nodes.push(attention);
    b.edge(pre_attn_norm, attention);

    // Skip connection around attention.
    let residual_attn = b.node(NodeType::Residual, "Add (residual)", None, vec![]);
    block_nodes.push(residual_attn);
    b.edge(attention, residual_attn);
    b.residual_edge(pre_attn_norm, residual_attn);

    let post_attn_norm = b.node(
        NodeType::Norm,
        format!("Post-Attention {norm_label}"),
        Some(fmt_dim(&[h])),
        norm_details(config),
    );
    block_nodes.push(post_attn_norm);
    b.edge(residual_attn, post_attn_norm);

    let ffn_out = if config.is_moe {
        build_moe_block(&mut b, config, post_attn_norm, &mut block_nodes)
    } else {
        build_dense_ffn(&mut b, config, post_attn_norm, &mut block_nodes)
    };

    // Skip connection around the feed-forward block.
    let residual_ffn = b.node(NodeType::Residual, "Add (residual)", None, vec![]);
    block_nodes.push(residual_ffn);
    b.edge(ffn_out, residual_ffn);
    b.residual_edge(post_attn_norm, residual_ffn);

    b.group("Transformer Block", block_nodes, config.num_hidden_layers);

    let final_norm = b.node(
        NodeType::Norm,
        format!("Final {norm_label}"),
        Some(fmt_dim(&[h])),
        norm_details(config),
    );
    b.edge(residual_ffn, final_norm);

    let lm_head = b.node(
        NodeType::LmHead,
        "LM Head (Linear)",
        Some(fmt_dim(&[h, vocab])),
        vec![
            ("Input".into(), h.into()),
            ("Output".into(), vocab.into()),
            (
                "Tied weights".into(),
                if config.tie_word_embeddings { "Yes" } else { "No" }.into(),
            ),
        ],
    );
    b.edge(final_norm, lm_head);

    let output = b.node(
        NodeType::Output,
        "Output Logits",
        Some(format!("vocab {vocab}")),
        vec![],
    );
    b.edge(lm_head, output);

    b.finish()
}

/// Dense feed-forward node. Returns the node feeding the residual add.
fn build_dense_ffn(
    b: &mut GraphBuilder,
    config: &CanonicalConfig,
    from: NodeId,
    block_nodes: &mut Vec<NodeId>,
) -> NodeId {
    let h = config.hidden_size;
    let ff = config.intermediate_size;
    let gated = config.is_gated();

    let sublabel = if gated {
        format!("{} (gated)", fmt_dim(&[h, ff]))
    } else {
        fmt_dim(&[h, ff])
    };

    let mut details: Details = vec![
        ("Up proj".into(), fmt_dim(&[h, ff]).into()),
        ("Down proj".into(), fmt_dim(&[ff, h]).into()),
    ];
    if gated {
        details.push(("Gate proj".into(), fmt_dim(&[h, ff]).into()));
    }
    details.push(("Activation".into(), config.activation_function.clone().into()));

    let mlp = b.node(NodeType::Mlp, "Feed-Forward (MLP)", Some(sublabel), details);
    block_nodes.push(mlp);
    b.edge(from, mlp);
    mlp
}

/// Router, expert row, and weighted-sum combine. Returns the combine node.
///
/// Large expert counts are elided for display: experts 0 and 1, a
/// placeholder stating how many are hidden, and the last expert. Only real
/// experts feed the combine; the placeholder dead-ends.
fn build_moe_block(
    b: &mut GraphBuilder,
    config: &CanonicalConfig,
    from: NodeId,
    block_nodes: &mut Vec<NodeId>,
) -> NodeId {
    let h = config.hidden_size;
    let ff = config.intermediate_size;
    let n_experts = config.num_experts;
    let per_token = config.num_experts_per_token;

    let router = b.node(
        NodeType::MoeRouter,
        "MoE Router (Gate)",
        Some(format!("top-{per_token} of {n_experts}")),
        vec![
            ("Num experts".into(), n_experts.into()),
            ("Experts per token".into(), per_token.into()),
            ("Gate proj".into(), fmt_dim(&[h, n_experts]).into()),
        ],
    );
    block_nodes.push(router);
    b.edge(from, router);

    // Representative experts; None marks the elision placeholder.
    let shown: Vec<Option<u64>> = if n_experts <= MAX_VISIBLE_EXPERTS {
        (0..n_experts).map(Some).collect()
    } else {
        vec![Some(0), Some(1), None, Some(n_experts - 1)]
    };

    let mut real_experts: Vec<NodeId> = Vec::new();
    for slot in shown {
        match slot {
            Some(idx) => {
                let expert = b.row_node(
                    NodeType::MoeExpert,
                    format!("Expert {idx}"),
                    Some(fmt_dim(&[h, ff])),
                    vec![
                        ("Up proj".into(), fmt_dim(&[h, ff]).into()),
                        ("Down proj".into(), fmt_dim(&[ff, h]).into()),
                        ("Activation".into(), config.activation_function.clone().into()),
                    ],
                );
                block_nodes.push(expert);
                b.edge(router, expert);
                real_experts.push(expert);
            }
            None => {
                let hidden = n_experts - 2;
                let ellipsis = b.row_node(
                    NodeType::MoeExpert,
                    format!("... {hidden} more"),
                    None,
                    vec![("Total experts".into(), n_experts.into())],
                );
                block_nodes.push(ellipsis);
                b.edge(router, ellipsis);
            }
        }
    }

    let combine = b.node(
        NodeType::Residual,
        "Weighted Sum",
        None,
        vec![("Experts per token".into(), per_token.into())],
    );
    block_nodes.push(combine);
    for expert in real_experts {
        b.edge(expert, combine);
    }
    combine
}
