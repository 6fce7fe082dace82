//! Stable DTOs and IDs used across the assetpack workspace.
//!
//! This crate is intentionally boring:
//! - the dependency node model handed over by the graph collaborator
//! - stable string IDs and codes
//! - canonical project-relative path handling
//! - the emitted receipt envelope
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod node;
pub mod path;
pub mod receipt;

pub use explain::{Explanation, lookup_explanation};
pub use node::{ComponentRef, CompositePart, DependencyNode, NodeId, NodeKind, Origin};
pub use path::AssetPath;
pub use receipt::{
    ArchivedEntry, EntryReceipt, ReportEnvelope, SCHEMA_REPORT_V1, Severity, TargetReceipt,
    ToolMeta, Verdict,
};
