//! Policy rules. Each rule is a pure predicate over one node (or one component
//! of a composite) and never depends on traversal order.

pub mod component_origin;
pub mod library_whitelist;
pub mod texture_stats;


/// Outcome of a single rule evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// Denied, with a human-readable reason.
    Deny(String),
    /// Allowed, but excluded from export.
    Ignore,
    /// Allowed, with an informational statistic.
    Record(String),
}
