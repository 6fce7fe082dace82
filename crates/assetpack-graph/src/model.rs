use crate::GraphError;
use assetpack_types::{DependencyNode, NodeId};
use std::collections::{HashMap, HashSet};

/// In-memory dependency graph: nodes in declaration order plus outgoing edges.
#[derive(Clone, Debug, Default)]
pub struct DependencyGraph {
    nodes: Vec<DependencyNode>,
    index: HashMap<NodeId, usize>,
    edges: Vec<Vec<usize>>,
    targets: Vec<usize>,
}

/// A root target together with its flattened dependency list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub target: DependencyNode,
    pub deps: Vec<DependencyNode>,
}

impl DependencyGraph {
    /// Build a graph from nodes with their dependency ids.
    ///
    /// When `targets` is empty, every node that no other node depends on is a target.
    pub fn build(
        nodes: Vec<(DependencyNode, Vec<String>)>,
        targets: Vec<String>,
    ) -> Result<Self, GraphError> {
        let mut graph = DependencyGraph::default();
        let mut pending = Vec::with_capacity(nodes.len());

        for (node, deps) in nodes {
            if node.id.as_str().is_empty() {
                return Err(GraphError::EmptyId);
            }
            if graph.index.contains_key(&node.id) {
                return Err(GraphError::DuplicateNode(node.id.to_string()));
            }
            graph.index.insert(node.id.clone(), graph.nodes.len());
            graph.nodes.push(node);
            pending.push(deps);
        }

        for (i, deps) in pending.into_iter().enumerate() {
            let mut out = Vec::with_capacity(deps.len());
            for dep in deps {
                let Some(&j) = graph.index.get(&NodeId::new(dep.clone())) else {
                    return Err(GraphError::UnknownDependency {
                        node: graph.nodes[i].id.to_string(),
                        dependency: dep,
                    });
                };
                out.push(j);
            }
            graph.edges.push(out);
        }

        graph.targets = if targets.is_empty() {
            let referenced: HashSet<usize> = graph.edges.iter().flatten().copied().collect();
            (0..graph.nodes.len())
                .filter(|i| !referenced.contains(i))
                .collect()
        } else {
            targets
                .into_iter()
                .map(|t| {
                    graph
                        .index
                        .get(&NodeId::new(t.clone()))
                        .copied()
                        .ok_or(GraphError::UnknownTarget(t))
                })
                .collect::<Result<_, _>>()?
        };

        Ok(graph)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &NodeId) -> Option<&DependencyNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn target_ids(&self) -> Vec<&NodeId> {
        self.targets.iter().map(|&i| &self.nodes[i].id).collect()
    }

    /// The target followed by everything reachable from it, depth-first pre-order,
    /// each node once. Cycles are tolerated.
    pub fn flatten(&self, target: &NodeId) -> Result<Vec<DependencyNode>, GraphError> {
        let &start = self
            .index
            .get(target)
            .ok_or_else(|| GraphError::UnknownTarget(target.to_string()))?;

        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![start];
        let mut out = Vec::new();

        while let Some(i) = stack.pop() {
            if seen[i] {
                continue;
            }
            seen[i] = true;
            out.push(self.nodes[i].clone());
            stack.extend(self.edges[i].iter().rev().filter(|&&j| !seen[j]));
        }

        Ok(out)
    }

    pub fn resolve_targets(&self) -> Result<Vec<ResolvedTarget>, GraphError> {
        self.targets
            .iter()
            .map(|&i| {
                let target = self.nodes[i].clone();
                let deps = self.flatten(&target.id)?;
                Ok(ResolvedTarget { target, deps })
            })
            .collect()
    }
}
