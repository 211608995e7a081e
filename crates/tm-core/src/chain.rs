//! Revision chain building and target resolution
//!
//! Migrations point at their parent revision. [`RevisionChain::build`] turns
//! those parent pointers into a single ordered list (base first, head last)
//! once, so every later lookup is an index into that list.
//!
//! Positions are `Option<usize>`: `None` is base, `Some(i)` means the
//! revision at index `i` is the last one applied.

use crate::error::{CoreError, CoreResult};
use crate::revision::RevisionId;
use crate::target::Target;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashMap, HashSet};

/// Anything that knows its own revision and its parent's.
pub trait ChainLink {
    /// This link's revision id.
    fn revision(&self) -> &RevisionId;

    /// The revision this one builds on, `None` for the first migration.
    fn down_revision(&self) -> Option<&RevisionId>;
}

impl ChainLink for (RevisionId, Option<RevisionId>) {
    fn revision(&self) -> &RevisionId {
        &self.0
    }

    fn down_revision(&self) -> Option<&RevisionId> {
        self.1.as_ref()
    }
}

/// A validated, linear migration chain.
#[derive(Debug, Clone, Default)]
pub struct RevisionChain {
    /// Revisions in apply order.
    order: Vec<RevisionId>,

    /// Map from revision id to its index in `order`
    index: HashMap<RevisionId, usize>,
}

impl RevisionChain {
    /// Build the chain from parent pointers.
    ///
    /// Rejects duplicate ids, unknown parents, cycles, multiple roots, and
    /// branches. An empty slice yields an empty chain.
    pub fn build<L: ChainLink>(links: &[L]) -> CoreResult<Self> {
        let mut graph: DiGraph<RevisionId, ()> = DiGraph::new();
        let mut node_map: HashMap<RevisionId, NodeIndex> = HashMap::new();

        for link in links {
            let rev = link.revision().clone();
            if node_map.contains_key(&rev) {
                return Err(CoreError::DuplicateRevision {
                    id: rev.into_inner(),
                });
            }
            let idx = graph.add_node(rev.clone());
            node_map.insert(rev, idx);
        }

        let mut roots = Vec::new();
        for link in links {
            let child = node_map[link.revision()];
            match link.down_revision() {
                Some(parent) => {
                    let parent_idx =
                        *node_map
                            .get(parent)
                            .ok_or_else(|| CoreError::UnknownParent {
                                id: link.revision().to_string(),
                                parent: parent.to_string(),
                            })?;
                    // Edge goes parent -> child so topological order is apply order
                    graph.add_edge(parent_idx, child, ());
                }
                None => roots.push(child),
            }
        }

        if let Err(cycle) = toposort(&graph, None) {
            return Err(CoreError::CircularChain {
                cycle: find_cycle_path(&graph, cycle.node_id()),
            });
        }

        if links.is_empty() {
            return Ok(Self::default());
        }

        if roots.len() != 1 {
            let names: Vec<&str> = roots.iter().map(|&idx| graph[idx].as_str()).collect();
            return Err(CoreError::RootCount {
                count: roots.len(),
                roots: names.join(", "),
            });
        }

        for idx in graph.node_indices() {
            let mut children: Vec<&str> = graph
                .neighbors_directed(idx, Direction::Outgoing)
                .map(|child| graph[child].as_str())
                .collect();
            if children.len() > 1 {
                children.sort_unstable();
                return Err(CoreError::Branch {
                    parent: graph[idx].to_string(),
                    children: children.join(", "),
                });
            }
        }

        let mut order = Vec::with_capacity(links.len());
        let mut current = Some(roots[0]);
        while let Some(idx) = current {
            order.push(graph[idx].clone());
            current = graph.neighbors_directed(idx, Direction::Outgoing).next();
        }

        let index = order
            .iter()
            .enumerate()
            .map(|(i, rev)| (rev.clone(), i))
            .collect();

        log::debug!("Built revision chain with {} revisions", order.len());
        Ok(Self { order, index })
    }

    /// Number of revisions in the chain
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the chain has no revisions
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All revisions in apply order
    pub fn revisions(&self) -> &[RevisionId] {
        &self.order
    }

    /// The newest revision, `None` for an empty chain
    pub fn head(&self) -> Option<&RevisionId> {
        self.order.last()
    }

    /// The revision at `position`, `None` for base
    pub fn revision_at(&self, position: Option<usize>) -> Option<&RevisionId> {
        position.and_then(|i| self.order.get(i))
    }

    /// Index of an exact revision id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Resolve a full revision id or a unique prefix of one to its index
    pub fn lookup(&self, id_or_prefix: &str) -> CoreResult<usize> {
        if let Some(idx) = self.position(id_or_prefix) {
            return Ok(idx);
        }

        let matches: Vec<usize> = self
            .order
            .iter()
            .enumerate()
            .filter(|(_, rev)| rev.starts_with(id_or_prefix))
            .map(|(i, _)| i)
            .collect();

        match matches.as_slice() {
            [idx] => Ok(*idx),
            [] => Err(CoreError::UnknownRevision {
                id: id_or_prefix.to_string(),
            }),
            many => Err(CoreError::AmbiguousRevision {
                prefix: id_or_prefix.to_string(),
                candidates: many
                    .iter()
                    .map(|&i| self.order[i].as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    /// Resolve `target` to a chain position, given the current position.
    ///
    /// Relative targets are counted from `current`; everything else ignores it.
    pub fn resolve(&self, target: &Target, current: Option<usize>) -> CoreResult<Option<usize>> {
        match target {
            Target::Base => Ok(None),
            Target::Head => Ok(self.order.len().checked_sub(1)),
            Target::Revision(id) => self.lookup(id).map(Some),
            Target::Relative(offset) => {
                // Step count where 0 is base and len() is head
                let out_of_range = || CoreError::RelativeOutOfRange {
                    offset: *offset,
                    from: self.describe(current),
                };
                let from = current.map_or(0, |i| i as i64 + 1);
                let to = from.checked_add(*offset).ok_or_else(out_of_range)?;
                if to < 0 || to > self.order.len() as i64 {
                    return Err(out_of_range());
                }
                Ok(usize::try_from(to - 1).ok())
            }
        }
    }

    /// Revisions from base up to and including `head`, in apply order.
    pub fn walk_to(&self, head: &Target) -> CoreResult<&[RevisionId]> {
        match self.resolve(head, None)? {
            Some(idx) => Ok(&self.order[..=idx]),
            None => Ok(&[]),
        }
    }

    /// Human-readable name for a position
    pub fn describe(&self, position: Option<usize>) -> String {
        self.revision_at(position)
            .map_or_else(|| "base".to_string(), |rev| rev.to_string())
    }
}

/// Find a cycle path starting from a node for error reporting
fn find_cycle_path(graph: &DiGraph<RevisionId, ()>, start: NodeIndex) -> String {
    let mut path: Vec<String> = vec![graph[start].to_string()];
    let mut current = start;
    let mut visited = HashSet::new();
    visited.insert(current);

    while let Some(edge) = graph.edges(current).next() {
        let target = edge.target();
        path.push(graph[target].to_string());

        if target == start || visited.contains(&target) {
            break;
        }

        visited.insert(target);
        current = target;
    }

    path.join(" -> ")
}

#[cfg(test)]
#[path = "chain_test.rs"]
mod tests;
