//! Pure tree algorithms over the parent-link representation.
//!
//! The children relationship is not stored; both functions rebuild it from
//! a single pass over all nodes so tree listing and cascade deletion stay
//! linear in total node count.

use std::collections::HashMap;

use crate::projects::projects_model::{ProjectNode, ProjectSummary};

/// Links each summary to its parent's children list; a node whose parent is
/// not among the loaded summaries becomes a root. Sibling order follows the
/// input order (callers load ascending by branch path).
pub fn build_tree(summaries: Vec<ProjectSummary>) -> Vec<ProjectNode> {
    let ids: Vec<String> = summaries.iter().map(|s| s.id.clone()).collect();
    let mut nodes: HashMap<String, ProjectNode> = summaries
        .into_iter()
        .map(|s| {
            (
                s.id.clone(),
                ProjectNode {
                    project: s,
                    children: Vec::new(),
                },
            )
        })
        .collect();

    // Children of each parent, in input order.
    let mut child_ids: HashMap<String, Vec<String>> = HashMap::new();
    let mut root_ids = Vec::new();
    for id in &ids {
        let parent = nodes[id].project.parent_id.clone();
        match parent {
            Some(pid) if nodes.contains_key(&pid) => {
                child_ids.entry(pid).or_default().push(id.clone());
            }
            _ => root_ids.push(id.clone()),
        }
    }

    // Assemble bottom-up: reverse input order guarantees children are
    // complete before their parent consumes them (a child's branch path
    // always sorts after its parent's).
    for id in ids.iter().rev() {
        if let Some(kids) = child_ids.remove(id) {
            let children: Vec<ProjectNode> = kids
                .into_iter()
                .filter_map(|cid| nodes.remove(&cid))
                .collect();
            if let Some(node) = nodes.get_mut(id) {
                node.children = children;
            }
        }
    }

    root_ids
        .into_iter()
        .filter_map(|id| nodes.remove(&id))
        .collect()
}

/// Collects `target` and every transitive descendant from `(id, parent_id)`
/// links using an iterative depth-first traversal. Returns an empty vec when
/// the target is not among the links. Sibling order is unspecified.
pub fn collect_subtree(target: &str, links: &[(String, Option<String>)]) -> Vec<String> {
    if !links.iter().any(|(id, _)| id == target) {
        return Vec::new();
    }

    let mut children_by_parent: HashMap<&str, Vec<&str>> = HashMap::new();
    for (id, parent_id) in links {
        if let Some(pid) = parent_id {
            children_by_parent.entry(pid.as_str()).or_default().push(id);
        }
    }

    let mut collected = Vec::new();
    let mut stack = vec![target];
    while let Some(current) = stack.pop() {
        collected.push(current.to_string());
        if let Some(kids) = children_by_parent.get(current) {
            stack.extend(kids.iter().copied());
        }
    }
    collected
}
